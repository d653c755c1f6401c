mod cli;

use crate::cli::CLI;
use anyhow::{anyhow, bail};
use clap::Parser;
use tokio::io::AsyncBufReadExt;
use tracing::info;
use waypoint_controller::RedirectController;
use waypoint_core::{Navigator, RedirectConfig, RedirectState, Resolver, ShortCode};
use waypoint_resolver::{HttpResolver, MemoryResolver};

/// "Navigation" from a terminal: print the destination. Following it is
/// the user's business.
struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn navigate(&self, url: &str) {
        println!("{}", url);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = CLI::try_parse()?;
    let code = ShortCode::new(args.code.as_str())?;
    let config = RedirectConfig::builder()
        .countdown_seconds(args.countdown_seconds)
        .build();

    info!(
        code = %code,
        lookup_url = %args.lookup_url,
        countdown_seconds = args.countdown_seconds.get(),
        demo = !args.demo.is_empty(),
        "starting redirect run"
    );

    if args.demo.is_empty() {
        let resolver = HttpResolver::new(args.lookup_url)?;
        run(
            RedirectController::new(resolver, TerminalNavigator, config),
            code,
        )
        .await
    } else {
        let resolver = demo_resolver(&args.demo)?;
        run(
            RedirectController::new(resolver, TerminalNavigator, config),
            code,
        )
        .await
    }
}

fn demo_resolver(entries: &[String]) -> anyhow::Result<MemoryResolver> {
    let resolver = MemoryResolver::new();
    for entry in entries {
        let (code, url) = entry
            .split_once('=')
            .ok_or_else(|| anyhow!("demo entry must be CODE=URL, got '{}'", entry))?;
        resolver.insert(&ShortCode::new(code)?, url);
    }
    Ok(resolver)
}

async fn run<R: Resolver, N: Navigator>(
    controller: RedirectController<R, N>,
    code: ShortCode,
) -> anyhow::Result<()> {
    let mut states = controller.subscribe();
    controller.start(code);

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    loop {
        tokio::select! {
            changed = states.changed() => {
                if changed.is_err() {
                    return Ok(());
                }
                let state = states.borrow().clone();
                match state {
                    RedirectState::Loading => println!("Loading..."),
                    RedirectState::Redirecting { remaining_seconds, destination_url } => {
                        println!(
                            "Redirecting to {} in {} second{} (press Enter to skip)",
                            destination_url,
                            remaining_seconds,
                            if remaining_seconds == 1 { "" } else { "s" },
                        );
                    }
                    RedirectState::Error { message } => bail!(message),
                    RedirectState::Redirected { .. } => return Ok(()),
                }
            }
            line = lines.next_line(), if stdin_open => {
                match line {
                    Ok(Some(_)) => controller.skip(),
                    _ => stdin_open = false,
                }
            }
            _ = tokio::signal::ctrl_c() => {
                // Dropping the controller tears down any running timer.
                info!("interrupted");
                return Ok(());
            }
        }
    }
}
