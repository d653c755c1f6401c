use clap::Parser;
use std::num::NonZeroU32;
use waypoint_core::config::DEFAULT_COUNTDOWN_SECONDS;

pub const LOOKUP_URL_ENV: &str = "WAYPOINT_LOOKUP_URL";
pub const COUNTDOWN_SECONDS_ENV: &str = "WAYPOINT_COUNTDOWN_SECONDS";

pub const DEFAULT_LOOKUP_URL: &str = "http://localhost:3000/redirect";

#[derive(Debug, Parser)]
#[command(name = "waypoint")]
pub struct CLI {
    /// Short code to resolve and follow.
    pub code: String,

    /// Base URL of the lookup service; the code is appended as a path
    /// segment.
    #[arg(long, env = LOOKUP_URL_ENV, default_value = DEFAULT_LOOKUP_URL)]
    pub lookup_url: String,

    #[arg(
        long,
        env = COUNTDOWN_SECONDS_ENV,
        default_value_t = DEFAULT_COUNTDOWN_SECONDS
    )]
    pub countdown_seconds: NonZeroU32,

    /// Offline demo entry (`CODE=URL`, repeatable). When present, codes
    /// resolve against these entries instead of the lookup service.
    #[arg(long = "demo", value_name = "CODE=URL")]
    pub demo: Vec<String>,
}
