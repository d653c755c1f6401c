//! Redirect controller: the state machine between a short code and the
//! navigation side effect.
//!
//! A [`RedirectController`] owns one [`Resolver`] and one [`Navigator`]
//! and drives a single run through
//! `Loading → {Error | Redirecting} → Redirected`. Its observable state
//! is published on a `tokio::sync::watch` channel so any presentation
//! layer can subscribe and re-render on change.
//!
//! [`Resolver`]: waypoint_core::Resolver
//! [`Navigator`]: waypoint_core::Navigator
//!
//! # Example
//!
//! ```rust,no_run
//! use waypoint_controller::RedirectController;
//! use waypoint_core::{Navigator, RedirectConfig, ShortCode};
//! use waypoint_resolver::HttpResolver;
//!
//! struct LogNavigator;
//!
//! impl Navigator for LogNavigator {
//!     fn navigate(&self, url: &str) {
//!         println!("off to {}", url);
//!     }
//! }
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = HttpResolver::new("http://localhost:3000/redirect")?;
//! let controller = RedirectController::new(resolver, LogNavigator, RedirectConfig::default());
//!
//! let mut states = controller.subscribe();
//! controller.start(ShortCode::new("abc123")?);
//!
//! while states.changed().await.is_ok() {
//!     let state = states.borrow().clone();
//!     println!("{:?}", state);
//!     if state.is_terminal() {
//!         break;
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod controller;

pub use controller::RedirectController;
