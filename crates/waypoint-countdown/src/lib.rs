//! Per-second countdown scheduler with cooperative cancellation.
//!
//! This crate provides [`Countdown`], a timer that ticks down from an
//! initial value once per interval, reporting each remaining value to a
//! callback and firing a terminal callback exactly once when it reaches
//! zero. The [`CountdownHandle`] returned by [`Countdown::start`] cancels
//! the timer at any point; cancellation is observed before the next
//! scheduled tick, so a canceled countdown never fires its terminal
//! callback.
//!
//! # Example
//!
//! ```no_run
//! use std::num::NonZeroU32;
//! use std::time::Duration;
//! use waypoint_countdown::Countdown;
//!
//! # async fn example() {
//! let handle = Countdown::start(
//!     NonZeroU32::new(5).unwrap(),
//!     Duration::from_secs(1),
//!     |remaining| println!("{} seconds left", remaining),
//!     || println!("time to go"),
//! );
//!
//! // The user changed their mind; no further ticks, no terminal call.
//! handle.cancel();
//! # }
//! ```

pub mod countdown;

pub use countdown::{Countdown, CountdownHandle};
