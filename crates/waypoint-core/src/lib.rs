//! Core types and traits for the Waypoint redirect controller.
//!
//! This crate provides the shared vocabulary used by the resolver,
//! the countdown scheduler, and the controller: the validated short
//! code, the resolution/redirect state enums, the error taxonomy, and
//! the collaborator seams (`Resolver`, `Navigator`).

pub mod config;
pub mod error;
pub mod navigator;
pub mod resolution;
pub mod resolver;
pub mod shortcode;

pub use config::RedirectConfig;
pub use error::{CoreError, ResolveError};
pub use navigator::Navigator;
pub use resolution::{RedirectState, ResolutionState};
pub use resolver::Resolver;
pub use shortcode::ShortCode;
