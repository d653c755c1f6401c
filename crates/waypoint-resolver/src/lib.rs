//! Resolver implementations for the Waypoint redirect controller.
//!
//! Two implementations of [`waypoint_core::Resolver`]:
//!
//! - [`HttpResolver`] asks the shortener's lookup service over HTTP and
//!   maps its responses onto the resolution error taxonomy.
//! - [`MemoryResolver`] answers from an in-process table, for tests and
//!   offline demos.
//!
//! # Example
//!
//! ```rust,no_run
//! use waypoint_core::{Resolver, ShortCode};
//! use waypoint_resolver::HttpResolver;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = HttpResolver::new("http://localhost:3000/redirect")?;
//! let code = ShortCode::new("abc123")?;
//! let destination = resolver.resolve(&code).await?;
//! println!("redirects to: {}", destination);
//! # Ok(())
//! # }
//! ```

pub mod http;
pub mod memory;

pub use http::{HttpResolver, LookupSettings};
pub use memory::MemoryResolver;
