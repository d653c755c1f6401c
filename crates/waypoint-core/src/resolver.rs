use crate::error::ResolveError;
use crate::shortcode::ShortCode;
use async_trait::async_trait;

/// Turns a short code into its destination URL.
///
/// Implementations issue exactly one lookup per invocation and never
/// retry internally. They have no side effects beyond the outbound
/// request; the controller alone decides what to do with the result.
#[async_trait]
pub trait Resolver: Send + Sync + 'static {
    /// Resolves a short code to its destination URL.
    ///
    /// Returns `Err(NotFound)` if the code is unknown or expired,
    /// `Err(Unreachable)` for transport/service failures, and
    /// `Err(Malformed)` when the service answered without a usable
    /// destination.
    async fn resolve(&self, code: &ShortCode) -> Result<String, ResolveError>;
}
