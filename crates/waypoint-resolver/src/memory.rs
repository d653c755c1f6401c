use async_trait::async_trait;
use dashmap::DashMap;
use tracing::trace;
use waypoint_core::{ResolveError, Resolver, ShortCode};

/// In-memory implementation of the [`Resolver`] trait backed by DashMap.
///
/// Used by the CLI's demo mode and by controller tests, where exercising
/// the state machine matters more than talking to a real lookup service.
/// Besides plain code-to-destination entries, specific failures can be
/// injected per code to drive the error paths.
#[derive(Debug, Default)]
pub struct MemoryResolver {
    destinations: DashMap<String, String>,
    failures: DashMap<String, ResolveError>,
}

impl MemoryResolver {
    /// Creates an empty resolver; every lookup fails with `NotFound`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps a code to a destination URL.
    pub fn insert(&self, code: &ShortCode, destination: impl Into<String>) {
        self.destinations
            .insert(code.as_str().to_owned(), destination.into());
    }

    /// Makes lookups for `code` fail with the given error.
    ///
    /// An injected failure takes precedence over a destination entry.
    pub fn fail_with(&self, code: &ShortCode, error: ResolveError) {
        self.failures.insert(code.as_str().to_owned(), error);
    }
}

#[async_trait]
impl Resolver for MemoryResolver {
    async fn resolve(&self, code: &ShortCode) -> Result<String, ResolveError> {
        if let Some(error) = self.failures.get(code.as_str()) {
            trace!(code = %code, "returning injected failure");
            return Err(error.value().clone());
        }

        match self.destinations.get(code.as_str()) {
            Some(destination) => Ok(destination.value().clone()),
            None => Err(ResolveError::NotFound),
        }
    }
}
