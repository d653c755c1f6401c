use crate::error::ResolveError;

/// Outcome of resolving a short code, as tracked by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionState {
    /// No result yet; the lookup request is in flight.
    Pending,
    /// The destination is known. The URL is guaranteed non-empty.
    Resolved { destination_url: String },
    /// Resolution failed and will not be retried automatically.
    Failed { reason: ResolveError },
}

impl ResolutionState {
    /// Converts a settled resolver result into a state.
    ///
    /// An empty destination is indistinguishable from no destination at
    /// all, so it collapses into `Failed(Malformed)`.
    pub fn from_settled(result: Result<String, ResolveError>) -> Self {
        match result {
            Ok(url) if url.is_empty() => ResolutionState::Failed {
                reason: ResolveError::Malformed("empty destination url".to_string()),
            },
            Ok(url) => ResolutionState::Resolved {
                destination_url: url,
            },
            Err(reason) => ResolutionState::Failed { reason },
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, ResolutionState::Resolved { .. })
    }
}

/// Observable state of the redirect controller, published to whatever
/// presentation layer subscribes to it.
///
/// `Error` and `Redirected` are terminal: once published, the controller
/// makes no further transitions for the current run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectState {
    /// Resolution in flight; skip is not yet meaningful.
    Loading,
    /// Destination known, countdown running.
    Redirecting {
        remaining_seconds: u32,
        destination_url: String,
    },
    /// Resolution failed; `message` is the user-facing text.
    Error { message: String },
    /// The navigation side effect has been issued, exactly once.
    Redirected { destination_url: String },
}

impl RedirectState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RedirectState::Error { .. } | RedirectState::Redirected { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settled_ok_becomes_resolved() {
        let state = ResolutionState::from_settled(Ok("https://example.com".to_string()));
        assert_eq!(
            state,
            ResolutionState::Resolved {
                destination_url: "https://example.com".to_string()
            }
        );
        assert!(state.is_resolved());
    }

    #[test]
    fn settled_empty_url_becomes_malformed() {
        let state = ResolutionState::from_settled(Ok(String::new()));
        assert!(matches!(
            state,
            ResolutionState::Failed {
                reason: ResolveError::Malformed(_)
            }
        ));
    }

    #[test]
    fn settled_err_becomes_failed() {
        let state = ResolutionState::from_settled(Err(ResolveError::NotFound));
        assert_eq!(
            state,
            ResolutionState::Failed {
                reason: ResolveError::NotFound
            }
        );
    }

    #[test]
    fn terminal_states() {
        assert!(!RedirectState::Loading.is_terminal());
        assert!(!RedirectState::Redirecting {
            remaining_seconds: 5,
            destination_url: "https://example.com".to_string()
        }
        .is_terminal());
        assert!(RedirectState::Error {
            message: "gone".to_string()
        }
        .is_terminal());
        assert!(RedirectState::Redirected {
            destination_url: "https://example.com".to_string()
        }
        .is_terminal());
    }
}
