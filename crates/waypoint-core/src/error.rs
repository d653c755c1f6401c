use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("invalid short code: {0}")]
    InvalidShortCode(String),
}

/// Why a short code could not be resolved to a destination URL.
///
/// All variants are terminal: resolution is never retried automatically,
/// the user re-navigates to try again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The lookup service does not know the code, or it has expired.
    #[error("short code not found")]
    NotFound,
    /// The lookup service could not be reached or answered with a
    /// non-success status other than not-found.
    #[error("lookup service unreachable: {0}")]
    Unreachable(String),
    /// The lookup succeeded transport-wise but the response carried no
    /// usable destination URL.
    #[error("lookup response had no usable destination: {0}")]
    Malformed(String),
}

impl ResolveError {
    /// The human-readable message shown to the user for this failure.
    ///
    /// "Does not exist" and "try again later" are deliberately distinct
    /// so the user knows whether retrying can help.
    pub fn user_message(&self) -> &'static str {
        match self {
            ResolveError::NotFound => "This short link does not exist or has expired.",
            ResolveError::Unreachable(_) | ResolveError::Malformed(_) => {
                "Failed to retrieve the URL. Please try again later."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_the_link() {
        assert!(ResolveError::NotFound.user_message().contains("not exist"));
    }

    #[test]
    fn transient_failures_suggest_retry() {
        let unreachable = ResolveError::Unreachable("timeout".into());
        let malformed = ResolveError::Malformed("no url field".into());
        assert_eq!(unreachable.user_message(), malformed.user_message());
        assert!(unreachable.user_message().contains("try again"));
    }
}
