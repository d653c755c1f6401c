use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// An opaque short link identifier, as taken from a route parameter.
///
/// Codes are 1-64 characters and contain only alphanumeric characters,
/// hyphens, or underscores. A code is immutable for the lifetime of one
/// controller run.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShortCode(String);

const MAX_LENGTH: usize = 64;

impl ShortCode {
    /// Creates a new `ShortCode` after validating the input.
    pub fn new(code: impl Into<String>) -> std::result::Result<Self, CoreError> {
        let code = code.into();
        Self::validate(&code)?;
        Ok(Self(code))
    }

    /// Creates a `ShortCode` without validation.
    ///
    /// Use this only for codes from trusted internal sources (fixtures,
    /// demo tables).
    pub fn new_unchecked(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(code: &str) -> std::result::Result<(), CoreError> {
        if code.is_empty() {
            return Err(CoreError::InvalidShortCode(
                "code cannot be empty".to_string(),
            ));
        }

        if code.len() > MAX_LENGTH {
            return Err(CoreError::InvalidShortCode(format!(
                "length must be at most {}, got {}",
                MAX_LENGTH,
                code.len()
            )));
        }

        if !code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(CoreError::InvalidShortCode(format!(
                "must contain only alphanumeric characters, hyphens, or underscores: '{}'",
                code
            )));
        }

        Ok(())
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_codes() {
        assert!(ShortCode::new("a").is_ok());
        assert!(ShortCode::new("abc123").is_ok());
        assert!(ShortCode::new("Abc-123_xyz").is_ok());
        assert!(ShortCode::new("a".repeat(64)).is_ok());
    }

    #[test]
    fn empty_code_rejected() {
        assert!(ShortCode::new("").is_err());
    }

    #[test]
    fn too_long() {
        assert!(ShortCode::new("a".repeat(65)).is_err());
    }

    #[test]
    fn invalid_characters() {
        assert!(ShortCode::new("abc def").is_err());
        assert!(ShortCode::new("abc/def").is_err());
        assert!(ShortCode::new("abc!def").is_err());
    }

    #[test]
    fn display_round_trips() {
        let code = ShortCode::new("my-code").unwrap();
        assert_eq!(code.to_string(), "my-code");
        assert_eq!(code.as_str(), "my-code");
    }
}
