use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, trace};
use waypoint_core::{ResolveError, Resolver, ShortCode};

/// Timeouts for lookup requests.
#[derive(Debug, Clone)]
pub struct LookupSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for LookupSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Expected shape of a successful lookup response.
///
/// The canonical destination field is `url`. Older service versions also
/// emitted `originalUrl`; we do not guess at alternates. A body without
/// a non-empty `url` is malformed.
#[derive(Debug, Deserialize)]
struct LookupResponse {
    url: Option<String>,
}

/// Resolves short codes against the lookup service with `GET {base}/{code}`.
///
/// Response mapping:
/// - 2xx with a non-empty `url` field → the destination
/// - 404 → [`ResolveError::NotFound`]
/// - any other status, timeout, or connection failure → [`ResolveError::Unreachable`]
/// - 2xx without a usable `url` field → [`ResolveError::Malformed`]
#[derive(Debug, Clone)]
pub struct HttpResolver {
    client: reqwest::Client,
    base_url: String,
}

impl HttpResolver {
    /// Creates a resolver with default timeouts.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ResolveError> {
        Self::with_settings(base_url, LookupSettings::default())
    }

    /// Creates a resolver with explicit timeouts.
    pub fn with_settings(
        base_url: impl Into<String>,
        settings: LookupSettings,
    ) -> Result<Self, ResolveError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ResolveError::Unreachable(err.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn lookup_url(&self, code: &ShortCode) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }
}

#[async_trait]
impl Resolver for HttpResolver {
    async fn resolve(&self, code: &ShortCode) -> Result<String, ResolveError> {
        let url = self.lookup_url(code);
        trace!(code = %code, url = %url, "looking up short code");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!(code = %code, "short code not found");
            return Err(ResolveError::NotFound);
        }
        if !status.is_success() {
            debug!(code = %code, status = %status, "lookup service returned failure status");
            return Err(ResolveError::Unreachable(format!(
                "lookup returned {}",
                status
            )));
        }

        // Read the body first so a truncated transfer maps to Unreachable
        // rather than Malformed.
        let body = response.text().await.map_err(map_transport_error)?;
        let payload: LookupResponse = serde_json::from_str(&body)
            .map_err(|err| ResolveError::Malformed(format!("invalid lookup payload: {}", err)))?;

        match payload.url {
            Some(destination) if !destination.is_empty() => {
                debug!(code = %code, url = %destination, "resolved short code");
                Ok(destination)
            }
            _ => Err(ResolveError::Malformed(
                "response missing a non-empty `url` field".to_string(),
            )),
        }
    }
}

fn map_transport_error(err: reqwest::Error) -> ResolveError {
    if err.is_timeout() {
        return ResolveError::Unreachable(format!("lookup timed out: {}", err));
    }
    ResolveError::Unreachable(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_url_joins_base_and_code() {
        let resolver = HttpResolver::new("http://localhost:3000/redirect").unwrap();
        let code = ShortCode::new_unchecked("abc123");
        assert_eq!(
            resolver.lookup_url(&code),
            "http://localhost:3000/redirect/abc123"
        );
    }

    #[test]
    fn lookup_url_tolerates_trailing_slash() {
        let resolver = HttpResolver::new("http://localhost:3000/redirect/").unwrap();
        let code = ShortCode::new_unchecked("abc123");
        assert_eq!(
            resolver.lookup_url(&code),
            "http://localhost:3000/redirect/abc123"
        );
    }
}
