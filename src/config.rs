use std::time::Duration;

use url::Url;

use crate::client::ApiError;

/// Base URL of the public Atlas management API.
pub const API_URL: &str = "https://cloud.mongodb.com/api/atlas/v1.0/";

/// User agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("atlas-api/", env!("CARGO_PKG_VERSION"));

/// Settings shared by every service of a [`Client`](crate::Client).
///
/// # Examples
///
/// ```
/// use atlas_api::config::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::builder()
///     .base_url("https://cloud.mongodb.com/api/atlas/v1.0/")
///     .timeout(Duration::from_secs(30))
///     .build();
/// ```
#[derive(Debug, Clone, PartialEq, typed_builder::TypedBuilder)]
#[builder(doc)]
pub struct ClientConfig {
    /// Base URL every endpoint path is appended to.
    #[builder(default = API_URL.to_string(), setter(into))]
    pub base_url: String,

    /// Value of the `User-Agent` header.
    #[builder(default = DEFAULT_USER_AGENT.to_string(), setter(into))]
    pub user_agent: String,

    /// Upper bound on a single request, including a digest retry.
    #[builder(default, setter(strip_option))]
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig::builder().build()
    }
}

impl ClientConfig {
    /// Resolves an endpoint by appending percent-encoded path segments to the base URL.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = Url::parse(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, API_URL);
        assert!(config.user_agent.starts_with("atlas-api/"));
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn test_endpoint_appends_segments() {
        let config = ClientConfig::default();
        let url = config.endpoint(&["groups", "123", "clusters"]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://cloud.mongodb.com/api/atlas/v1.0/groups/123/clusters"
        );
    }

    #[test]
    fn test_endpoint_without_trailing_slash() {
        let config = ClientConfig::builder()
            .base_url("http://localhost:8080/api/atlas/v1.0")
            .build();
        let url = config.endpoint(&["groups"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/atlas/v1.0/groups");
    }

    #[test]
    fn test_endpoint_root() {
        let config = ClientConfig::default();
        let url = config.endpoint(&[]).unwrap();
        assert_eq!(url.as_str(), "https://cloud.mongodb.com/api/atlas/v1.0");
    }

    #[test]
    fn test_endpoint_encodes_segments() {
        let config = ClientConfig::default();
        let url = config
            .endpoint(&["groups", "byName", "my project/prod"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://cloud.mongodb.com/api/atlas/v1.0/groups/byName/my%20project%2Fprod"
        );
    }

    #[test]
    fn test_endpoint_invalid_base_url() {
        let config = ClientConfig::builder().base_url("mailto:atlas").build();
        let result = config.endpoint(&["groups"]);
        assert!(matches!(result.unwrap_err(), ApiError::InvalidBaseUrl(_)));
    }

    #[test]
    fn test_endpoint_unparseable_base_url() {
        let config = ClientConfig::builder().base_url("not a url").build();
        let result = config.endpoint(&["groups"]);
        assert!(matches!(result.unwrap_err(), ApiError::Url(_)));
    }
}
