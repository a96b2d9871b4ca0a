//! Configuration for the OpenAlex lookup client.

use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Base URL for the OpenAlex API.
    pub const BASE_URL: &str = "https://api.openalex.org";

    /// Prefix OpenAlex uses for entity ids in responses and filters.
    pub const ENTITY_URL_PREFIX: &str = "https://openalex.org/";

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Largest `per_page` OpenAlex accepts.
    pub const MAX_PER_PAGE: u32 = 200;

    /// Default page size for author search.
    pub const DEFAULT_AUTHOR_PER_PAGE: u32 = 5;

    /// Default page size for an author's works.
    pub const DEFAULT_WORKS_PER_PAGE: u32 = 25;
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the API (overridable for mock servers).
    pub base_url: String,

    /// Contact e-mail sent as `mailto` to join the polite pool (optional).
    pub email: Option<String>,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Page size used by `search_authors_default`.
    pub default_author_per_page: u32,

    /// Page size used by `get_author_works_default`.
    pub default_works_per_page: u32,
}

impl Config {
    /// Create a new configuration with an optional contact e-mail.
    #[must_use]
    pub fn new(email: Option<String>) -> Self {
        Self {
            base_url: api::BASE_URL.to_string(),
            email,
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            default_author_per_page: api::DEFAULT_AUTHOR_PER_PAGE,
            default_works_per_page: api::DEFAULT_WORKS_PER_PAGE,
        }
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            email: None,
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            ..Self::default()
        }
    }

    /// Override the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Create configuration from environment variables.
    ///
    /// Reads `OPENALEX_BASE_URL`, `OPENALEX_EMAIL` and `OPENALEX_TIMEOUT_SECS`.
    ///
    /// # Errors
    ///
    /// Returns error if environment variables are invalid.
    pub fn from_env() -> anyhow::Result<Self> {
        let email = std::env::var("OPENALEX_EMAIL").ok().filter(|e| !e.trim().is_empty());
        let mut config = Self::new(email);

        if let Ok(base_url) = std::env::var("OPENALEX_BASE_URL") {
            config = config.with_base_url(base_url);
        }

        if let Ok(secs) = std::env::var("OPENALEX_TIMEOUT_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("OPENALEX_TIMEOUT_SECS must be an integer: {e}"))?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        config.validate()?;
        Ok(config)
    }

    /// Check that the base URL is an absolute http(s) URL.
    ///
    /// # Errors
    ///
    /// Returns error if the base URL does not parse or uses another scheme.
    pub fn validate(&self) -> anyhow::Result<()> {
        let parsed = url::Url::parse(&self.base_url)
            .map_err(|e| anyhow::anyhow!("invalid base URL '{}': {e}", self.base_url))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            anyhow::bail!("base URL must use http or https, got '{}'", parsed.scheme());
        }
        Ok(())
    }

    /// Check if a polite-pool e-mail is configured.
    #[must_use]
    pub const fn has_email(&self) -> bool {
        self.email.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}
