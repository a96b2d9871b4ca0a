//! OpenAlex API client.
//!
//! Each lookup is one GET request and one JSON parse:
//! - No retries, no caching, no rate limiting
//! - No state shared between calls
//! - Transport, status, and parse failures surface as distinct `LookupError` variants

use reqwest::Client;
use url::Url;

use crate::config::{Config, api};
use crate::error::{LookupError, LookupResult, upstream_error_message};
use crate::models::{Author, Page, Work, WorkSort, parse_author, parse_page, short_id};

/// OpenAlex API client.
#[derive(Clone)]
pub struct OpenAlexClient {
    /// HTTP client.
    client: Client,

    /// API base URL.
    base_url: Url,

    /// Polite-pool contact e-mail (optional).
    email: Option<String>,

    /// Page size for `search_authors_default`.
    default_author_per_page: u32,

    /// Page size for `get_author_works_default`.
    default_works_per_page: u32,
}

impl OpenAlexClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the base URL is invalid or HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        config.validate()?;
        let base_url = Url::parse(&config.base_url)?;

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION"),
                " (+https://openalex.org)"
            ))
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            base_url,
            email: config.email,
            default_author_per_page: config.default_author_per_page,
            default_works_per_page: config.default_works_per_page,
        })
    }

    /// Check if a polite-pool e-mail is configured.
    #[must_use]
    pub fn has_email(&self) -> bool {
        self.email.is_some()
    }

    /// Search authors by free-text query.
    ///
    /// Returns up to `per_page` authors in the server's relevance order.
    /// The query is sent exactly as given; it only has to contain a
    /// non-whitespace character.
    ///
    /// # Errors
    ///
    /// Returns error on invalid input, transport failure, non-2xx status, or
    /// a body that is not a results page.
    pub async fn search_authors(&self, query: &str, per_page: u32) -> LookupResult<Vec<Author>> {
        if query.trim().is_empty() {
            return Err(LookupError::invalid_input("query", "cannot be empty"));
        }
        validate_per_page(per_page)?;

        let url = self.endpoint(&["authors"]);
        let params = vec![
            ("search".to_string(), query.to_string()),
            ("per_page".to_string(), per_page.to_string()),
            ("sort".to_string(), "relevance_score:desc".to_string()),
        ];

        let body = self.get(url, params).await?;
        let page: Page<Author> = parse_page(&body)?;
        tracing::debug!(
            query = %query,
            total = ?page.total(),
            returned = page.results.len(),
            "Author search complete"
        );

        Ok(page.results)
    }

    /// Search authors using the configured default page size.
    ///
    /// # Errors
    ///
    /// Same as [`Self::search_authors`].
    pub async fn search_authors_default(&self, query: &str) -> LookupResult<Vec<Author>> {
        self.search_authors(query, self.default_author_per_page).await
    }

    /// List an author's works, most cited first.
    ///
    /// `author_id` may be the full URL returned by [`Self::search_authors`]
    /// or the short form (`A5053780153`).
    ///
    /// # Errors
    ///
    /// Returns error on invalid input, transport failure, non-2xx status, or
    /// a body that is not a results page.
    pub async fn get_author_works(&self, author_id: &str, per_page: u32) -> LookupResult<Vec<Work>> {
        self.get_author_works_sorted(author_id, per_page, WorkSort::default()).await
    }

    /// List an author's works using the configured default page size.
    ///
    /// # Errors
    ///
    /// Same as [`Self::get_author_works`].
    pub async fn get_author_works_default(&self, author_id: &str) -> LookupResult<Vec<Work>> {
        self.get_author_works(author_id, self.default_works_per_page).await
    }

    /// List an author's works in the given order.
    ///
    /// # Errors
    ///
    /// Same as [`Self::get_author_works`].
    pub async fn get_author_works_sorted(
        &self,
        author_id: &str,
        per_page: u32,
        sort: WorkSort,
    ) -> LookupResult<Vec<Work>> {
        let author_id = normalize_author_id(author_id)?;
        validate_per_page(per_page)?;

        let url = self.endpoint(&["works"]);
        let params = vec![
            ("filter".to_string(), format!("author.id:{author_id}")),
            ("per_page".to_string(), per_page.to_string()),
            ("sort".to_string(), sort.as_param().to_string()),
        ];

        let body = self.get(url, params).await?;
        let page: Page<Work> = parse_page(&body)?;
        tracing::debug!(
            author_id = %author_id,
            total = ?page.total(),
            returned = page.results.len(),
            "Works listing complete"
        );

        Ok(page.results)
    }

    /// Fetch a single author profile.
    ///
    /// Returns `None` when the server answers 2xx with a body that carries no `id`.
    ///
    /// # Errors
    ///
    /// Returns error on invalid input, transport failure, non-2xx status, or
    /// malformed JSON.
    pub async fn get_author(&self, author_id: &str) -> LookupResult<Option<Author>> {
        let author_id = normalize_author_id(author_id)?;
        let url = self.endpoint(&["authors", short_id(&author_id)]);

        let body = self.get(url, Vec::new()).await?;
        parse_author(&body)
    }

    /// Build an endpoint URL under the base URL, percent-encoding each segment.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Make a GET request and return the body of a 2xx response.
    async fn get(&self, url: Url, mut params: Vec<(String, String)>) -> LookupResult<String> {
        if let Some(ref email) = self.email {
            params.push(("mailto".to_string(), email.clone()));
        }

        tracing::debug!(url = %url, "Sending OpenAlex request");
        let response = self.client.get(url.clone()).query(&params).send().await?;
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            tracing::debug!(url = %url, status = status.as_u16(), bytes = body.len(), "OpenAlex response");
            return Ok(body);
        }

        // The status line arrived; a body that fails to read only loses the message.
        let message = response.text().await.ok().as_deref().and_then(upstream_error_message);
        tracing::warn!(
            url = %url,
            status = status.as_u16(),
            message = message.as_deref().unwrap_or(""),
            "OpenAlex request failed"
        );
        Err(LookupError::status(status.as_u16(), message))
    }
}

impl std::fmt::Debug for OpenAlexClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAlexClient")
            .field("base_url", &self.base_url.as_str())
            .field("has_email", &self.has_email())
            .finish()
    }
}

/// Normalize an author id to the full URL form OpenAlex filters expect.
///
/// Ids that already look like URLs are returned unchanged.
///
/// # Errors
///
/// Returns `InvalidInput` for an empty id.
pub fn normalize_author_id(author_id: &str) -> LookupResult<String> {
    let author_id = author_id.trim();
    if author_id.is_empty() {
        return Err(LookupError::invalid_input("author_id", "cannot be empty"));
    }
    if author_id.starts_with("http") {
        Ok(author_id.to_string())
    } else {
        Ok(format!("{}{author_id}", api::ENTITY_URL_PREFIX))
    }
}

fn validate_per_page(per_page: u32) -> LookupResult<()> {
    if per_page == 0 || per_page > api::MAX_PER_PAGE {
        return Err(LookupError::invalid_input(
            "per_page",
            format!("must be between 1 and {}, got {per_page}", api::MAX_PER_PAGE),
        ));
    }
    Ok(())
}
