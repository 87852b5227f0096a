use std::sync::OnceLock;
use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::models::{GraphQlResponse, RestAccount};
use crate::error::{BadgeError, Result};
use crate::resolution::Owner;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);
/// Shorter timeouts, zero included, are raised to this.
pub const MIN_TIMEOUT: Duration = Duration::from_millis(100);

const GITHUB_ACCEPT: &str = "application/vnd.github+json";

pub fn install_rustls_provider() {
    static PROVIDER_INSTALLED: OnceLock<()> = OnceLock::new();
    PROVIDER_INSTALLED.get_or_init(|| {
        if let Err(e) = rustls::crypto::aws_lc_rs::default_provider().install_default() {
            debug!(existing_provider = ?e, "rustls CryptoProvider already installed");
        }
    });
}

/// `"{owner}-repo-count-badge"`, or a generic agent when the owner is unknown.
pub fn default_user_agent(owner: Option<&Owner>) -> String {
    match owner {
        Some(owner) => format!("{owner}-repo-count-badge"),
        None => "repo-count-badge".to_string(),
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: Url,
    pub token: Option<String>,
    pub user_agent: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(api_url: &str, user_agent: impl Into<String>) -> Result<Self> {
        let api_url = Url::parse(api_url)
            .map_err(|e| BadgeError::InvalidUrl(format!("{api_url}: {e}")))?;
        if api_url.cannot_be_a_base() {
            return Err(BadgeError::InvalidUrl(api_url.to_string()));
        }
        Ok(Self {
            api_url,
            token: None,
            user_agent: user_agent.into(),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Blank tokens are dropped so they never reach the `Authorization` header.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout.max(MIN_TIMEOUT);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    User,
    Organization,
}

impl AccountKind {
    const fn path_prefix(&self) -> &'static str {
        match self {
            Self::User => "users",
            Self::Organization => "orgs",
        }
    }

    /// `users/{login}` or `orgs/{login}`, with the login percent-encoded as a
    /// single segment.
    fn path(&self, login: &Owner) -> String {
        format!(
            "{}/{}",
            self.path_prefix(),
            urlencoding::encode(login.as_str())
        )
    }
}

/// Thin wrapper over `reqwest::Client` carrying the API base and credential.
#[derive(Debug, Clone)]
pub struct GithubClient {
    client: Client,
    api_url: String,
    token: Option<String>,
}

impl GithubClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        install_rustls_provider();

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent)
            .timeout(config.timeout.max(MIN_TIMEOUT))
            .build()?;

        Ok(Self {
            client,
            api_url: config.api_url.as_str().trim_end_matches('/').to_string(),
            token: config.token,
        })
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.endpoint(path));
        match &self.token {
            Some(token) => builder.header(AUTHORIZATION, format!("bearer {token}")),
            None => builder,
        }
    }

    /// POSTs `query` to `/graphql`. The envelope is parsed whatever the
    /// status code; deciding what a missing `data` means is up to the caller.
    pub async fn graphql<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<GraphQlResponse<T>> {
        let body = serde_json::json!({
            "query": query,
            "variables": variables,
        });
        let response = self.request(Method::POST, "graphql").json(&body).send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!(%status, body = %text, "graphql response");

        parse_body(&text)
    }

    /// Looks up `login` as a user or an organization.
    ///
    /// Returns `Ok(None)` for any status other than 200. Transport errors and
    /// non-empty bodies that are not JSON are errors.
    pub async fn account(&self, kind: AccountKind, login: &Owner) -> Result<Option<RestAccount>> {
        let path = kind.path(login);
        let response = self.request(Method::GET, &path).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            debug!(%status, path = %path, "account lookup returned non-200");
            return Ok(None);
        }

        let text = response.text().await?;
        debug!(path = %path, body = %text, "account lookup response");
        Ok(Some(parse_body(&text)?))
    }
}

/// An empty body reads as `{}`.
fn parse_body<T: DeserializeOwned>(text: &str) -> Result<T> {
    let text = if text.trim().is_empty() { "{}" } else { text };
    Ok(serde_json::from_str(text)?)
}
