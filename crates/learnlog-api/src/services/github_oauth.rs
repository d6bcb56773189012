//! GitHub OAuth code exchange.
//!
//! Trades the short-lived `code` GitHub hands the frontend after login for an
//! access token. The token is returned to the caller and never stored.

use reqwest::{header, Client};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use learnlog_core::{defaults, Error, Result};
use learnlog_core::logging::{COMPONENT, OPERATION, SUBSYSTEM, SUCCESS};

/// Credentials and endpoint for the token exchange.
#[derive(Clone)]
pub struct GitHubOAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub token_url: String,
}

impl std::fmt::Debug for GitHubOAuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubOAuthConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[redacted]")
            .field("token_url", &self.token_url)
            .finish()
    }
}

impl GitHubOAuthConfig {
    /// Read `GITHUB_CLIENT_ID`, `GITHUB_CLIENT_SECRET` and `GITHUB_TOKEN_URL`
    /// through `lookup`.
    ///
    /// Client id and secret are required; an empty value counts as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| Error::Config(format!("{} must be set", key)))
        };

        Ok(Self {
            client_id: required("GITHUB_CLIENT_ID")?,
            client_secret: required("GITHUB_CLIENT_SECRET")?,
            token_url: lookup("GITHUB_TOKEN_URL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| defaults::GITHUB_TOKEN_URL.to_string()),
        })
    }
}

#[derive(Serialize)]
struct TokenRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    code: &'a str,
}

/// HTTP client for GitHub's OAuth token endpoint.
#[derive(Clone)]
pub struct GitHubOAuthClient {
    client: Client,
    config: GitHubOAuthConfig,
}

impl GitHubOAuthClient {
    /// Build a client for the given configuration.
    pub fn new(config: GitHubOAuthConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("learnlog-api/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client, config })
    }

    /// The endpoint codes are exchanged against.
    pub fn token_url(&self) -> &str {
        &self.config.token_url
    }

    /// Exchange an authorization `code` for an access token.
    ///
    /// GitHub reports a bad or expired code with a 200 response carrying
    /// `error` and `error_description`; both end up in the returned
    /// [`Error::TokenExchange`]. Transport failures surface as
    /// [`Error::Request`]. Nothing is retried.
    pub async fn exchange_code(&self, code: &str) -> Result<String> {
        let request = TokenRequest {
            client_id: &self.config.client_id,
            client_secret: &self.config.client_secret,
            code,
        };

        let response = self
            .client
            .post(&self.config.token_url)
            .header(header::ACCEPT, "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(
                { SUBSYSTEM } = "api",
                { COMPONENT } = "github_oauth",
                { OPERATION } = "exchange_code",
                status = status.as_u16(),
                "GitHub token endpoint returned an error status"
            );
        }

        let result = extract_access_token(&body);
        info!(
            { SUBSYSTEM } = "api",
            { COMPONENT } = "github_oauth",
            { OPERATION } = "exchange_code",
            { SUCCESS } = result.is_ok(),
            "GitHub code exchange finished"
        );
        result
    }
}

/// Pull `access_token` out of a token endpoint response body.
pub fn extract_access_token(body: &str) -> Result<String> {
    let fields = match serde_json::from_str::<Value>(body.trim()) {
        Ok(Value::Object(fields)) => fields,
        _ => return Err(Error::TokenExchange("empty response".to_string())),
    };

    debug!(
        { SUBSYSTEM } = "api",
        { COMPONENT } = "github_oauth",
        { OPERATION } = "exchange_code",
        response = %redacted(&fields),
        "GitHub token endpoint response"
    );

    match fields.get("access_token") {
        Some(Value::String(token)) => Ok(token.clone()),
        _ => Err(Error::TokenExchange(format!(
            "{} (error: {})",
            render_field(&fields, "error_description"),
            render_field(&fields, "error")
        ))),
    }
}

fn render_field(fields: &Map<String, Value>, key: &str) -> String {
    match fields.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => "null".to_string(),
        Some(other) => other.to_string(),
    }
}

fn redacted(fields: &Map<String, Value>) -> Value {
    let mut copy = fields.clone();
    if let Some(token) = copy.get_mut("access_token") {
        *token = Value::String("[redacted]".to_string());
    }
    Value::Object(copy)
}
