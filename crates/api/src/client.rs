//! DomRobot JSON-RPC transport.
//!
//! Every call is a `POST` of `{"method": ..., "params": {...}}` to the
//! endpoint. The session cookie returned by `account.login` is kept by the
//! client's cookie store and sent with every following request.

use std::time::Duration;

use async_trait::async_trait;
use inwx_types::{Params, status};
use reqwest::{Client, header};
use serde_json::{Value, json};
use tracing::{debug, warn};
use url::Url;

use crate::{ApiError, Connector, Session, SessionConfig, totp};

/// Production endpoint.
pub const DEFAULT_API_URL: &str = "https://api.domrobot.com/jsonrpc/";
/// OTE sandbox endpoint.
pub const OTE_API_URL: &str = "https://api.ote.domrobot.com/jsonrpc/";
/// Environment variable overriding the endpoint for every account.
pub const API_URL_ENV: &str = "INWX_API_URL";

const LOCALHOST_DOMAINS: &[&str] = &["localhost", "127.0.0.1"];
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const LOGIN_LANGUAGE: &str = "en";

/// Opens sessions against a DomRobot JSON-RPC endpoint.
#[derive(Debug, Clone)]
pub struct DomrobotConnector {
    timeout: Duration,
    user_agent: String,
}

impl Default for DomrobotConnector {
    fn default() -> Self {
        Self {
            timeout: REQUEST_TIMEOUT,
            user_agent: format!("inwx-cli/{}; {}", env!("CARGO_PKG_VERSION"), std::env::consts::OS),
        }
    }
}

impl DomrobotConnector {
    fn http_client(&self) -> Result<Client, ApiError> {
        Client::builder()
            .cookie_store(true)
            .timeout(self.timeout)
            .build()
            .map_err(|e| ApiError::transport(format!("failed to build HTTP client: {e}")))
    }
}

#[async_trait]
impl Connector for DomrobotConnector {
    async fn open(&self, config: &SessionConfig) -> Result<Box<dyn Session>, ApiError> {
        let endpoint = validate_endpoint(&config.endpoint)?;
        let mut session = DomrobotSession {
            http: self.http_client()?,
            endpoint,
            user_agent: self.user_agent.clone(),
        };

        let login = session
            .call(
                "account.login",
                &object(json!({
                    "user": config.username,
                    "pass": config.password,
                    "lang": LOGIN_LANGUAGE,
                })),
            )
            .await?;
        if status::response_code(&login) != Some(status::SUCCESS) {
            return Err(ApiError::Auth(login));
        }

        if two_factor_required(&login) {
            debug!("account requires two-factor unlock");
            if let Err(error) = session.unlock(config.shared_secret.as_deref()).await {
                if let Err(logout_error) = session.logout().await {
                    warn!(error = %logout_error, "failed to log out after unlock failure");
                }
                return Err(error);
            }
        }

        debug!(endpoint = %session.endpoint, user = %config.username, "logged in");
        Ok(Box::new(session))
    }
}

/// A logged-in DomRobot session.
#[derive(Debug)]
pub struct DomrobotSession {
    http: Client,
    endpoint: Url,
    user_agent: String,
}

impl DomrobotSession {
    async fn unlock(&mut self, shared_secret: Option<&str>) -> Result<(), ApiError> {
        let secret = shared_secret.ok_or(ApiError::SharedSecretRequired)?;
        let tan = totp::current_code(secret)?;
        let unlock = self.call("account.unlock", &object(json!({ "tan": tan }))).await?;
        if status::response_code(&unlock) != Some(status::SUCCESS) {
            return Err(ApiError::Auth(unlock));
        }
        Ok(())
    }

    async fn logout(&mut self) -> Result<(), ApiError> {
        let body = self.call("account.logout", &Params::new()).await?;
        if status::response_code(&body) == Some(status::LOGOUT_SUCCESS) {
            Ok(())
        } else {
            Err(ApiError::Close(body))
        }
    }
}

#[async_trait]
impl Session for DomrobotSession {
    async fn call(&mut self, method: &str, params: &Params) -> Result<Value, ApiError> {
        debug!(url = %self.endpoint, method, "sending DomRobot request");
        let response = self
            .http
            .post(self.endpoint.clone())
            .header(header::USER_AGENT, &self.user_agent)
            .json(&json!({ "method": method, "params": params }))
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;

        let http_status = response.status();
        let text = response.text().await.map_err(|e| ApiError::transport(e.to_string()))?;
        if !http_status.is_success() {
            return Err(ApiError::transport(format!("HTTP {http_status}: {}", text.trim())));
        }

        serde_json::from_str(&text).map_err(|e| ApiError::transport(format!("invalid JSON response: {e}")))
    }

    async fn close(self: Box<Self>) -> Result<(), ApiError> {
        let mut session = self;
        session.logout().await
    }
}

/// Picks the endpoint: `INWX_API_URL`, then the account's `api_url`, then
/// [`DEFAULT_API_URL`].
pub fn resolve_endpoint(account_override: Option<&str>) -> String {
    std::env::var(API_URL_ENV)
        .ok()
        .filter(|url| !url.trim().is_empty())
        .or_else(|| account_override.filter(|url| !url.trim().is_empty()).map(str::to_string))
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

/// Validate that an endpoint URL is acceptable for sending credentials to.
///
/// Rules:
/// - `localhost` or `127.0.0.1`: any scheme is allowed
/// - otherwise: scheme must be HTTPS
pub fn validate_endpoint(endpoint: &str) -> Result<Url, ApiError> {
    let parsed = Url::parse(endpoint).map_err(|e| ApiError::invalid_endpoint(endpoint, e.to_string()))?;

    let host_name = parsed
        .host_str()
        .ok_or_else(|| ApiError::invalid_endpoint(endpoint, "URL must include a host"))?;

    if LOCALHOST_DOMAINS.iter().any(|&allowed| host_name.eq_ignore_ascii_case(allowed)) {
        return Ok(parsed);
    }

    if parsed.scheme() != "https" {
        return Err(ApiError::invalid_endpoint(
            endpoint,
            format!("must use https for non-localhost hosts; got '{}://'", parsed.scheme()),
        ));
    }

    Ok(parsed)
}

/// `resData.tfa` is present and not `"0"`.
fn two_factor_required(login: &Value) -> bool {
    match login.pointer("/resData/tfa") {
        Some(Value::String(mode)) => mode != "0",
        Some(Value::Number(mode)) => mode.as_i64() != Some(0),
        Some(Value::Bool(enabled)) => *enabled,
        _ => false,
    }
}

fn object(value: Value) -> Params {
    match value {
        Value::Object(map) => map,
        _ => Params::new(),
    }
}
