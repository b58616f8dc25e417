//! Resolution of the account and credentials a command runs as.

use std::env;
use std::fmt;

use crate::keystore::SecretStore;
use crate::profile::ProfileStore;
use crate::ConfigError;

/// Prefix of the environment variable overriding an account's username.
pub const USER_ENV_PREFIX: &str = "INWX_USER_";
/// Prefix of the environment variable overriding an account's password.
pub const PASS_ENV_PREFIX: &str = "INWX_PASS_";
/// Prefix of the environment variable overriding an account's shared secret.
pub const SECRET_ENV_PREFIX: &str = "INWX_SECRET_";

/// Everything needed to open a session for one account.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedAccount {
    pub name: String,
    pub username: String,
    pub password: String,
    pub shared_secret: Option<String>,
    /// Endpoint override from the profile, if any
    pub api_url: Option<String>,
}

impl fmt::Debug for ResolvedAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedAccount")
            .field("name", &self.name)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("shared_secret", &self.shared_secret.as_ref().map(|_| "<redacted>"))
            .field("api_url", &self.api_url)
            .finish()
    }
}

/// Builds the environment variable name for an account override, e.g.
/// `INWX_PASS_MY_ACCOUNT` for `my-account`.
pub fn env_key(prefix: &str, account: &str) -> String {
    let suffix: String = account
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_uppercase() } else { '_' })
        .collect();
    format!("{prefix}{suffix}")
}

fn env_value(prefix: &str, account: &str) -> Option<String> {
    env::var(env_key(prefix, account)).ok().filter(|v| !v.is_empty())
}

/// Picks the account to use: the explicit selection, else the default.
pub fn select_account(requested: Option<&str>, profiles: &ProfileStore) -> Result<String, ConfigError> {
    requested
        .filter(|name| !name.is_empty())
        .or_else(|| profiles.default_account())
        .map(str::to_string)
        .ok_or(ConfigError::NoAccount)
}

/// Resolves the account and its credentials without touching the network.
///
/// When both `INWX_USER_<ACCOUNT>` and `INWX_PASS_<ACCOUNT>` are set they
/// win, together with an optional `INWX_SECRET_<ACCOUNT>`. Otherwise the
/// username comes from the profile file and the secrets from `secrets`.
///
/// # Errors
///
/// - [`ConfigError::NoAccount`] when no account is selected or defaulted
/// - [`ConfigError::MissingUsername`] / [`ConfigError::MissingPassword`]
///   when the selected account lacks credentials
/// - [`ConfigError::Secret`] when the secret backend fails
pub fn resolve_account(
    requested: Option<&str>,
    profiles: &ProfileStore,
    secrets: &dyn SecretStore,
) -> Result<ResolvedAccount, ConfigError> {
    let name = select_account(requested, profiles)?;
    let api_url = profiles.account(&name).and_then(|a| a.api_url.clone());

    if let (Some(username), Some(password)) = (env_value(USER_ENV_PREFIX, &name), env_value(PASS_ENV_PREFIX, &name)) {
        return Ok(ResolvedAccount {
            shared_secret: env_value(SECRET_ENV_PREFIX, &name),
            name,
            username,
            password,
            api_url,
        });
    }

    let username = profiles
        .lookup_username(&name)
        .map(str::to_string)
        .ok_or_else(|| ConfigError::MissingUsername(name.clone()))?;
    let password = secrets
        .password(&name)?
        .filter(|p| !p.is_empty())
        .ok_or_else(|| ConfigError::MissingPassword(name.clone()))?;
    let shared_secret = secrets.shared_secret(&name)?.filter(|s| !s.is_empty());

    Ok(ResolvedAccount {
        name,
        username,
        password,
        shared_secret,
        api_url,
    })
}
