//! Account secrets kept in the OS keychain.
//!
//! Passwords and two-factor shared secrets never touch the profile file; they
//! live under the `inwx-cli` keychain service, one entry per account and
//! secret kind.

use thiserror::Error;
use tracing::debug;

/// Keychain service name shared by every entry the CLI writes.
pub const SERVICE: &str = "inwx-cli";

/// Which secret of an account an entry holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretKind {
    Password,
    SharedSecret,
}

impl SecretKind {
    fn suffix(&self) -> &'static str {
        match self {
            Self::Password => "password",
            Self::SharedSecret => "shared_secret",
        }
    }
}

/// Keychain user name for an account secret, e.g. `main:password`.
pub fn entry_name(account: &str, kind: SecretKind) -> String {
    format!("{}:{}", account, kind.suffix())
}

/// Errors raised by a secret backend. A missing entry is never an error.
#[derive(Debug, Error, Clone)]
pub enum SecretError {
    #[error("Keyring error for {name}: {error}")]
    KeyringError { name: String, error: String },
}

/// Storage for per-account secrets.
///
/// Lookups return `Ok(None)` when nothing is stored; only backend failures
/// are reported as errors.
pub trait SecretStore {
    fn get(&self, account: &str, kind: SecretKind) -> Result<Option<String>, SecretError>;

    fn set(&self, account: &str, kind: SecretKind, value: &str) -> Result<(), SecretError>;

    /// Removes a secret; removing a missing secret succeeds.
    fn remove(&self, account: &str, kind: SecretKind) -> Result<(), SecretError>;

    fn password(&self, account: &str) -> Result<Option<String>, SecretError> {
        self.get(account, SecretKind::Password)
    }

    fn shared_secret(&self, account: &str) -> Result<Option<String>, SecretError> {
        self.get(account, SecretKind::SharedSecret)
    }

    /// Removes every secret stored for `account`.
    fn delete_account(&self, account: &str) -> Result<(), SecretError> {
        self.remove(account, SecretKind::Password)?;
        self.remove(account, SecretKind::SharedSecret)
    }
}

/// [`SecretStore`] backed by the platform keychain via `keyring-rs`.
#[derive(Debug, Clone)]
pub struct KeyringSecretStore {
    service: String,
}

impl Default for KeyringSecretStore {
    fn default() -> Self {
        Self {
            service: SERVICE.to_string(),
        }
    }
}

impl KeyringSecretStore {
    fn entry(&self, name: &str) -> Result<keyring::Entry, SecretError> {
        keyring::Entry::new(&self.service, name).map_err(|e| SecretError::KeyringError {
            name: name.to_string(),
            error: e.to_string(),
        })
    }
}

impl SecretStore for KeyringSecretStore {
    fn get(&self, account: &str, kind: SecretKind) -> Result<Option<String>, SecretError> {
        let name = entry_name(account, kind);
        match self.entry(&name)?.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(SecretError::KeyringError {
                name,
                error: e.to_string(),
            }),
        }
    }

    fn set(&self, account: &str, kind: SecretKind, value: &str) -> Result<(), SecretError> {
        let name = entry_name(account, kind);
        self.entry(&name)?
            .set_password(value)
            .map_err(|e| SecretError::KeyringError {
                name: name.clone(),
                error: e.to_string(),
            })?;
        debug!("Stored secret in keychain: {}", name);
        Ok(())
    }

    fn remove(&self, account: &str, kind: SecretKind) -> Result<(), SecretError> {
        let name = entry_name(account, kind);
        match self.entry(&name)?.delete_credential() {
            Ok(()) => {
                debug!("Removed secret from keychain: {}", name);
                Ok(())
            }
            Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(SecretError::KeyringError {
                name,
                error: e.to_string(),
            }),
        }
    }
}
