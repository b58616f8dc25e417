use std::path::PathBuf;

use thiserror::Error;

use crate::keystore::SecretError;

/// Errors surfaced while reading, editing or resolving local configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No account specified and no default_account configured.")]
    NoAccount,

    #[error("Account '{0}' does not exist.")]
    UnknownAccount(String),

    #[error("Account '{0}' already exists.")]
    AccountExists(String),

    #[error("Account name must not be empty.")]
    EmptyAccountName,

    #[error("Missing credentials for account '{0}': no username configured.")]
    MissingUsername(String),

    #[error("Missing credentials for account '{0}': no password in keyring.")]
    MissingPassword(String),

    #[error("config I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("config serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error(transparent)]
    Secret(#[from] SecretError),
}
