//! Local configuration helpers for the INWX CLI: the profile file, the
//! keychain-backed secret store and credential resolution.

pub mod credentials;
mod error;
pub mod keystore;
mod path_processing;
pub mod profile;

pub use credentials::{ResolvedAccount, env_key, resolve_account, select_account};
pub use error::ConfigError;
pub use keystore::{KeyringSecretStore, SecretError, SecretKind, SecretStore};
pub use path_processing::expand_tilde;
pub use profile::{AccountProfile, Profile, ProfileStore, default_config_path, permissions_too_open};
