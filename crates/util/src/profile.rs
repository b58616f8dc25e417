//! Account profile persistence for the INWX CLI.
//!
//! The profile file maps account names to their non-secret settings plus a
//! `default_account` pointer. It is TOML, written to the standard
//! configuration directory (`~/.config/inwx/config.toml` on most platforms)
//! with owner-only permissions:
//!
//! ```toml
//! default_account = "main"
//!
//! [main]
//! username = "alice"
//! ```

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use dirs_next::config_dir;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{ConfigError, expand_tilde};

/// Environment variable allowing callers to override the profile file path.
pub const CONFIG_PATH_ENV: &str = "INWX_CONFIG_PATH";

/// Default filename of the profile file.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Top-level key naming the account used when `--account` is absent.
pub const DEFAULT_ACCOUNT_KEY: &str = "default_account";

/// Settings of one configured account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Overrides the DomRobot endpoint, e.g. the OTE sandbox.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    /// Keys this version does not interpret; kept so saving is lossless.
    #[serde(flatten)]
    pub extra: toml::Table,
}

impl AccountProfile {
    pub fn with_username(username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            ..Default::default()
        }
    }
}

/// In-memory form of the profile file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Profile {
    pub default_account: Option<String>,
    pub accounts: BTreeMap<String, AccountProfile>,
    /// Top-level values that are neither `default_account` nor an account table.
    pub extra: toml::Table,
}

impl Profile {
    /// Parses profile TOML. Every top-level table is an account.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        let table: toml::Table = content.parse()?;
        let mut profile = Profile::default();
        for (key, value) in table {
            match value {
                toml::Value::String(name) if key == DEFAULT_ACCOUNT_KEY => profile.default_account = Some(name),
                toml::Value::Table(_) => {
                    let account: AccountProfile = value.try_into()?;
                    profile.accounts.insert(key, account);
                }
                other => {
                    profile.extra.insert(key, other);
                }
            }
        }
        Ok(profile)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        let mut table = self.extra.clone();
        if let Some(default) = &self.default_account {
            table.insert(DEFAULT_ACCOUNT_KEY.to_string(), toml::Value::String(default.clone()));
        }
        for (name, account) in &self.accounts {
            table.insert(name.clone(), toml::Value::try_from(account)?);
        }
        toml::to_string(&table)
    }
}

/// Profile file plus the path it was loaded from.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
    profile: Profile,
    exists: bool,
}

impl ProfileStore {
    /// Loads the profile at `path`. A missing file yields an empty profile.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self {
                    path,
                    profile: Profile::default(),
                    exists: false,
                });
            }
            Err(source) => return Err(ConfigError::Io { path, source }),
        };

        if permissions_too_open(&path) {
            warn!(path = %path.display(), "Config file permissions too open; should be 600");
        }

        let profile = Profile::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        Ok(Self {
            path,
            profile,
            exists: true,
        })
    }

    /// Path to the underlying TOML file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the file existed when loaded or has since been saved.
    pub fn exists(&self) -> bool {
        self.exists
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn default_account(&self) -> Option<&str> {
        self.profile.default_account.as_deref()
    }

    pub fn account(&self, name: &str) -> Option<&AccountProfile> {
        self.profile.accounts.get(name)
    }

    /// Returns the configured username of `account`, if any.
    pub fn lookup_username(&self, account: &str) -> Option<&str> {
        self.account(account)
            .and_then(|a| a.username.as_deref())
            .filter(|u| !u.is_empty())
    }

    /// Account names in sorted order.
    pub fn accounts(&self) -> impl Iterator<Item = &str> {
        self.profile.accounts.keys().map(String::as_str)
    }

    pub fn add_account(&mut self, name: &str, account: AccountProfile) -> Result<(), ConfigError> {
        if name.trim().is_empty() {
            return Err(ConfigError::EmptyAccountName);
        }
        if self.profile.accounts.contains_key(name) {
            return Err(ConfigError::AccountExists(name.to_string()));
        }
        self.profile.accounts.insert(name.to_string(), account);
        Ok(())
    }

    /// Removes an account. Returns `true` when it was the default account,
    /// in which case the default pointer is cleared as well.
    pub fn remove_account(&mut self, name: &str) -> Result<bool, ConfigError> {
        if self.profile.accounts.remove(name).is_none() {
            return Err(ConfigError::UnknownAccount(name.to_string()));
        }
        let was_default = self.default_account() == Some(name);
        if was_default {
            self.profile.default_account = None;
        }
        Ok(was_default)
    }

    pub fn set_default(&mut self, name: &str) -> Result<(), ConfigError> {
        if !self.profile.accounts.contains_key(name) {
            return Err(ConfigError::UnknownAccount(name.to_string()));
        }
        self.profile.default_account = Some(name.to_string());
        Ok(())
    }

    /// Writes the profile, creating the parent directory and restricting the
    /// file to its owner.
    pub fn save(&mut self) -> Result<(), ConfigError> {
        let io_error = |source| ConfigError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        let data = self.profile.to_toml()?;
        fs::write(&self.path, data).map_err(io_error)?;
        restrict_permissions(&self.path).map_err(io_error)?;
        self.exists = true;
        Ok(())
    }
}

/// Get the default path for the profile file.
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = env::var(CONFIG_PATH_ENV)
        && !path.trim().is_empty()
    {
        return expand_tilde(&path);
    }

    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("inwx")
        .join(CONFIG_FILE_NAME)
}

/// Whether group or other users have any access to `path`.
#[cfg(unix)]
pub fn permissions_too_open(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    fs::metadata(path)
        .map(|m| m.permissions().mode() & 0o077 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
pub fn permissions_too_open(_path: &Path) -> bool {
    false
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
