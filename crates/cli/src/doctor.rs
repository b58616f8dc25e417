//! `config doctor`: integrity checks over the profile file and keyring.

use std::path::Path;

use inwx_api::validate_endpoint;
use inwx_util::{ProfileStore, SecretStore, permissions_too_open};
use serde::Serialize;

use crate::error::EXIT_OK;

/// Doctor exit code when at least one error was found.
pub const DOCTOR_ERRORS: u8 = 2;
/// Doctor exit code when only warnings were found.
pub const DOCTOR_WARNINGS: u8 = 1;

/// Keys that must never be stored in the profile file.
const PLAINTEXT_SECRET_KEYS: &[&str] = &["password", "shared_secret"];

/// Findings of one doctor run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DoctorReport {
    pub path: String,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl DoctorReport {
    /// `2` with errors, `1` with only warnings, `0` when clean.
    pub fn exit_code(&self) -> u8 {
        if !self.errors.is_empty() {
            DOCTOR_ERRORS
        } else if !self.warnings.is_empty() {
            DOCTOR_WARNINGS
        } else {
            EXIT_OK
        }
    }
}

/// Inspects the profile at `path` and the secrets of every account in it.
pub fn diagnose(path: &Path, secrets: &dyn SecretStore) -> DoctorReport {
    let mut report = DoctorReport {
        path: path.display().to_string(),
        ..Default::default()
    };

    let store = match ProfileStore::load(path) {
        Ok(store) => store,
        Err(error) => {
            report.errors.push(error.to_string());
            return report;
        }
    };
    if !store.exists() {
        report.warnings.push(format!("Config file not found at {}.", report.path));
        return report;
    }
    if permissions_too_open(path) {
        report.warnings.push("Config file permissions too open; should be 600.".into());
    }

    let profile = store.profile();
    match profile.default_account.as_deref() {
        None => report.warnings.push("No default_account configured.".into()),
        Some(name) if store.account(name).is_none() => {
            report.errors.push(format!("default_account '{name}' does not exist."));
        }
        Some(_) => {}
    }
    for key in profile.extra.keys() {
        report.warnings.push(format!("Unknown top-level key '{key}'."));
    }

    for (name, account) in &profile.accounts {
        if store.lookup_username(name).is_none() {
            report.errors.push(format!("Account '{name}' has no username."));
        }
        for key in PLAINTEXT_SECRET_KEYS {
            if account.extra.contains_key(*key) {
                report
                    .warnings
                    .push(format!("Account '{name}' stores '{key}' in plaintext; move it to the keyring."));
            }
        }
        if let Some(url) = account.api_url.as_deref()
            && let Err(error) = validate_endpoint(url)
        {
            report.errors.push(format!("Account '{name}': {error}"));
        }
        match secrets.password(name) {
            Ok(Some(password)) if !password.is_empty() => {}
            Ok(_) => report.errors.push(format!("Account '{name}' has no password in the keyring.")),
            Err(error) => report.errors.push(error.to_string()),
        }
    }

    report
}
