use std::io::{self, Write};

use inwx_api::ApiError;
use inwx_registry::{ExtractError, RegistryError};
use inwx_util::{ConfigError, SecretError};
use thiserror::Error;

/// Process exit code for success.
pub const EXIT_OK: u8 = 0;
/// Usage or local configuration problem.
pub const EXIT_USAGE: u8 = 1;
/// The API answered with a non-success status.
pub const EXIT_API: u8 = 2;
/// Any other runtime failure, e.g. the API could not be reached.
pub const EXIT_RUNTIME: u8 = 3;

/// Top-level error of a CLI run; decides the exit code and final message.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Secret(#[from] SecretError),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Failed to get user input: {0}")]
    Prompt(anyhow::Error),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Usage(_) | Self::UnknownCommand(_) | Self::Config(_) | Self::Secret(_) | Self::Extract(_) | Self::Prompt(_) => {
                EXIT_USAGE
            }
            Self::Api(api) => match api {
                ApiError::Auth(_) | ApiError::Remote(_) => EXIT_API,
                ApiError::SharedSecretRequired | ApiError::InvalidSharedSecret(_) | ApiError::InvalidEndpoint { .. } => {
                    EXIT_USAGE
                }
                ApiError::Transport { .. } | ApiError::Close(_) => EXIT_RUNTIME,
            },
            Self::Registry(_) | Self::Output(_) | Self::Json(_) => EXIT_RUNTIME,
        }
    }

    /// Writes the error to `err`: response bodies of rejected calls verbatim
    /// as indented JSON, everything else as a one-line message.
    pub fn report(&self, err: &mut dyn Write) {
        let body = match self {
            Self::Api(api @ (ApiError::Auth(_) | ApiError::Remote(_))) => api.body(),
            _ => None,
        };
        let _ = match body.map(serde_json::to_string_pretty) {
            Some(Ok(rendered)) => writeln!(err, "{rendered}"),
            _ => writeln!(err, "error: {self}"),
        };
    }
}
