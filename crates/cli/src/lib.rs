//! # INWX CLI
//!
//! Entry point shared by the `inwx` binary and its tests. [`run`] parses a
//! command line against the registry-generated command tree, executes it
//! and returns the process exit code:
//!
//! - `0` success
//! - `1` usage or configuration error
//! - `2` the API rejected the login or the call
//! - `3` any other runtime failure, e.g. the API could not be reached
//!
//! Every collaborator with side effects (profile file location, keyring,
//! API connector, terminal prompts) is injected through [`CliContext`].

mod config_cmd;
mod doctor;
mod error;
mod prompt;

use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{ArgMatches, Command};
use inwx_api::{Connector, SessionConfig, invoke_request, resolve_endpoint, with_session};
use inwx_registry::{ACCOUNT_ARG, MethodRegistry, build_clap, extract_params};
use inwx_types::InvocationRequest;
use inwx_util::{ProfileStore, SecretStore, resolve_account};
use tracing::debug;

pub use config_cmd::CONFIG_COMMAND;
pub use doctor::{DOCTOR_ERRORS, DOCTOR_WARNINGS, DoctorReport, diagnose};
pub use error::{CliError, EXIT_API, EXIT_OK, EXIT_RUNTIME, EXIT_USAGE};
pub use prompt::{Prompter, TerminalPrompter};

/// Collaborators of one CLI run.
pub struct CliContext<'a> {
    pub registry: &'a MethodRegistry,
    pub config_path: PathBuf,
    pub secrets: &'a dyn SecretStore,
    pub connector: &'a dyn Connector,
    pub prompter: &'a dyn Prompter,
}

/// Builds the full command tree: one subcommand per registered method plus
/// the `config` group.
pub fn build_cli(registry: &MethodRegistry) -> Command {
    build_clap(registry)
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand(config_cmd::command())
}

/// Parses `args` (including the program name), runs the command and returns
/// its exit code. Results go to `out`, diagnostics to `err`.
pub async fn run<I, T>(args: I, ctx: &CliContext<'_>, out: &mut dyn Write, err: &mut dyn Write) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = match build_cli(ctx.registry).try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(error) => return report_clap_error(&error, out, err),
    };

    match dispatch(&matches, ctx, out, err).await {
        Ok(code) => code,
        Err(error) => {
            debug!(%error, "command failed");
            error.report(err);
            error.exit_code()
        }
    }
}

async fn dispatch(
    matches: &ArgMatches,
    ctx: &CliContext<'_>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<u8, CliError> {
    match matches.subcommand() {
        Some((CONFIG_COMMAND, sub)) => config_cmd::run(sub, ctx, out),
        Some((name, sub)) => {
            let account = matches.get_one::<String>(ACCOUNT_ARG).map(String::as_str);
            run_method(ctx, name, sub, account, out, err).await
        }
        None => Err(CliError::Usage("no command given".into())),
    }
}

/// Runs one registry method: extract, resolve credentials, then a single
/// call inside a scoped session.
async fn run_method(
    ctx: &CliContext<'_>,
    name: &str,
    matches: &ArgMatches,
    account: Option<&str>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<u8, CliError> {
    let spec = ctx
        .registry
        .lookup(name)
        .ok_or_else(|| CliError::UnknownCommand(name.to_string()))?;
    let request = InvocationRequest::new(spec.name, extract_params(spec, matches)?);

    let profiles = ProfileStore::load(&ctx.config_path)?;
    let resolved = resolve_account(account, &profiles, ctx.secrets)?;
    let config = SessionConfig {
        endpoint: resolve_endpoint(resolved.api_url.as_deref()),
        username: resolved.username,
        password: resolved.password,
        shared_secret: resolved.shared_secret,
    };
    debug!(account = %resolved.name, method = %request.method, "running method");

    let scoped = with_session(ctx.connector, &config, move |session| {
        Box::pin(async move { invoke_request(session, &request).await })
    })
    .await?;

    if let Some(warning) = &scoped.close_warning {
        let _ = writeln!(err, "warning: {warning}");
    }
    let body = scoped.outcome?;
    writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
    Ok(EXIT_OK)
}

/// Help and version go to `out` with success; everything else clap rejects
/// is a usage error.
fn report_clap_error(error: &clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> u8 {
    let rendered = error.render().to_string();
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = write!(out, "{rendered}");
            EXIT_OK
        }
        _ => {
            let _ = write!(err, "{rendered}");
            EXIT_USAGE
        }
    }
}
