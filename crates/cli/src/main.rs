use std::io;
use std::process::ExitCode;

use inwx::{CliContext, CliError, TerminalPrompter, run};
use inwx_api::DomrobotConnector;
use inwx_registry::MethodRegistry;
use inwx_util::{KeyringSecretStore, default_config_path};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();
    let registry = match MethodRegistry::builtin() {
        Ok(registry) => registry,
        Err(error) => {
            let error = CliError::from(error);
            error.report(&mut io::stderr());
            return ExitCode::from(error.exit_code());
        }
    };
    let secrets = KeyringSecretStore::default();
    let connector = DomrobotConnector::default();

    let ctx = CliContext {
        registry: &registry,
        config_path: default_config_path(),
        secrets: &secrets,
        connector: &connector,
        prompter: &TerminalPrompter,
    };
    let code = run(std::env::args_os(), &ctx, &mut io::stdout(), &mut io::stderr()).await;
    ExitCode::from(code)
}

/// Logs go to stderr so stdout carries nothing but command output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
