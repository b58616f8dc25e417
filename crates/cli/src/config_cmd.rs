//! The `config` command group. None of these commands open a session.

use std::io::Write;

use clap::{Arg, ArgAction, ArgMatches, Command};
use inwx_api::totp;
use inwx_util::{AccountProfile, ConfigError, ProfileStore, SecretKind, SecretStore};

use crate::{CliContext, CliError, doctor, error::EXIT_OK};

pub const CONFIG_COMMAND: &str = "config";

/// Builds the `config` subcommand tree.
pub fn command() -> Command {
    let account = || Arg::new("account").required(true).value_name("ACCOUNT").help("Account name");
    Command::new(CONFIG_COMMAND)
        .about("Manage configuration")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(Command::new("init").about("Initialize config file"))
        .subcommand(Command::new("add").about("Add new account"))
        .subcommand(
            Command::new("del")
                .visible_alias("remove")
                .about("Remove account")
                .arg(account())
                .arg(
                    Arg::new("yes")
                        .long("yes")
                        .short('y')
                        .action(ArgAction::SetTrue)
                        .help("Do not ask for confirmation"),
                ),
        )
        .subcommand(Command::new("default").about("Set default account").arg(account()))
        .subcommand(Command::new("list").about("List configured accounts"))
        .subcommand(Command::new("doctor").about("Check config file and keyring integrity"))
}

/// Runs one `config` subcommand and returns its exit code.
pub fn run(matches: &ArgMatches, ctx: &CliContext<'_>, out: &mut dyn Write) -> Result<u8, CliError> {
    match matches.subcommand() {
        Some(("init", _)) => init(ctx, out),
        Some(("add", _)) => add(ctx, out),
        Some(("del", sub)) => delete(ctx, required_account(sub)?, sub.get_flag("yes"), out),
        Some(("default", sub)) => set_default(ctx, required_account(sub)?, out),
        Some(("list", _)) => list(ctx, out),
        Some(("doctor", _)) => {
            let report = doctor::diagnose(&ctx.config_path, ctx.secrets);
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
            Ok(report.exit_code())
        }
        Some((other, _)) => Err(CliError::UnknownCommand(format!("{CONFIG_COMMAND} {other}"))),
        None => Err(CliError::UnknownCommand(CONFIG_COMMAND.into())),
    }
}

fn required_account(matches: &ArgMatches) -> Result<&str, CliError> {
    matches
        .get_one::<String>("account")
        .map(String::as_str)
        .ok_or_else(|| CliError::Usage("missing ACCOUNT argument".into()))
}

fn init(ctx: &CliContext<'_>, out: &mut dyn Write) -> Result<u8, CliError> {
    let mut store = ProfileStore::load(&ctx.config_path)?;
    if store.exists() {
        writeln!(out, "Config already exists at: {}", store.path().display())?;
        return Ok(EXIT_OK);
    }

    writeln!(out, "Initializing INWX configuration...\n")?;
    let account = prompt_account_name(ctx)?;
    prompt_credentials(ctx, &mut store, &account)?;
    store.set_default(&account)?;
    store.save()?;

    writeln!(out, "\nConfig written to {}", store.path().display())?;
    writeln!(out, "Permissions set to 600.")?;
    Ok(EXIT_OK)
}

fn add(ctx: &CliContext<'_>, out: &mut dyn Write) -> Result<u8, CliError> {
    let mut store = ProfileStore::load(&ctx.config_path)?;
    writeln!(out, "Add new INWX account\n")?;

    let account = prompt_account_name(ctx)?;
    if store.account(&account).is_some() {
        return Err(ConfigError::AccountExists(account).into());
    }
    prompt_credentials(ctx, &mut store, &account)?;
    store.save()?;

    writeln!(out, "\nAccount '{account}' added successfully.")?;
    Ok(EXIT_OK)
}

fn delete(ctx: &CliContext<'_>, account: &str, assume_yes: bool, out: &mut dyn Write) -> Result<u8, CliError> {
    let mut store = ProfileStore::load(&ctx.config_path)?;
    if store.account(account).is_none() {
        return Err(ConfigError::UnknownAccount(account.to_string()).into());
    }

    if !assume_yes
        && !ctx
            .prompter
            .confirm(&format!("Really remove account '{account}'?"))
            .map_err(CliError::Prompt)?
    {
        writeln!(out, "Aborted.")?;
        return Ok(EXIT_OK);
    }

    ctx.secrets.delete_account(account)?;
    let was_default = store.remove_account(account)?;
    store.save()?;

    if was_default {
        writeln!(out, "Removed default_account setting.")?;
    }
    writeln!(out, "Account '{account}' removed.")?;
    Ok(EXIT_OK)
}

fn set_default(ctx: &CliContext<'_>, account: &str, out: &mut dyn Write) -> Result<u8, CliError> {
    let mut store = ProfileStore::load(&ctx.config_path)?;
    store.set_default(account)?;
    store.save()?;
    writeln!(out, "Default account set to '{account}'.")?;
    Ok(EXIT_OK)
}

fn list(ctx: &CliContext<'_>, out: &mut dyn Write) -> Result<u8, CliError> {
    let store = ProfileStore::load(&ctx.config_path)?;
    if store.accounts().next().is_none() {
        writeln!(out, "No configuration found.")?;
        return Ok(EXIT_OK);
    }

    writeln!(out, "Configured INWX accounts:\n")?;
    for name in store.accounts() {
        let marker = if store.default_account() == Some(name) {
            " (default)"
        } else {
            ""
        };
        writeln!(out, " - {name}{marker}")?;
    }
    Ok(EXIT_OK)
}

fn prompt_account_name(ctx: &CliContext<'_>) -> Result<String, CliError> {
    let account = ctx.prompter.input("Account name").map_err(CliError::Prompt)?;
    let account = account.trim();
    if account.is_empty() {
        return Err(ConfigError::EmptyAccountName.into());
    }
    Ok(account.to_string())
}

/// Asks for username, password and optional shared secret, then records the
/// account in `store` and its secrets in the keyring.
fn prompt_credentials(ctx: &CliContext<'_>, store: &mut ProfileStore, account: &str) -> Result<(), CliError> {
    let username = ctx.prompter.input("Username").map_err(CliError::Prompt)?;
    let username = username.trim();
    if username.is_empty() {
        return Err(ConfigError::MissingUsername(account.to_string()).into());
    }
    let password = ctx.prompter.secret("Password", false).map_err(CliError::Prompt)?;
    let shared_secret = ctx
        .prompter
        .secret("Shared Secret (optional)", true)
        .map_err(CliError::Prompt)?;
    let shared_secret = shared_secret.trim();
    if !shared_secret.is_empty() {
        totp::decode_base32(shared_secret)?;
    }

    store.add_account(account, AccountProfile::with_username(username))?;
    ctx.secrets.set(account, SecretKind::Password, &password)?;
    if !shared_secret.is_empty() {
        ctx.secrets.set(account, SecretKind::SharedSecret, shared_secret)?;
    }
    Ok(())
}
