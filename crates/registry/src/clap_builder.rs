use clap::{Arg, ArgAction, Command as ClapCommand, value_parser};
use inwx_types::{MethodSpec, ParamSpec, ValueKind};

use crate::{MethodRegistry, flag_name};

/// Id of the root-level account selector.
pub const ACCOUNT_ARG: &str = "account";

/// Builds the complete Clap command tree from the registry.
///
/// Every registered method becomes one subcommand whose name is exactly the
/// remote method name (`domain.create`, `nameserver.list`, ...), and every
/// parameter of that method becomes one long flag on it. The root command
/// carries the `--account` selector, which must precede the subcommand.
///
/// # Arguments
///
/// * `registry` - The registry containing all method specifications
///
/// # Returns
///
/// A configured ClapCommand that can be used for argument parsing and help
/// generation. Callers may append further subcommands (such as `config`).
///
/// # Examples
///
/// ```rust
/// use inwx_registry::{MethodRegistry, build_clap};
///
/// let registry = MethodRegistry::builtin().unwrap();
/// let root = build_clap(&registry);
/// assert!(root.find_subcommand("domain.check").is_some());
/// ```
pub fn build_clap(registry: &MethodRegistry) -> ClapCommand {
    let mut root = create_root_command();
    for spec in registry.iter() {
        root = root.subcommand(build_method_command(spec));
    }
    root
}

/// Creates the root `inwx` command with its account selector.
fn create_root_command() -> ClapCommand {
    ClapCommand::new("inwx")
        .about("INWX DomRobot API command-line client")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new(ACCOUNT_ARG)
                .long("account")
                .value_name("NAME")
                .help("Select INWX account (overrides default_account in config)")
                .action(ArgAction::Set),
        )
}

/// Builds the subcommand for a single method, with one flag per parameter.
pub fn build_method_command(spec: &MethodSpec) -> ClapCommand {
    let mut subcommand = ClapCommand::new(spec.name).about(spec.summary);
    for param in &spec.params {
        subcommand = subcommand.arg(build_flag_argument(param));
    }
    subcommand
}

/// Builds a single flag argument.
///
/// The arg id is the internal parameter name so the extractor can read
/// values back without reversing the naming rule. Boolean parameters are
/// zero-argument presence flags; all others take values, and one-or-more
/// parameters may be given several values or repeated.
fn build_flag_argument(param: &ParamSpec) -> Arg {
    // Leak the derived flag name to satisfy the 'static lifetime required by Clap builders
    let long: &'static str = Box::leak(flag_name(param.name).into_boxed_str());
    let arg = Arg::new(param.name)
        .long(long)
        .required(param.required)
        .help(generate_help_text(param));

    let arg = match param.kind {
        ValueKind::Boolean => return arg.action(ArgAction::SetTrue),
        ValueKind::String => arg.value_parser(value_parser!(String)),
        ValueKind::Integer => arg.value_parser(value_parser!(i64)).allow_negative_numbers(true),
        ValueKind::Float => arg.value_parser(value_parser!(f64)).allow_negative_numbers(true),
    };

    if param.is_many() {
        arg.action(ArgAction::Append).num_args(1..)
    } else {
        arg.action(ArgAction::Set)
    }
}

fn generate_help_text(param: &ParamSpec) -> String {
    if param.is_many() {
        format!("{} [{}, repeatable]", param.help, param.kind.as_str())
    } else {
        format!("{} [{}]", param.help, param.kind.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MethodSpec {
        MethodSpec::new(
            "domain.create",
            "Register a domain",
            vec![
                ParamSpec::string("domain", "Domain name").required(),
                ParamSpec::string("whoisProvider", "Whois provider"),
                ParamSpec::string("ns", "Nameservers").many(),
                ParamSpec::flag("testing", "Testing mode"),
            ],
        )
    }

    #[test]
    fn flags_use_kebab_names_and_internal_ids() {
        let command = build_method_command(&sample());
        let arg = command
            .get_arguments()
            .find(|a| a.get_id() == "whoisProvider")
            .expect("whoisProvider arg");
        assert_eq!(arg.get_long(), Some("whois-provider"));
    }

    #[test]
    fn boolean_flags_take_no_value() {
        let command = build_method_command(&sample());
        let matches = command
            .try_get_matches_from(["domain.create", "--domain", "x.com", "--testing"])
            .expect("parse");
        assert!(matches.get_flag("testing"));
    }

    #[test]
    fn many_flags_accept_repeats_and_multiple_values() {
        let command = build_method_command(&sample());
        let matches = command
            .try_get_matches_from(["domain.create", "--domain", "x.com", "--ns", "a", "b", "--ns", "c"])
            .expect("parse");
        let ns: Vec<&String> = matches.get_many::<String>("ns").expect("ns").collect();
        assert_eq!(ns, ["a", "b", "c"]);
    }

    #[test]
    fn missing_required_flag_names_it() {
        let command = build_method_command(&sample());
        let err = command.try_get_matches_from(["domain.create"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
        assert!(err.to_string().contains("--domain"), "{err}");
    }

    #[test]
    fn integer_flags_reject_text() {
        let spec = MethodSpec::new("domain.info", "", vec![ParamSpec::integer("wide", "Wide")]);
        let err = build_method_command(&spec)
            .try_get_matches_from(["domain.info", "--wide", "lots"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }
}
