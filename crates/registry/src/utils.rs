use once_cell::sync::Lazy;
use regex::Regex;

static CAMEL_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"([a-z])([A-Z])").expect("valid camel boundary pattern"));

/// Derives the external long-flag name of a parameter.
///
/// A `-` is inserted before every uppercase letter that directly follows a
/// lowercase letter, then the whole name is lowercased. Names that are
/// already kebab-case come back unchanged, so the rule is idempotent.
///
/// # Examples
///
/// ```rust
/// use inwx_registry::flag_name;
///
/// assert_eq!(flag_name("whoisProvider"), "whois-provider");
/// assert_eq!(flag_name("scDate"), "sc-date");
/// assert_eq!(flag_name("domain"), "domain");
/// assert_eq!(flag_name(&flag_name("vatCC")), "vat-cc");
/// ```
pub fn flag_name(name: &str) -> String {
    CAMEL_BOUNDARY.replace_all(name, "$1-$2").to_lowercase()
}
