//! Registry crate for the DomRobot methods exposed by the INWX CLI.
//!
//! This crate holds the static method tables, projects them into a Clap
//! command tree, and turns parsed command lines back into the parameter
//! payload for a single remote call.

pub mod clap_builder;
pub mod extract;
mod methods;
pub mod models;
pub mod utils;

pub use clap_builder::{ACCOUNT_ARG, build_clap, build_method_command};
pub use extract::{ExtractError, RESERVED_FIELDS, extract_params};
pub use inwx_types::{MethodSpec, ParamSpec};
pub use models::{MethodRegistry, RegistryError};
pub use utils::*;
