//! Shared type definitions for the INWX CLI.
//!
//! The method registry, the command surface generator and the session layer
//! all speak in terms of the schema types declared here. They carry no
//! behavior beyond small constructors and accessors.

use serde::Serialize;
use serde_json::{Map, Value};

pub mod status;

/// Named parameter payload sent with a single remote call.
///
/// The remote side treats this as an unordered set of named values.
pub type Params = Map<String, Value>;

/// Scalar type accepted by a remote parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// Free-form text
    String,
    /// Signed 64-bit integer
    Integer,
    /// Double precision float
    Float,
    /// Presence flag; either supplied (`true`) or omitted entirely
    Boolean,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Boolean => "boolean",
        }
    }
}

/// How many values a parameter accepts on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Multiplicity {
    #[default]
    Single,
    OneOrMore,
}

/// Describes the CLI surface of one remote parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParamSpec {
    /// Internal (remote) parameter name, e.g. `whoisProvider`
    pub name: &'static str,
    /// Scalar type of each value
    pub kind: ValueKind,
    /// Whether the flag may carry several values
    pub multiplicity: Multiplicity,
    /// Absence at invocation time is a usage error
    pub required: bool,
    /// Human-readable description shown in `--help`
    pub help: &'static str,
}

impl ParamSpec {
    const fn new(name: &'static str, kind: ValueKind, help: &'static str) -> Self {
        Self {
            name,
            kind,
            multiplicity: Multiplicity::Single,
            required: false,
            help,
        }
    }

    pub const fn string(name: &'static str, help: &'static str) -> Self {
        Self::new(name, ValueKind::String, help)
    }

    pub const fn integer(name: &'static str, help: &'static str) -> Self {
        Self::new(name, ValueKind::Integer, help)
    }

    pub const fn float(name: &'static str, help: &'static str) -> Self {
        Self::new(name, ValueKind::Float, help)
    }

    pub const fn flag(name: &'static str, help: &'static str) -> Self {
        Self::new(name, ValueKind::Boolean, help)
    }

    /// Marks the parameter as mandatory.
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Allows one or more values, collected in command-line order.
    pub const fn many(mut self) -> Self {
        self.multiplicity = Multiplicity::OneOrMore;
        self
    }

    pub fn is_flag(&self) -> bool {
        self.kind == ValueKind::Boolean
    }

    pub fn is_many(&self) -> bool {
        self.multiplicity == Multiplicity::OneOrMore
    }
}

/// One remote operation and its parameter schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodSpec {
    /// Dotted two-part identifier, e.g. `domain.create`
    pub name: &'static str,
    /// One-line summary used as the subcommand's `about`
    pub summary: &'static str,
    /// Parameters in declaration order
    pub params: Vec<ParamSpec>,
}

impl MethodSpec {
    pub fn new(name: &'static str, summary: &'static str, params: Vec<ParamSpec>) -> Self {
        Self { name, summary, params }
    }

    /// Finds a parameter by its internal name.
    pub fn param(&self, name: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|p| p.name == name)
    }
}

/// A single remote call assembled from parsed CLI input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvocationRequest {
    pub method: String,
    pub params: Params,
}

impl InvocationRequest {
    pub fn new(method: impl Into<String>, params: Params) -> Self {
        Self {
            method: method.into(),
            params,
        }
    }
}
