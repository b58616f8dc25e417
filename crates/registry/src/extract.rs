//! Conversion of parsed CLI input into the parameter payload of one call.

use clap::ArgMatches;
use clap::parser::MatchesError;
use inwx_types::{MethodSpec, ParamSpec, Params, ValueKind};
use serde_json::{Number, Value};
use thiserror::Error;
use tracing::debug;

/// CLI bookkeeping names that never travel to the remote API, even when a
/// method declares a parameter of the same name.
pub const RESERVED_FIELDS: &[&str] = &["account", "command", "func", "api_method"];

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("parameter '{param}' of {method} could not be read: {source}")]
    Matches {
        method: String,
        param: String,
        #[source]
        source: MatchesError,
    },

    #[error("parameter '{param}' must be a finite number, got {value}")]
    NonFinite { param: String, value: f64 },
}

/// Builds the exact parameter mapping to send for `spec` from `matches`.
///
/// Reserved bookkeeping names are dropped, as are parameters the user did
/// not supply and one-or-more parameters with no values. Everything else is
/// keyed by its internal name with its parsed type intact: integers and
/// floats stay numeric, presence flags become `true`, one-or-more values
/// become arrays.
///
/// # Errors
///
/// Fails when `matches` was not produced by the subcommand generated for
/// `spec`, or when a float value is not finite.
pub fn extract_params(spec: &MethodSpec, matches: &ArgMatches) -> Result<Params, ExtractError> {
    let mut params = Params::new();
    for param in &spec.params {
        if RESERVED_FIELDS.contains(&param.name) {
            debug!(method = spec.name, param = param.name, "skipping reserved field");
            continue;
        }
        if let Some(value) = extract_value(spec, param, matches)? {
            params.insert(param.name.to_string(), value);
        }
    }
    Ok(params)
}

fn extract_value(spec: &MethodSpec, param: &ParamSpec, matches: &ArgMatches) -> Result<Option<Value>, ExtractError> {
    let wrap = |source: MatchesError| ExtractError::Matches {
        method: spec.name.to_string(),
        param: param.name.to_string(),
        source,
    };

    if param.is_flag() {
        let supplied = matches.try_get_one::<bool>(param.name).map_err(wrap)?.copied().unwrap_or(false);
        return Ok(supplied.then_some(Value::Bool(true)));
    }

    if param.is_many() {
        let values: Vec<Value> = match param.kind {
            ValueKind::String => collect_many::<String>(matches, param.name)
                .map_err(wrap)?
                .into_iter()
                .map(Value::String)
                .collect(),
            ValueKind::Integer => collect_many::<i64>(matches, param.name)
                .map_err(wrap)?
                .into_iter()
                .map(Value::from)
                .collect(),
            ValueKind::Float => collect_many::<f64>(matches, param.name)
                .map_err(wrap)?
                .into_iter()
                .map(|v| float_value(param, v))
                .collect::<Result<_, _>>()?,
            ValueKind::Boolean => unreachable!("boolean parameters are presence flags"),
        };
        return Ok((!values.is_empty()).then_some(Value::Array(values)));
    }

    let value = match param.kind {
        ValueKind::String => matches.try_get_one::<String>(param.name).map_err(wrap)?.cloned().map(Value::String),
        ValueKind::Integer => matches.try_get_one::<i64>(param.name).map_err(wrap)?.copied().map(Value::from),
        ValueKind::Float => match matches.try_get_one::<f64>(param.name).map_err(wrap)? {
            Some(v) => Some(float_value(param, *v)?),
            None => None,
        },
        ValueKind::Boolean => unreachable!("boolean parameters are presence flags"),
    };
    Ok(value)
}

fn collect_many<T>(matches: &ArgMatches, id: &str) -> Result<Vec<T>, MatchesError>
where
    T: Clone + Send + Sync + 'static,
{
    Ok(matches
        .try_get_many::<T>(id)?
        .map(|values| values.cloned().collect())
        .unwrap_or_default())
}

fn float_value(param: &ParamSpec, value: f64) -> Result<Value, ExtractError> {
    Number::from_f64(value).map(Value::Number).ok_or_else(|| ExtractError::NonFinite {
        param: param.name.to_string(),
        value,
    })
}
