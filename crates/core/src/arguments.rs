// Argument mapper: untyped MCP arguments -> checked query parameters

use crate::error::ArgumentError;
use crate::types::{ParamKind, ParamSpec, QueryParams, ToolDescriptor};
use serde_json::{Number, Value};

/// Build the outbound query for a call to `tool`.
///
/// Declared parameters are visited in declaration order. Absent and `null`
/// values are left out entirely; undeclared keys are ignored.
pub fn map_arguments(tool: &ToolDescriptor, arguments: &Value) -> Result<QueryParams, ArgumentError> {
    let empty = serde_json::Map::new();
    let object = match arguments {
        Value::Object(map) => map,
        Value::Null => &empty,
        other => {
            return Err(ArgumentError::NotAnObject {
                found: json_type_name(other),
            })
        }
    };

    let mut query = QueryParams::new();
    for param in tool.params {
        match object.get(param.key) {
            None | Some(Value::Null) => {
                if param.required {
                    return Err(ArgumentError::MissingRequired { key: param.key });
                }
            }
            Some(value) => query.push(param.key, stringify(param, value)?),
        }
    }

    for key in object.keys() {
        if !tool.params.iter().any(|p| p.key == key) {
            tracing::debug!(tool = tool.name, key = %key, "Ignoring undeclared argument");
        }
    }

    Ok(query)
}

fn stringify(param: &ParamSpec, value: &Value) -> Result<String, ArgumentError> {
    let text = match (param.kind, value) {
        (ParamKind::String, Value::String(s)) => Some(s.clone()),
        (ParamKind::Number, Value::Number(n)) => Some(decimal_text(n)),
        (ParamKind::Integer, Value::Number(n)) if is_integral(n) => Some(decimal_text(n)),
        (ParamKind::Boolean, Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    };

    text.ok_or_else(|| ArgumentError::KindMismatch {
        key: param.key,
        expected: param.kind,
        found: json_type_name(value),
    })
}

/// `2.0` counts as an integer, as it does for JSON Schema
fn is_integral(n: &Number) -> bool {
    n.is_i64() || n.is_u64() || n.as_f64().map_or(false, |f| f.fract() == 0.0)
}

/// Plain decimal rendering: no exponent, no trailing `.0`
fn decimal_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() => f.to_string(),
        _ => n.to_string(),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "number",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
