use serde_json::{Number, Value};
use std::fmt;

/// Runtime kind of a dynamic value, as reported in errors.
pub fn value_kind(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "boolean",
    Value::Number(_) => "number",
    Value::String(_) => "string",
    Value::Array(_) => "array",
    Value::Object(_) => "object",
  }
}

/// Shortest decimal form of a number. Integral values print without a
/// fractional part, non-finite values use their spelled-out names, and
/// magnitudes from `1e21` up or below `1e-6` switch to exponent form
/// (`1e+21`, `1.5e-7`).
pub fn format_number(value: f64) -> String {
  if value.is_nan() {
    "NaN".into()
  } else if value.is_infinite() {
    String::from(if value > 0.0 { "Infinity" } else { "-Infinity" })
  } else if value == 0.0 {
    // also folds -0
    "0".into()
  } else if value.abs() >= 1e21 || value.abs() < 1e-6 {
    format_exponent(value)
  } else {
    value.to_string()
  }
}

fn format_exponent(value: f64) -> String {
  let formatted = format!("{:e}", value);
  match formatted.split_once('e') {
    Some((mantissa, exponent)) if !exponent.starts_with('-') => format!("{}e+{}", mantissa, exponent),
    _ => formatted,
  }
}

pub fn format_json_number(value: &Number) -> String {
  if let Some(n) = value.as_i64() {
    n.to_string()
  } else if let Some(n) = value.as_u64() {
    n.to_string()
  } else {
    format_number(value.as_f64().unwrap_or(f64::NAN))
  }
}

/// Generic string coercion of an attribute value.
///
/// Arrays are joined with `,` (null entries become empty) and objects print
/// as `[object Object]`.
pub struct Coerce<'a>(pub &'a Value);

impl<'a> fmt::Display for Coerce<'a> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self.0 {
      Value::Null => write!(f, "null"),
      Value::Bool(value) => write!(f, "{}", value),
      Value::Number(value) => write!(f, "{}", format_json_number(value)),
      Value::String(value) => write!(f, "{}", value),
      Value::Array(items) => {
        for (index, item) in items.iter().enumerate() {
          if index > 0 {
            write!(f, ",")?;
          }
          if !item.is_null() {
            write!(f, "{}", Coerce(item))?;
          }
        }
        Ok(())
      }
      Value::Object(_) => write!(f, "[object Object]"),
    }
  }
}

pub fn value_to_string(value: &Value) -> String {
  match value {
    Value::String(value) => value.clone(),
    _ => Coerce(value).to_string(),
  }
}
