use crate::error::{Error, Result};
use crate::model::value::{format_json_number, value_kind, value_to_string};
use crate::model::Attributes;
use convert_case::{Boundary, Case, Converter};
use serde_json::Value;

/// Word boundaries for attribute and css property names. Digits never
/// start a new word, so `x1` and `data-v2` keep their shape.
static NAME_BOUNDARIES: &[Boundary] = &[
  Boundary::Underscore,
  Boundary::Hyphen,
  Boundary::Space,
  Boundary::LowerUpper,
  Boundary::Acronym,
];

/// Attribute and css property names are written kebab-case.
pub fn to_kebab_case(name: &str) -> String {
  Converter::new()
    .set_boundaries(NAME_BOUNDARIES)
    .to_case(Case::Kebab)
    .convert(name)
}

fn combine_attribute(name: &str, value: &str) -> String {
  format!("{}=\"{}\"", name, value)
}

/// Serializes attributes to `name="value"` pairs joined by single spaces,
/// in insertion order. Returns `None` when there is nothing to emit.
///
/// `className` is written as `class`, `style` must be a mapping of css
/// declarations, and every other key is kebab-cased. Values are not
/// entity-escaped.
pub fn attributes_to_string(attributes: &Attributes) -> Result<Option<String>> {
  if attributes.is_empty() {
    return Ok(None);
  }

  let pairs = attributes
    .iter()
    .map(|(key, value)| {
      Ok(match key.as_str() {
        "className" => combine_attribute("class", &value_to_string(value)),
        "style" => combine_attribute("style", &transform_css_properties_to_string(value)?),
        _ => combine_attribute(&to_kebab_case(key), &value_to_string(value)),
      })
    })
    .collect::<Result<Vec<_>>>()?;

  Ok(Some(pairs.join(" ")))
}

/// Serializes a style mapping to `name: value` declarations joined by
/// `"; "`.
///
/// Custom properties (`--*`) keep their name and have their value coerced
/// to a string; other names are kebab-cased and their values go through
/// [`processing_style_declaration_value`].
pub fn transform_css_properties_to_string(style: &Value) -> Result<String> {
  let declarations = match style {
    Value::Object(declarations) => declarations,
    other => {
      return Err(Error::InvalidStyleMap {
        kind: value_kind(other),
      })
    }
  };

  let results = declarations
    .iter()
    .map(|(key, value)| {
      if key.starts_with("--") {
        Ok(format!("{}: {}", key, value_to_string(value).replace('"', "'")))
      } else {
        Ok(format!(
          "{}: {}",
          to_kebab_case(key),
          processing_style_declaration_value(value)?
        ))
      }
    })
    .collect::<Result<Vec<_>>>()?;

  Ok(results.join("; "))
}

/// Strings have double quotes swapped for single quotes, numbers get a
/// `px` suffix.
pub fn processing_style_declaration_value(value: &Value) -> Result<String> {
  match value {
    Value::String(value) => Ok(value.replace('"', "'")),
    Value::Number(value) => Ok(format!("{}px", format_json_number(value))),
    other => Err(Error::InvalidStyleValueType {
      kind: value_kind(other),
    }),
  }
}
