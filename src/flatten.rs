use crate::model::children::{Child, Leaf};
use serde_json::Value;

/// Visits every leaf of an arbitrarily nested child sequence, left to
/// right and depth first. Nested sequences (including JSON arrays) are
/// descended into and never visited themselves.
///
/// The first error returned by `visit` stops the walk.
pub fn flat_for_each<'a, F, E>(children: &'a [Child], visit: &mut F) -> Result<(), E>
where
  F: FnMut(Leaf<'a>) -> Result<(), E>,
{
  for child in children {
    match child {
      Child::Nested(nested) => flat_for_each(nested, visit)?,
      Child::Value(value) => flat_value(value, visit)?,
      Child::Element(element) => visit(Leaf::Element(element))?,
    }
  }

  Ok(())
}

fn flat_value<'a, F, E>(value: &'a Value, visit: &mut F) -> Result<(), E>
where
  F: FnMut(Leaf<'a>) -> Result<(), E>,
{
  match value {
    Value::Array(items) => {
      for item in items {
        flat_value(item, visit)?;
      }
      Ok(())
    }
    _ => visit(Leaf::Value(value)),
  }
}
