use super::element::{Element, TextElement};
use serde::Serialize;
use serde_json::Value;

/// An ordered child sequence; entries may nest to any depth.
pub type Children = Vec<Child>;

#[derive(Clone, PartialEq, Debug, Serialize)]
#[serde(untagged)]
pub enum Child {
  Element(Element),
  Nested(Children),
  /// Dynamic data spliced in as-is, e.g. a prop value. Arrays nest like
  /// `Nested`.
  Value(Value),
}

/// A non-sequence entry visited while flattening children.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Leaf<'a> {
  Element(&'a Element),
  Value(&'a Value),
}

impl From<Element> for Child {
  fn from(value: Element) -> Child {
    Child::Element(value)
  }
}

impl From<TextElement> for Child {
  fn from(value: TextElement) -> Child {
    Child::Element(Element::Text(value))
  }
}

impl From<Value> for Child {
  fn from(value: Value) -> Child {
    Child::Value(value)
  }
}

impl From<&Value> for Child {
  fn from(value: &Value) -> Child {
    Child::Value(value.clone())
  }
}

impl<T: Into<Child>> From<Vec<T>> for Child {
  fn from(value: Vec<T>) -> Child {
    Child::Nested(value.into_iter().map(Into::into).collect())
  }
}

/// `None` becomes an empty text leaf, which renders as nothing.
impl<T: Into<Child>> From<Option<T>> for Child {
  fn from(value: Option<T>) -> Child {
    match value {
      Some(value) => value.into(),
      None => Child::Element(Element::Text(TextElement::Null)),
    }
  }
}

macro_rules! child_from_text {
  ($($ty:ty),+) => {
    $(
      impl From<$ty> for Child {
        fn from(value: $ty) -> Child {
          Child::Element(Element::Text(value.into()))
        }
      }
    )+
  };
}

child_from_text!(&str, String, f64, f32, i32, i64, u32, u64, usize);
