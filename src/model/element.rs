use super::children::Children;
use super::Attributes;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// One node of a markup tree.
///
/// Html and fragment nodes are only produced by
/// [`create_element`](crate::create_element); text nodes are plain
/// primitives and convert from strings and numbers.
#[derive(Clone, PartialEq, Debug)]
pub enum Element {
  Html(HtmlElement),
  Fragment(FragmentElement),
  Text(TextElement),
}

/// A primitive leaf. `Null` renders as nothing.
#[derive(Clone, PartialEq, Debug, Serialize)]
#[serde(untagged)]
pub enum TextElement {
  String(String),
  Number(f64),
  Null,
}

impl TextElement {
  pub fn kind(&self) -> &'static str {
    match self {
      TextElement::String(_) => "string",
      TextElement::Number(_) => "number",
      TextElement::Null => "null",
    }
  }
}

#[derive(Clone, PartialEq, Debug)]
pub struct HtmlElement {
  name: String,
  attributes: Attributes,
  children: Children,
}

impl HtmlElement {
  pub(crate) fn new(name: String, attributes: Attributes, children: Children) -> Self {
    HtmlElement {
      name,
      attributes,
      children,
    }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn attributes(&self) -> &Attributes {
    &self.attributes
  }

  pub fn children(&self) -> &Children {
    &self.children
  }
}

#[derive(Clone, PartialEq, Debug)]
pub struct FragmentElement {
  children: Children,
}

impl FragmentElement {
  pub(crate) fn new(children: Children) -> Self {
    FragmentElement { children }
  }

  pub fn children(&self) -> &Children {
    &self.children
  }
}

impl Element {
  pub fn is_text(&self) -> bool {
    matches!(self, Element::Text(_))
  }

  pub fn is_html(&self) -> bool {
    matches!(self, Element::Html(_))
  }

  pub fn is_fragment(&self) -> bool {
    matches!(self, Element::Fragment(_))
  }

  /// Tag name, for html elements only.
  pub fn name(&self) -> Option<&str> {
    match self {
      Element::Html(html) => Some(html.name()),
      _ => None,
    }
  }

  pub fn children(&self) -> Option<&Children> {
    match self {
      Element::Html(html) => Some(html.children()),
      Element::Fragment(fragment) => Some(fragment.children()),
      Element::Text(_) => None,
    }
  }

  /// Runtime kind used in error messages.
  pub fn kind(&self) -> &'static str {
    match self {
      Element::Text(text) => text.kind(),
      _ => "object",
    }
  }
}

macro_rules! text_from_number {
  ($($ty:ty),+) => {
    $(
      impl From<$ty> for TextElement {
        fn from(value: $ty) -> TextElement {
          TextElement::Number(value as f64)
        }
      }

      impl From<$ty> for Element {
        fn from(value: $ty) -> Element {
          Element::Text(value.into())
        }
      }
    )+
  };
}

text_from_number!(f64, f32, i32, i64, u32, u64, usize);

impl From<&str> for TextElement {
  fn from(value: &str) -> TextElement {
    TextElement::String(value.into())
  }
}

impl From<String> for TextElement {
  fn from(value: String) -> TextElement {
    TextElement::String(value)
  }
}

impl From<TextElement> for Element {
  fn from(value: TextElement) -> Element {
    Element::Text(value)
  }
}

impl From<&str> for Element {
  fn from(value: &str) -> Element {
    Element::Text(value.into())
  }
}

impl From<String> for Element {
  fn from(value: String) -> Element {
    Element::Text(value.into())
  }
}

impl Serialize for Element {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    match self {
      Element::Html(html) => {
        let mut state = serializer.serialize_struct("Element", 4)?;
        state.serialize_field("$$type", "Element")?;
        state.serialize_field("name", &html.name)?;
        state.serialize_field("attributes", &html.attributes)?;
        state.serialize_field("children", &html.children)?;
        state.end()
      }
      Element::Fragment(fragment) => {
        let mut state = serializer.serialize_struct("Fragment", 2)?;
        state.serialize_field("$$type", "Fragment")?;
        state.serialize_field("children", &fragment.children)?;
        state.end()
      }
      Element::Text(text) => text.serialize(serializer),
    }
  }
}
