use crate::error::{Error, Result};
use crate::model::children::Children;
use crate::model::element::{Element, FragmentElement, HtmlElement};
use crate::model::value::value_kind;
use crate::model::Attributes;
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::trace;

/// A user-defined component.
pub type FunctionComponent = fn(Props) -> Result<Element>;

/// An opaque identity token. Two markers are equal only when they come
/// from the same `Marker::new` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Marker {
  id: u64,
  description: &'static str,
}

static NEXT_MARKER: AtomicU64 = AtomicU64::new(1);

/// The marker that turns [`create_element`] into a fragment constructor.
pub const FRAGMENT: Marker = Marker {
  id: 0,
  description: "Fragment",
};

impl Marker {
  /// Mints a fresh marker. Identities come from a process-wide atomic
  /// counter, the only mutable global in the crate; [`FRAGMENT`] owns id 0
  /// and is never handed out again.
  pub fn new(description: &'static str) -> Marker {
    Marker {
      id: NEXT_MARKER.fetch_add(1, Ordering::Relaxed),
      description,
    }
  }

  pub fn description(&self) -> &'static str {
    self.description
  }
}

/// What [`create_element`] can be called with.
#[derive(Clone, Debug)]
pub enum Component {
  Tag(String),
  Function(FunctionComponent),
  Marker(Marker),
}

impl From<&str> for Component {
  fn from(value: &str) -> Component {
    Component::Tag(value.into())
  }
}

impl From<String> for Component {
  fn from(value: String) -> Component {
    Component::Tag(value)
  }
}

impl From<Marker> for Component {
  fn from(value: Marker) -> Component {
    Component::Marker(value)
  }
}

impl From<FunctionComponent> for Component {
  fn from(value: FunctionComponent) -> Component {
    Component::Function(value)
  }
}

/// Resolves a component named by dynamic data; only strings qualify.
impl TryFrom<Value> for Component {
  type Error = Error;

  fn try_from(value: Value) -> Result<Component> {
    match value {
      Value::String(name) => Ok(Component::Tag(name)),
      other => Err(Error::InvalidComponentType {
        kind: value_kind(&other),
      }),
    }
  }
}

/// The single argument a function component receives: its attributes
/// plus the children it was invoked with.
///
/// Props are handed over by value and expose no mutating API.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Props {
  attributes: Attributes,
  children: Children,
}

impl Props {
  pub fn get(&self, key: &str) -> Option<&Value> {
    self.attributes.get(key)
  }

  pub fn get_str(&self, key: &str) -> Option<&str> {
    self.get(key).and_then(Value::as_str)
  }

  pub fn get_f64(&self, key: &str) -> Option<f64> {
    self.get(key).and_then(Value::as_f64)
  }

  pub fn attributes(&self) -> &Attributes {
    &self.attributes
  }

  pub fn children(&self) -> &Children {
    &self.children
  }

  pub fn into_children(self) -> Children {
    self.children
  }

  pub fn into_parts(self) -> (Attributes, Children) {
    (self.attributes, self.children)
  }
}

fn props_to_attributes(props: Option<Attributes>) -> Attributes {
  let mut attributes = props.unwrap_or_default();
  if attributes.shift_remove("children").is_some() {
    trace!("dropped `children` key from attributes");
  }
  attributes
}

/// Builds one element, dispatching on the kind of component.
///
/// Tag names produce an html element holding `props` as attributes and
/// `children` verbatim. Function components are called with [`Props`] and
/// their result is returned as-is. [`FRAGMENT`] produces a fragment; any
/// other marker is rejected.
pub fn create_element<C>(component: C, props: Option<Attributes>, children: Children) -> Result<Element>
where
  C: TryInto<Component>,
  Error: From<C::Error>,
{
  match component.try_into()? {
    Component::Tag(name) => {
      trace!(tag = %name, "creating html element");
      Ok(Element::Html(HtmlElement::new(
        name,
        props_to_attributes(props),
        children,
      )))
    }

    Component::Function(function) => {
      trace!("invoking function component");
      function(Props {
        attributes: props_to_attributes(props),
        children,
      })
    }

    Component::Marker(marker) => {
      if marker != FRAGMENT {
        return Err(Error::InvalidFragment {
          description: marker.description(),
        });
      }

      trace!("creating fragment");
      Ok(Element::Fragment(FragmentElement::new(children)))
    }
  }
}
