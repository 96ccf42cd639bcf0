use std::convert::Infallible;
use thiserror::Error;

/// Failures raised while building or serializing an element tree.
///
/// Every variant describes a malformed tree or a bad component argument;
/// none of them are transient.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("invalid component type: {kind}")]
  InvalidComponentType { kind: &'static str },

  #[error("invalid fragment marker `{description}`")]
  InvalidFragment { description: &'static str },

  #[error("style attribute must be a mapping, got {kind}")]
  InvalidStyleMap { kind: &'static str },

  #[error("style declaration value must be a string or number, got {kind}")]
  InvalidStyleValueType { kind: &'static str },

  #[error("cannot render a root element of type {kind}")]
  UnsupportedRootElement { kind: &'static str },

  #[error("cannot render a node of type {kind} as an element")]
  UnrenderableElement { kind: &'static str },

  #[error("invalid child type: {kind}")]
  InvalidChildType { kind: &'static str },
}

impl From<Infallible> for Error {
  fn from(value: Infallible) -> Self {
    match value {}
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
