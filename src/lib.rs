//! Builds in-memory element trees from component calls and serializes them
//! to static HTML.

#[macro_use]
pub mod macros;
pub mod attributes;
pub mod component;
pub mod error;
pub mod flatten;
pub mod model;
pub mod render;
pub mod tag;

#[doc(hidden)]
pub use serde_json as __json;

pub use component::{create_element, Component, FunctionComponent, Marker, Props, FRAGMENT};
pub use error::{Error, Result};
pub use flatten::flat_for_each;
pub use model::children::{Child, Children, Leaf};
pub use model::element::{Element, FragmentElement, HtmlElement, TextElement};
pub use model::Attributes;
pub use render::html::{render, render_element, DOCTYPE_HTML};
pub use render::RenderOptions;
