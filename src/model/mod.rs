use serde_json::{Map, Value};

pub mod children;
pub mod element;
pub mod value;

/// Attribute mapping; iteration follows insertion order.
pub type Attributes = Map<String, Value>;
