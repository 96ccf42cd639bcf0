
/// Builds an [`Attributes`](crate::Attributes) mapping, keeping the
/// order the keys are written in.
///
/// Values go through `json!`, so nested style mappings can be written
/// inline; longer expressions need parentheses.
///
/// ```
/// let attrs = static_markup::attrs!("className" => "card", "tabIndex" => 0);
/// assert_eq!(attrs.keys().collect::<Vec<_>>(), ["className", "tabIndex"]);
/// ```
#[macro_export]
macro_rules! attrs {
  () => {
    $crate::Attributes::new()
  };

  ($($key:tt => $value:tt),+ $(,)?) => {{
    let mut attributes = $crate::Attributes::new();
    $(attributes.insert(::std::string::String::from($key), $crate::__json::json!($value));)+
    attributes
  }};
}

/// Builds a [`Children`](crate::Children) sequence from anything that
/// converts into a [`Child`](crate::Child).
#[macro_export]
macro_rules! children {
  ($($child:expr),* $(,)?) => {
    ::std::vec![$($crate::Child::from($child)),*]
  };
}
