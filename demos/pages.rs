//! A small static page built from function components.

use static_markup::{attrs, children, create_element, Component, Element, Props, Result};

pub fn header(props: Props) -> Result<Element> {
  let label = props.get("label").cloned();
  let children = props.into_children();

  create_element(
    "header",
    Some(attrs!("style" => {"backgroundColor": "blue", "border-radius": ""})),
    children![
      create_element("div", None, children![label])?,
      create_element("div", None, children![children])?,
    ],
  )
}

pub fn footer(props: Props) -> Result<Element> {
  create_element("footer", None, children![props.into_children(), "This is footer"])
}

/// Upper bound on the generated list length.
pub const MAX_ITEMS: usize = 10_000;

/// `numberOfElements` sets the list length; missing, zero or non-finite
/// means 10, and larger counts are capped at [`MAX_ITEMS`].
pub fn home_page(props: Props) -> Result<Element> {
  let count = match props.get_f64("numberOfElements") {
    Some(count) if count.is_finite() && count > 0.0 => (count as usize).min(MAX_ITEMS),
    _ => 10,
  };

  let items = (0..count)
    .map(|value| create_element("li", None, children!["Item ", value]))
    .collect::<Result<Vec<_>>>()?;

  create_element(
    "html",
    Some(attrs!("lang" => "en")),
    children![
      create_element(
        "head",
        None,
        children![
          create_element("meta", Some(attrs!("charSet" => "UTF-8")), children![])?,
          create_element(
            "meta",
            Some(attrs!("http-equiv" => "X-UA-Compatible", "content" => "IE=edge")),
            children![]
          )?,
          create_element(
            "meta",
            Some(attrs!("name" => "viewport", "content" => "width=device-width, initial-scale=1.0")),
            children![]
          )?,
          create_element("title", None, children!["Home"])?,
        ]
      )?,
      create_element(
        "body",
        None,
        children![
          create_element(
            Component::Function(header),
            Some(attrs!("label" => "Home Page")),
            children![
              create_element("div", None, children!["This is a child element"])?,
              create_element("section", None, children!["This is a child element"])?,
            ]
          )?,
          create_element(
            "main",
            None,
            children![
              create_element(
                "h1",
                Some(attrs!("style" => {
                  "display": "block",
                  "backgroundColor": "blue",
                  "width": 200,
                  "height": 300,
                  "--css-variable": "ok"
                })),
                children!["Home Page"]
              )?,
              create_element("ul", None, children![items])?,
            ]
          )?,
          create_element(Component::Function(footer), None, children!["Footer children...."])?,
        ]
      )?,
    ],
  )
}

pub fn page(items: usize) -> Result<Element> {
  create_element(
    Component::Function(home_page),
    Some(attrs!("numberOfElements" => items)),
    children![],
  )
}
