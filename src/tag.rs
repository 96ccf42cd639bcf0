use crate::attributes::attributes_to_string;
use crate::error::Result;
use crate::model::Attributes;

/// Tags that never have content and are always self-closed.
pub static VOID_TAGS: &[&str] = &[
  "area", "base", "br", "col", "embed", "hr", "img", "input", "keygen", "link", "meta", "param",
  "source", "track", "wbr",
];

pub fn is_void_tag(name: &str) -> bool {
  VOID_TAGS.contains(&name)
}

/// Opening and closing text for one element. Void tags have no end tag.
#[derive(PartialEq, Debug)]
pub struct HtmlTag {
  pub start_tag: String,
  pub end_tag: Option<String>,
}

pub fn element_name_to_html_tag(name: &str, attributes: &Attributes) -> Result<HtmlTag> {
  let attrs = attributes_to_string(attributes)?;

  if is_void_tag(name) {
    return Ok(HtmlTag {
      start_tag: match attrs {
        Some(attrs) => format!("<{} {} />", name, attrs),
        None => format!("<{} />", name),
      },
      end_tag: None,
    });
  }

  Ok(HtmlTag {
    start_tag: match attrs {
      Some(attrs) => format!("<{} {}>", name, attrs),
      None => format!("<{}>", name),
    },
    end_tag: Some(format!("</{}>", name)),
  })
}
