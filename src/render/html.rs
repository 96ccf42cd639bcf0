use super::RenderOptions;
use crate::error::{Error, Result};
use crate::flatten::flat_for_each;
use crate::model::children::Leaf;
use crate::model::element::{Element, TextElement};
use crate::model::value::{format_json_number, format_number, value_kind};
use crate::tag::element_name_to_html_tag;
use serde_json::Value;
use std::borrow::Cow;
use tracing::debug;

pub static DOCTYPE_HTML: &str = "<!DOCTYPE html>";

/// Renders an element tree to an HTML string.
///
/// The root must be an html element, a fragment or a string. A string root
/// is trimmed and joined to the doctype with a single space; element roots
/// are concatenated without separators. Text and attribute values are
/// emitted without entity escaping.
pub fn render<O>(root: &Element, options: O) -> Result<String>
where
  O: Into<Option<RenderOptions>>,
{
  let options = options.into().unwrap_or_default();

  if let Element::Text(TextElement::Number(_) | TextElement::Null) = root {
    return Err(Error::UnsupportedRootElement { kind: root.kind() });
  }

  debug!(html5 = options.html5, "rendering element tree");
  let mut results: Vec<Cow<str>> = vec![];

  if options.html5 {
    results.push(DOCTYPE_HTML.into());
  }

  if let Element::Text(TextElement::String(text)) = root {
    results.push(trim_text(text).into());
    return Ok(results.join(" "));
  }

  render_element(root, &mut results)?;

  let output = results.concat();
  debug!(length = output.len(), "rendered element tree");
  Ok(output)
}

/// Strips surrounding whitespace, byte order marks included.
fn trim_text(text: &str) -> &str {
  text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Appends the serialization of `element` to `results`.
///
/// Children of void tags are never visited. Fragments contribute only
/// their children.
pub fn render_element<'a>(element: &'a Element, results: &mut Vec<Cow<'a, str>>) -> Result<()> {
  let (children, end_tag) = match element {
    Element::Text(text) => {
      debug!(?text, "cannot render text node as an element");
      return Err(Error::UnrenderableElement { kind: text.kind() });
    }

    Element::Fragment(fragment) => (fragment.children(), None),

    Element::Html(html) => {
      let tag = element_name_to_html_tag(html.name(), html.attributes())?;
      results.push(tag.start_tag.into());

      match tag.end_tag {
        Some(end_tag) => (html.children(), Some(end_tag)),
        None => return Ok(()),
      }
    }
  };

  flat_for_each(children, &mut |leaf| match leaf {
    Leaf::Element(Element::Text(text)) => {
      push_text(text, results);
      Ok(())
    }
    Leaf::Element(element) => render_element(element, results),
    Leaf::Value(value) => push_value(value, results),
  })?;

  if let Some(end_tag) = end_tag {
    results.push(end_tag.into());
  }

  Ok(())
}

fn push_text<'a>(text: &'a TextElement, results: &mut Vec<Cow<'a, str>>) {
  match text {
    TextElement::String(value) => results.push(value.as_str().into()),
    TextElement::Number(value) => results.push(format_number(*value).into()),
    TextElement::Null => (),
  }
}

fn push_value<'a>(value: &'a Value, results: &mut Vec<Cow<'a, str>>) -> Result<()> {
  match value {
    Value::String(value) => results.push(value.as_str().into()),
    Value::Number(value) => results.push(format_json_number(value).into()),
    Value::Null => (),
    Value::Bool(_) => {
      debug!(%value, "invalid child");
      return Err(Error::InvalidChildType {
        kind: value_kind(value),
      });
    }
    // arrays are flattened before they get here
    Value::Object(_) | Value::Array(_) => {
      debug!(%value, "cannot render value as an element");
      return Err(Error::UnrenderableElement {
        kind: value_kind(value),
      });
    }
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::component::{create_element, Component, Props, FRAGMENT};
  use crate::{attrs, children};
  use pretty_assertions::assert_eq;
  use rstest::rstest;
  use serde_json::json;

  fn el(name: &str, children: crate::Children) -> Element {
    create_element(name, None, children).unwrap()
  }

  #[test]
  fn empty_div() {
    assert_eq!(render(&el("div", children![]), None).unwrap(), "<!DOCTYPE html><div></div>");
  }

  #[test]
  fn line_break() {
    assert_eq!(render(&el("br", children![]), None).unwrap(), "<!DOCTYPE html><br />");
  }

  #[test]
  fn image_with_source() {
    let img = create_element("img", Some(attrs!("src" => "a.png")), children![]).unwrap();
    assert_eq!(render(&img, None).unwrap(), r#"<!DOCTYPE html><img src="a.png" />"#);
  }

  #[test]
  fn fragment_emits_no_wrapper() {
    let root = create_element(FRAGMENT, None, children!["a", el("b", children!["x"])]).unwrap();
    assert_eq!(render(&root, None).unwrap(), "<!DOCTYPE html>a<b>x</b>");
  }

  #[test]
  fn fragment_renders_like_its_children() {
    let options = RenderOptions::new().html5(false);
    let a = el("i", children!["a"]);
    let b = el("em", children![1.5]);
    let fragment = create_element(FRAGMENT, None, children![a.clone(), b.clone()]).unwrap();

    assert_eq!(
      render(&fragment, options).unwrap(),
      render(&a, options).unwrap() + &render(&b, options).unwrap()
    );
  }

  #[rstest]
  fn void_tags_ignore_children(
    #[values(
      "area", "base", "br", "col", "embed", "hr", "img", "input", "keygen", "link", "meta", "param",
      "source", "track", "wbr"
    )]
    name: &str,
  ) {
    let element = el(name, children!["ignored", el("span", children![])]);
    assert_eq!(render(&element, None).unwrap(), format!("<!DOCTYPE html><{} />", name));
  }

  #[rstest]
  #[case("p", "hello")]
  #[case("span", "  padded  ")]
  #[case("custom-tag", "")]
  fn paired_tags_wrap_text(#[case] name: &str, #[case] text: &str) {
    let element = el(name, children![text]);
    assert_eq!(
      render(&element, RenderOptions::new().html5(false)).unwrap(),
      format!("<{0}>{1}</{0}>", name, text)
    );
  }

  #[test]
  fn children_render_in_order() {
    let root = el(
      "ul",
      children![
        children![el("li", children!["one"]), children![el("li", children!["two"])]],
        el("li", children!["three"])
      ],
    );
    assert_eq!(
      render(&root, RenderOptions::new().html5(false)).unwrap(),
      "<ul><li>one</li><li>two</li><li>three</li></ul>"
    );
  }

  #[test]
  fn numbers_and_nulls_as_children() {
    let root = el("p", children!["Item ", 3, None::<Element>, 2.5, json!(null), json!(7)]);
    assert_eq!(
      render(&root, RenderOptions::new().html5(false)).unwrap(),
      "<p>Item 32.57</p>"
    );
  }

  #[test]
  fn text_is_not_escaped() {
    let root = el("p", children!["<script>&</script>"]);
    assert_eq!(
      render(&root, RenderOptions::new().html5(false)).unwrap(),
      "<p><script>&</script></p>"
    );
  }

  #[test]
  fn text_root_is_trimmed_and_space_joined() {
    assert_eq!(render(&Element::from("  hi  "), None).unwrap(), "<!DOCTYPE html> hi");
    assert_eq!(
      render(&Element::from("  hi  "), RenderOptions::new().html5(false)).unwrap(),
      "hi"
    );
  }

  #[test]
  fn text_root_trims_byte_order_marks() {
    assert_eq!(
      render(&Element::from("\u{feff} hi\u{feff}"), None).unwrap(),
      "<!DOCTYPE html> hi"
    );
  }

  #[test]
  fn extreme_numbers_render_in_exponent_form() {
    let root = el("p", children![1e21, "|", 1e-7, "|", -0.0]);
    assert_eq!(
      render(&root, RenderOptions::new().html5(false)).unwrap(),
      "<p>1e+21|1e-7|0</p>"
    );
  }

  #[test]
  fn html5_can_be_disabled() {
    assert_eq!(
      render(&el("div", children![]), RenderOptions::new().html5(false)).unwrap(),
      "<div></div>"
    );
  }

  #[rstest]
  #[case(Element::from(42), "number")]
  #[case(Element::Text(TextElement::Null), "null")]
  fn unsupported_roots(#[case] root: Element, #[case] kind: &'static str) {
    assert_eq!(render(&root, None), Err(Error::UnsupportedRootElement { kind }));
  }

  #[test]
  fn style_errors_surface_at_render_time() {
    let root = create_element("div", Some(attrs!("style" => "not-an-object")), children![]).unwrap();
    assert_eq!(render(&root, None), Err(Error::InvalidStyleMap { kind: "string" }));
  }

  #[test]
  fn boolean_child_is_invalid() {
    let root = el("div", children![json!(false)]);
    assert_eq!(render(&root, None), Err(Error::InvalidChildType { kind: "boolean" }));
  }

  #[test]
  fn object_child_is_unrenderable() {
    let root = el("div", children![json!({"name": "div"})]);
    assert_eq!(render(&root, None), Err(Error::UnrenderableElement { kind: "object" }));
  }

  #[test]
  fn render_element_rejects_text() {
    let text = Element::from("x");
    let mut results = vec![];
    assert_eq!(
      render_element(&text, &mut results),
      Err(Error::UnrenderableElement { kind: "string" })
    );
    assert!(results.is_empty());
  }

  #[test]
  fn nested_function_components() {
    fn card(props: Props) -> Result<Element> {
      let title = props.get("title").cloned();
      let children = props.into_children();
      create_element(
        "article",
        Some(attrs!("className" => "card", "style" => {"padding": 4})),
        children![create_element("h2", None, children![title])?, children],
      )
    }

    let root = create_element(
      FRAGMENT,
      None,
      children![create_element(
        Component::Function(card),
        Some(attrs!("title" => "Hi")),
        children![el("p", children!["body"])]
      )
      .unwrap()],
    )
    .unwrap();

    assert_eq!(
      render(&root, RenderOptions::new().html5(false)).unwrap(),
      r#"<article class="card" style="padding: 4px"><h2>Hi</h2><p>body</p></article>"#
    );
  }
}
