use serde::{Deserialize, Serialize};

pub mod html;

/// Options for [`render`](html::render).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
  /// Prefix the output with `<!DOCTYPE html>`.
  pub html5: bool,
}

impl Default for RenderOptions {
  fn default() -> Self {
    RenderOptions { html5: true }
  }
}

impl RenderOptions {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn html5(mut self, html5: bool) -> Self {
    self.html5 = html5;
    self
  }
}
