//! # HTML Rendering
//!
//! Renders one [`DeltaInsertOp`] at a time into [`HtmlParts`]. Wrapping runs
//! of block ops in their shared container (`<ul>`, `<pre>`, ...) and joining
//! the fragments into a document is the caller's job.

pub mod converter;
pub mod tags;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ops::DeltaInsertOp;

pub use converter::OpToHtmlConverter;

/// Caller-supplied rendering options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Prefix for generated CSS classes (`ql` gives `ql-align-center`).
    /// Empty means unprefixed.
    pub class_prefix: String,
    /// Escape text content. Attribute values are always escaped.
    pub encode_html: bool,
    pub list_item_tag: String,
    pub paragraph_tag: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            class_prefix: "ql".to_string(),
            encode_html: true,
            list_item_tag: "li".to_string(),
            paragraph_tag: "p".to_string(),
        }
    }
}

/// The rendered form of a single op.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HtmlParts {
    pub opening_tag: String,
    pub content: String,
    pub closing_tag: String,
}

impl HtmlParts {
    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for HtmlParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.opening_tag, self.content, self.closing_tag)
    }
}

/// Renders every op in order.
pub fn render_ops(ops: &[DeltaInsertOp], options: &RenderOptions) -> Vec<HtmlParts> {
    ops.iter()
        .map(|op| OpToHtmlConverter::new(op, options).get_html_parts())
        .collect()
}
