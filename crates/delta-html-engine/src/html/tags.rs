use std::fmt::Write;

/// One `key="value"` pair on an opening tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagAttr {
    pub key: &'static str,
    pub value: String,
}

impl TagAttr {
    pub fn new(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

/// Builds `<tag k="v" ...>`. Attribute values are escaped for a double-quoted
/// context; an empty value renders the bare key. An empty tag name renders
/// nothing.
pub fn make_start_tag(tag: &str, attrs: &[TagAttr]) -> String {
    if tag.is_empty() {
        return String::new();
    }

    let mut out = format!("<{tag}");
    for attr in attrs {
        out.push(' ');
        out.push_str(attr.key);
        if !attr.value.is_empty() {
            // Writing to a String cannot fail.
            let _ = write!(
                out,
                "=\"{}\"",
                html_escape::encode_double_quoted_attribute(&attr.value)
            );
        }
    }
    out.push('>');
    out
}

pub fn make_end_tag(tag: &str) -> String {
    if tag.is_empty() {
        return String::new();
    }
    format!("</{tag}>")
}

/// Escapes `& < > " ' /` in text content.
pub fn encode_html(text: &str) -> String {
    html_escape::encode_safe(text).into_owned()
}
