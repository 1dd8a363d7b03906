//! # Attribute Sanitization
//!
//! Reduces an untrusted attribute record to [`OpAttributes`]: only
//! whitelisted keys, each validated and normalized to a canonical form.
//!
//! The whitelist is the [`RULES`] table. Each entry names a raw key and the
//! rule that validates its value and stores it. Sanitizing folds the table
//! over the input; keys without an entry are dropped.

pub mod coerce;
pub mod url;

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::value_types::{AlignType, AttrEnum, DirectionType, ListType, ScriptType};

pub use url::scrub_url;

pub const MAX_HEADER: u8 = 6;
pub const MAX_INDENT: u8 = 30;

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^#([0-9A-F]{6}|[0-9A-F]{3})$").expect("static hex color pattern is valid")
});
static FONT_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9\- ]{1,30}$").expect("static font pattern is valid")
});
static SIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\-]{1,20}$").expect("static size pattern is valid"));

/// A sanitized attribute set. Every field is optional and every present value
/// has passed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OpAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    #[serde(skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub italic: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub underline: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub strike: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script: Option<ScriptType>,
    #[serde(skip_serializing_if = "is_false")]
    pub code: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub list: Option<ListType>,
    #[serde(skip_serializing_if = "is_false")]
    pub blockquote: bool,
    #[serde(rename = "code-block", skip_serializing_if = "is_false")]
    pub code_block: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<AlignType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<DirectionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indent: Option<u8>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Mention target, read from the raw `user` key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

fn is_false(b: &bool) -> bool {
    !*b
}

pub type Rule = fn(&Value, &mut OpAttributes);

/// Whitelisted raw keys and the rule applied to each.
pub static RULES: &[(&str, Rule)] = &[
    ("bold", |v, a| a.bold = coerce::is_truthy(v)),
    ("italic", |v, a| a.italic = coerce::is_truthy(v)),
    ("underline", |v, a| a.underline = coerce::is_truthy(v)),
    ("strike", |v, a| a.strike = coerce::is_truthy(v)),
    ("code", |v, a| a.code = coerce::is_truthy(v)),
    ("blockquote", |v, a| a.blockquote = coerce::is_truthy(v)),
    ("code-block", |v, a| a.code_block = coerce::is_truthy(v)),
    ("background", |v, a| a.background = matching(v, &HEX_COLOR)),
    ("color", |v, a| a.color = matching(v, &HEX_COLOR)),
    ("font", |v, a| a.font = matching(v, &FONT_NAME)),
    ("size", |v, a| a.size = matching(v, &SIZE)),
    ("link", |v, a| {
        a.link = truthy_string(v)
            .map(|s| scrub_url(&s))
            .filter(|s| !s.is_empty());
    }),
    ("script", |v, a| a.script = exact(v)),
    ("list", |v, a| a.list = exact(v)),
    ("header", |v, a| a.header = coerce::bounded_level(v, MAX_HEADER)),
    ("align", |v, a| a.align = exact(v)),
    ("direction", |v, a| a.direction = exact(v)),
    ("indent", |v, a| a.indent = coerce::bounded_level(v, MAX_INDENT)),
    ("name", |v, a| a.name = truthy_string(v)),
    ("user", |v, a| a.id = truthy_string(v)),
];

fn truthy_string(v: &Value) -> Option<String> {
    if !coerce::is_truthy(v) {
        return None;
    }
    coerce::scalar_string(v).filter(|s| !s.is_empty())
}

fn matching(v: &Value, pattern: &Regex) -> Option<String> {
    truthy_string(v).filter(|s| pattern.is_match(s))
}

fn exact<T: AttrEnum>(v: &Value) -> Option<T> {
    v.as_str().and_then(T::parse)
}

impl OpAttributes {
    /// Sanitizes a raw attribute record. Never fails: anything that is not a
    /// JSON object yields the empty set.
    pub fn sanitize(dirty: &Value) -> Self {
        let mut clean = OpAttributes::default();
        let Some(dirty) = dirty.as_object() else {
            return clean;
        };

        for (key, rule) in RULES {
            if let Some(v) = dirty.get(*key) {
                rule(v, &mut clean);
            }
        }

        if log::log_enabled!(log::Level::Trace) {
            for key in dirty.keys() {
                if !RULES.iter().any(|(k, _)| *k == key.as_str()) {
                    log::trace!("dropping unrecognized attribute {key:?}");
                }
            }
        }

        clean
    }

    pub fn is_empty(&self) -> bool {
        *self == OpAttributes::default()
    }

    /// Writes the set back in raw record form, using the raw key names
    /// (`user` rather than `id`). Sanitizing the result yields `self` again.
    pub fn to_raw(&self) -> Value {
        let mut map = Map::new();
        let mut put = |k: &str, v: Value| {
            map.insert(k.to_string(), v);
        };

        for (k, v) in [
            ("background", &self.background),
            ("color", &self.color),
            ("font", &self.font),
            ("size", &self.size),
            ("link", &self.link),
            ("name", &self.name),
            ("user", &self.id),
        ] {
            if let Some(v) = v {
                put(k, Value::from(v.as_str()));
            }
        }
        for (k, on) in [
            ("bold", self.bold),
            ("italic", self.italic),
            ("underline", self.underline),
            ("strike", self.strike),
            ("code", self.code),
            ("blockquote", self.blockquote),
            ("code-block", self.code_block),
        ] {
            if on {
                put(k, Value::Bool(true));
            }
        }
        if let Some(s) = self.script {
            put("script", Value::from(s.as_str()));
        }
        if let Some(l) = self.list {
            put("list", Value::from(l.as_str()));
        }
        if let Some(a) = self.align {
            put("align", Value::from(a.as_str()));
        }
        if let Some(d) = self.direction {
            put("direction", Value::from(d.as_str()));
        }
        if let Some(h) = self.header {
            put("header", Value::from(h));
        }
        if let Some(i) = self.indent {
            put("indent", Value::from(i));
        }

        Value::Object(map)
    }
}
