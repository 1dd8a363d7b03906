//! Closed enumerations shared by the converter, sanitizer and renderer.

use serde::{Deserialize, Serialize};

/// The newline token that separates lines inside text inserts.
pub const NEW_LINE: &str = "\n";

/// Kind of payload carried by an insert operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Text,
    Image,
    Video,
    Mention,
    File,
    Formula,
}

impl DataType {
    /// Embed kinds in the order an insert object's keys are probed.
    pub const EMBEDS: [DataType; 5] = [
        DataType::Image,
        DataType::Video,
        DataType::Mention,
        DataType::File,
        DataType::Formula,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DataType::Text => "text",
            DataType::Image => "image",
            DataType::Video => "video",
            DataType::Mention => "mention",
            DataType::File => "file",
            DataType::Formula => "formula",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    Bullet,
    Ordered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignType {
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectionType {
    Rtl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptType {
    Sub,
    Super,
}

/// Exact-match parsing for the string-valued attribute enums.
///
/// Matching is case-sensitive: `"Bullet"` is not a list type.
pub trait AttrEnum: Sized + Copy + 'static {
    const VARIANTS: &'static [Self];

    fn as_str(self) -> &'static str;

    fn parse(s: &str) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|v| v.as_str() == s)
    }
}

impl AttrEnum for ListType {
    const VARIANTS: &'static [Self] = &[ListType::Bullet, ListType::Ordered];

    fn as_str(self) -> &'static str {
        match self {
            ListType::Bullet => "bullet",
            ListType::Ordered => "ordered",
        }
    }
}

impl AttrEnum for AlignType {
    const VARIANTS: &'static [Self] = &[AlignType::Center, AlignType::Right];

    fn as_str(self) -> &'static str {
        match self {
            AlignType::Center => "center",
            AlignType::Right => "right",
        }
    }
}

impl AttrEnum for DirectionType {
    const VARIANTS: &'static [Self] = &[DirectionType::Rtl];

    fn as_str(self) -> &'static str {
        match self {
            DirectionType::Rtl => "rtl",
        }
    }
}

impl AttrEnum for ScriptType {
    const VARIANTS: &'static [Self] = &[ScriptType::Sub, ScriptType::Super];

    fn as_str(self) -> &'static str {
        match self {
            ScriptType::Sub => "sub",
            ScriptType::Super => "super",
        }
    }
}
