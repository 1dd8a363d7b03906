//! # Typed Operations
//!
//! [`DeltaInsertOp`] is the unit consumed by the renderer: a classified insert
//! value plus its sanitized attributes. Ops are built by [`convert`] from raw
//! JSON records and never change afterwards.
//!
//! ## Pipeline
//!
//! 1. **`denormalize`**: split multi-line text inserts into one raw op per line
//! 2. **`InsertValue::classify`**: turn the raw `insert` payload into a typed value
//! 3. **`OpAttributes::sanitize`**: whitelist and normalize the attributes
//!
//! The block predicates below (`is_same_list_as` and friends) are what an
//! external grouper uses to wrap consecutive ops in one block container.

pub mod convert;
pub mod denormalize;

use serde::Serialize;

use crate::insert::InsertValue;
use crate::sanitize::OpAttributes;
use crate::value_types::{DataType, ListType, NEW_LINE};

pub use convert::{convert, convert_ops};
pub use denormalize::{denormalize, tokenize_with_newlines};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeltaInsertOp {
    pub insert: InsertValue,
    pub attributes: OpAttributes,
}

impl DeltaInsertOp {
    pub fn new(insert: InsertValue, attributes: OpAttributes) -> Self {
        Self { insert, attributes }
    }

    pub fn data_type(&self) -> DataType {
        self.insert.data_type()
    }

    pub fn is_text(&self) -> bool {
        matches!(self.insert, InsertValue::Text(_))
    }

    pub fn is_image(&self) -> bool {
        matches!(self.insert, InsertValue::Image(_))
    }

    pub fn is_video(&self) -> bool {
        matches!(self.insert, InsertValue::Video(_))
    }

    pub fn is_formula(&self) -> bool {
        matches!(self.insert, InsertValue::Formula(_))
    }

    pub fn is_mention(&self) -> bool {
        matches!(self.insert, InsertValue::Mention(_))
    }

    pub fn is_file(&self) -> bool {
        matches!(self.insert, InsertValue::File(_))
    }

    /// Files are the only embed the renderer has no dedicated markup for.
    pub fn is_custom_embed(&self) -> bool {
        self.is_file()
    }

    pub fn is_link(&self) -> bool {
        self.is_text() && self.attributes.link.is_some()
    }

    pub fn is_just_newline(&self) -> bool {
        matches!(&self.insert, InsertValue::Text(s) if s == NEW_LINE)
    }

    /// True when the attributes describe a whole block (list item, header,
    /// quote, code block, or an aligned/indented/rtl paragraph).
    pub fn is_container_block(&self) -> bool {
        let a = &self.attributes;
        a.blockquote
            || a.list.is_some()
            || a.code_block
            || a.header.is_some()
            || a.align.is_some()
            || a.direction.is_some()
            || a.indent.is_some()
    }

    pub fn is_inline(&self) -> bool {
        !self.is_container_block()
    }

    pub fn is_blockquote(&self) -> bool {
        self.attributes.blockquote
    }

    pub fn is_code_block(&self) -> bool {
        self.attributes.code_block
    }

    pub fn is_header(&self) -> bool {
        self.attributes.header.is_some()
    }

    pub fn is_list(&self) -> bool {
        self.attributes.list.is_some()
    }

    pub fn is_ordered_list(&self) -> bool {
        self.attributes.list == Some(ListType::Ordered)
    }

    pub fn is_bullet_list(&self) -> bool {
        self.attributes.list == Some(ListType::Bullet)
    }

    pub fn is_same_list_as(&self, other: &DeltaInsertOp) -> bool {
        self.attributes.list.is_some() && self.attributes.list == other.attributes.list
    }

    pub fn is_same_header_as(&self, other: &DeltaInsertOp) -> bool {
        self.attributes.header.is_some() && self.attributes.header == other.attributes.header
    }

    pub fn has_same_indentation_as(&self, other: &DeltaInsertOp) -> bool {
        self.attributes.indent == other.attributes.indent
    }

    /// Same align, direction and indent.
    pub fn has_same_adi_as(&self, other: &DeltaInsertOp) -> bool {
        self.attributes.align == other.attributes.align
            && self.attributes.direction == other.attributes.direction
            && self.has_same_indentation_as(other)
    }
}
