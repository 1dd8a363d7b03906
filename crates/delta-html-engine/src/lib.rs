pub mod html;
pub mod insert;
pub mod ops;
pub mod sanitize;
pub mod value_types;

// Re-export key types for easier usage
pub use html::{HtmlParts, OpToHtmlConverter, RenderOptions, render_ops};
pub use insert::{EmbedPayload, InsertValue, InsertValueError};
pub use ops::{DeltaInsertOp, convert, convert_ops, denormalize, tokenize_with_newlines};
pub use sanitize::{OpAttributes, scrub_url};
pub use value_types::{AlignType, DataType, DirectionType, ListType, ScriptType};
