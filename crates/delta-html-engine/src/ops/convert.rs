use serde_json::Value;

use crate::insert::InsertValue;
use crate::ops::{DeltaInsertOp, denormalize::denormalize};
use crate::sanitize::{OpAttributes, coerce};

/// Converts a raw op list into typed ops.
///
/// Anything other than a JSON array yields no ops.
pub fn convert(raw_ops: &Value) -> Vec<DeltaInsertOp> {
    match raw_ops.as_array() {
        Some(ops) => convert_ops(ops),
        None => {
            log::debug!("raw ops are not an array, nothing to convert");
            Vec::new()
        }
    }
}

/// Converts raw ops into typed ops, preserving order.
///
/// Ops without a usable `insert` are dropped.
pub fn convert_ops(raw_ops: &[Value]) -> Vec<DeltaInsertOp> {
    raw_ops
        .iter()
        .flat_map(denormalize)
        .filter_map(|op| convert_op(&op))
        .collect()
}

fn convert_op(op: &Value) -> Option<DeltaInsertOp> {
    let raw_insert = op.get("insert").filter(|v| coerce::is_truthy(v))?;

    let insert = match InsertValue::classify(raw_insert) {
        Ok(insert) => insert,
        Err(e) => {
            log::debug!("skipping op: {e}");
            return None;
        }
    };

    let own = op.get("attributes").filter(|v| !v.is_null());
    let attributes = match own.or_else(|| insert.as_embed().and_then(|p| p.attributes())) {
        Some(raw) => OpAttributes::sanitize(raw),
        None => OpAttributes::default(),
    };

    Some(DeltaInsertOp::new(insert, attributes))
}
