//! Shape checks for externally supplied array layouts.
//!
//! Importers receive arrays whose buffer and child counts were chosen by
//! foreign code; these predicates check them against the counts the logical
//! type requires. They are deliberately independent, never combined into a
//! single verdict here, so callers can report which of the two checks
//! failed.

use crate::data_type::DataType;

/// Returns `true` if an array of the given type may carry `n_buffers`
/// buffers.
pub fn validate_buffers_count(data_type: DataType, n_buffers: i64) -> bool {
    n_buffers == data_type.expected_buffer_count() as i64
}

/// Returns `true` if an array of the given type may carry `n_children`
/// child arrays.
pub fn validate_children_count(data_type: DataType, n_children: i64) -> bool {
    n_children == data_type.expected_children_count() as i64
}
