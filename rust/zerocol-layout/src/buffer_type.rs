//! Roles of the memory buffers that make up an array.

/// The functional role of one memory buffer within an array's layout.
///
/// A logical type maps to a fixed, ordered sequence of roles (see
/// [`crate::DataType::buffer_types`]); the position of a role within that
/// sequence is significant, e.g. validity always precedes data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferType {
    /// Null bitmap, one bit per logical element.
    Validity,
    /// Primitive value payload.
    Data,
    /// 32-bit cumulative element offsets for variable-length containers.
    Offsets32,
    /// 64-bit cumulative element offsets for variable-length containers.
    Offsets64,
    /// 32-bit per-element sizes for view-style containers.
    Sizes32,
    /// 64-bit per-element sizes for view-style containers.
    Sizes64,
    /// Inline/out-of-line string-view descriptors. Reserved; sizing is not
    /// implemented.
    Views,
    /// Per-element type discriminators for union arrays.
    TypeIds,
}
