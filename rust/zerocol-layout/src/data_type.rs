//! Logical column types of the interchange format.

use zerocol_common::{Result, error::Error};

/// The logical type of a column.
///
/// Identity-only: schema-level parameters (the element width of a
/// fixed-size binary value, timestamp unit, decimal precision and scale,
/// struct fields, union variants) live in the companion type-descriptor
/// system, not in this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    /// The null type; arrays of it carry no buffers at all.
    Null,
    /// Booleans, bit-packed in the data buffer.
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    /// 16-bit floating point.
    HalfFloat,
    /// 32-bit floating point.
    Float,
    /// 64-bit floating point.
    Double,
    /// Instant stored as a 64-bit integer; the unit and timezone live in
    /// the schema.
    Timestamp,
    /// 128-bit decimal.
    Decimal,
    /// Byte strings of a schema-declared fixed width.
    FixedSizeBinary,
    /// Variable-length UTF-8 strings.
    String,
    /// Variable-length byte strings.
    Binary,
    /// Variable-length lists with 32-bit offsets.
    List,
    /// Variable-length lists with 64-bit offsets.
    LargeList,
    /// Lists described by per-element 32-bit offset/size pairs.
    ListView,
    /// Lists described by per-element 64-bit offset/size pairs.
    LargeListView,
    /// Lists of a schema-declared fixed length.
    FixedSizeList,
    Struct,
    Map,
    /// Tagged variants; each slot of every child is populated.
    SparseUnion,
    /// Tagged variants; child slots are shared via an offsets buffer.
    DenseUnion,
    /// Run-end-encoded values.
    RunEndEncoded,
}

impl DataType {
    /// Returns `true` for fixed-width kinds whose data buffer is directly
    /// indexable by element, without offsets or schema-level parameters.
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            DataType::Bool
                | DataType::Int8
                | DataType::Int16
                | DataType::Int32
                | DataType::Int64
                | DataType::UInt8
                | DataType::UInt16
                | DataType::UInt32
                | DataType::UInt64
                | DataType::HalfFloat
                | DataType::Float
                | DataType::Double
                | DataType::Timestamp
                | DataType::Decimal
        )
    }

    /// Returns `true` if this is one of the integer kinds (signed or
    /// unsigned, any width).
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            DataType::Int8
                | DataType::Int16
                | DataType::Int32
                | DataType::Int64
                | DataType::UInt8
                | DataType::UInt16
                | DataType::UInt32
                | DataType::UInt64
        )
    }

    /// Returns `true` if values of this type may index the dictionary of a
    /// dictionary-encoded array.
    pub fn is_dictionary_key_type(&self) -> bool {
        self.is_integer()
    }

    /// The per-element byte width of the data buffer, or `None` when no
    /// statically known width exists: `Bool` is bit-packed,
    /// `FixedSizeBinary` carries its width in the schema, and
    /// variable-length or nested kinds have no element width at all.
    pub fn primitive_byte_width(&self) -> Option<usize> {
        match self {
            DataType::Null | DataType::Bool => None,
            DataType::Int8 | DataType::UInt8 => Some(1),
            DataType::Int16 | DataType::UInt16 | DataType::HalfFloat => Some(2),
            DataType::Int32 | DataType::UInt32 | DataType::Float => Some(4),
            DataType::Int64 | DataType::UInt64 | DataType::Double | DataType::Timestamp => Some(8),
            DataType::Decimal => Some(16),
            DataType::FixedSizeBinary => None,
            DataType::String
            | DataType::Binary
            | DataType::List
            | DataType::LargeList
            | DataType::ListView
            | DataType::LargeListView
            | DataType::FixedSizeList
            | DataType::Struct
            | DataType::Map
            | DataType::SparseUnion
            | DataType::DenseUnion
            | DataType::RunEndEncoded => None,
        }
    }
}

/// Number of data-buffer bytes needed to store `element_count` values of a
/// primitive type. `Bool` values are bit-packed, one bit per element.
///
/// # Errors
///
/// Returns an `InvalidArgument` error for types with no statically known
/// element width.
pub fn primitive_bytes_count(data_type: DataType, element_count: usize) -> Result<usize> {
    if data_type == DataType::Bool {
        return Ok(element_count.div_ceil(8));
    }
    data_type
        .primitive_byte_width()
        .map(|width| width * element_count)
        .ok_or_else(|| {
            Error::invalid_arg(
                "data_type",
                format!("{data_type:?} has no fixed element width"),
            )
        })
}

/// Every logical type, for table-driven tests.
#[cfg(test)]
pub(crate) const ALL_TYPES: [DataType; 28] = [
    DataType::Null,
    DataType::Bool,
    DataType::Int8,
    DataType::Int16,
    DataType::Int32,
    DataType::Int64,
    DataType::UInt8,
    DataType::UInt16,
    DataType::UInt32,
    DataType::UInt64,
    DataType::HalfFloat,
    DataType::Float,
    DataType::Double,
    DataType::Timestamp,
    DataType::Decimal,
    DataType::FixedSizeBinary,
    DataType::String,
    DataType::Binary,
    DataType::List,
    DataType::LargeList,
    DataType::ListView,
    DataType::LargeListView,
    DataType::FixedSizeList,
    DataType::Struct,
    DataType::Map,
    DataType::SparseUnion,
    DataType::DenseUnion,
    DataType::RunEndEncoded,
];

#[cfg(test)]
mod tests {
    use super::{DataType, primitive_bytes_count};

    #[test]
    fn test_primitive_byte_widths() {
        assert_eq!(DataType::Int8.primitive_byte_width(), Some(1));
        assert_eq!(DataType::UInt16.primitive_byte_width(), Some(2));
        assert_eq!(DataType::HalfFloat.primitive_byte_width(), Some(2));
        assert_eq!(DataType::Float.primitive_byte_width(), Some(4));
        assert_eq!(DataType::Timestamp.primitive_byte_width(), Some(8));
        assert_eq!(DataType::Decimal.primitive_byte_width(), Some(16));
        assert_eq!(DataType::Bool.primitive_byte_width(), None);
        assert_eq!(DataType::FixedSizeBinary.primitive_byte_width(), None);
        assert_eq!(DataType::String.primitive_byte_width(), None);
    }

    #[test]
    fn test_is_primitive() {
        assert!(DataType::Bool.is_primitive());
        assert!(DataType::Int32.is_primitive());
        assert!(DataType::Timestamp.is_primitive());
        assert!(DataType::Decimal.is_primitive());
        assert!(!DataType::Null.is_primitive());
        assert!(!DataType::FixedSizeBinary.is_primitive());
        assert!(!DataType::String.is_primitive());
        assert!(!DataType::List.is_primitive());
        assert!(!DataType::SparseUnion.is_primitive());
    }

    #[test]
    fn test_primitive_bytes_count() {
        assert_eq!(primitive_bytes_count(DataType::Int32, 4).unwrap(), 16);
        assert_eq!(primitive_bytes_count(DataType::UInt64, 3).unwrap(), 24);
        assert_eq!(primitive_bytes_count(DataType::Int8, 0).unwrap(), 0);
    }

    #[test]
    fn test_bool_bytes_are_bit_packed() {
        assert_eq!(primitive_bytes_count(DataType::Bool, 0).unwrap(), 0);
        assert_eq!(primitive_bytes_count(DataType::Bool, 1).unwrap(), 1);
        assert_eq!(primitive_bytes_count(DataType::Bool, 8).unwrap(), 1);
        assert_eq!(primitive_bytes_count(DataType::Bool, 9).unwrap(), 2);
        assert_eq!(primitive_bytes_count(DataType::Bool, 16).unwrap(), 2);
        assert_eq!(primitive_bytes_count(DataType::Bool, 17).unwrap(), 3);
    }

    #[test]
    fn test_bytes_count_rejects_width_less_types() {
        assert!(primitive_bytes_count(DataType::FixedSizeBinary, 4).is_err());
        assert!(primitive_bytes_count(DataType::String, 4).is_err());
        assert!(primitive_bytes_count(DataType::Struct, 4).is_err());
    }

    #[test]
    fn test_dictionary_key_types() {
        let keys = [
            DataType::Int8,
            DataType::Int16,
            DataType::Int32,
            DataType::Int64,
            DataType::UInt8,
            DataType::UInt16,
            DataType::UInt32,
            DataType::UInt64,
        ];
        for dt in keys {
            assert!(dt.is_dictionary_key_type(), "{dt:?}");
        }
        assert!(!DataType::Bool.is_dictionary_key_type());
        assert!(!DataType::Float.is_dictionary_key_type());
        assert!(!DataType::String.is_dictionary_key_type());
    }
}
