//! Per-type array shape: buffer role sequences and child counts.

use zerocol_common::{Result, error::Error};

use crate::buffer_type::BufferType;
use crate::data_type::DataType;

impl DataType {
    /// The ordered buffer roles an array of this type carries.
    ///
    /// The sequence is fixed per type and tells consumers how to interpret
    /// each buffer of an imported array, in order. Types whose arrays carry
    /// no buffers of their own (`Null`, `Map`, `RunEndEncoded`) map to the
    /// empty sequence.
    pub fn buffer_types(&self) -> &'static [BufferType] {
        use BufferType::*;

        match self {
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
            | DataType::FixedSizeBinary => &[Validity, Data],
            DataType::String | DataType::Binary => &[Validity, Offsets32, Data],
            DataType::List => &[Validity, Offsets32],
            DataType::LargeList => &[Validity, Offsets64],
            DataType::ListView => &[Validity, Offsets32, Sizes32],
            DataType::LargeListView => &[Validity, Offsets64, Sizes64],
            DataType::FixedSizeList | DataType::Struct => &[Validity],
            DataType::SparseUnion => &[TypeIds],
            DataType::DenseUnion => &[TypeIds, Offsets32],
            DataType::Null | DataType::Map | DataType::RunEndEncoded => &[],
        }
    }

    /// The number of buffers an array of this type carries.
    pub fn expected_buffer_count(&self) -> usize {
        self.buffer_types().len()
    }

    /// The number of child arrays an array of this type carries: 0 for
    /// scalar and flat kinds, 1 for single-child containers, 2 for dense
    /// unions (variant children plus the shared value child).
    pub fn expected_children_count(&self) -> usize {
        match self {
            DataType::Null
            | DataType::Bool
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
            | DataType::FixedSizeBinary
            | DataType::String
            | DataType::Binary
            | DataType::RunEndEncoded => 0,
            DataType::List
            | DataType::LargeList
            | DataType::ListView
            | DataType::LargeListView
            | DataType::FixedSizeList
            | DataType::Struct
            | DataType::Map
            | DataType::SparseUnion => 1,
            DataType::DenseUnion => 2,
        }
    }

    /// The position of `buffer_type` within this type's buffer sequence.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidArgument` error if the role is not part of the
    /// type's layout (e.g. a sizes buffer on a fixed-width type).
    pub fn buffer_type_index(&self, buffer_type: BufferType) -> Result<usize> {
        self.buffer_types()
            .iter()
            .position(|&bt| bt == buffer_type)
            .ok_or_else(|| {
                Error::invalid_arg(
                    "buffer_type",
                    format!("{buffer_type:?} buffer is not part of the {self:?} layout"),
                )
            })
    }

    /// Returns `true` if arrays of this type carry a validity bitmap.
    ///
    /// `Null` arrays, unions and run-end-encoded arrays have no nullability
    /// concept of their own and never report one.
    pub fn has_validity_bitmap(&self) -> bool {
        match self {
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
            | DataType::FixedSizeBinary
            | DataType::String
            | DataType::Binary
            | DataType::List
            | DataType::LargeList
            | DataType::ListView
            | DataType::LargeListView
            | DataType::FixedSizeList
            | DataType::Struct
            | DataType::Map => true,
            DataType::Null
            | DataType::SparseUnion
            | DataType::DenseUnion
            | DataType::RunEndEncoded => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::buffer_type::BufferType;
    use crate::data_type::{ALL_TYPES, DataType};

    #[test]
    fn test_buffer_counts_match_reference_table() {
        let expected: &[(DataType, usize)] = &[
            (DataType::Null, 0),
            (DataType::Bool, 2),
            (DataType::Int32, 2),
            (DataType::UInt64, 2),
            (DataType::Double, 2),
            (DataType::Timestamp, 2),
            (DataType::Decimal, 2),
            (DataType::FixedSizeBinary, 2),
            (DataType::String, 3),
            (DataType::Binary, 3),
            (DataType::List, 2),
            (DataType::LargeList, 2),
            (DataType::ListView, 3),
            (DataType::LargeListView, 3),
            (DataType::FixedSizeList, 1),
            (DataType::Struct, 1),
            (DataType::Map, 0),
            (DataType::SparseUnion, 1),
            (DataType::DenseUnion, 2),
            (DataType::RunEndEncoded, 0),
        ];
        for &(dt, count) in expected {
            assert_eq!(dt.expected_buffer_count(), count, "{dt:?}");
            // Repeated calls return the same fixed sequence.
            assert_eq!(dt.buffer_types(), dt.buffer_types());
        }
    }

    #[test]
    fn test_role_sequences() {
        use BufferType::*;

        assert_eq!(DataType::Int32.buffer_types(), &[Validity, Data]);
        assert_eq!(DataType::String.buffer_types(), &[Validity, Offsets32, Data]);
        assert_eq!(DataType::List.buffer_types(), &[Validity, Offsets32]);
        assert_eq!(DataType::LargeList.buffer_types(), &[Validity, Offsets64]);
        assert_eq!(
            DataType::ListView.buffer_types(),
            &[Validity, Offsets32, Sizes32]
        );
        assert_eq!(
            DataType::LargeListView.buffer_types(),
            &[Validity, Offsets64, Sizes64]
        );
        assert_eq!(DataType::SparseUnion.buffer_types(), &[TypeIds]);
        assert_eq!(DataType::DenseUnion.buffer_types(), &[TypeIds, Offsets32]);
        assert!(DataType::Null.buffer_types().is_empty());
        assert!(DataType::Map.buffer_types().is_empty());
        assert!(DataType::RunEndEncoded.buffer_types().is_empty());
    }

    #[test]
    fn test_children_counts() {
        assert_eq!(DataType::Int32.expected_children_count(), 0);
        assert_eq!(DataType::String.expected_children_count(), 0);
        assert_eq!(DataType::RunEndEncoded.expected_children_count(), 0);
        assert_eq!(DataType::List.expected_children_count(), 1);
        assert_eq!(DataType::Struct.expected_children_count(), 1);
        assert_eq!(DataType::Map.expected_children_count(), 1);
        assert_eq!(DataType::SparseUnion.expected_children_count(), 1);
        assert_eq!(DataType::DenseUnion.expected_children_count(), 2);
    }

    #[test]
    fn test_buffer_type_index() {
        assert_eq!(
            DataType::String.buffer_type_index(BufferType::Validity).unwrap(),
            0
        );
        assert_eq!(
            DataType::String.buffer_type_index(BufferType::Offsets32).unwrap(),
            1
        );
        assert_eq!(
            DataType::String.buffer_type_index(BufferType::Data).unwrap(),
            2
        );
        assert!(DataType::Int32.buffer_type_index(BufferType::Sizes32).is_err());
        assert!(DataType::Null.buffer_type_index(BufferType::Validity).is_err());
    }

    #[test]
    fn test_validity_bitmap_presence() {
        for dt in ALL_TYPES {
            let expected = !matches!(
                dt,
                DataType::Null
                    | DataType::SparseUnion
                    | DataType::DenseUnion
                    | DataType::RunEndEncoded
            );
            assert_eq!(dt.has_validity_bitmap(), expected, "{dt:?}");
        }
    }
}
