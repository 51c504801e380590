//! Byte-size arithmetic for the buffers of an array.

use zerocol_common::{Result, error::Error, verify_arg, verify_data};

use crate::buffer_type::BufferType;
use crate::data_type::{DataType, primitive_bytes_count};

/// Number of elements in the offsets (or sizes) buffer of an array with the
/// given logical `length` and leading element `offset`.
///
/// Container kinds with a trailing sentinel offset store one element more
/// than the array holds; view-style containers and dense unions store
/// exactly one element per array slot.
///
/// # Errors
///
/// Returns an `InvalidArgument` error for types whose arrays carry no
/// offsets or sizes buffer.
pub fn offset_element_count(data_type: DataType, length: usize, offset: usize) -> Result<usize> {
    match data_type {
        DataType::String | DataType::Binary | DataType::List | DataType::LargeList => {
            Ok(length + offset + 1)
        }
        DataType::ListView | DataType::LargeListView | DataType::DenseUnion => Ok(length + offset),
        _ => Err(Error::invalid_arg(
            "data_type",
            format!("{data_type:?} arrays carry no offsets or sizes buffer"),
        )),
    }
}

/// Computes the byte count the `buffer_type` buffer of an array must hold.
///
/// `length` and `offset` are the logical array parameters: the accessible
/// element range is `[offset, offset + length)`, and every buffer is sized
/// for `length + offset` elements so that slicing an array never forces a
/// reallocation.
///
/// Sizing the data buffer of a `String` or `Binary` array reads the last
/// element of the already-materialized offsets buffer: `previous_buffers`
/// holds the buffers computed so far for this array, in role order, and
/// `previous_buffer_type` names the role of the last one. Buffers must
/// therefore be sized strictly in [`DataType::buffer_types`] order, and the
/// offsets buffer must be fully populated before the data buffer is sized.
/// An empty offsets buffer is a valid empty array with zero payload, not an
/// error. For every other role the two trailing parameters are ignored.
///
/// # Errors
///
/// Returns an `InvalidArgument` error when the role does not apply to the
/// type, or when the previous buffer does not hold the offsets required for
/// variable-length data sizing; `Views` sizing is `NotImplemented`.
pub fn compute_buffer_size(
    buffer_type: BufferType,
    length: usize,
    offset: usize,
    data_type: DataType,
    previous_buffers: &[&[u8]],
    previous_buffer_type: BufferType,
) -> Result<usize> {
    match buffer_type {
        BufferType::Validity => Ok((length + offset).div_ceil(8)),
        BufferType::Data => match data_type {
            DataType::String | DataType::Binary => {
                variable_data_size(previous_buffers, previous_buffer_type)
            }
            _ => primitive_bytes_count(data_type, length + offset),
        },
        BufferType::Offsets32 | BufferType::Sizes32 => {
            Ok(offset_element_count(data_type, length, offset)? * size_of::<i32>())
        }
        BufferType::Offsets64 | BufferType::Sizes64 => {
            Ok(offset_element_count(data_type, length, offset)? * size_of::<i64>())
        }
        BufferType::Views => Err(Error::not_implemented("view buffer sizing")),
        BufferType::TypeIds => Ok(length + offset),
    }
}

/// Payload size of a variable-length array: the last element of its offsets
/// buffer, which by the format's invariant equals the total payload length.
fn variable_data_size(
    previous_buffers: &[&[u8]],
    previous_buffer_type: BufferType,
) -> Result<usize> {
    verify_arg!(
        previous_buffer_type,
        matches!(
            previous_buffer_type,
            BufferType::Offsets32 | BufferType::Offsets64
        )
    );
    let offsets = previous_buffers.last().copied().ok_or_else(|| {
        Error::invalid_arg("previous_buffers", "no offsets buffer to read the payload size from")
    })?;
    if offsets.is_empty() {
        // An empty offsets buffer is an empty array: no payload.
        return Ok(0);
    }
    let last = if previous_buffer_type == BufferType::Offsets32 {
        verify_arg!(previous_buffers, offsets.len() >= size_of::<i32>());
        let tail = &offsets[offsets.len() - size_of::<i32>()..];
        i64::from(bytemuck::pod_read_unaligned::<i32>(tail))
    } else {
        verify_arg!(previous_buffers, offsets.len() >= size_of::<i64>());
        let tail = &offsets[offsets.len() - size_of::<i64>()..];
        bytemuck::pod_read_unaligned::<i64>(tail)
    };
    verify_data!(offsets, last >= 0);
    Ok(last as usize)
}
