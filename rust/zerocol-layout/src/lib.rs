//! Buffer-layout arithmetic for zero-copy columnar interchange.
//!
//! For any supported logical column type this crate answers the questions an
//! array constructor, importer or validator must settle before touching
//! memory:
//!
//! - how many buffers and child arrays does an array of this type carry,
//! - what role does each buffer play (see [`BufferType`]),
//! - how many bytes must each buffer hold, given the array's logical length
//!   and leading element offset.
//!
//! Constructors size buffers by calling [`size::compute_buffer_size`] once
//! per role, in [`DataType::buffer_types`] order. The order matters: the
//! data buffer of a variable-length array is sized from the last element of
//! its already-materialized offsets buffer. Importers check foreign layouts
//! with the predicates in [`validate`].
//!
//! Every function here is pure and stateless; any number of calls may run
//! concurrently without synchronization.

pub mod buffer_type;
pub mod data_type;
pub mod shape;
pub mod size;
pub mod validate;

pub use buffer_type::BufferType;
pub use data_type::DataType;
