//! Field descriptors and the record traversal they drive
//!
//! Rust has no runtime reflection, so a type opts into traversal by
//! implementing the [`Record`] capability: a single method returning its
//! [`Field`] descriptors in declaration order. Each descriptor carries the
//! field's name, its visibility, its declared [`Tags`] metadata, and a
//! [`FieldValue`] that distinguishes terminal scalars from nested records and
//! from absent optional references.
//!
//! # Implementation Model
//!
//! The walker in this module is the one traversal both public operations
//! share, which guarantees they agree on which fields exist and in what
//! order. It is deliberately not cycle-safe: termination relies on the caller
//! not constructing reference cycles among live records.

mod field;
mod scalar;
mod tags;
mod walk;

pub use field::{Field, FieldValue, Visibility};
pub use scalar::Scalar;
pub use tags::Tags;

pub(crate) use walk::walk;

/// The capability a type implements to participate in traversal.
///
/// Implementations return one [`Field`] per struct field, in declaration
/// order. Private fields may simply be omitted, or listed with
/// [`Visibility::Private`] to document their existence; either way they are
/// never inspected.
pub trait Record {
    /// Field descriptors in declaration order.
    fn fields(&self) -> Vec<Field<'_>>;
}
