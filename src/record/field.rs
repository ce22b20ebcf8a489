use super::{Record, Scalar, Tags};
use core::fmt::{Debug, Formatter, Result as FmtResult};

/// Whether a field participates in traversal.
///
/// Private fields are skipped entirely and never inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    Private,
}

/// The kind of value a field holds.
///
/// Optional references are modelled explicitly: an implementor maps `None` to
/// [`Absent`](FieldValue::Absent) and `Some` to the referenced leaf or record,
/// so the walker pattern-matches instead of checking a null sentinel.
pub enum FieldValue<'a> {
    /// A terminal scalar.
    Leaf(Scalar),

    /// A nested record; its fields are visited with this field's name added
    /// to the path.
    Record(&'a dyn Record),

    /// A null optional reference; contributes nothing to either output.
    Absent,
}

impl Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Leaf(scalar) => f.debug_tuple("Leaf").field(scalar).finish(),
            Self::Record(_) => f.debug_tuple("Record").finish_non_exhaustive(),
            Self::Absent => f.write_str("Absent"),
        }
    }
}

/// One field descriptor: name, visibility, declared metadata, and value.
///
/// Constructed through [`Field::leaf`], [`Field::record`], and their optional
/// variants; tags and visibility are layered on with [`Field::with_tags`] and
/// [`Field::private`].
#[derive(Debug)]
pub struct Field<'a> {
    name: &'static str,
    visibility: Visibility,
    tags: Tags,
    value: FieldValue<'a>,
}

impl<'a> Field<'a> {
    /// A public leaf field with no tags.
    #[must_use]
    pub fn leaf(name: &'static str, value: impl Into<Scalar>) -> Self {
        Self::new(name, FieldValue::Leaf(value.into()))
    }

    /// A public nested-record field.
    #[must_use]
    pub fn record(name: &'static str, value: &'a dyn Record) -> Self {
        Self::new(name, FieldValue::Record(value))
    }

    /// An optional scalar reference: `None` is skipped by the walker.
    #[must_use]
    pub fn optional_leaf(name: &'static str, value: Option<impl Into<Scalar>>) -> Self {
        match value {
            Some(value) => Self::leaf(name, value),
            None => Self::new(name, FieldValue::Absent),
        }
    }

    /// An optional record reference: `None` is skipped by the walker.
    #[must_use]
    pub fn optional_record<R: Record>(name: &'static str, value: Option<&'a R>) -> Self {
        match value {
            Some(value) => Self::record(name, value),
            None => Self::new(name, FieldValue::Absent),
        }
    }

    fn new(name: &'static str, value: FieldValue<'a>) -> Self {
        Self {
            name,
            visibility: Visibility::Public,
            tags: Tags::new(),
            value,
        }
    }

    /// Attach declared metadata to this field.
    #[must_use]
    pub fn with_tags(mut self, tags: Tags) -> Self {
        self.tags = tags;
        self
    }

    /// Mark the field private so the walker skips it.
    #[must_use]
    pub const fn private(mut self) -> Self {
        self.visibility = Visibility::Private;
        self
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[must_use]
    pub const fn tags(&self) -> &Tags {
        &self.tags
    }

    #[must_use]
    pub const fn value(&self) -> &FieldValue<'a> {
        &self.value
    }
}
