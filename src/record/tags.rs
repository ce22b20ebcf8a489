use compact_str::{CompactString, ToCompactString};

/// Declared per-field metadata.
///
/// The recognized keys are `icinga` (display-name override), `uom` (unit of
/// measure), and the four threshold strings `warn`, `crit`, `min`, and `max`.
/// All are independently optional and immutable once attached to a
/// [`Field`](super::Field). Threshold values are kept as the raw strings they
/// were declared with; rendering passes them through verbatim and only the
/// severity evaluator ever parses them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tags {
    icinga: Option<CompactString>,
    uom: Option<CompactString>,
    warn: Option<CompactString>,
    crit: Option<CompactString>,
    min: Option<CompactString>,
    max: Option<CompactString>,
}

impl Tags {
    /// Create an empty tag set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tag set from an unordered sequence of key/value pairs.
    ///
    /// Unrecognized keys are ignored; a repeated key keeps its last value.
    #[must_use]
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut tags = Self::new();
        for (key, value) in pairs {
            match key {
                "icinga" => tags.icinga = Some(value.to_compact_string()),
                "uom" => tags.uom = Some(value.to_compact_string()),
                "warn" => tags.warn = Some(value.to_compact_string()),
                "crit" => tags.crit = Some(value.to_compact_string()),
                "min" => tags.min = Some(value.to_compact_string()),
                "max" => tags.max = Some(value.to_compact_string()),
                _ => {}
            }
        }

        tags
    }

    /// Override the rendered metric name for this field.
    #[must_use]
    pub fn icinga(mut self, name: impl Into<CompactString>) -> Self {
        self.icinga = Some(name.into());
        self
    }

    /// Unit-of-measure suffix appended verbatim after the rendered value.
    #[must_use]
    pub fn uom(mut self, uom: impl Into<CompactString>) -> Self {
        self.uom = Some(uom.into());
        self
    }

    /// Warning threshold: values at or above it classify as WARNING.
    #[must_use]
    pub fn warn(mut self, warn: impl Into<CompactString>) -> Self {
        self.warn = Some(warn.into());
        self
    }

    /// Critical threshold: values at or above it classify as CRITICAL.
    #[must_use]
    pub fn crit(mut self, crit: impl Into<CompactString>) -> Self {
        self.crit = Some(crit.into());
        self
    }

    /// Lower bound of the valid range; values below it classify as CRITICAL.
    #[must_use]
    pub fn min(mut self, min: impl Into<CompactString>) -> Self {
        self.min = Some(min.into());
        self
    }

    /// Upper bound of the valid range; values above it classify as CRITICAL.
    #[must_use]
    pub fn max(mut self, max: impl Into<CompactString>) -> Self {
        self.max = Some(max.into());
        self
    }

    #[must_use]
    pub fn icinga_value(&self) -> Option<&str> {
        self.icinga.as_deref()
    }

    #[must_use]
    pub fn uom_value(&self) -> Option<&str> {
        self.uom.as_deref()
    }

    #[must_use]
    pub fn warn_value(&self) -> Option<&str> {
        self.warn.as_deref()
    }

    #[must_use]
    pub fn crit_value(&self) -> Option<&str> {
        self.crit.as_deref()
    }

    #[must_use]
    pub fn min_value(&self) -> Option<&str> {
        self.min.as_deref()
    }

    #[must_use]
    pub fn max_value(&self) -> Option<&str> {
        self.max.as_deref()
    }

    /// Whether any of the four threshold tags is present.
    #[must_use]
    pub const fn has_thresholds(&self) -> bool {
        self.warn.is_some() || self.crit.is_some() || self.min.is_some() || self.max.is_some()
    }
}
