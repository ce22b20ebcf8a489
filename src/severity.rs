//! Worst-case severity evaluation for a record tree
//!
//! # Implementation Model
//!
//! Each thresholded leaf is classified twice, independently:
//!
//! 1. **warn/crit**: value ≥ crit is CRITICAL, else value ≥ warn is WARNING,
//!    else OK. With both tags absent the check has no opinion and yields OK.
//! 2. **min/max**: a value outside the inclusive `[min, max]` range is
//!    CRITICAL; there is no warning tier. Both tags absent yields OK.
//!
//! The leaf's severity is the worse of the two, and the record's severity is
//! the fold-maximum over every leaf at every nesting depth. Untagged leaves
//! always contribute OK, so they can never raise the aggregate.
//!
//! Errors are fatal to the whole call: a threshold tag that does not parse as
//! a number, or a thresholded leaf whose value is not numeric, aborts the
//! traversal on first occurrence and no partial severity is returned.
//! Degenerate configurations (warn ≥ crit) are accepted as declared; the
//! policy is purely the numeric comparison above.

use crate::Result;
use crate::record::{Record, Scalar, Tags, walk};
use ohno::{IntoAppError, app_err};
use strum::{Display, EnumIter};

/// Aggregate classification of a record tree, ordered by how bad things are.
///
/// The discriminants are the conventional monitoring-plugin exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Severity {
    Ok = 0,
    Warning = 1,
    Critical = 2,
    Unknown = 3,
}

impl Severity {
    /// The process exit code a check plugin reports for this severity.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Compute the worst-case severity across every leaf of a record tree.
///
/// A record with zero eligible leaves yields [`Severity::Ok`].
///
/// # Errors
/// Returns an error when a `warn`/`crit`/`min`/`max` tag fails numeric
/// parsing, or when a leaf carrying any threshold tag has a non-numeric
/// value. The first error aborts the whole evaluation.
pub fn exit_code(record: &dyn Record) -> Result<Severity> {
    let mut worst = Severity::Ok;
    walk::<ohno::AppError>(record, "", &mut |path, value, tags| {
        worst = worst.max(classify(path, value, tags)?);
        Ok(())
    })?;

    Ok(worst)
}

/// Classify a single leaf as the max of its two independent sub-checks.
fn classify(path: &str, value: &Scalar, tags: &Tags) -> Result<Severity> {
    if !tags.has_thresholds() {
        return Ok(Severity::Ok);
    }

    let value = value
        .as_f64()
        .ok_or_else(|| app_err!("field '{path}' has thresholds but its value is not numeric"))?;

    Ok(warn_crit_check(path, value, tags)?.max(min_max_check(path, value, tags)?))
}

fn warn_crit_check(path: &str, value: f64, tags: &Tags) -> Result<Severity> {
    if tags.warn_value().is_none() && tags.crit_value().is_none() {
        return Ok(Severity::Ok);
    }

    // An absent tag can never trigger while its partner is present.
    let warn = threshold(path, "warn", tags.warn_value())?.unwrap_or(f64::INFINITY);
    let crit = threshold(path, "crit", tags.crit_value())?.unwrap_or(f64::INFINITY);

    if value >= crit {
        Ok(Severity::Critical)
    } else if value >= warn {
        Ok(Severity::Warning)
    } else {
        Ok(Severity::Ok)
    }
}

fn min_max_check(path: &str, value: f64, tags: &Tags) -> Result<Severity> {
    if tags.min_value().is_none() && tags.max_value().is_none() {
        return Ok(Severity::Ok);
    }

    let min = threshold(path, "min", tags.min_value())?.unwrap_or(f64::NEG_INFINITY);
    let max = threshold(path, "max", tags.max_value())?.unwrap_or(f64::INFINITY);

    if value >= min && value <= max {
        Ok(Severity::Ok)
    } else {
        Ok(Severity::Critical)
    }
}

fn threshold(path: &str, tag: &str, raw: Option<&str>) -> Result<Option<f64>> {
    match raw {
        None => Ok(None),
        Some(raw) => raw
            .parse::<f64>()
            .map(Some)
            .into_app_err_with(|| format!("field '{path}': unable to parse {tag} threshold '{raw}'")),
    }
}
