//! Rendering records as performance-data lines
//!
//! The output grammar is the one Icinga-family servers parse:
//!
//! ```text
//! line      := fragment (" " fragment)*
//! fragment  := "'" name "'" "=" value [uom] [thresholds]
//! thresholds:= ";" warn ";" crit ";" min ";" max
//! ```
//!
//! The thresholds suffix appears only when at least one of the four threshold
//! tags is declared; absent tags within it render as empty strings. Rendering
//! never parses threshold values, so a tag the severity evaluator would
//! reject still passes through here verbatim.

use crate::record::{Record, Scalar, Tags, walk};
use core::convert::Infallible;
use core::fmt::Write as _;

/// Render a record as a performance-data line.
///
/// Leaf fragments are joined by single spaces in traversal order; a record
/// with no eligible leaves yields the empty string. Rendering has no error
/// path.
#[must_use]
pub fn marshal(record: &dyn Record) -> String {
    let mut fragments = Vec::new();
    match walk(record, "", &mut |path, value, tags| {
        fragments.push(fragment(path, value, tags));
        Ok::<(), Infallible>(())
    }) {
        Ok(()) => fragments.join(" "),
        Err(never) => match never {},
    }
}

/// Render one `'name'=value[uom][;warn;crit;min;max]` fragment.
fn fragment(path: &str, value: &Scalar, tags: &Tags) -> String {
    let name = match tags.icinga_value() {
        Some(name) if !name.is_empty() => name,
        _ => path,
    };

    let mut out = String::new();
    let _ = write!(out, "'{name}'={value}");

    if let Some(uom) = tags.uom_value() {
        out.push_str(uom);
    }

    if tags.has_thresholds() {
        let _ = write!(
            out,
            ";{};{};{};{}",
            tags.warn_value().unwrap_or_default(),
            tags.crit_value().unwrap_or_default(),
            tags.min_value().unwrap_or_default(),
            tags.max_value().unwrap_or_default()
        );
    }

    out
}
