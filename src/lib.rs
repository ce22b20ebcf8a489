//! Render structured check results as Icinga performance data and compute
//! plugin exit codes.
//!
//! Monitoring servers in the Nagios/Icinga family consume two things from a
//! check plugin: a performance-data line (`'name'=value[uom][;warn;crit;min;max]`
//! fragments joined by spaces) and a process exit code (OK, WARNING, CRITICAL,
//! or UNKNOWN). This crate produces both from one description of a check
//! result: a type implements [`Record`] by listing its fields in declaration
//! order, attaching per-field [`Tags`] (display-name override, unit of
//! measure, and warning/critical/min/max thresholds), and both outputs fall
//! out of the same depth-first traversal.
//!
//! # Module Organization
//!
//! - [`record`]: the [`Record`] capability, field descriptors, and the
//!   traversal they drive
//! - [`perfdata`]: rendering a record as a performance-data line
//! - [`severity`]: folding per-leaf threshold checks into a worst-case
//!   [`Severity`]
//!
//! # Example
//!
//! ```
//! use icinga_perfdata::{Field, Record, Severity, Tags, exit_code, marshal};
//!
//! struct Check {
//!     status: String,
//!     memory: i64,
//! }
//!
//! impl Record for Check {
//!     fn fields(&self) -> Vec<Field<'_>> {
//!         vec![
//!             Field::leaf("Status", self.status.as_str()),
//!             Field::leaf("Memory", self.memory)
//!                 .with_tags(Tags::new().uom("MiB").warn("800").crit("1024").min("64").max("2048")),
//!         ]
//!     }
//! }
//!
//! let check = Check {
//!     status: "WARN".to_string(),
//!     memory: 1024,
//! };
//!
//! assert_eq!(marshal(&check), "'Status'=WARN 'Memory'=1024MiB;800;1024;64;2048");
//! assert_eq!(exit_code(&check).unwrap(), Severity::Critical);
//! ```

/// Result type alias using `ohno::AppError` as the default error type.
pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod perfdata;
pub mod record;
pub mod severity;

pub use perfdata::marshal;
pub use record::{Field, FieldValue, Record, Scalar, Tags, Visibility};
pub use severity::{Severity, exit_code};
