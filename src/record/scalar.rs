use compact_str::{CompactString, ToCompactString};
use core::fmt::{Display, Formatter, Result as FmtResult};

/// A terminal leaf value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Int(i64),
    UInt(u64),
    Float(f64),
    Boolean(bool),
    Text(CompactString),
}

impl Scalar {
    /// Coerce to a 64-bit float for threshold evaluation.
    ///
    /// Integer and float variants always coerce; text coerces when it parses
    /// as a number; booleans never do.
    #[must_use]
    #[expect(clippy::cast_precision_loss, reason = "Thresholds are compared approximately; f64 is the evaluation domain")]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::UInt(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            Self::Boolean(_) => None,
            Self::Text(v) => v.parse::<f64>().ok(),
        }
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::UInt(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Boolean(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "{v}"),
        }
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Self::UInt(value.into())
    }
}

impl From<u64> for Scalar {
    fn from(value: u64) -> Self {
        Self::UInt(value)
    }
}

impl From<f32> for Scalar {
    fn from(value: f32) -> Self {
        Self::Float(value.into())
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_compact_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Text(CompactString::from(value))
    }
}

impl From<CompactString> for Scalar {
    fn from(value: CompactString) -> Self {
        Self::Text(value)
    }
}
