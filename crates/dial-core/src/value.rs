//! The tweak value model.
//!
//! [`TweakValue`] is the closed set of kinds a tweak can hold and a
//! persistent store must be able to round-trip. Executable actions are
//! deliberately not a value kind; see [`crate::tweak::ActionTweak`].
//!
//! Equality is exact for every kind. Floating-point values compare by bit
//! pattern, so equality is total (a stored NaN compares equal to itself)
//! and no tolerance is ever applied.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An RGBA color with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    /// Create a color from red, green, blue and alpha channels.
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Create a fully opaque color.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, u8::MAX)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02X}{:02X}{:02X}{:02X}",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

/// A value held by a tweak.
///
/// The variant set is closed: every kind here must survive a round trip
/// through a [`PersistentStore`](crate::store::PersistentStore) without loss.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TweakValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Color(Color),
    Date(DateTime<Utc>),
    Bytes(Vec<u8>),
}

impl TweakValue {
    /// The kind of this value as a short lowercase name.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Color(_) => "color",
            Self::Date(_) => "date",
            Self::Bytes(_) => "bytes",
        }
    }

    /// Whether this value is a numeric kind (`Int` or `Float`).
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Float(_))
    }

    /// The numeric value widened to `f64`, if this is a numeric kind.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(n) => Some(*n as f64),
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Compare two values, where an ordering exists.
    ///
    /// Numeric kinds order among themselves (a mixed `Int`/`Float` pair is
    /// compared after widening to `f64`) and dates order among dates. Every
    /// other pairing has no ordering and returns `None`.
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => Some(a.cmp(b)),
            (Self::Date(a), Self::Date(b)) => Some(a.cmp(b)),
            _ if self.is_numeric() && other.is_numeric() => {
                // Both sides are numeric and at least one is a float.
                self.as_f64()?.partial_cmp(&other.as_f64()?)
            }
            _ => None,
        }
    }
}

impl PartialEq for TweakValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            // Bit-pattern comparison keeps equality exact and total.
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Color(a), Self::Color(b)) => a == b,
            (Self::Date(a), Self::Date(b)) => a == b,
            (Self::Bytes(a), Self::Bytes(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for TweakValue {}

impl fmt::Display for TweakValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::String(v) => write!(f, "{v}"),
            Self::Color(v) => write!(f, "{v}"),
            Self::Date(v) => write!(f, "{}", v.to_rfc3339()),
            Self::Bytes(v) => write!(f, "<{} bytes>", v.len()),
        }
    }
}

impl From<bool> for TweakValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for TweakValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for TweakValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<f64> for TweakValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for TweakValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for TweakValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Color> for TweakValue {
    fn from(value: Color) -> Self {
        Self::Color(value)
    }
}

impl From<DateTime<Utc>> for TweakValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Date(value)
    }
}

impl From<Vec<u8>> for TweakValue {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

/// A pair of numeric bounds describing an allowed domain for a tweak.
///
/// Both bounds are plain read/write fields with no validation: the type does
/// not require `minimum <= maximum`, and it never normalizes an inverted
/// range. Consumers must evaluate the two bounds independently rather than
/// assume orientation; [`NumericRange::admits`] does exactly that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericRange {
    pub minimum: TweakValue,
    pub maximum: TweakValue,
}

impl NumericRange {
    /// Create a range from two bounds. No validation is performed.
    pub fn new(minimum: impl Into<TweakValue>, maximum: impl Into<TweakValue>) -> Self {
        Self {
            minimum: minimum.into(),
            maximum: maximum.into(),
        }
    }

    /// Whether `value` satisfies `minimum <= value && value <= maximum`.
    ///
    /// The bounds are checked independently, so an inverted range admits
    /// nothing. A value that has no ordering against a bound fails that
    /// bound.
    pub fn admits(&self, value: &TweakValue) -> bool {
        let above_min = self
            .minimum
            .compare(value)
            .is_some_and(|ord| ord != Ordering::Greater);
        let below_max = value
            .compare(&self.maximum)
            .is_some_and(|ord| ord != Ordering::Greater);
        above_min && below_max
    }
}
