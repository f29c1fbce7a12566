//! Value enum for comparable field values

use std::cmp::Ordering;

use serde::Deserialize;
use serde::Serialize;

/// A scalar value held by a record field.
///
/// Only the shapes a table column can sort by are represented. Values are
/// compared with [`Value::compare`], which is what the sort rule uses.
///
/// # Example
///
/// ```
/// use tabula_lib::model::Value;
///
/// let name = Value::from("User 1");
/// let id = Value::from(1i64);
/// let active = Value::from(true);
/// let empty = Value::Null;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Null/empty value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// String value.
    String(String),
}

impl Value {
    /// Rank used when two values are of different kinds.
    ///
    /// `Int` and `Float` share a rank so they compare numerically. NaN gets
    /// its own rank after every number.
    fn kind_rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Float(v) if v.is_nan() => 3,
            Value::Int(_) | Value::Float(_) => 2,
            Value::String(_) => 4,
        }
    }

    /// Compares two values for sorting.
    ///
    /// This is a total order. Numbers compare by exact numeric value across
    /// `Int` and `Float` (`-0.0 == 0.0`), strings by UTF-16 code unit, and
    /// mismatched kinds by `Null < Bool < number < NaN < String`. NaNs are
    /// equal to each other.
    pub fn compare(&self, other: &Value) -> Ordering {
        let (left, right) = (self.kind_rank(), other.kind_rank());
        if left != right {
            return left.cmp(&right);
        }
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::Float(a), Value::Float(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (Value::Int(a), Value::Float(b)) => compare_int_float(*a, *b),
            (Value::Float(a), Value::Int(b)) => compare_int_float(*b, *a).reverse(),
            (Value::String(a), Value::String(b)) => a.encode_utf16().cmp(b.encode_utf16()),
            // Null/Null and NaN/NaN.
            _ => Ordering::Equal,
        }
    }
}

/// Compares an integer with a non-NaN float without rounding the integer.
fn compare_int_float(int: i64, float: f64) -> Ordering {
    // 2^63, exactly representable.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    if float >= LIMIT {
        return Ordering::Less;
    }
    if float < -LIMIT {
        return Ordering::Greater;
    }
    let floor = float.floor();
    // `floor` is integral and within i64 range, so the cast is exact.
    match int.cmp(&(floor as i64)) {
        Ordering::Equal if float > floor => Ordering::Less,
        ordering => ordering,
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::String(v) => f.write_str(v),
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}
