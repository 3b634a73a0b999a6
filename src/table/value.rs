use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::TableError;

/// Ends every line of rendered table text.
///
/// Text parsed from input may not contain it. A [`Value::Text`] built
/// directly can, and then renders as two lines.
pub const ROW_TERMINATOR: char = '~';

/// Type tag of a column or a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Int,
    Long,
    Float,
    Text,
    Bool,
}

impl DataType {
    /// Whether values of this type can serve as a rank key
    pub fn is_numeric(self) -> bool {
        matches!(self, DataType::Int | DataType::Long | DataType::Float)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataType::Int => "int",
            DataType::Long => "long",
            DataType::Float => "float",
            DataType::Text => "text",
            DataType::Bool => "bool",
        };
        f.write_str(name)
    }
}

/// A single attribute of a score entry, tagged with its type.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Value {
    Int(i32),
    Long(i64),
    Float(f64),
    Text(String),
    Bool(bool),
}

impl Value {
    pub fn data_type(&self) -> DataType {
        match self {
            Value::Int(_) => DataType::Int,
            Value::Long(_) => DataType::Long,
            Value::Float(_) => DataType::Float,
            Value::Text(_) => DataType::Text,
            Value::Bool(_) => DataType::Bool,
        }
    }

    /// Convert to a 64-bit rank key.
    ///
    /// Integers widen, floats round half to even, text must hold a decimal
    /// integer, booleans map to 1/0. Returns None when no conversion exists.
    pub fn rank_key(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(i64::from(*n)),
            Value::Long(n) => Some(*n),
            Value::Float(f) => {
                let rounded = f.round_ties_even();
                // i64::MAX as f64 is 2^63, one past the largest i64
                if rounded.is_finite() && rounded >= i64::MIN as f64 && rounded < i64::MAX as f64 {
                    Some(rounded as i64)
                } else {
                    None
                }
            }
            Value::Text(s) => s.trim().parse().ok(),
            Value::Bool(b) => Some(i64::from(*b)),
        }
    }

    /// Parse text input as a value of the given type
    pub fn parse_as(data_type: DataType, input: &str) -> Result<Self, TableError> {
        let invalid = || TableError::InvalidValue {
            data_type,
            input: input.to_string(),
        };
        let trimmed = input.trim();
        match data_type {
            DataType::Int => trimmed.parse().map(Value::Int).map_err(|_| invalid()),
            DataType::Long => trimmed.parse().map(Value::Long).map_err(|_| invalid()),
            DataType::Float => trimmed.parse().map(Value::Float).map_err(|_| invalid()),
            DataType::Bool => trimmed.parse().map(Value::Bool).map_err(|_| invalid()),
            DataType::Text if input.contains(ROW_TERMINATOR) => Err(invalid()),
            // Text keeps its surrounding whitespace
            DataType::Text => Ok(Value::Text(input.to_string())),
        }
    }

    /// Number of characters in the rendered value
    pub fn rendered_len(&self) -> usize {
        match self {
            Value::Text(s) => s.chars().count(),
            other => other.to_string().chars().count(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Long(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::Text(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Long(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

/// Build a score entry from a list of values convertible into [`Value`].
///
/// ```
/// let entry = hiscore::score_entry![2000, "HB"];
/// assert_eq!(entry.len(), 2);
/// ```
#[macro_export]
macro_rules! score_entry {
    ($($value:expr),* $(,)?) => {
        vec![$($crate::table::Value::from($value)),*]
    };
}
