//! Value trait implementations: type tags, predicates, extractors, From traits

use super::*;
use crate::types::ValueType;

impl Value {
    /// The static type tag of this value
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Bool(_) => ValueType::Bool,
            Value::F64(_) => ValueType::F64,
            Value::F32(_) => ValueType::F32,
            Value::I64(_) => ValueType::I64,
            Value::I32(_) => ValueType::I32,
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Type Predicates
    // ═══════════════════════════════════════════════════════════════════
    /// Check if value is boolean
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Check if value is any integer type
    pub fn is_integer(&self) -> bool {
        matches!(self, Value::I64(_) | Value::I32(_))
    }

    /// Check if value is any float type
    pub fn is_float(&self) -> bool {
        matches!(self, Value::F64(_) | Value::F32(_))
    }

    /// Check if value is numeric (integer or float)
    pub fn is_numeric(&self) -> bool {
        self.is_integer() || self.is_float()
    }

    // ═══════════════════════════════════════════════════════════════════
    // Extractors (return Option for safe access)
    // ═══════════════════════════════════════════════════════════════════
    /// Extract boolean value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extract as f64 (widens from any numeric type)
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::F64(n) => Some(*n),
            Value::F32(n) => Some(*n as f64),
            Value::I64(n) => Some(*n as f64),
            Value::I32(n) => Some(*n as f64),
            Value::Bool(_) => None,
        }
    }

    /// Extract as i64 (widens from i32)
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::I64(n) => Some(*n),
            Value::I32(n) => Some(*n as i64),
            _ => None,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// From Implementations
// ═══════════════════════════════════════════════════════════════════

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::F64(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::F32(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::I64(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::I32(n)
    }
}
