//! Display and Debug implementations for Value

use std::fmt;

use super::*;

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::F64(n) => write!(f, "{:?}", n), // Default float type
            Value::F32(n) => write!(f, "{:?}f32", n),
            Value::I64(n) => write!(f, "{}i64", n),
            Value::I32(n) => write!(f, "{}", n), // Default integer type
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // No suffixes for Display
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::F64(n) => write!(f, "{}", n),
            Value::F32(n) => write!(f, "{}", n),
            Value::I64(n) => write!(f, "{}", n),
            Value::I32(n) => write!(f, "{}", n),
        }
    }
}
