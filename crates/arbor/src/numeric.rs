//! Numeric conversions between the boxed numeric representations

use crate::error::{type_name, EvalError, Result};
use crate::types::ValueType;
use crate::value::Value;

/// Convert any numeric value to its canonical `f64` form.
///
/// Fails with [`EvalError::NotNumeric`] for booleans.
pub fn as_f64(value: &Value) -> Result<f64> {
    value.as_f64().ok_or_else(|| EvalError::NotNumeric {
        got: type_name(value).to_string(),
    })
}

/// Convert a numeric value to `f32`, narrowing from `f64` and the integers.
pub fn as_f32(value: &Value) -> Result<f32> {
    match value {
        Value::F32(n) => Ok(*n),
        Value::F64(n) => Ok(*n as f32),
        Value::I64(n) => Ok(*n as f32),
        Value::I32(n) => Ok(*n as f32),
        other => Err(EvalError::NotNumeric {
            got: type_name(other).to_string(),
        }),
    }
}

/// Convert an integer value to `i64`.
///
/// Floats are rejected rather than truncated.
pub fn as_i64(value: &Value) -> Result<i64> {
    value.as_i64().ok_or_else(|| EvalError::NotNumeric {
        got: type_name(value).to_string(),
    })
}

/// Convert a numeric value to the representation named by `target`.
///
/// Only widening conversions are meaningful here; callers pick `target` with
/// [`widest_numeric`](crate::types::widest_numeric). `I32` is only accepted
/// from `I32` itself.
pub fn convert(value: &Value, target: ValueType) -> Result<Value> {
    match target {
        ValueType::F64 => as_f64(value).map(Value::F64),
        ValueType::F32 => as_f32(value).map(Value::F32),
        ValueType::I64 => as_i64(value).map(Value::I64),
        ValueType::I32 => match value {
            Value::I32(n) => Ok(Value::I32(*n)),
            other => Err(EvalError::NotNumeric {
                got: type_name(other).to_string(),
            }),
        },
        ValueType::Bool => Err(EvalError::NotNumeric {
            got: ValueType::Bool.name().to_string(),
        }),
    }
}
