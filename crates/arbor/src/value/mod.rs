//! Value representation for evaluation results

mod display;
mod impls;

/// Runtime value produced by evaluating a node.
///
/// Trees are heterogeneously typed, so every node returns this tagged union
/// and consumers match on the variant they expect. The numeric variants
/// mirror the numeric [`ValueType`](crate::ValueType) tags one-to-one.
#[derive(Clone, Copy, PartialEq)]
pub enum Value {
    /// Boolean: `true` or `false`
    Bool(bool),

    /// 64-bit floating point (canonical real type)
    F64(f64),

    /// 32-bit floating point
    F32(f32),

    /// 64-bit signed integer
    I64(i64),

    /// 32-bit signed integer
    I32(i32),
}
