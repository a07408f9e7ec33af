//! Trigonometric function nodes
//!
//! Each takes one child of any numeric type, widens it to `f64`, applies the
//! function in radians and returns an `F64`.

use super::{eval_real, real_return_type};
use crate::error::Result;
use crate::node::Node;
use crate::types::ValueType;
use crate::value::Value;
use crate::EvalContext;

/// Declare a unary real-valued trig node backed by `$func`.
macro_rules! trig_node {
    ($(#[$meta:meta])* $name:ident, $ident:literal, $func:expr) => {
        function_node! {
            $(#[$meta])*
            $name, $ident, 1, (operand)
        }

        impl Node for $name {
            node_slots!();

            fn eval(&self, ctx: &EvalContext) -> Result<Value> {
                eval_real(self, ctx, $func)
            }

            fn return_type(&self, input_types: &[ValueType]) -> Option<ValueType> {
                real_return_type(input_types)
            }
        }
    };
}

trig_node! {
    /// Sine.
    Sin, "SIN", f64::sin
}

trig_node! {
    /// Cosine.
    Cos, "COS", f64::cos
}

trig_node! {
    /// Tangent.
    ///
    /// The child is evaluated once, converted to `f64` whatever its numeric
    /// representation, and its tangent returned as `F64`.
    Tan, "TAN", f64::tan
}

trig_node! {
    /// Inverse sine. Inputs outside `[-1, 1]` give NaN.
    ArcSin, "ARCSIN", f64::asin
}

trig_node! {
    /// Inverse cosine. Inputs outside `[-1, 1]` give NaN.
    ArcCos, "ARCCOS", f64::acos
}

trig_node! {
    /// Inverse tangent.
    ArcTan, "ARCTAN", f64::atan
}

trig_node! {
    /// Secant, `1 / cos(x)`.
    Sec, "SEC", |x: f64| 1.0 / x.cos()
}

trig_node! {
    /// Cosecant, `1 / sin(x)`.
    Cosec, "COSEC", |x: f64| 1.0 / x.sin()
}

trig_node! {
    /// Cotangent, `1 / tan(x)`.
    Cot, "COT", |x: f64| 1.0 / x.tan()
}
