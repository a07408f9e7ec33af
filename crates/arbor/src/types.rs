//! Type tags and the predicates used by return-type inference

use std::fmt;

/// Static type of a value flowing between nodes.
///
/// Return-type inference works purely on these tags so it can run over trees
/// whose terminals have no values yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// Boolean
    Bool,
    /// 64-bit floating point (the canonical real type)
    F64,
    /// 32-bit floating point
    F32,
    /// 64-bit signed integer
    I64,
    /// 32-bit signed integer
    I32,
}

impl ValueType {
    /// Every type tag, in declaration order.
    pub const ALL: [ValueType; 5] = [
        ValueType::Bool,
        ValueType::F64,
        ValueType::F32,
        ValueType::I64,
        ValueType::I32,
    ];

    /// Rust-style name of the type.
    pub fn name(self) -> &'static str {
        match self {
            ValueType::Bool => "bool",
            ValueType::F64 => "f64",
            ValueType::F32 => "f32",
            ValueType::I64 => "i64",
            ValueType::I32 => "i32",
        }
    }

    /// Promotion rank among numeric types, higher is wider.
    fn numeric_rank(self) -> Option<u8> {
        match self {
            ValueType::Bool => None,
            ValueType::I32 => Some(0),
            ValueType::I64 => Some(1),
            ValueType::F32 => Some(2),
            ValueType::F64 => Some(3),
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Check that every tag in `types` equals `target`.
///
/// An empty slice is trivially all-equal; callers check arity separately.
pub fn all_equal(types: &[ValueType], target: ValueType) -> bool {
    types.iter().all(|t| *t == target)
}

/// Check whether a tag is one of the numeric representations.
pub fn is_numeric_type(ty: ValueType) -> bool {
    ty.numeric_rank().is_some()
}

/// Check that every tag in `types` is numeric.
pub fn all_numeric(types: &[ValueType]) -> bool {
    types.iter().all(|t| is_numeric_type(*t))
}

/// The widest numeric type among `types` (F64 > F32 > I64 > I32).
///
/// Returns `None` if the slice is empty or holds a non-numeric tag.
pub fn widest_numeric(types: &[ValueType]) -> Option<ValueType> {
    let mut widest: Option<ValueType> = None;
    for ty in types {
        let rank = ty.numeric_rank()?;
        match widest {
            Some(w) if w.numeric_rank() >= Some(rank) => {}
            _ => widest = Some(*ty),
        }
    }
    widest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_equal() {
        assert!(all_equal(&[ValueType::Bool, ValueType::Bool], ValueType::Bool));
        assert!(!all_equal(&[ValueType::Bool, ValueType::F64], ValueType::Bool));
        assert!(all_equal(&[], ValueType::Bool));
    }

    #[test]
    fn test_is_numeric_type() {
        assert!(is_numeric_type(ValueType::F64));
        assert!(is_numeric_type(ValueType::F32));
        assert!(is_numeric_type(ValueType::I64));
        assert!(is_numeric_type(ValueType::I32));
        assert!(!is_numeric_type(ValueType::Bool));
    }

    #[test]
    fn test_widest_numeric() {
        assert_eq!(
            widest_numeric(&[ValueType::I32, ValueType::I64]),
            Some(ValueType::I64)
        );
        assert_eq!(
            widest_numeric(&[ValueType::I64, ValueType::F32]),
            Some(ValueType::F32)
        );
        assert_eq!(
            widest_numeric(&[ValueType::F64, ValueType::I32]),
            Some(ValueType::F64)
        );
        assert_eq!(widest_numeric(&[ValueType::I32]), Some(ValueType::I32));
        assert_eq!(widest_numeric(&[ValueType::Bool, ValueType::F64]), None);
        assert_eq!(widest_numeric(&[]), None);
    }
}
