//! Binary arithmetic for the four keypad operators

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult};

/// Operator awaiting its second operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operator {
    /// All operators in keypad column order (top to bottom)
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Parses an operator symbol
    #[must_use]
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Name used in keypad element ids
    #[must_use]
    pub const fn id_name(&self) -> &'static str {
        match self {
            Self::Add => "plus",
            Self::Subtract => "minus",
            Self::Multiply => "times",
            Self::Divide => "divide",
        }
    }

    /// Applies the operator to two operands
    ///
    /// Fails on division by an exact zero and on results that are not finite.
    pub fn apply(&self, a: f64, b: f64) -> CalcResult<f64> {
        let value = match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                a / b
            }
        };
        if value.is_finite() {
            Ok(value)
        } else {
            Err(CalcError::Overflow)
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_operator_symbols() {
        assert_eq!(Operator::Add.symbol(), '+');
        assert_eq!(Operator::Subtract.symbol(), '-');
        assert_eq!(Operator::Multiply.symbol(), '*');
        assert_eq!(Operator::Divide.symbol(), '/');
    }

    #[test]
    fn test_operator_from_symbol() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(Operator::from_symbol('%'), None);
        assert_eq!(Operator::from_symbol('^'), None);
    }

    #[test]
    fn test_operator_display() {
        assert_eq!(Operator::Multiply.to_string(), "*");
    }

    #[test]
    fn test_operator_id_names_unique() {
        let mut names: Vec<_> = Operator::ALL.iter().map(Operator::id_name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 4);
    }

    #[test]
    fn test_apply_basic() {
        assert_eq!(Operator::Add.apply(2.0, 3.0), Ok(5.0));
        assert_eq!(Operator::Subtract.apply(2.0, 3.0), Ok(-1.0));
        assert_eq!(Operator::Multiply.apply(4.0, 2.5), Ok(10.0));
        assert_eq!(Operator::Divide.apply(9.0, 4.0), Ok(2.25));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(
            Operator::Divide.apply(5.0, 0.0),
            Err(CalcError::DivisionByZero)
        );
        assert_eq!(
            Operator::Divide.apply(0.0, -0.0),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_overflow_fails() {
        assert_eq!(
            Operator::Multiply.apply(f64::MAX, 2.0),
            Err(CalcError::Overflow)
        );
        assert_eq!(
            Operator::Add.apply(f64::MAX, f64::MAX),
            Err(CalcError::Overflow)
        );
        assert_eq!(
            Operator::Subtract.apply(-f64::MAX, f64::MAX),
            Err(CalcError::Overflow)
        );
        assert_eq!(
            Operator::Divide.apply(f64::MAX, 0.5),
            Err(CalcError::Overflow)
        );
    }

    #[test]
    fn test_zero_divided_is_zero() {
        assert_eq!(Operator::Divide.apply(0.0, 7.0), Ok(0.0));
    }

    proptest! {
        #[test]
        fn prop_add_commutative(a in -1e9f64..1e9, b in -1e9f64..1e9) {
            prop_assert_eq!(Operator::Add.apply(a, b), Operator::Add.apply(b, a));
        }

        #[test]
        fn prop_divide_nonzero_never_fails(a in -1e9f64..1e9, b in 1e-3f64..1e9) {
            prop_assert!(Operator::Divide.apply(a, b).is_ok());
            prop_assert!(Operator::Divide.apply(a, -b).is_ok());
        }
    }
}
