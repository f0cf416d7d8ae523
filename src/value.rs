use log::debug;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Numeric scalar produced by literals and arithmetic.
///
/// Integer arithmetic stays in `Int` until it overflows `i64`, at which point
/// the result is recomputed in `f64`. Division always produces `Float`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(value) => value as f64,
            Number::Float(value) => value,
        }
    }

    pub fn is_int(self) -> bool {
        matches!(self, Number::Int(_))
    }

    pub fn is_float(self) -> bool {
        matches!(self, Number::Float(_))
    }

    fn integer_op(
        left: Number,
        right: Number,
        checked: fn(i64, i64) -> Option<i64>,
        float: fn(f64, f64) -> f64,
        symbol: &str,
    ) -> Number {
        match (left, right) {
            (Number::Int(a), Number::Int(b)) => match checked(a, b) {
                Some(result) => Number::Int(result),
                None => {
                    debug!("integer overflow in {a} {symbol} {b}, promoting to float");
                    Number::Float(float(a as f64, b as f64))
                }
            },
            _ => Number::Float(float(left.as_f64(), right.as_f64())),
        }
    }
}

impl Add for Number {
    type Output = Number;

    fn add(self, rhs: Number) -> Number {
        Number::integer_op(self, rhs, i64::checked_add, |a, b| a + b, "+")
    }
}

impl Sub for Number {
    type Output = Number;

    fn sub(self, rhs: Number) -> Number {
        Number::integer_op(self, rhs, i64::checked_sub, |a, b| a - b, "-")
    }
}

impl Mul for Number {
    type Output = Number;

    fn mul(self, rhs: Number) -> Number {
        Number::integer_op(self, rhs, i64::checked_mul, |a, b| a * b, "*")
    }
}

/// IEEE-754 division: a zero divisor yields an infinity or NaN.
impl Div for Number {
    type Output = Number;

    fn div(self, rhs: Number) -> Number {
        Number::Float(self.as_f64() / rhs.as_f64())
    }
}

impl Neg for Number {
    type Output = Number;

    fn neg(self) -> Number {
        match self {
            Number::Int(value) => match value.checked_neg() {
                Some(negated) => Number::Int(negated),
                None => {
                    debug!("integer overflow negating {value}, promoting to float");
                    Number::Float(-(value as f64))
                }
            },
            Number::Float(value) => Number::Float(-value),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(value) => write!(f, "{value}"),
            Number::Float(value) => {
                let text = value.to_string();
                if value.is_finite() && !text.contains('.') {
                    write!(f, "{text}.0")
                } else {
                    f.write_str(&text)
                }
            }
        }
    }
}
