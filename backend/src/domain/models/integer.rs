use std::fmt;
use std::ops::Div;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArithmeticError {
    #[error("in {operation}: division by zero")]
    DivisionByZero { operation: &'static str },
}

/// A 32-bit integer whose division reports a zero divisor as an error
/// instead of panicking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Integer {
    value: i32,
}

impl Integer {
    pub fn new(value: i32) -> Self {
        Self { value }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    /// Truncating division.
    ///
    /// `i32::MIN / -1` wraps around to `i32::MIN` like 32-bit two's-complement
    /// hardware division does.
    pub fn div(self, divisor: Integer) -> Result<Integer, ArithmeticError> {
        if divisor.value == 0 {
            return Err(ArithmeticError::DivisionByZero {
                operation: "Integer.div",
            });
        }
        Ok(Integer::new(self.value.wrapping_div(divisor.value)))
    }
}

impl From<i32> for Integer {
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}

impl Div for Integer {
    type Output = Result<Integer, ArithmeticError>;

    fn div(self, divisor: Integer) -> Self::Output {
        Integer::div(self, divisor)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
