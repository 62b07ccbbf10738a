/// The result of evaluating an expression.
///
/// Literals and `+`, `-`, `*` over integers stay integral. Division always
/// produces a real, and any operation with a real operand produces a real.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A integer value (64 bit integer).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    Real(f64),
}

impl Number {
    /// Returns the value as a real, converting integers.
    ///
    /// Integers beyond 2^53 lose precision, the same way a calculator's true
    /// division would.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::value::Number;
    ///
    /// assert_eq!(Number::Integer(7).as_real(), 7.0);
    /// assert_eq!(Number::Real(3.5).as_real(), 3.5);
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_real(self) -> f64 {
        match self {
            Self::Integer(n) => n as f64,
            Self::Real(r) => r,
        }
    }

    /// Returns `true` for integer `0` and for real `0.0` or `-0.0`.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Integer(n) => n == 0,
            Self::Real(r) => r == 0.0,
        }
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

/// Integers print plainly; reals always show a fractional part, so `8 / 2`
/// prints as `4.0`.
impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r:?}"),
        }
    }
}
