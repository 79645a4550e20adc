use std::{
    fmt,
    ops::{Add, Div, Mul, Neg, Sub},
};

const PRECISION: i32 = 10;

/// A numeric value.
///
/// Stored as an `f64`, but compared and formatted at 10 digits of precision so
/// that exact-looking arithmetic (`1/4`, `0.1 + 0.2`) round-trips the way a
/// stylesheet author expects.
#[derive(Clone, Copy, Debug)]
#[repr(transparent)]
pub struct Number(pub f64);

impl Number {
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    fn fuzzy_equals(self, other: f64) -> bool {
        if self.0 == other {
            return true;
        }

        (self.0 - other).abs() <= f64::powi(10.0, -PRECISION - 1)
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.fuzzy_equals(other.0)
    }
}

impl Eq for Number {}

impl Add for Number {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Number(self.0 + other.0)
    }
}

impl Sub for Number {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Number(self.0 - other.0)
    }
}

impl Mul for Number {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Number(self.0 * other.0)
    }
}

impl Div for Number {
    type Output = Self;

    fn div(self, other: Self) -> Self {
        Number(self.0 / other.0)
    }
}

impl Neg for Number {
    type Output = Self;

    fn neg(self) -> Self {
        Number(-self.0)
    }
}

impl fmt::Display for Number {
    /// Writes the number rounded to [`PRECISION`] digits with trailing zeros
    /// (and a bare trailing `.`) stripped, so `4.0` prints as `4` and `0.2500`
    /// as `0.25`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.0.is_finite() {
            return write!(f, "{}", self.0);
        }

        let mut buffer = format!("{:.*}", PRECISION as usize, self.0);

        if buffer.contains('.') {
            buffer.truncate(buffer.trim_end_matches('0').trim_end_matches('.').len());
        }

        // never emit a negative zero
        if buffer == "-0" {
            buffer.replace_range(..1, "");
        }

        write!(f, "{}", buffer)
    }
}
