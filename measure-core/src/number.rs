//! Arbitrary precision numbers using dashu
//!
//! Conversion coefficients span from 1e-18 (square nanometres) to 1e24
//! (yottabits), so values are kept as `DBig` decimals and only turned into
//! text at the very end, with exact decimal rounding.

use dashu_float::DBig;
use dashu_int::IBig;
use thiserror::Error;

/// Error type for number operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberError {
    #[error("Invalid number format: {0}")]
    ParseError(String),

    #[error("Division by zero")]
    DivisionByZero,
}

/// Working precision for conversions (decimal digits)
const WORK_PRECISION: usize = 50;

/// Arbitrary precision decimal number
#[derive(Debug, Clone)]
pub struct Number {
    inner: DBig,
}

impl Number {
    // ========== Construction ==========

    fn with_work_precision(val: DBig) -> DBig {
        val.with_precision(WORK_PRECISION).value()
    }

    /// Create from string representation
    /// Supports: "123", "3.14", "5/9", "125e3", "1e-15"
    pub fn from_str(s: &str) -> Result<Self, NumberError> {
        let s = s.trim();

        // Rational "a/b", used for coefficients like 5/9 that have no finite decimal form
        if let Some((num_str, den_str)) = s.split_once('/') {
            let num: DBig = num_str.trim().parse()
                .map_err(|_| NumberError::ParseError(s.to_string()))?;
            let den: DBig = den_str.trim().parse()
                .map_err(|_| NumberError::ParseError(s.to_string()))?;

            if den == DBig::ZERO {
                return Err(NumberError::DivisionByZero);
            }

            let result = Self::with_work_precision(num) / Self::with_work_precision(den);
            return Ok(Self { inner: result });
        }

        // Scientific notation with integer mantissa: "125e3", "1e-15"
        if !s.contains('.') {
            if let Some((mantissa_str, exp_str)) = s.to_lowercase().split_once('e') {
                let mantissa: IBig = mantissa_str.parse()
                    .map_err(|_| NumberError::ParseError(s.to_string()))?;
                let exp: isize = exp_str.parse()
                    .map_err(|_| NumberError::ParseError(s.to_string()))?;

                let result = DBig::from_parts(mantissa, exp);
                return Ok(Self { inner: Self::with_work_precision(result) });
            }
        }

        let inner: DBig = s.parse()
            .map_err(|_| NumberError::ParseError(s.to_string()))?;

        Ok(Self { inner: Self::with_work_precision(inner) })
    }

    /// Create from i64 with working precision
    pub fn from_i64(n: i64) -> Self {
        Self { inner: Self::with_work_precision(DBig::from(n)) }
    }

    /// Create from ratio (exact division)
    pub fn from_ratio(num: i64, den: i64) -> Result<Self, NumberError> {
        Self::from_i64(num).checked_div(&Self::from_i64(den))
    }

    pub fn zero() -> Self {
        Self::from_i64(0)
    }

    // ========== Predicates ==========

    pub fn is_zero(&self) -> bool {
        self.inner == DBig::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.inner < DBig::ZERO
    }

    // ========== Arithmetic ==========

    pub fn add(&self, other: &Self) -> Self {
        Self { inner: &self.inner + &other.inner }
    }

    pub fn sub(&self, other: &Self) -> Self {
        Self { inner: &self.inner - &other.inner }
    }

    pub fn mul(&self, other: &Self) -> Self {
        Self { inner: &self.inner * &other.inner }
    }

    /// Safe division (returns Result, never panics)
    pub fn checked_div(&self, other: &Self) -> Result<Self, NumberError> {
        if other.is_zero() {
            Err(NumberError::DivisionByZero)
        } else {
            Ok(Self { inner: &self.inner / &other.inner })
        }
    }

    /// Non-negative integer power of ten
    pub fn pow10(exp: u32) -> Self {
        Self { inner: Self::with_work_precision(DBig::from_parts(IBig::from(1), exp as isize)) }
    }

    /// Round to the nearest integer, ties to even
    pub fn round(&self) -> Self {
        let half = DBig::from_parts(IBig::from(5), -1);
        let floor = self.inner.floor();
        let fraction = &self.inner - &floor;

        let round_up = if fraction == half {
            !Self::is_even(&floor)
        } else {
            fraction > half
        };

        let inner = if round_up { floor + DBig::ONE } else { floor };
        Self { inner }
    }

    fn is_even(integer: &DBig) -> bool {
        let half = DBig::from_parts(IBig::from(5), -1);
        let halved = integer * &half;
        halved.floor() == halved
    }

    // ========== Display ==========

    /// Render with at most `max_places` fractional digits.
    ///
    /// The value is rounded (ties to even), trailing fractional zeros
    /// are dropped along with a dangling decimal point, and negative zero
    /// renders as "0". No digit grouping.
    pub fn to_fixed(&self, max_places: u32) -> String {
        let scaled = self.mul(&Self::pow10(max_places)).round();
        let (significand, exponent) = scaled.inner.into_repr().into_parts();

        let text = significand.to_string();
        let (negative, mut digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest.to_string()),
            None => (false, text),
        };

        // Integral after rounding, so a negative exponent only strips zeros
        if exponent > 0 {
            digits.push_str(&"0".repeat(exponent as usize));
        } else if exponent < 0 {
            let keep = digits.len().saturating_sub(exponent.unsigned_abs());
            digits.truncate(keep.max(1));
        }

        let places = max_places as usize;
        if digits.len() <= places {
            digits = format!("{}{}", "0".repeat(places + 1 - digits.len()), digits);
        }
        let (int_part, frac_part) = digits.split_at(digits.len() - places);
        let frac_part = frac_part.trim_end_matches('0');

        let body = if frac_part.is_empty() {
            int_part.to_string()
        } else {
            format!("{}.{}", int_part, frac_part)
        };

        if negative && body.chars().any(|c| c != '0' && c != '.') {
            format!("-{}", body)
        } else {
            body
        }
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_fixed(10))
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for Number {}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.inner.partial_cmp(&other.inner).unwrap_or(std::cmp::Ordering::Equal)
    }
}
