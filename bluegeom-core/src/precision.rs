/// Numeric rules for the three component precisions
use std::fmt;

use nom::IResult;

use crate::error::{GeomError, Result};

/// A component type usable in `Vector3`, `Point3` and friends.
///
/// Each implementation fixes how its precision validates, scales, rounds,
/// interpolates and hashes. `i32` arithmetic wraps on overflow; the float
/// types follow IEEE rules but never admit NaN into a value.
pub trait Precision: nalgebra::Scalar + Copy + PartialOrd + fmt::Display + Send + Sync {
    const ZERO: Self;
    const ONE: Self;
    const MINUS_ONE: Self;
    /// Type suffix used in names, e.g. `Vector3i`.
    const SUFFIX: &'static str;

    /// Returns the value, or `InvalidArgument` if it can never be stored.
    fn check(self, component: &str) -> Result<Self>;

    fn plus(self, rhs: Self) -> Self;

    fn minus(self, rhs: Self) -> Self;

    fn negate(self) -> Self;

    /// Component-by-component product.
    fn product(self, rhs: Self) -> Self;

    /// Multiplies by a scalar factor under this precision's rounding rule.
    fn scale(self, factor: f64) -> Self;

    /// `src + (dest - src) * offset`, for an offset strictly inside (0, 1).
    fn lerp(src: Self, dest: Self, offset: f32) -> Self;

    fn to_f64(self) -> f64;

    /// Converts from `f64`, truncating toward zero for integers.
    fn from_f64(value: f64) -> Self;

    /// Converts one component of a normalized vector.
    fn from_normalized(value: f64) -> Self;

    /// Bit pattern folded into hash codes. Equal components give equal bits.
    fn hash_bits(self) -> u64;

    /// nom parser for a single literal of this precision.
    fn literal(input: &str) -> IResult<&str, Self>;
}

/// Rounds half up, so -2.5 becomes -2 and 2.5 becomes 3.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

impl Precision for i32 {
    const ZERO: Self = 0;
    const ONE: Self = 1;
    const MINUS_ONE: Self = -1;
    const SUFFIX: &'static str = "i";

    fn check(self, _component: &str) -> Result<Self> {
        Ok(self)
    }

    fn plus(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }

    fn minus(self, rhs: Self) -> Self {
        self.wrapping_sub(rhs)
    }

    fn negate(self) -> Self {
        self.wrapping_neg()
    }

    fn product(self, rhs: Self) -> Self {
        self.wrapping_mul(rhs)
    }

    fn scale(self, factor: f64) -> Self {
        round_half_up(self as f64 * factor) as i32
    }

    fn lerp(src: Self, dest: Self, offset: f32) -> Self {
        let delta = (dest as f64 - src as f64) * offset as f64;
        // Lies between src and dest, so the cast never saturates.
        (src as f64 + delta.trunc()) as i32
    }

    fn to_f64(self) -> f64 {
        self as f64
    }

    fn from_f64(value: f64) -> Self {
        value as i32
    }

    fn from_normalized(value: f64) -> Self {
        round_half_up(value) as i32
    }

    fn hash_bits(self) -> u64 {
        self as u32 as u64
    }

    fn literal(input: &str) -> IResult<&str, Self> {
        nom::character::complete::i32(input)
    }
}

impl Precision for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const MINUS_ONE: Self = -1.0;
    const SUFFIX: &'static str = "f";

    fn check(self, component: &str) -> Result<Self> {
        if self.is_nan() {
            tracing::debug!(component, precision = "f32", "rejected NaN component");
            return Err(GeomError::nan(component));
        }
        Ok(self)
    }

    fn plus(self, rhs: Self) -> Self {
        self + rhs
    }

    fn minus(self, rhs: Self) -> Self {
        self - rhs
    }

    fn negate(self) -> Self {
        -self
    }

    fn product(self, rhs: Self) -> Self {
        self * rhs
    }

    fn scale(self, factor: f64) -> Self {
        (self as f64 * factor) as f32
    }

    fn lerp(src: Self, dest: Self, offset: f32) -> Self {
        src + (dest - src) * offset
    }

    fn to_f64(self) -> f64 {
        self as f64
    }

    fn from_f64(value: f64) -> Self {
        value as f32
    }

    fn from_normalized(value: f64) -> Self {
        value as f32
    }

    fn hash_bits(self) -> u64 {
        // -0.0 == 0.0, so both must hash alike
        if self == 0.0 {
            0
        } else {
            self.to_bits() as u64
        }
    }

    fn literal(input: &str) -> IResult<&str, Self> {
        nom::number::complete::float(input)
    }
}

impl Precision for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const MINUS_ONE: Self = -1.0;
    const SUFFIX: &'static str = "d";

    fn check(self, component: &str) -> Result<Self> {
        if self.is_nan() {
            tracing::debug!(component, precision = "f64", "rejected NaN component");
            return Err(GeomError::nan(component));
        }
        Ok(self)
    }

    fn plus(self, rhs: Self) -> Self {
        self + rhs
    }

    fn minus(self, rhs: Self) -> Self {
        self - rhs
    }

    fn negate(self) -> Self {
        -self
    }

    fn product(self, rhs: Self) -> Self {
        self * rhs
    }

    fn scale(self, factor: f64) -> Self {
        self * factor
    }

    fn lerp(src: Self, dest: Self, offset: f32) -> Self {
        src + (dest - src) * offset as f64
    }

    fn to_f64(self) -> f64 {
        self
    }

    fn from_f64(value: f64) -> Self {
        value
    }

    fn from_normalized(value: f64) -> Self {
        value
    }

    fn hash_bits(self) -> u64 {
        if self == 0.0 {
            0
        } else {
            self.to_bits()
        }
    }

    fn literal(input: &str) -> IResult<&str, Self> {
        nom::number::complete::double(input)
    }
}
