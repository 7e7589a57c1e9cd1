/// The dual-mode value contract
use crate::error::Result;
use crate::precision::Precision;
use crate::selector::Selector;

/// Freezing, thawing and location comparison.
///
/// Every value carries a mutability flag fixed at construction. In-place
/// operations succeed only on mutable values. The copy-producing operations
/// on [`Masked`] and [`Arithmetic`] never touch the receiver: each takes a
/// mutable copy via [`DualMode::to_mutable`], applies the in-place operation
/// to it and returns the copy, so they work on frozen values too.
pub trait DualMode: Sized {
    fn is_mutable(&self) -> bool;

    /// Always a new mutable value with the same components.
    fn to_mutable(&self) -> Self;

    /// The receiver itself if already frozen, otherwise a frozen copy.
    fn to_frozen(&self) -> Self;

    /// True if every component is exactly equal, regardless of mutability.
    fn at(&self, other: &Self) -> bool;
}

/// Whole-value and masked assignment and addition.
pub trait Masked: DualMode {
    type Mask: Selector;
    type Scalar: Precision;

    fn set(&mut self, other: &Self) -> Result<()>;

    /// Copies the masked components of `other`.
    fn set_masked(&mut self, mask: Self::Mask, other: &Self) -> Result<()>;

    /// Sets every masked component to `value`.
    fn set_value(&mut self, mask: Self::Mask, value: Self::Scalar) -> Result<()>;

    fn set_all(&mut self, value: Self::Scalar) -> Result<()>;

    fn add(&mut self, other: &Self) -> Result<()>;

    fn add_masked(&mut self, mask: Self::Mask, other: &Self) -> Result<()>;

    fn add_value(&mut self, mask: Self::Mask, value: Self::Scalar) -> Result<()>;

    fn add_all(&mut self, value: Self::Scalar) -> Result<()>;

    /// Moves toward `dest`: unchanged for `offset <= 0`, exactly `dest` for
    /// `offset >= 1`, linear in between.
    fn interpolate(&mut self, dest: &Self, offset: f32) -> Result<()>;

    fn clear(&mut self) -> Result<()> {
        self.set_all(<Self::Scalar as Precision>::ZERO)
    }

    fn clear_masked(&mut self, mask: Self::Mask) -> Result<()> {
        self.set_value(mask, <Self::Scalar as Precision>::ZERO)
    }

    fn with_masked(&self, mask: Self::Mask, other: &Self) -> Result<Self> {
        let mut result = self.to_mutable();
        result.set_masked(mask, other)?;
        Ok(result)
    }

    fn with_value(&self, mask: Self::Mask, value: Self::Scalar) -> Result<Self> {
        let mut result = self.to_mutable();
        result.set_value(mask, value)?;
        Ok(result)
    }

    fn added(&self, other: &Self) -> Result<Self> {
        let mut result = self.to_mutable();
        result.add(other)?;
        Ok(result)
    }

    fn added_masked(&self, mask: Self::Mask, other: &Self) -> Result<Self> {
        let mut result = self.to_mutable();
        result.add_masked(mask, other)?;
        Ok(result)
    }

    fn added_value(&self, mask: Self::Mask, value: Self::Scalar) -> Result<Self> {
        let mut result = self.to_mutable();
        result.add_value(mask, value)?;
        Ok(result)
    }

    fn added_all(&self, value: Self::Scalar) -> Result<Self> {
        let mut result = self.to_mutable();
        result.add_all(value)?;
        Ok(result)
    }

    fn interpolated(&self, dest: &Self, offset: f32) -> Result<Self> {
        let mut result = self.to_mutable();
        result.interpolate(dest, offset)?;
        Ok(result)
    }

    fn cleared(&self) -> Result<Self> {
        let mut result = self.to_mutable();
        result.clear()?;
        Ok(result)
    }

    fn cleared_masked(&self, mask: Self::Mask) -> Result<Self> {
        let mut result = self.to_mutable();
        result.clear_masked(mask)?;
        Ok(result)
    }
}

/// Subtraction and multiplication, for vectors and points.
pub trait Arithmetic: Masked {
    fn subtract(&mut self, other: &Self) -> Result<()>;

    fn subtract_masked(&mut self, mask: Self::Mask, other: &Self) -> Result<()>;

    fn subtract_value(&mut self, mask: Self::Mask, value: Self::Scalar) -> Result<()>;

    fn subtract_all(&mut self, value: Self::Scalar) -> Result<()>;

    /// Component-by-component product with `other`.
    fn multiply(&mut self, other: &Self) -> Result<()>;

    fn multiply_masked(&mut self, mask: Self::Mask, other: &Self) -> Result<()>;

    /// Multiplies every masked component by `factor`.
    fn multiply_value(&mut self, mask: Self::Mask, factor: f64) -> Result<()>;

    /// Multiplies every component by `factor`.
    fn scale(&mut self, factor: f64) -> Result<()>;

    fn subtracted(&self, other: &Self) -> Result<Self> {
        let mut result = self.to_mutable();
        result.subtract(other)?;
        Ok(result)
    }

    fn subtracted_masked(&self, mask: Self::Mask, other: &Self) -> Result<Self> {
        let mut result = self.to_mutable();
        result.subtract_masked(mask, other)?;
        Ok(result)
    }

    fn subtracted_value(&self, mask: Self::Mask, value: Self::Scalar) -> Result<Self> {
        let mut result = self.to_mutable();
        result.subtract_value(mask, value)?;
        Ok(result)
    }

    fn subtracted_all(&self, value: Self::Scalar) -> Result<Self> {
        let mut result = self.to_mutable();
        result.subtract_all(value)?;
        Ok(result)
    }

    fn multiplied(&self, other: &Self) -> Result<Self> {
        let mut result = self.to_mutable();
        result.multiply(other)?;
        Ok(result)
    }

    fn multiplied_masked(&self, mask: Self::Mask, other: &Self) -> Result<Self> {
        let mut result = self.to_mutable();
        result.multiply_masked(mask, other)?;
        Ok(result)
    }

    fn multiplied_value(&self, mask: Self::Mask, factor: f64) -> Result<Self> {
        let mut result = self.to_mutable();
        result.multiply_value(mask, factor)?;
        Ok(result)
    }

    fn scaled(&self, factor: f64) -> Result<Self> {
        let mut result = self.to_mutable();
        result.scale(factor)?;
        Ok(result)
    }
}
