/// Shared storage for every dual-mode value: a permanent mutability flag
/// plus a fixed number of components.
use crate::error::{GeomError, Result};
use crate::precision::Precision;

/// Describes how a value type names itself and its components in errors.
#[derive(Debug)]
pub struct Layout<const N: usize> {
    pub what: &'static str,
    pub names: [&'static str; N],
}

pub(crate) const VECTOR: Layout<3> = Layout {
    what: "vector",
    names: ["x", "y", "z"],
};

pub(crate) const POINT: Layout<3> = Layout {
    what: "point",
    names: ["x", "y", "z"],
};

pub(crate) const OFFSET: Layout<4> = Layout {
    what: "offset",
    names: ["left", "right", "top", "bottom"],
};

#[derive(Debug, Clone, Copy)]
pub struct Cells<T, const N: usize> {
    mutable: bool,
    values: [T; N],
}

impl<T: Precision, const N: usize> Cells<T, N> {
    /// Builds cells from values already known to be valid.
    pub(crate) const fn new_unchecked(mutable: bool, values: [T; N]) -> Self {
        Self { mutable, values }
    }

    pub(crate) fn new(layout: &Layout<N>, mutable: bool, values: [T; N]) -> Result<Self> {
        for (value, name) in values.iter().zip(layout.names.iter()) {
            value.check(name)?;
        }
        Ok(Self::new_unchecked(mutable, values))
    }

    #[inline]
    pub(crate) fn is_mutable(&self) -> bool {
        self.mutable
    }

    #[inline]
    pub(crate) fn get(&self, index: usize) -> T {
        self.values[index]
    }

    #[inline]
    pub(crate) fn values(&self) -> [T; N] {
        self.values
    }

    pub(crate) fn to_mutable(&self) -> Self {
        Self::new_unchecked(true, self.values)
    }

    pub(crate) fn to_frozen(&self) -> Self {
        if !self.mutable {
            return *self;
        }
        Self::new_unchecked(false, self.values)
    }

    pub(crate) fn ensure_mutable(&self, layout: &Layout<N>) -> Result<()> {
        if !self.mutable {
            tracing::debug!(what = layout.what, "rejected mutation of frozen value");
            return Err(GeomError::UnsupportedMutation(layout.what));
        }
        Ok(())
    }

    /// Writes `next[i]` for every `i` in `indices`, or nothing at all.
    ///
    /// Mutability and every touched component are checked before the
    /// first write.
    pub(crate) fn commit(&mut self, layout: &Layout<N>, indices: &[usize], next: [T; N]) -> Result<()> {
        self.ensure_mutable(layout)?;
        for &i in indices {
            next[i].check(layout.names[i])?;
        }
        for &i in indices {
            self.values[i] = next[i];
        }
        Ok(())
    }

    /// Applies `op` to the components in `indices`.
    pub(crate) fn update<F>(&mut self, layout: &Layout<N>, indices: &[usize], op: F) -> Result<()>
    where
        F: Fn(usize, T) -> T,
    {
        self.ensure_mutable(layout)?;
        let mut next = self.values;
        for &i in indices {
            next[i] = op(i, self.values[i]);
        }
        self.commit(layout, indices, next)
    }

    /// Same as [`Cells::update`] over every component.
    pub(crate) fn update_all<F>(&mut self, layout: &Layout<N>, op: F) -> Result<()>
    where
        F: Fn(usize, T) -> T,
    {
        let all: [usize; N] = std::array::from_fn(|i| i);
        self.update(layout, &all, op)
    }

    /// Sets one component, returning its previous value.
    pub(crate) fn replace(&mut self, layout: &Layout<N>, index: usize, value: T) -> Result<T> {
        let old = self.values[index];
        let mut next = self.values;
        next[index] = value;
        self.commit(layout, &[index], next)?;
        Ok(old)
    }

    /// Saturating interpolation toward `dest`.
    pub(crate) fn lerped(&self, dest: &Self, offset: f32) -> Result<[T; N]> {
        if offset.is_nan() {
            return Err(GeomError::InvalidArgument("offset must not be NaN".to_string()));
        }
        if offset <= 0.0 {
            return Ok(self.values);
        }
        if offset >= 1.0 {
            return Ok(dest.values);
        }
        Ok(std::array::from_fn(|i| T::lerp(self.values[i], dest.values[i], offset)))
    }

    pub(crate) fn interpolate(&mut self, layout: &Layout<N>, dest: &Self, offset: f32) -> Result<()> {
        self.ensure_mutable(layout)?;
        let next = self.lerped(dest, offset)?;
        let all: [usize; N] = std::array::from_fn(|i| i);
        self.commit(layout, &all, next)
    }

    /// Component equality, ignoring mutability.
    pub(crate) fn same(&self, other: &Self) -> bool {
        self.values == other.values
    }

    /// Seed 17, then `31 * acc + bits` over the flag and each component.
    pub(crate) fn fingerprint(&self) -> u64 {
        let mut result: u64 = 17;
        result = result.wrapping_mul(31).wrapping_add(self.mutable as u64);
        for value in self.values.iter() {
            result = result.wrapping_mul(31).wrapping_add(value.hash_bits());
        }
        result
    }
}

impl<T: Precision, const N: usize> PartialEq for Cells<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.mutable == other.mutable && self.values == other.values
    }
}

// NaN is never stored, so equality is reflexive.
impl<T: Precision, const N: usize> Eq for Cells<T, N> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_is_all_or_nothing() {
        let mut cells = Cells::new(&VECTOR, true, [1.0f32, 2.0, 3.0]).unwrap();
        let result = cells.commit(&VECTOR, &[0, 1], [9.0, f32::NAN, 3.0]);
        assert!(matches!(result, Err(GeomError::InvalidArgument(_))));
        assert_eq!(cells.values(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_frozen_rejects_update() {
        let mut cells = Cells::new_unchecked(false, [1, 2, 3, 4]);
        let result = cells.update_all(&OFFSET, |_, v| v + 1);
        assert_eq!(result, Err(GeomError::UnsupportedMutation("offset")));
        assert_eq!(cells.values(), [1, 2, 3, 4]);
    }

    #[test]
    fn test_replace_returns_old() {
        let mut cells = Cells::new_unchecked(true, [1, 2, 3]);
        assert_eq!(cells.replace(&POINT, 2, 7), Ok(3));
        assert_eq!(cells.values(), [1, 2, 7]);
    }

    #[test]
    fn test_lerped_rejects_nan_offset() {
        let a = Cells::new_unchecked(true, [0.0f64; 3]);
        let b = Cells::new_unchecked(true, [1.0f64; 3]);
        assert!(a.lerped(&b, f32::NAN).is_err());
    }

    #[test]
    fn test_fingerprint_tracks_flag() {
        let a = Cells::new_unchecked(true, [1, 2, 3]);
        let b = Cells::new_unchecked(false, [1, 2, 3]);
        assert_ne!(a.fingerprint(), b.fingerprint());
        assert_eq!(a.fingerprint(), a.to_mutable().fingerprint());
    }
}
