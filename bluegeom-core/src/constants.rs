/// Shared frozen constants; mutators called on any of them fail
use crate::offset::Offset4i;
use crate::point::Point3;
use crate::precision::Precision;
use crate::selector::{Axis, Selector};
use crate::vector::Vector3;

impl<T: Precision> Vector3<T> {
    pub const ORIGIN: Self = Self::constant(T::ZERO, T::ZERO, T::ZERO);
    pub const UP: Self = Self::constant(T::ZERO, T::ONE, T::ZERO);
    pub const DOWN: Self = Self::constant(T::ZERO, T::MINUS_ONE, T::ZERO);
    pub const LEFT: Self = Self::constant(T::MINUS_ONE, T::ZERO, T::ZERO);
    pub const RIGHT: Self = Self::constant(T::ONE, T::ZERO, T::ZERO);
    /// Looking down the negative z axis.
    pub const FORWARD: Self = Self::constant(T::ZERO, T::ZERO, T::MINUS_ONE);

    pub fn origin() -> Self {
        Self::ORIGIN
    }

    pub fn up() -> Self {
        Self::UP
    }

    pub fn down() -> Self {
        Self::DOWN
    }

    pub fn left() -> Self {
        Self::LEFT
    }

    pub fn right() -> Self {
        Self::RIGHT
    }

    pub fn forward() -> Self {
        Self::FORWARD
    }

    /// A frozen vector of length one along `axis`. Pair axes give one on
    /// both components.
    pub fn unit(axis: Axis) -> Self {
        let mut values = [T::ZERO; 3];
        for &i in axis.indices() {
            values[i] = T::ONE;
        }
        let [x, y, z] = values;
        Self::constant(x, y, z)
    }
}

impl<T: Precision> Point3<T> {
    pub const ORIGIN: Self = Self::constant(T::ZERO, T::ZERO, T::ZERO);

    pub fn origin() -> Self {
        Self::ORIGIN
    }
}

impl Offset4i {
    pub const ZERO: Self = Self::frozen_splat(0);
    pub const ONE: Self = Self::frozen_splat(1);

    pub fn zero() -> Self {
        Self::ZERO
    }

    pub fn one() -> Self {
        Self::ONE
    }
}
