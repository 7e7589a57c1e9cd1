/// 3D vectors in int, float and double precision
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::cells::{Cells, Layout, VECTOR};
use crate::error::{GeomError, Result};
use crate::precision::Precision;
use crate::triplet::{component_accessors, Triplet};
use crate::value::DualMode;

/// A 3D vector with a permanent mutability flag.
///
/// Frozen vectors reject every in-place operation with
/// [`GeomError::UnsupportedMutation`] and are safe to share. The float and
/// double variants never hold NaN.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vector3<T: Precision> {
    cells: Cells<T, 3>,
}

pub type Vector3i = Vector3<i32>;
pub type Vector3f = Vector3<f32>;
pub type Vector3d = Vector3<f64>;

impl<T: Precision> Triplet for Vector3<T> {
    type Component = T;

    const LAYOUT: &'static Layout<3> = &VECTOR;

    fn cells(&self) -> &Cells<T, 3> {
        &self.cells
    }

    fn cells_mut(&mut self) -> &mut Cells<T, 3> {
        &mut self.cells
    }

    fn from_cells(cells: Cells<T, 3>) -> Self {
        Self { cells }
    }
}

component_accessors!(Vector3);

impl<T: Precision> Vector3<T> {
    pub(crate) const fn constant(x: T, y: T, z: T) -> Self {
        Self {
            cells: Cells::new_unchecked(false, [x, y, z]),
        }
    }

    /// Creates a mutable vector, rejecting NaN components.
    pub fn try_mutable(x: T, y: T, z: T) -> Result<Self> {
        Ok(Self {
            cells: Cells::new(&VECTOR, true, [x, y, z])?,
        })
    }

    /// Creates a frozen vector, rejecting NaN components.
    pub fn try_frozen(x: T, y: T, z: T) -> Result<Self> {
        Ok(Self {
            cells: Cells::new(&VECTOR, false, [x, y, z])?,
        })
    }

    /// Converts from another precision into a new mutable vector.
    /// Float to int conversion truncates toward zero.
    pub fn mutable_from<U: Precision>(other: &Vector3<U>) -> Self {
        let values = other.cells.values().map(|c| T::from_f64(c.to_f64()));
        Self {
            cells: Cells::new_unchecked(true, values),
        }
    }

    /// Converts from another precision into a new frozen vector.
    pub fn frozen_from<U: Precision>(other: &Vector3<U>) -> Self {
        let values = other.cells.values().map(|c| T::from_f64(c.to_f64()));
        Self {
            cells: Cells::new_unchecked(false, values),
        }
    }

    /// Saturating interpolation from `src` to `dest`, as a new mutable
    /// vector. Agrees exactly with `src.interpolated(dest, offset)`.
    pub fn lerp(src: &Self, dest: &Self, offset: f32) -> Result<Self> {
        let values = src.cells.lerped(&dest.cells, offset)?;
        Ok(Self {
            cells: Cells::new(&VECTOR, true, values)?,
        })
    }

    /// Euclidean length, computed in `f64`.
    pub fn length(&self) -> f64 {
        let [x, y, z] = self.cells.values().map(|c| c.to_f64());
        nalgebra::Vector3::new(x, y, z).norm()
    }

    /// Scales to unit length in place.
    ///
    /// Int vectors round each component to the nearest integer, which only
    /// makes sense for vectors already close to unit length. A zero-length
    /// int vector stays at the origin; a zero-length float vector fails
    /// because the result would be NaN.
    pub fn normalize(&mut self) -> Result<()> {
        let length = self.length();
        self.cells
            .update_all(&VECTOR, |_, c| T::from_normalized(c.to_f64() / length))
    }

    pub fn normalized(&self) -> Result<Self> {
        let mut result = self.to_mutable();
        result.normalize()?;
        Ok(result)
    }

    /// Replaces this vector with `self × other`.
    pub fn cross(&mut self, other: &Self) -> Result<()> {
        let [x, y, z] = self.cells.values();
        let [ox, oy, oz] = other.cells.values();
        let next = [
            y.product(oz).minus(oy.product(z)),
            ox.product(z).minus(x.product(oz)),
            x.product(oy).minus(ox.product(y)),
        ];
        self.cells.commit(&VECTOR, &[0, 1, 2], next)
    }

    pub fn crossed(&self, other: &Self) -> Result<Self> {
        let mut result = self.to_mutable();
        result.cross(other)?;
        Ok(result)
    }

    /// Negates every component in place.
    pub fn invert(&mut self) -> Result<()> {
        self.cells.update_all(&VECTOR, |_, c| c.negate())
    }

    pub fn inverted(&self) -> Result<Self> {
        let mut result = self.to_mutable();
        result.invert()?;
        Ok(result)
    }

    /// Stable hash code folded from the flag and component bits.
    pub fn hash_code(&self) -> u64 {
        self.cells.fingerprint()
    }
}

impl Vector3<i32> {
    pub const fn mutable(x: i32, y: i32, z: i32) -> Self {
        Self {
            cells: Cells::new_unchecked(true, [x, y, z]),
        }
    }

    pub const fn frozen(x: i32, y: i32, z: i32) -> Self {
        Self::constant(x, y, z)
    }

    /// A mutable vector with every component set to `v`.
    pub const fn mutable_splat(v: i32) -> Self {
        Self::mutable(v, v, v)
    }

    /// A frozen vector with every component set to `v`.
    pub const fn frozen_splat(v: i32) -> Self {
        Self::frozen(v, v, v)
    }
}

impl Vector3<f32> {
    pub fn mutable(x: f32, y: f32, z: f32) -> Result<Self> {
        Self::try_mutable(x, y, z)
    }

    pub fn frozen(x: f32, y: f32, z: f32) -> Result<Self> {
        Self::try_frozen(x, y, z)
    }

    pub fn mutable_splat(v: f32) -> Result<Self> {
        Self::try_mutable(v, v, v)
    }

    pub fn frozen_splat(v: f32) -> Result<Self> {
        Self::try_frozen(v, v, v)
    }
}

impl Vector3<f64> {
    pub fn mutable(x: f64, y: f64, z: f64) -> Result<Self> {
        Self::try_mutable(x, y, z)
    }

    pub fn frozen(x: f64, y: f64, z: f64) -> Result<Self> {
        Self::try_frozen(x, y, z)
    }

    pub fn mutable_splat(v: f64) -> Result<Self> {
        Self::try_mutable(v, v, v)
    }

    pub fn frozen_splat(v: f64) -> Result<Self> {
        Self::try_frozen(v, v, v)
    }
}

impl<T: Precision> Hash for Vector3<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.cells.fingerprint());
    }
}

impl<T: Precision> fmt::Display for Vector3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.cells.is_mutable() { "mutable" } else { "frozen" };
        write!(
            f,
            "Vector3{}[{} ({}, {}, {})]",
            T::SUFFIX,
            state,
            self.x(),
            self.y(),
            self.z()
        )
    }
}

impl<T: Precision> From<Vector3<T>> for nalgebra::Vector3<T> {
    fn from(vector: Vector3<T>) -> Self {
        nalgebra::Vector3::new(vector.x(), vector.y(), vector.z())
    }
}

/// Builds a frozen vector from a nalgebra vector.
impl<T: Precision> TryFrom<nalgebra::Vector3<T>> for Vector3<T> {
    type Error = GeomError;

    fn try_from(vector: nalgebra::Vector3<T>) -> Result<Self> {
        Self::try_frozen(vector[0], vector[1], vector[2])
    }
}
