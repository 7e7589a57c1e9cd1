/// 3D points in int, float and double precision
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::cells::{Cells, Layout, POINT};
use crate::error::{GeomError, Result};
use crate::precision::Precision;
use crate::triplet::{component_accessors, Triplet};
use crate::vector::Vector3;

/// A location in 3D space with a permanent mutability flag.
///
/// Points share the vector contract (masked set, add, subtract, multiply,
/// saturating interpolation) but have no length, cross product or
/// normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point3<T: Precision> {
    cells: Cells<T, 3>,
}

pub type Point3i = Point3<i32>;
pub type Point3f = Point3<f32>;
pub type Point3d = Point3<f64>;

impl<T: Precision> Triplet for Point3<T> {
    type Component = T;

    const LAYOUT: &'static Layout<3> = &POINT;

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

component_accessors!(Point3);

impl<T: Precision> Point3<T> {
    pub(crate) const fn constant(x: T, y: T, z: T) -> Self {
        Self {
            cells: Cells::new_unchecked(false, [x, y, z]),
        }
    }

    pub fn try_mutable(x: T, y: T, z: T) -> Result<Self> {
        Ok(Self {
            cells: Cells::new(&POINT, true, [x, y, z])?,
        })
    }

    pub fn try_frozen(x: T, y: T, z: T) -> Result<Self> {
        Ok(Self {
            cells: Cells::new(&POINT, false, [x, y, z])?,
        })
    }

    pub fn mutable_from<U: Precision>(other: &Point3<U>) -> Self {
        let values = other.cells.values().map(|c| T::from_f64(c.to_f64()));
        Self {
            cells: Cells::new_unchecked(true, values),
        }
    }

    pub fn frozen_from<U: Precision>(other: &Point3<U>) -> Self {
        let values = other.cells.values().map(|c| T::from_f64(c.to_f64()));
        Self {
            cells: Cells::new_unchecked(false, values),
        }
    }

    /// Saturating interpolation from `src` to `dest`, as a new mutable
    /// point.
    pub fn lerp(src: &Self, dest: &Self, offset: f32) -> Result<Self> {
        let values = src.cells.lerped(&dest.cells, offset)?;
        Ok(Self {
            cells: Cells::new(&POINT, true, values)?,
        })
    }

    /// A frozen point displaced by `vector`. Works on frozen points.
    pub fn translated(&self, vector: &Vector3<T>) -> Result<Self> {
        let [vx, vy, vz] = vector.components();
        Self::try_frozen(self.x().plus(vx), self.y().plus(vy), self.z().plus(vz))
    }

    pub fn hash_code(&self) -> u64 {
        self.cells.fingerprint()
    }
}

impl Point3<i32> {
    pub const fn mutable(x: i32, y: i32, z: i32) -> Self {
        Self {
            cells: Cells::new_unchecked(true, [x, y, z]),
        }
    }

    pub const fn frozen(x: i32, y: i32, z: i32) -> Self {
        Self::constant(x, y, z)
    }

    pub const fn mutable_splat(v: i32) -> Self {
        Self::mutable(v, v, v)
    }

    pub const fn frozen_splat(v: i32) -> Self {
        Self::frozen(v, v, v)
    }
}

impl Point3<f32> {
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

impl Point3<f64> {
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

impl<T: Precision> Hash for Point3<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.cells.fingerprint());
    }
}

impl<T: Precision> fmt::Display for Point3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.cells.is_mutable() { "mutable" } else { "frozen" };
        write!(
            f,
            "Point3{}[{} ({}, {}, {})]",
            T::SUFFIX,
            state,
            self.x(),
            self.y(),
            self.z()
        )
    }
}

impl<T: Precision> From<Point3<T>> for nalgebra::Point3<T> {
    fn from(point: Point3<T>) -> Self {
        nalgebra::Point3::new(point.x(), point.y(), point.z())
    }
}

/// Builds a frozen point from a nalgebra point.
impl<T: Precision> TryFrom<nalgebra::Point3<T>> for Point3<T> {
    type Error = GeomError;

    fn try_from(point: nalgebra::Point3<T>) -> Result<Self> {
        Self::try_frozen(point[0], point[1], point[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::Axis;
    use crate::value::{Arithmetic, DualMode, Masked};
    use crate::vector::Vector3d;

    #[test]
    fn test_interpolate_halfway() {
        let src = Point3f::mutable(0.0, 0.0, 0.0).unwrap();
        let dest = Point3f::frozen(2.0, 4.0, 6.0).unwrap();
        let mid = src.interpolated(&dest, 0.5).unwrap();
        assert_eq!(mid.components(), [1.0, 2.0, 3.0]);
        assert!(mid.is_mutable());
    }

    #[test]
    fn test_frozen_point_rejects_set() {
        let mut p = Point3i::frozen(1, 2, 3);
        assert_eq!(p.set_x(5), Err(GeomError::UnsupportedMutation("point")));
        assert_eq!(
            p.set_masked(Axis::XZ, &Point3i::frozen(0, 0, 0)),
            Err(GeomError::UnsupportedMutation("point"))
        );
        assert_eq!(p.components(), [1, 2, 3]);
    }

    #[test]
    fn test_component_copies_leave_frozen_point() {
        let p = Point3i::frozen(1, 2, 3);
        let moved = p.with_x(9).unwrap().added_z(4).unwrap();
        assert_eq!(moved.components(), [9, 2, 7]);
        assert!(moved.is_mutable());
        assert_eq!(p.components(), [1, 2, 3]);

        let mut q = Point3d::mutable(0.0, 0.0, 0.0).unwrap();
        assert_eq!(q.add_y(1.5), Ok(0.0));
        q.set_xyz(1.0, 2.0, 3.0).unwrap();
        assert_eq!(q.components(), [1.0, 2.0, 3.0]);
        assert!(q.set_z(f64::NAN).is_err());
        assert_eq!(q.z(), 3.0);
    }

    #[test]
    fn test_translated_is_frozen() {
        let p = Point3d::mutable(1.0, 1.0, 1.0).unwrap();
        let shift = Vector3d::frozen(0.5, -1.0, 2.0).unwrap();
        let moved = p.translated(&shift).unwrap();
        assert!(!moved.is_mutable());
        assert_eq!(moved.components(), [1.5, 0.0, 3.0]);
        assert!(p.is_mutable());
    }

    #[test]
    fn test_masked_subtract_and_multiply() {
        let p = Point3i::frozen(10, 20, 30);
        let q = Point3i::frozen(1, 2, 3);
        assert_eq!(p.subtracted_masked(Axis::YZ, &q).unwrap().components(), [10, 18, 27]);
        assert_eq!(p.multiplied_masked(Axis::X, &q).unwrap().components(), [10, 20, 30]);
        assert_eq!(p.multiplied(&q).unwrap().components(), [10, 40, 90]);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Point3f::frozen(1.5, 0.0, -2.0).unwrap().to_string(),
            "Point3f[frozen (1.5, 0, -2)]"
        );
    }

    #[test]
    fn test_nalgebra_conversion() {
        let p = Point3i::mutable(1, 2, 3);
        let na: nalgebra::Point3<i32> = p.into();
        assert_eq!(na, nalgebra::Point3::new(1, 2, 3));
        assert!(Point3i::try_from(na).unwrap().at(&p));
    }
}
