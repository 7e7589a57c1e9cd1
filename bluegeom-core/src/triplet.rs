/// One implementation of the dual-mode contract for every 3-component value
use crate::cells::{Cells, Layout};
use crate::error::Result;
use crate::precision::Precision;
use crate::selector::{Axis, Selector};
use crate::value::{Arithmetic, DualMode, Masked};

const ALL: [usize; 3] = [0, 1, 2];

/// Implemented by [`Vector3`](crate::Vector3) and [`Point3`](crate::Point3).
///
/// Not implementable outside this crate: its items name crate-private types.
pub trait Triplet: Copy {
    type Component: Precision;

    #[doc(hidden)]
    const LAYOUT: &'static Layout<3>;

    #[doc(hidden)]
    fn cells(&self) -> &Cells<Self::Component, 3>;

    #[doc(hidden)]
    fn cells_mut(&mut self) -> &mut Cells<Self::Component, 3>;

    #[doc(hidden)]
    fn from_cells(cells: Cells<Self::Component, 3>) -> Self;
}

impl<V: Triplet> DualMode for V {
    fn is_mutable(&self) -> bool {
        self.cells().is_mutable()
    }

    fn to_mutable(&self) -> Self {
        V::from_cells(self.cells().to_mutable())
    }

    fn to_frozen(&self) -> Self {
        if !self.is_mutable() {
            return *self;
        }
        V::from_cells(self.cells().to_frozen())
    }

    fn at(&self, other: &Self) -> bool {
        self.cells().same(other.cells())
    }
}

impl<V: Triplet> Masked for V {
    type Mask = Axis;
    type Scalar = V::Component;

    fn set(&mut self, other: &Self) -> Result<()> {
        let next = other.cells().values();
        self.cells_mut().commit(V::LAYOUT, &ALL, next)
    }

    fn set_masked(&mut self, axis: Axis, other: &Self) -> Result<()> {
        let next = other.cells().values();
        self.cells_mut().commit(V::LAYOUT, axis.indices(), next)
    }

    fn set_value(&mut self, axis: Axis, value: V::Component) -> Result<()> {
        self.cells_mut().update(V::LAYOUT, axis.indices(), |_, _| value)
    }

    fn set_all(&mut self, value: V::Component) -> Result<()> {
        self.cells_mut().update(V::LAYOUT, &ALL, |_, _| value)
    }

    fn add(&mut self, other: &Self) -> Result<()> {
        let rhs = other.cells().values();
        self.cells_mut().update(V::LAYOUT, &ALL, |i, v| v.plus(rhs[i]))
    }

    fn add_masked(&mut self, axis: Axis, other: &Self) -> Result<()> {
        let rhs = other.cells().values();
        self.cells_mut().update(V::LAYOUT, axis.indices(), |i, v| v.plus(rhs[i]))
    }

    fn add_value(&mut self, axis: Axis, value: V::Component) -> Result<()> {
        self.cells_mut().update(V::LAYOUT, axis.indices(), |_, v| v.plus(value))
    }

    fn add_all(&mut self, value: V::Component) -> Result<()> {
        self.cells_mut().update(V::LAYOUT, &ALL, |_, v| v.plus(value))
    }

    fn interpolate(&mut self, dest: &Self, offset: f32) -> Result<()> {
        let dest = *dest.cells();
        self.cells_mut().interpolate(V::LAYOUT, &dest, offset)
    }
}

impl<V: Triplet> Arithmetic for V {
    fn subtract(&mut self, other: &Self) -> Result<()> {
        let rhs = other.cells().values();
        self.cells_mut().update(V::LAYOUT, &ALL, |i, v| v.minus(rhs[i]))
    }

    fn subtract_masked(&mut self, axis: Axis, other: &Self) -> Result<()> {
        let rhs = other.cells().values();
        self.cells_mut().update(V::LAYOUT, axis.indices(), |i, v| v.minus(rhs[i]))
    }

    fn subtract_value(&mut self, axis: Axis, value: V::Component) -> Result<()> {
        self.cells_mut().update(V::LAYOUT, axis.indices(), |_, v| v.minus(value))
    }

    fn subtract_all(&mut self, value: V::Component) -> Result<()> {
        self.cells_mut().update(V::LAYOUT, &ALL, |_, v| v.minus(value))
    }

    fn multiply(&mut self, other: &Self) -> Result<()> {
        let rhs = other.cells().values();
        self.cells_mut().update(V::LAYOUT, &ALL, |i, v| v.product(rhs[i]))
    }

    fn multiply_masked(&mut self, axis: Axis, other: &Self) -> Result<()> {
        let rhs = other.cells().values();
        self.cells_mut().update(V::LAYOUT, axis.indices(), |i, v| v.product(rhs[i]))
    }

    fn multiply_value(&mut self, axis: Axis, factor: f64) -> Result<()> {
        self.cells_mut().update(V::LAYOUT, axis.indices(), |_, v| v.scale(factor))
    }

    fn scale(&mut self, factor: f64) -> Result<()> {
        self.cells_mut().update(V::LAYOUT, &ALL, |_, v| v.scale(factor))
    }
}

/// Per-component accessors shared by `Vector3` and `Point3`.
///
/// Expands to an inherent impl, so callers need no trait in scope.
macro_rules! component_accessors {
    ($ty:ident) => {
        impl<T: $crate::precision::Precision> $ty<T> {
            #[inline]
            pub fn x(&self) -> T {
                self.cells.get(0)
            }

            #[inline]
            pub fn y(&self) -> T {
                self.cells.get(1)
            }

            #[inline]
            pub fn z(&self) -> T {
                self.cells.get(2)
            }

            /// Returns `[x, y, z]`.
            #[inline]
            pub fn components(&self) -> [T; 3] {
                self.cells.values()
            }

            /// Sets X, returning the previous value.
            pub fn set_x(&mut self, value: T) -> $crate::error::Result<T> {
                self.cells.replace(<Self as $crate::triplet::Triplet>::LAYOUT, 0, value)
            }

            /// Sets Y, returning the previous value.
            pub fn set_y(&mut self, value: T) -> $crate::error::Result<T> {
                self.cells.replace(<Self as $crate::triplet::Triplet>::LAYOUT, 1, value)
            }

            /// Sets Z, returning the previous value.
            pub fn set_z(&mut self, value: T) -> $crate::error::Result<T> {
                self.cells.replace(<Self as $crate::triplet::Triplet>::LAYOUT, 2, value)
            }

            /// Sets all three components at once.
            pub fn set_xyz(&mut self, x: T, y: T, z: T) -> $crate::error::Result<()> {
                let layout = <Self as $crate::triplet::Triplet>::LAYOUT;
                self.cells.commit(layout, &[0, 1, 2], [x, y, z])
            }

            pub fn add_x(&mut self, offset: T) -> $crate::error::Result<T> {
                self.set_x($crate::precision::Precision::plus(self.x(), offset))
            }

            pub fn add_y(&mut self, offset: T) -> $crate::error::Result<T> {
                self.set_y($crate::precision::Precision::plus(self.y(), offset))
            }

            pub fn add_z(&mut self, offset: T) -> $crate::error::Result<T> {
                self.set_z($crate::precision::Precision::plus(self.z(), offset))
            }

            pub fn with_x(&self, value: T) -> $crate::error::Result<Self> {
                let mut result = $crate::value::DualMode::to_mutable(self);
                result.set_x(value)?;
                Ok(result)
            }

            pub fn with_y(&self, value: T) -> $crate::error::Result<Self> {
                let mut result = $crate::value::DualMode::to_mutable(self);
                result.set_y(value)?;
                Ok(result)
            }

            pub fn with_z(&self, value: T) -> $crate::error::Result<Self> {
                let mut result = $crate::value::DualMode::to_mutable(self);
                result.set_z(value)?;
                Ok(result)
            }

            pub fn added_x(&self, offset: T) -> $crate::error::Result<Self> {
                let mut result = $crate::value::DualMode::to_mutable(self);
                result.add_x(offset)?;
                Ok(result)
            }

            pub fn added_y(&self, offset: T) -> $crate::error::Result<Self> {
                let mut result = $crate::value::DualMode::to_mutable(self);
                result.add_y(offset)?;
                Ok(result)
            }

            pub fn added_z(&self, offset: T) -> $crate::error::Result<Self> {
                let mut result = $crate::value::DualMode::to_mutable(self);
                result.add_z(offset)?;
                Ok(result)
            }
        }
    };
}

pub(crate) use component_accessors;
