/// bluegeom core library - dual-mode geometry values
///
/// Vectors, points and offsets that are either mutable or frozen for their
/// whole lifetime. In-place operations require a mutable value and fail on a
/// frozen one; copy-producing operations (`added`, `interpolated`, ...)
/// always return a new mutable value and work on both.

mod cells;
pub mod constants;
pub mod error;
pub mod offset;
pub mod parse;
pub mod point;
pub mod precision;
pub mod selector;
mod triplet;
pub mod value;
pub mod vector;

// Re-export commonly used types
pub use error::{GeomError, Result};
pub use offset::Offset4i;
pub use point::{Point3, Point3d, Point3f, Point3i};
pub use precision::Precision;
pub use selector::{Axis, Selector, Side};
pub use triplet::Triplet;
pub use value::{Arithmetic, DualMode, Masked};
pub use vector::{Vector3, Vector3d, Vector3f, Vector3i};

/// Everything needed to work with values, including the operation traits.
pub mod prelude {
    pub use crate::error::{GeomError, Result};
    pub use crate::offset::Offset4i;
    pub use crate::point::{Point3, Point3d, Point3f, Point3i};
    pub use crate::selector::{Axis, Selector, Side};
    pub use crate::value::{Arithmetic, DualMode, Masked};
    pub use crate::vector::{Vector3, Vector3d, Vector3f, Vector3i};
}
