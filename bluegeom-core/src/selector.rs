/// Axis and side selectors for masked operations
use std::fmt;
use std::str::FromStr;

use crate::error::GeomError;
use crate::parse;

/// Maps a selector onto the component indices it touches.
pub trait Selector: Copy + fmt::Debug {
    /// Indices into the value's component array, in ascending order.
    fn indices(self) -> &'static [usize];
}

/// Selects one or two components of a 3-component value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
    XY,
    XZ,
    YZ,
}

impl Axis {
    pub const ALL: [Axis; 6] = [Axis::X, Axis::Y, Axis::Z, Axis::XY, Axis::XZ, Axis::YZ];

    pub const fn name(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
            Axis::XY => "XY",
            Axis::XZ => "XZ",
            Axis::YZ => "YZ",
        }
    }

    /// The single axes this selector is made of.
    pub fn parts(self) -> &'static [Axis] {
        match self {
            Axis::X => &[Axis::X],
            Axis::Y => &[Axis::Y],
            Axis::Z => &[Axis::Z],
            Axis::XY => &[Axis::X, Axis::Y],
            Axis::XZ => &[Axis::X, Axis::Z],
            Axis::YZ => &[Axis::Y, Axis::Z],
        }
    }
}

impl Selector for Axis {
    fn indices(self) -> &'static [usize] {
        match self {
            Axis::X => &[0],
            Axis::Y => &[1],
            Axis::Z => &[2],
            Axis::XY => &[0, 1],
            Axis::XZ => &[0, 2],
            Axis::YZ => &[1, 2],
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Axis {
    type Err = GeomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::parse_axis(s)
    }
}

/// Selects one side, or a pair of opposite sides, of a 4-sided value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
    /// Top and bottom
    Vertical,
    /// Left and right
    Horizontal,
}

impl Side {
    pub const ALL: [Side; 6] = [
        Side::Left,
        Side::Right,
        Side::Top,
        Side::Bottom,
        Side::Vertical,
        Side::Horizontal,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Side::Left => "LEFT",
            Side::Right => "RIGHT",
            Side::Top => "TOP",
            Side::Bottom => "BOTTOM",
            Side::Vertical => "VERTICAL",
            Side::Horizontal => "HORIZONTAL",
        }
    }

    pub fn parts(self) -> &'static [Side] {
        match self {
            Side::Left => &[Side::Left],
            Side::Right => &[Side::Right],
            Side::Top => &[Side::Top],
            Side::Bottom => &[Side::Bottom],
            Side::Vertical => &[Side::Top, Side::Bottom],
            Side::Horizontal => &[Side::Left, Side::Right],
        }
    }
}

impl Selector for Side {
    fn indices(self) -> &'static [usize] {
        match self {
            Side::Left => &[0],
            Side::Right => &[1],
            Side::Top => &[2],
            Side::Bottom => &[3],
            Side::Vertical => &[2, 3],
            Side::Horizontal => &[0, 1],
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Side {
    type Err = GeomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::parse_side(s)
    }
}
