/// Four-sided integer offsets, such as insets or margins
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::cells::{Cells, OFFSET};
use crate::error::Result;
use crate::precision::Precision;
use crate::selector::{Selector, Side};
use crate::value::{DualMode, Masked};

const LEFT: usize = 0;
const RIGHT: usize = 1;
const TOP: usize = 2;
const BOTTOM: usize = 3;
const ALL: [usize; 4] = [LEFT, RIGHT, TOP, BOTTOM];

/// An `int` offset with a left, right, top and bottom side.
///
/// Offsets follow the same dual-mode contract as vectors but support only
/// assignment and addition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offset4i {
    cells: Cells<i32, 4>,
}

impl Offset4i {
    pub const fn mutable(left: i32, right: i32, top: i32, bottom: i32) -> Self {
        Self {
            cells: Cells::new_unchecked(true, [left, right, top, bottom]),
        }
    }

    pub const fn frozen(left: i32, right: i32, top: i32, bottom: i32) -> Self {
        Self {
            cells: Cells::new_unchecked(false, [left, right, top, bottom]),
        }
    }

    /// A mutable offset with every side set to `side`.
    pub const fn mutable_splat(side: i32) -> Self {
        Self::mutable(side, side, side, side)
    }

    /// A frozen offset with every side set to `side`.
    pub const fn frozen_splat(side: i32) -> Self {
        Self::frozen(side, side, side, side)
    }

    /// Saturating interpolation from `src` to `dest`, as a new mutable
    /// offset.
    pub fn lerp(src: &Self, dest: &Self, offset: f32) -> Result<Self> {
        let values = src.cells.lerped(&dest.cells, offset)?;
        Ok(Self {
            cells: Cells::new_unchecked(true, values),
        })
    }

    /// One side, or the sum of both sides for `Vertical` and `Horizontal`.
    pub fn get(&self, side: Side) -> i32 {
        side.indices()
            .iter()
            .fold(0i32, |sum, &i| sum.plus(self.cells.get(i)))
    }

    pub fn left(&self) -> i32 {
        self.cells.get(LEFT)
    }

    pub fn right(&self) -> i32 {
        self.cells.get(RIGHT)
    }

    pub fn top(&self) -> i32 {
        self.cells.get(TOP)
    }

    pub fn bottom(&self) -> i32 {
        self.cells.get(BOTTOM)
    }

    /// Returns `[left, right, top, bottom]`.
    pub fn sides(&self) -> [i32; 4] {
        self.cells.values()
    }

    /// Sets the left side, returning the previous value.
    pub fn set_left(&mut self, value: i32) -> Result<i32> {
        self.cells.replace(&OFFSET, LEFT, value)
    }

    pub fn set_right(&mut self, value: i32) -> Result<i32> {
        self.cells.replace(&OFFSET, RIGHT, value)
    }

    pub fn set_top(&mut self, value: i32) -> Result<i32> {
        self.cells.replace(&OFFSET, TOP, value)
    }

    pub fn set_bottom(&mut self, value: i32) -> Result<i32> {
        self.cells.replace(&OFFSET, BOTTOM, value)
    }

    pub fn set_sides(&mut self, left: i32, right: i32, top: i32, bottom: i32) -> Result<()> {
        self.cells.commit(&OFFSET, &ALL, [left, right, top, bottom])
    }

    pub fn add_left(&mut self, value: i32) -> Result<i32> {
        self.set_left(self.left().plus(value))
    }

    pub fn add_right(&mut self, value: i32) -> Result<i32> {
        self.set_right(self.right().plus(value))
    }

    pub fn add_top(&mut self, value: i32) -> Result<i32> {
        self.set_top(self.top().plus(value))
    }

    pub fn add_bottom(&mut self, value: i32) -> Result<i32> {
        self.set_bottom(self.bottom().plus(value))
    }

    pub fn added_left(&self, value: i32) -> Result<Self> {
        let mut offset = self.to_mutable();
        offset.add_left(value)?;
        Ok(offset)
    }

    pub fn added_right(&self, value: i32) -> Result<Self> {
        let mut offset = self.to_mutable();
        offset.add_right(value)?;
        Ok(offset)
    }

    pub fn added_top(&self, value: i32) -> Result<Self> {
        let mut offset = self.to_mutable();
        offset.add_top(value)?;
        Ok(offset)
    }

    pub fn added_bottom(&self, value: i32) -> Result<Self> {
        let mut offset = self.to_mutable();
        offset.add_bottom(value)?;
        Ok(offset)
    }

    /// `top + bottom`
    pub fn vertical(&self) -> i32 {
        self.get(Side::Vertical)
    }

    /// `left + right`
    pub fn horizontal(&self) -> i32 {
        self.get(Side::Horizontal)
    }

    /// Sets both top and bottom to `value`.
    pub fn set_vertical(&mut self, value: i32) -> Result<()> {
        self.set_value(Side::Vertical, value)
    }

    /// Sets both left and right to `value`.
    pub fn set_horizontal(&mut self, value: i32) -> Result<()> {
        self.set_value(Side::Horizontal, value)
    }

    pub fn hash_code(&self) -> u64 {
        self.cells.fingerprint()
    }
}

impl DualMode for Offset4i {
    fn is_mutable(&self) -> bool {
        self.cells.is_mutable()
    }

    fn to_mutable(&self) -> Self {
        Self {
            cells: self.cells.to_mutable(),
        }
    }

    fn to_frozen(&self) -> Self {
        if !self.is_mutable() {
            return *self;
        }
        Self {
            cells: self.cells.to_frozen(),
        }
    }

    fn at(&self, other: &Self) -> bool {
        self.cells.same(&other.cells)
    }
}

impl Masked for Offset4i {
    type Mask = Side;
    type Scalar = i32;

    fn set(&mut self, other: &Self) -> Result<()> {
        self.cells.commit(&OFFSET, &ALL, other.cells.values())
    }

    fn set_masked(&mut self, side: Side, other: &Self) -> Result<()> {
        self.cells.commit(&OFFSET, side.indices(), other.cells.values())
    }

    fn set_value(&mut self, side: Side, value: i32) -> Result<()> {
        self.cells.update(&OFFSET, side.indices(), |_, _| value)
    }

    fn set_all(&mut self, value: i32) -> Result<()> {
        self.cells.update(&OFFSET, &ALL, |_, _| value)
    }

    fn add(&mut self, other: &Self) -> Result<()> {
        let rhs = other.cells.values();
        self.cells.update(&OFFSET, &ALL, |i, v| v.plus(rhs[i]))
    }

    fn add_masked(&mut self, side: Side, other: &Self) -> Result<()> {
        let rhs = other.cells.values();
        self.cells.update(&OFFSET, side.indices(), |i, v| v.plus(rhs[i]))
    }

    fn add_value(&mut self, side: Side, value: i32) -> Result<()> {
        self.cells.update(&OFFSET, side.indices(), |_, v| v.plus(value))
    }

    fn add_all(&mut self, value: i32) -> Result<()> {
        self.cells.update(&OFFSET, &ALL, |_, v| v.plus(value))
    }

    fn interpolate(&mut self, dest: &Self, offset: f32) -> Result<()> {
        self.cells.interpolate(&OFFSET, &dest.cells, offset)
    }
}

impl Hash for Offset4i {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.cells.fingerprint());
    }
}

impl fmt::Display for Offset4i {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.cells.is_mutable() { "mutable" } else { "frozen" };
        let [left, right, top, bottom] = self.cells.values();
        write!(f, "Offset4i[{} ({}, {}, {}, {})]", state, left, right, top, bottom)
    }
}
