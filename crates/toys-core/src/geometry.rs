#![forbid(unsafe_code)]

//! Geometric primitives.

use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Neg, Sub, SubAssign};

use crate::error::{Result, ToyError};

/// A size or position with three integer components.
///
/// `x` grows to the right, `y` grows downwards and `z` points towards the
/// viewer. The `z` component is reserved for stacking and stays 0 for planar
/// sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vec3 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Vec3 {
    /// The origin.
    pub const ZERO: Vec3 = Vec3::new(0, 0, 0);

    /// Create a new vector.
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Create a planar vector (`z == 0`).
    #[inline]
    pub const fn xy(x: i32, y: i32) -> Self {
        Self::new(x, y, 0)
    }

    /// Product of all three components, saturating at the `i32` bounds.
    #[inline]
    pub const fn volume(&self) -> i32 {
        self.x.saturating_mul(self.y).saturating_mul(self.z)
    }

    /// Check whether every component of `p` lies in `[0, component)`.
    ///
    /// A planar size (`z == 0`) contains nothing; use [`Vec3::contains_xy`]
    /// for hit testing on flat surfaces.
    #[inline]
    pub const fn contains(&self, p: Vec3) -> bool {
        p.x >= 0 && p.y >= 0 && p.z >= 0 && p.x < self.x && p.y < self.y && p.z < self.z
    }

    /// Check whether the x and y components of `p` lie in `[0, component)`.
    #[inline]
    pub const fn contains_xy(&self, p: Vec3) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.x && p.y < self.y
    }

    /// Read a component by index.
    pub fn try_get(&self, index: usize) -> Result<i32> {
        Axis::try_from(index).map(|axis| self[axis])
    }

    /// Write a component by index.
    pub fn try_set(&mut self, index: usize, value: i32) -> Result<()> {
        let axis = Axis::try_from(index)?;
        self[axis] = value;
        Ok(())
    }

    /// Copy of `self` with one component replaced.
    #[inline]
    #[must_use]
    pub fn with(mut self, axis: Axis, value: i32) -> Self {
        self[axis] = value;
        self
    }

    /// Component-wise wrapping sum.
    ///
    /// Accumulated offsets use wrapping arithmetic so that adding an offset
    /// and then [`Vec3::wrapping_sub`]-ing it restores the exact start value,
    /// whatever the magnitudes involved.
    #[inline]
    #[must_use]
    pub const fn wrapping_add(self, rhs: Vec3) -> Self {
        Self::new(
            self.x.wrapping_add(rhs.x),
            self.y.wrapping_add(rhs.y),
            self.z.wrapping_add(rhs.z),
        )
    }

    /// Component-wise wrapping difference.
    #[inline]
    #[must_use]
    pub const fn wrapping_sub(self, rhs: Vec3) -> Self {
        Self::new(
            self.x.wrapping_sub(rhs.x),
            self.y.wrapping_sub(rhs.y),
            self.z.wrapping_sub(rhs.z),
        )
    }

    /// Component-wise maximum with zero.
    #[inline]
    #[must_use]
    pub fn clamp_non_negative(self) -> Self {
        Self::new(self.x.max(0), self.y.max(0), self.z.max(0))
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Saturating component-wise sum.
impl Add for Vec3 {
    type Output = Vec3;

    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(
            self.x.saturating_add(rhs.x),
            self.y.saturating_add(rhs.y),
            self.z.saturating_add(rhs.z),
        )
    }
}

/// Saturating component-wise difference.
impl Sub for Vec3 {
    type Output = Vec3;

    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(
            self.x.saturating_sub(rhs.x),
            self.y.saturating_sub(rhs.y),
            self.z.saturating_sub(rhs.z),
        )
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    #[inline]
    fn neg(self) -> Vec3 {
        Vec3::new(
            self.x.saturating_neg(),
            self.y.saturating_neg(),
            self.z.saturating_neg(),
        )
    }
}

impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec3) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec3) {
        *self = *self - rhs;
    }
}

impl Index<Axis> for Vec3 {
    type Output = i32;

    #[inline]
    fn index(&self, axis: Axis) -> &i32 {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }
}

impl IndexMut<Axis> for Vec3 {
    #[inline]
    fn index_mut(&mut self, axis: Axis) -> &mut i32 {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }
}

/// Indexing by `usize` panics on an index outside `0..3`.
///
/// Use [`Vec3::try_get`] when the index is not known to be valid.
impl Index<usize> for Vec3 {
    type Output = i32;

    fn index(&self, index: usize) -> &i32 {
        match Axis::try_from(index) {
            Ok(axis) => &self[axis],
            Err(err) => panic!("{err}"),
        }
    }
}

impl IndexMut<usize> for Vec3 {
    fn index_mut(&mut self, index: usize) -> &mut i32 {
        match Axis::try_from(index) {
            Ok(axis) => &mut self[axis],
            Err(err) => panic!("{err}"),
        }
    }
}

impl From<(i32, i32)> for Vec3 {
    fn from((x, y): (i32, i32)) -> Self {
        Self::xy(x, y)
    }
}

impl From<(i32, i32, i32)> for Vec3 {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

/// One of the three components of a [`Vec3`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left to right.
    X,
    /// Top to bottom.
    Y,
    /// Back to front.
    Z,
}

impl Axis {
    /// All axes in index order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index of this axis.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Unit vector along this axis scaled by `length`.
    #[inline]
    pub fn offset(self, length: i32) -> Vec3 {
        Vec3::ZERO.with(self, length)
    }
}

impl TryFrom<usize> for Axis {
    type Error = ToyError;

    fn try_from(index: usize) -> Result<Self> {
        match index {
            0 => Ok(Axis::X),
            1 => Ok(Axis::Y),
            2 => Ok(Axis::Z),
            _ => Err(ToyError::InvalidIndex(index)),
        }
    }
}
