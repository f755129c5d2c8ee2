// File: crates/chart-layout/src/types.rs
// Summary: Shared types and constants (axis keys, per-axis pairs, orientations, paddings).

use std::fmt;

/// Default surface width in pixels.
pub const WIDTH: u32 = 450;
/// Default surface height in pixels.
pub const HEIGHT: u32 = 300;
/// Default padding on every side, in pixels.
pub const PADDING: u32 = 50;

/// Logical axis of the chart coordinate system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::X, Axis::Y];

    /// The crossing axis.
    pub const fn other(self) -> Self {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::X => "x",
            Axis::Y => "y",
        })
    }
}

/// A value held once per axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PerAxis<T> {
    pub x: T,
    pub y: T,
}

impl<T> PerAxis<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn from_fn(mut f: impl FnMut(Axis) -> T) -> Self {
        let x = f(Axis::X);
        let y = f(Axis::Y);
        Self { x, y }
    }

    pub fn get(&self, axis: Axis) -> &T {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }

    pub fn get_mut(&mut self, axis: Axis) -> &mut T {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(Axis, T) -> U) -> PerAxis<U> {
        PerAxis { x: f(Axis::X, self.x), y: f(Axis::Y, self.y) }
    }
}

/// Side of the plot area an axis line is drawn on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Top,
    Bottom,
    Left,
    Right,
}

impl Orientation {
    /// Axis letter an orientation implies: top/bottom lines run along x.
    pub const fn axis(self) -> Axis {
        match self {
            Orientation::Top | Orientation::Bottom => Axis::X,
            Orientation::Left | Orientation::Right => Axis::Y,
        }
    }
}

/// Whether a domain lies on the positive or the negative side of zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OriginSign {
    #[default]
    Positive,
    Negative,
}

/// Plot padding, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Padding {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
}

impl Padding {
    /// Create new padding (non-negative by type).
    pub const fn new(top: u32, bottom: u32, left: u32, right: u32) -> Self {
        Self { top, bottom, left, right }
    }
    /// Same padding on every side.
    pub const fn uniform(px: u32) -> Self {
        Self::new(px, px, px, px)
    }
    /// Total horizontal padding (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical padding (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Padding {
    fn default() -> Self {
        Self::uniform(PADDING)
    }
}
