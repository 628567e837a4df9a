use crate::error::{Error, Result};
use glam::IVec2;

/// The rectangular surface the robot moves on.
///
/// The origin `(0, 0)` is the south-west corner. Valid coordinates are
/// `0 <= x < length` and `0 <= y < width`. A table never changes once built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Table {
    length: i32,
    width: i32,
}

impl Table {
    /// Builds a table, rejecting non-positive dimensions.
    pub fn new(length: i32, width: i32) -> Result<Self> {
        if length <= 0 || width <= 0 {
            return Err(Error::InvalidTable { length, width });
        }
        Ok(Self { length, width })
    }

    /// Number of cells along the x axis.
    pub fn length(&self) -> i32 {
        self.length
    }

    /// Number of cells along the y axis.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Returns `true` if `point` lies on the table.
    pub fn contains(&self, point: IVec2) -> bool {
        (0..self.length).contains(&point.x) && (0..self.width).contains(&point.y)
    }
}

impl Default for Table {
    /// The conventional 5x5 table.
    fn default() -> Self {
        Self {
            length: 5,
            width: 5,
        }
    }
}
