// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Coordinates, directions, and the bounds of the grid.
use std::{borrow::Borrow, convert::TryFrom, fmt};

use enumflags2::BitFlags;

/// The coordinates of a cell in the grid. Signed so that positions left of or below the
/// grid can be expressed and rejected.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Coordinate {
    /// Horizontal position of the cell.
    pub x: i32,
    /// Vertical position of the cell.
    pub y: i32,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `x` and `y`.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Get the coordinate one step away in the given [`Direction`]. Does not check the
    /// bounds of any grid, only returns `None` if the step would overflow `i32`.
    pub fn step(self, dir: Direction) -> Option<Self> {
        let (dx, dy) = dir.delta();
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "(x: {}, y: {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(x, y)` pair.
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Coordinate> for (i32, i32) {
    /// Convert the [`Coordinate`] into an `(x, y)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.x, coord.y)
    }
}

/// Direction a ship extends in from its starting cell.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Direction {
    /// Towards increasing `y`.
    Up = 0b0001,
    /// Towards increasing `x`.
    Right = 0b0010,
    /// Towards decreasing `y`.
    Down = 0b0100,
    /// Towards decreasing `x`.
    Left = 0b1000,
}

impl Direction {
    /// All four directions, in clockwise order starting from [`Direction::Up`].
    pub const ALL: &'static [Direction] = &[
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Offset `(dx, dy)` of a single step in this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, 1),
            Direction::Right => (1, 0),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        })
    }
}

/// Rectangular dimensions of a board grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Dimensions {
    /// Number of columns. This cooresponds to the `x` [`Coordinate`].
    num_cols: usize,
    /// Number of rows. This cooresponds to the `y` [`Coordinate`].
    num_rows: usize,
}

impl Dimensions {
    /// Create new [`Dimensions`] with the given number of columns and rows.
    /// Panics if either is 0, if either does not fit in an `i32` coordinate, or if
    /// `num_cols * num_rows` exceeds `usize::max_value()`.
    pub fn new(num_cols: usize, num_rows: usize) -> Self {
        match Self::try_new(num_cols, num_rows) {
            Some(dim) => dim,
            None => {
                if num_cols == 0 || num_rows == 0 {
                    panic!("Dimensions must be nonzero, got {}x{}", num_cols, num_rows);
                } else {
                    panic!("Dimensions too large: {}x{}", num_cols, num_rows);
                }
            }
        }
    }

    /// Create new [`Dimensions`] with the given number of columns and rows. Returns
    /// `None` under the same conditions where [`Dimensions::new`] would panic.
    pub fn try_new(num_cols: usize, num_rows: usize) -> Option<Self> {
        if num_cols == 0 || num_rows == 0 {
            return None;
        }
        i32::try_from(num_cols).ok()?;
        i32::try_from(num_rows).ok()?;
        num_cols.checked_mul(num_rows).map(|_| Self { num_cols, num_rows })
    }

    /// Number of columns in the grid.
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Number of rows in the grid.
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Total number of cells.
    pub fn total_size(&self) -> usize {
        self.num_cols * self.num_rows
    }

    /// True if either axis of the coordinate is negative or past the end of the grid.
    pub fn is_out_of_bounds<B: Borrow<Coordinate>>(&self, coord: B) -> bool {
        self.try_linearize(coord).is_none()
    }

    /// Convert a coordinate to a linear index within these dimensions.
    /// Returns `None` if the coordinate is out of bounds.
    pub fn try_linearize<B: Borrow<Coordinate>>(&self, coord: B) -> Option<usize> {
        let c = coord.borrow();
        let x = usize::try_from(c.x).ok()?;
        let y = usize::try_from(c.y).ok()?;
        if x < self.num_cols && y < self.num_rows {
            Some(y * self.num_cols + x)
        } else {
            None
        }
    }

    /// Convert a linear index back into a [`Coordinate`]. Only meaningful for
    /// `idx < total_size()`.
    pub fn un_linearize(&self, idx: usize) -> Coordinate {
        // Both axes were checked to fit in i32 at construction.
        Coordinate {
            x: (idx % self.num_cols) as i32,
            y: (idx / self.num_cols) as i32,
        }
    }

    /// Get an iterator over rows of the grid, from `y = 0` upwards. Each row is an
    /// iterator over the coordinates of that row.
    pub fn iter_coordinates(&self) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        let num_cols = self.num_cols as i32;
        (0..self.num_rows as i32).map(move |y| (0..num_cols).map(move |x| Coordinate { x, y }))
    }
}

impl Default for Dimensions {
    /// The standard 8x8 grid.
    fn default() -> Self {
        Self {
            num_cols: 8,
            num_rows: 8,
        }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} x {}", self.num_cols, self.num_rows)
    }
}
