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
//! Defines the cells of the grid and their storage.

use std::{
    borrow::Borrow,
    ops::{Index, IndexMut},
};

use crate::{
    board::{Coordinate, Dimensions},
    ships::ShipId,
};

/// State of a single cell in the grid.
///
/// Cells only ever move `Empty -> Occupied` (placement), `Empty -> Miss` or
/// `Occupied -> Hit` (attack).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Cell {
    /// Nothing here and not attacked yet.
    Empty,
    /// Attacked, but there was nothing here.
    Miss,
    /// Attacked, and the given ship was hit.
    Hit(ShipId),
    /// The given ship occupies this cell and it has not been attacked yet.
    Occupied(ShipId),
}

impl Cell {
    /// Whether this cell has been the target of an attack.
    pub fn attacked(&self) -> bool {
        match self {
            Cell::Miss | Cell::Hit(_) => true,
            Cell::Empty | Cell::Occupied(_) => false,
        }
    }

    /// The ship placed on this cell, whether or not it has been hit.
    pub fn ship(&self) -> Option<ShipId> {
        match *self {
            Cell::Hit(id) | Cell::Occupied(id) => Some(id),
            Cell::Empty | Cell::Miss => None,
        }
    }
}

/// Cell storage for a [`Gameboard`][crate::Gameboard], linearized row by row.
#[derive(Debug, Clone)]
pub(super) struct Grid {
    /// Dimensions of this grid.
    pub(super) dim: Dimensions,
    /// Cells that make up this grid.
    pub(super) cells: Box<[Cell]>,
}

impl Grid {
    pub(super) fn new(dim: Dimensions) -> Self {
        let cells = vec![Cell::Empty; dim.total_size()].into_boxed_slice();
        Self { dim, cells }
    }

    /// Get a reference to the cell at the given [`Coordinate`].
    pub(super) fn get<B: Borrow<Coordinate>>(&self, coord: B) -> Option<&Cell> {
        self.dim.try_linearize(coord).and_then(|i| self.cells.get(i))
    }

    /// Get a mutable reference to the cell at the given [`Coordinate`].
    pub(super) fn get_mut<B: Borrow<Coordinate>>(&mut self, coord: B) -> Option<&mut Cell> {
        self.dim
            .try_linearize(coord)
            .and_then(move |i| self.cells.get_mut(i))
    }
}

impl<B: Borrow<Coordinate>> Index<B> for Grid {
    type Output = Cell;

    fn index(&self, coord: B) -> &Self::Output {
        self.get(coord).expect("coordinate out of bounds")
    }
}

impl<B: Borrow<Coordinate>> IndexMut<B> for Grid {
    fn index_mut(&mut self, coord: B) -> &mut Self::Output {
        self.get_mut(coord).expect("coordinate out of bounds")
    }
}
