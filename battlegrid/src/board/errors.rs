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
//! Errors used by the [`Gameboard`][crate::Gameboard].

use thiserror::Error;

use crate::{
    board::{Coordinate, Dimensions, Direction},
    ships::{InvalidLengthError, ShipId},
};

/// Broad category of a failure, shared by all error types in this crate.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// A ship was constructed with a length that is not a positive integer.
    InvalidArgument,
    /// A coordinate, or the extent of a placement, fell outside the grid.
    OutOfBounds,
    /// The ship is not one of the board's unplaced ships.
    NotFound,
    /// A placement would overlap a ship which is already placed, or there is no room
    /// left for it at all.
    Occupied,
    /// The target cell has already been attacked.
    AlreadyAttacked,
}

/// Error returned when a coordinate falls outside the grid.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("coordinate {coord} is out of range (grid dimensions: {dimensions})")]
pub struct OutOfBoundsError {
    coord: Coordinate,
    dimensions: Dimensions,
}

impl OutOfBoundsError {
    pub(super) fn new(coord: Coordinate, dimensions: Dimensions) -> Self {
        Self { coord, dimensions }
    }

    /// The coordinate which was out of range.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }

    /// Dimensions of the grid the coordinate was checked against.
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Always [`ErrorKind::OutOfBounds`].
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::OutOfBounds
    }
}

/// Reason why a ship could not be placed.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// The ship is not currently one of the board's unplaced ships.
    #[error("ship must be taken from the board's unplaced ships")]
    NotFound,
    /// The starting coordinate is not on the grid.
    #[error("start {start} is out of bounds")]
    OutOfBounds { start: Coordinate },
    /// The start is on the grid, but the ship runs off the edge.
    #[error(
        "a {length}-long ship at {start} in the {direction} direction extends out of bounds"
    )]
    ExtendsOutOfBounds {
        start: Coordinate,
        direction: Direction,
        length: usize,
    },
    /// One of the cells along the ship's path is already occupied.
    #[error("the space at {coord} is already occupied")]
    Occupied { coord: Coordinate },
    /// There is no position left on the grid where the ship fits.
    #[error("there is no room left for the ship")]
    NoRoom,
}

impl CannotPlaceReason {
    /// The [`ErrorKind`] this reason falls under.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CannotPlaceReason::NotFound => ErrorKind::NotFound,
            CannotPlaceReason::OutOfBounds { .. }
            | CannotPlaceReason::ExtendsOutOfBounds { .. } => ErrorKind::OutOfBounds,
            CannotPlaceReason::Occupied { .. } | CannotPlaceReason::NoRoom => {
                ErrorKind::Occupied
            }
        }
    }
}

/// Error caused when attempting to place a ship in an invalid position.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("could not place {ship}: {reason}")]
pub struct PlaceError {
    ship: ShipId,
    #[source]
    reason: CannotPlaceReason,
}

impl PlaceError {
    pub(super) fn new(ship: ShipId, reason: CannotPlaceReason) -> Self {
        Self { ship, reason }
    }

    /// The ship that could not be placed.
    pub fn ship(&self) -> ShipId {
        self.ship
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// The [`ErrorKind`] of the failure.
    pub fn kind(&self) -> ErrorKind {
        self.reason.kind()
    }
}

/// Reason why a particular cell could not be attacked.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotAttackReason {
    /// The cell is not on the grid.
    #[error("the cell is out of bounds")]
    OutOfBounds,
    /// The cell was already the target of an attack.
    #[error("the cell has already been attacked")]
    AlreadyAttacked,
}

/// Error returned when trying to attack a cell.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("could not attack cell {coord}: {reason}")]
pub struct AttackError {
    #[source]
    reason: CannotAttackReason,
    coord: Coordinate,
}

impl AttackError {
    pub(super) fn new(reason: CannotAttackReason, coord: Coordinate) -> Self {
        Self { reason, coord }
    }

    /// Get the reason the attack failed.
    pub fn reason(&self) -> CannotAttackReason {
        self.reason
    }

    /// Get the coordinate of the attacked cell.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }

    /// The [`ErrorKind`] of the failure.
    pub fn kind(&self) -> ErrorKind {
        match self.reason {
            CannotAttackReason::OutOfBounds => ErrorKind::OutOfBounds,
            CannotAttackReason::AlreadyAttacked => ErrorKind::AlreadyAttacked,
        }
    }
}

/// Any error produced by this crate, for callers that want to handle them uniformly.
#[derive(Debug, Error, Copy, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    InvalidLength(#[from] InvalidLengthError),
    #[error(transparent)]
    OutOfBounds(#[from] OutOfBoundsError),
    #[error(transparent)]
    Place(#[from] PlaceError),
    #[error(transparent)]
    Attack(#[from] AttackError),
}

impl Error {
    /// The [`ErrorKind`] of the wrapped error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidLength(err) => err.kind(),
            Error::OutOfBounds(err) => err.kind(),
            Error::Place(err) => err.kind(),
            Error::Attack(err) => err.kind(),
        }
    }
}
