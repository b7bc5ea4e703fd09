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
//! Rules engine for one player's side of a game of Battleship.
//!
//! A [`Gameboard`] owns an 8x8 grid and a fleet of [`Ship`]s. Callers take a ship from
//! the board's unplaced ships, place it at a starting [`Coordinate`] extending in a
//! [`Direction`], and then attack cells until [`Gameboard::all_ships_sunk`] reports that
//! the fleet is gone. Turn order, rendering and opponents are left to the caller.
//!
//! ```
//! use battlegrid::{AttackOutcome, Coordinate, Direction, Gameboard};
//!
//! let mut board = Gameboard::new();
//! let ship = board.get_unplaced_ship(2).unwrap();
//! board.place_ship(ship, Coordinate::new(2, 2), Direction::Up).unwrap();
//!
//! assert_eq!(board.receive_attack(Coordinate::new(0, 0)), Ok(AttackOutcome::Miss));
//! assert_eq!(board.receive_attack(Coordinate::new(2, 2)), Ok(AttackOutcome::Hit(ship)));
//! assert_eq!(board.receive_attack(Coordinate::new(2, 3)), Ok(AttackOutcome::Defeated(ship)));
//! assert!(board.all_ships_sunk());
//! ```
//!
//! The `rng_gen` feature adds [`Gameboard::place_remaining_randomly`] and random
//! sampling of [`Direction`]s.

pub mod board;
pub mod ships;

pub use crate::{
    board::{
        AttackError, AttackOutcome, BoardConfig, CannotAttackReason, CannotPlaceReason, Cell,
        Coordinate, Dimensions, Direction, Error, ErrorKind, Gameboard, OutOfBoundsError,
        PlaceError, ShipRef,
    },
    ships::{InvalidLengthError, InvalidLengthReason, Ship, ShipId},
};
