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
//! Types that make up the game board.

use std::{
    ops::Deref,
    sync::atomic::{AtomicU64, Ordering},
};

use enumflags2::BitFlags;
use log::{debug, info, trace};

use crate::ships::{InvalidLengthError, Ship, ShipId};

use self::grid::Grid;
pub use self::{
    config::{BoardConfig, STANDARD_FLEET},
    dimensions::{Coordinate, Dimensions, Direction},
    errors::{
        AttackError, CannotAttackReason, CannotPlaceReason, Error, ErrorKind, OutOfBoundsError,
        PlaceError,
    },
    grid::Cell,
};

mod config;
mod dimensions;
mod errors;
mod grid;
#[cfg(feature = "rng_gen")]
mod random;

/// Source of the tags that tie each [`ShipId`] to the board that issued it.
static NEXT_BOARD_TAG: AtomicU64 = AtomicU64::new(0);

/// A ship owned by the board together with where it was placed, if anywhere.
#[derive(Debug, Clone)]
struct ShipInfo {
    ship: Ship,
    placement: Option<Box<[Coordinate]>>,
}

/// Handle to a ship on a board that allows getting information about its status.
/// Dereferences to the [`Ship`] itself.
#[derive(Debug, Copy, Clone)]
pub struct ShipRef<'a> {
    id: ShipId,
    info: &'a ShipInfo,
}

impl<'a> ShipRef<'a> {
    /// Get the ID of the ship.
    pub fn id(&self) -> ShipId {
        self.id
    }

    /// The cells this ship occupies, starting from the cell it was placed at. `None` if
    /// the ship has not been placed.
    pub fn placement(&self) -> Option<&'a [Coordinate]> {
        self.info.placement.as_deref()
    }
}

impl Deref for ShipRef<'_> {
    type Target = Ship;

    fn deref(&self) -> &Ship {
        &self.info.ship
    }
}

/// Result of an attack on the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AttackOutcome {
    /// The attack did not hit anything.
    Miss,
    /// The attack hit the ship with the given ID, but did not sink it.
    Hit(ShipId),
    /// The attack sank the ship with the given ID, but other ships are still afloat.
    Sunk(ShipId),
    /// The attack sank the ship with the given ID, and every placed ship is now sunk.
    Defeated(ShipId),
}

impl AttackOutcome {
    /// Get the id of the ship that was hit.
    pub fn ship(&self) -> Option<ShipId> {
        match *self {
            AttackOutcome::Miss => None,
            AttackOutcome::Hit(id) | AttackOutcome::Sunk(id) | AttackOutcome::Defeated(id) => {
                Some(id)
            }
        }
    }
}

/// A single player's board: the grid, the ships still waiting to be placed, and the
/// ships that are on the grid.
#[derive(Debug, Clone)]
pub struct Gameboard {
    /// Tag stamped into every [`ShipId`] this board issues.
    tag: u64,

    /// Grid of cells.
    grid: Grid,

    /// Every ship owned by this board, indexed by the arena index in its `ShipId`.
    ships: Vec<ShipInfo>,

    /// Ships not yet on the grid, in the order they are offered.
    unplaced: Vec<ShipId>,

    /// Ships on the grid, in the order they were placed.
    placed: Vec<ShipId>,

    /// Set once an attack leaves every placed ship sunk.
    game_over: bool,
}

impl Gameboard {
    /// Create a standard board: an 8x8 grid with one unplaced ship of each length from 1
    /// to 5.
    pub fn new() -> Self {
        let fleet = STANDARD_FLEET
            .iter()
            .map(|&len| Ship::with_len(len as usize))
            .collect();
        Self::with_ships(Dimensions::default(), fleet)
    }

    /// Create a board from the given config. Fails if any of the fleet lengths is not a
    /// valid ship length.
    pub fn from_config(config: &BoardConfig) -> Result<Self, InvalidLengthError> {
        let fleet = config
            .fleet
            .iter()
            .map(|&len| Ship::new(len))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::with_ships(config.dimensions, fleet))
    }

    fn with_ships(dim: Dimensions, fleet: Vec<Ship>) -> Self {
        let tag = NEXT_BOARD_TAG.fetch_add(1, Ordering::Relaxed);
        let unplaced = (0..fleet.len()).map(|i| ShipId::new(tag, i)).collect();
        let ships = fleet
            .into_iter()
            .map(|ship| ShipInfo {
                ship,
                placement: None,
            })
            .collect();
        Self {
            tag,
            grid: Grid::new(dim),
            ships,
            unplaced,
            placed: Vec::new(),
            game_over: false,
        }
    }

    /// Get the [`Dimensions`] of this board.
    pub fn dimensions(&self) -> &Dimensions {
        &self.grid.dim
    }

    /// Number of rows in the grid.
    pub fn num_rows(&self) -> usize {
        self.grid.dim.num_rows()
    }

    /// Number of columns in the grid.
    pub fn num_cols(&self) -> usize {
        self.grid.dim.num_cols()
    }

    /// Get the state of the cell at the given coordinate. Returns `None` if the
    /// coordinate is out of bounds.
    pub fn cell(&self, coord: Coordinate) -> Option<Cell> {
        self.grid.get(coord).copied()
    }

    /// Get an iterator over the rows of the grid, from `y = 0` upwards. Each row is an
    /// iterator over the coordinates and states of the cells in that row.
    pub fn rows<'a>(
        &'a self,
    ) -> impl 'a + Iterator<Item = impl 'a + Iterator<Item = (Coordinate, Cell)>> {
        let grid = &self.grid;
        grid.dim
            .iter_coordinates()
            .map(move |row| row.map(move |coord| (coord, grid[coord])))
    }

    /// Get the ship with the specified ID if this board owns it.
    pub fn ship(&self, id: ShipId) -> Option<ShipRef> {
        if id.board() == self.tag && id.index() < self.ships.len() {
            Some(self.ship_ref(id))
        } else {
            None
        }
    }

    /// Get an iterator over the ships which have not been placed yet, in order.
    pub fn unplaced_ships<'a>(&'a self) -> impl 'a + Iterator<Item = ShipRef<'a>> {
        self.unplaced.iter().map(move |&id| self.ship_ref(id))
    }

    /// Get an iterator over the ships on the grid, in the order they were placed.
    pub fn placed_ships<'a>(&'a self) -> impl 'a + Iterator<Item = ShipRef<'a>> {
        self.placed.iter().map(move |&id| self.ship_ref(id))
    }

    /// Get the first unplaced ship with the given length, if there is one.
    pub fn get_unplaced_ship(&self, length: usize) -> Option<ShipId> {
        self.unplaced_ships()
            .find(|ship| ship.len() == length)
            .map(|ship| ship.id())
    }

    /// True if either axis of the coordinate is negative or past the end of the grid.
    pub fn is_out_of_bounds(&self, coord: Coordinate) -> bool {
        self.grid.dim.is_out_of_bounds(coord)
    }

    /// True if the cell at the coordinate is [`Cell::Empty`]. Out of bounds coordinates
    /// are never blank.
    pub fn is_blank(&self, coord: Coordinate) -> bool {
        self.grid.get(coord) == Some(&Cell::Empty)
    }

    /// Get the coordinate adjacent to `coord` in the given direction, failing if it is
    /// not on the grid.
    pub fn next_coord(
        &self,
        coord: Coordinate,
        direction: Direction,
    ) -> Result<Coordinate, OutOfBoundsError> {
        let (dx, dy) = direction.delta();
        // Saturate so the error still reports a coordinate near the edge.
        let next = coord.step(direction).unwrap_or_else(|| {
            Coordinate::new(coord.x.saturating_add(dx), coord.y.saturating_add(dy))
        });
        if self.is_out_of_bounds(next) {
            Err(OutOfBoundsError::new(next, self.grid.dim))
        } else {
            Ok(next)
        }
    }

    /// Check whether the ship could be placed at `start` extending in `direction`,
    /// without placing it. On success returns the cells the ship would occupy, starting
    /// with `start`. A start outside the grid is reported before an unknown ship.
    pub fn check_placement(
        &self,
        ship: ShipId,
        start: Coordinate,
        direction: Direction,
    ) -> Result<Vec<Coordinate>, PlaceError> {
        if self.is_out_of_bounds(start) {
            return Err(PlaceError::new(
                ship,
                CannotPlaceReason::OutOfBounds { start },
            ));
        }
        if !self.is_unplaced(ship) {
            return Err(PlaceError::new(ship, CannotPlaceReason::NotFound));
        }
        let length = self.ships[ship.index()].ship.len();
        // A path never holds more cells than the longest axis, whatever the ship length.
        let mut path = Vec::with_capacity(length.min(self.num_cols().max(self.num_rows())));
        let mut coord = start;
        loop {
            if !self.is_blank(coord) {
                return Err(PlaceError::new(
                    ship,
                    CannotPlaceReason::Occupied { coord },
                ));
            }
            path.push(coord);
            if path.len() == length {
                return Ok(path);
            }
            coord = self.next_coord(coord, direction).map_err(|_| {
                PlaceError::new(
                    ship,
                    CannotPlaceReason::ExtendsOutOfBounds {
                        start,
                        direction,
                        length,
                    },
                )
            })?;
        }
    }

    /// Get the set of directions in which the ship could currently be placed from
    /// `start`. Empty if the ship cannot be placed there at all.
    pub fn open_directions(&self, ship: ShipId, start: Coordinate) -> BitFlags<Direction> {
        let mut open = BitFlags::empty();
        for &dir in Direction::ALL {
            if self.check_placement(ship, start, dir).is_ok() {
                open.insert(dir);
            }
        }
        open
    }

    /// Place an unplaced ship on the grid starting at `start` and extending in
    /// `direction`. Nothing is modified if placement fails.
    pub fn place_ship(
        &mut self,
        ship: ShipId,
        start: Coordinate,
        direction: Direction,
    ) -> Result<(), PlaceError> {
        let path = self.check_placement(ship, start, direction)?;
        // Already ensured that every position is valid and blank.
        for &coord in &path {
            self.grid[coord] = Cell::Occupied(ship);
        }
        self.unplaced.retain(|&id| id != ship);
        self.placed.push(ship);
        self.ships[ship.index()].placement = Some(path.into_boxed_slice());
        debug!(
            "placed {} ({}-long) at {} facing {}",
            ship,
            self.ships[ship.index()].ship.len(),
            start,
            direction
        );
        Ok(())
    }

    /// Attack the cell at the given coordinate. Attacking a cell twice is an error.
    /// Placement of further ships or attacks after every ship is sunk are not prevented.
    pub fn receive_attack(&mut self, coord: Coordinate) -> Result<AttackOutcome, AttackError> {
        let cell = match self.grid.get_mut(coord) {
            None => return Err(AttackError::new(CannotAttackReason::OutOfBounds, coord)),
            Some(cell) if cell.attacked() => {
                return Err(AttackError::new(CannotAttackReason::AlreadyAttacked, coord))
            }
            Some(cell) => cell,
        };
        let current = *cell;
        let id = match current {
            Cell::Occupied(id) => {
                *cell = Cell::Hit(id);
                id
            }
            _ => {
                *cell = Cell::Miss;
                trace!("attack at {} missed", coord);
                return Ok(AttackOutcome::Miss);
            }
        };
        let ship = &mut self.ships[id.index()].ship;
        ship.hit();
        let sunk = ship.is_sunk();
        trace!("attack at {} hit {}", coord, id);
        Ok(if self.all_ships_sunk() {
            self.game_over = true;
            info!("all placed ships sunk, game over");
            AttackOutcome::Defeated(id)
        } else if sunk {
            AttackOutcome::Sunk(id)
        } else {
            AttackOutcome::Hit(id)
        })
    }

    /// Returns true if every placed ship has been sunk. True when no ships have been
    /// placed.
    pub fn all_ships_sunk(&self) -> bool {
        self.placed_ships().all(|ship| ship.is_sunk())
    }

    /// Returns true once an attack has left every placed ship sunk.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Whether the given ship belongs to this board and is still waiting to be placed.
    fn is_unplaced(&self, ship: ShipId) -> bool {
        ship.board() == self.tag && self.unplaced.contains(&ship)
    }

    fn ship_ref(&self, id: ShipId) -> ShipRef {
        ShipRef {
            id,
            info: &self.ships[id.index()],
        }
    }
}

impl Default for Gameboard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(x: i32, y: i32) -> Coordinate {
        Coordinate::new(x, y)
    }

    #[test]
    fn ship_ids_are_board_specific() {
        let a = Gameboard::new();
        let b = Gameboard::new();
        let id = a.get_unplaced_ship(3).unwrap();
        assert!(a.ship(id).is_some());
        assert!(b.ship(id).is_none());
    }

    #[test]
    fn check_placement_does_not_mutate() {
        let board = Gameboard::new();
        let id = board.get_unplaced_ship(2).unwrap();
        let path = board.check_placement(id, coord(3, 3), Direction::Right).unwrap();
        assert_eq!(path, vec![coord(3, 3), coord(4, 3)]);
        assert!(board.is_blank(coord(3, 3)));
        assert_eq!(board.unplaced_ships().count(), 5);
    }

    #[test]
    fn open_directions_in_corner() {
        let board = Gameboard::new();
        let id = board.get_unplaced_ship(3).unwrap();
        assert_eq!(
            board.open_directions(id, coord(0, 0)),
            Direction::Up | Direction::Right
        );
        assert_eq!(
            board.open_directions(id, coord(7, 7)),
            Direction::Down | Direction::Left
        );
        assert!(board.open_directions(id, coord(-1, 0)).is_empty());
    }

    #[test]
    fn single_cell_ship_is_open_everywhere() {
        let board = Gameboard::new();
        let id = board.get_unplaced_ship(1).unwrap();
        assert_eq!(board.open_directions(id, coord(0, 0)), BitFlags::all());
    }

    #[test]
    fn occupied_reported_before_overflow() {
        let mut board = Gameboard::new();
        let blocker = board.get_unplaced_ship(1).unwrap();
        board.place_ship(blocker, coord(7, 0), Direction::Up).unwrap();
        let id = board.get_unplaced_ship(5).unwrap();
        let err = board.place_ship(id, coord(6, 0), Direction::Right).unwrap_err();
        assert_eq!(
            err.reason(),
            CannotPlaceReason::Occupied { coord: coord(7, 0) }
        );
    }

    #[test]
    fn placement_is_recorded_on_ship() {
        let mut board = Gameboard::new();
        let id = board.get_unplaced_ship(2).unwrap();
        assert_eq!(board.ship(id).unwrap().placement(), None);
        board.place_ship(id, coord(5, 5), Direction::Down).unwrap();
        assert_eq!(
            board.ship(id).unwrap().placement(),
            Some(&[coord(5, 5), coord(5, 4)][..])
        );
    }

    #[test]
    fn placed_ship_cannot_be_placed_again() {
        let mut board = Gameboard::new();
        let id = board.get_unplaced_ship(2).unwrap();
        board.place_ship(id, coord(0, 0), Direction::Up).unwrap();
        let err = board.place_ship(id, coord(4, 4), Direction::Up).unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::NotFound);
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn start_bounds_checked_before_ownership() {
        let other = Gameboard::new();
        let foreign = other.get_unplaced_ship(3).unwrap();
        let mut board = Gameboard::new();
        let err = board.place_ship(foreign, coord(-1, -1), Direction::Up).unwrap_err();
        assert_eq!(
            err.reason(),
            CannotPlaceReason::OutOfBounds {
                start: coord(-1, -1)
            }
        );
        let err = board.place_ship(foreign, coord(0, 0), Direction::Up).unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::NotFound);
    }

    #[test]
    fn standard_fleet_is_unhit() {
        let board = Gameboard::new();
        let lengths: Vec<_> = board.unplaced_ships().map(|ship| ship.len()).collect();
        assert_eq!(lengths, vec![1, 2, 3, 4, 5]);
        assert!(board.unplaced_ships().all(|ship| ship.hit_count() == 0));
    }

    #[test]
    fn attack_out_of_bounds() {
        let mut board = Gameboard::new();
        let err = board.receive_attack(coord(8, 0)).unwrap_err();
        assert_eq!(err.reason(), CannotAttackReason::OutOfBounds);
        assert_eq!(err.kind(), ErrorKind::OutOfBounds);
    }

    #[test]
    fn attack_outcomes() {
        let mut board = Gameboard::new();
        let two = board.get_unplaced_ship(2).unwrap();
        let one = board.get_unplaced_ship(1).unwrap();
        board.place_ship(two, coord(0, 0), Direction::Right).unwrap();
        board.place_ship(one, coord(5, 5), Direction::Up).unwrap();

        assert_eq!(board.receive_attack(coord(3, 3)), Ok(AttackOutcome::Miss));
        assert_eq!(board.receive_attack(coord(0, 0)), Ok(AttackOutcome::Hit(two)));
        assert_eq!(board.receive_attack(coord(1, 0)), Ok(AttackOutcome::Sunk(two)));
        assert!(!board.is_game_over());
        assert_eq!(
            board.receive_attack(coord(5, 5)),
            Ok(AttackOutcome::Defeated(one))
        );
        assert!(board.is_game_over());
        assert_eq!(board.cell(coord(0, 0)), Some(Cell::Hit(two)));
        assert_eq!(board.cell(coord(3, 3)), Some(Cell::Miss));
    }

    #[test]
    fn next_coord_error_names_coordinate() {
        let board = Gameboard::new();
        let err = board.next_coord(coord(0, 0), Direction::Down).unwrap_err();
        assert_eq!(err.coord(), coord(0, -1));
        assert_eq!(
            err.to_string(),
            "coordinate (x: 0, y: -1) is out of range (grid dimensions: 8 x 8)"
        );
    }
}
