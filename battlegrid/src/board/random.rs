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
//! Random ship placement.
use rand::{
    distributions::{Distribution, Standard},
    seq::SliceRandom,
    Rng,
};

use crate::board::{CannotPlaceReason, Coordinate, Direction, Gameboard, PlaceError};

impl Distribution<Direction> for Standard {
    /// Pick one of the four directions uniformly.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Direction {
        Direction::ALL[rng.gen_range(0, Direction::ALL.len())]
    }
}

impl Gameboard {
    /// Place every ship that is still unplaced, in order, at a random valid position.
    ///
    /// Each ship's start is picked uniformly from the cells where it fits in at least one
    /// direction, then its direction is picked uniformly from the ones that fit there.
    /// If some ship has no room left anywhere, fails with [`CannotPlaceReason::NoRoom`];
    /// ships placed before that point stay placed.
    pub fn place_remaining_randomly<R: Rng>(&mut self, rng: &mut R) -> Result<(), PlaceError> {
        while let Some(&ship) = self.unplaced.first() {
            let starts: Vec<Coordinate> = self
                .grid
                .dim
                .iter_coordinates()
                .flatten()
                .filter(|&start| !self.open_directions(ship, start).is_empty())
                .collect();
            let &start = starts
                .choose(rng)
                .ok_or_else(|| PlaceError::new(ship, CannotPlaceReason::NoRoom))?;
            let open = self.open_directions(ship, start);
            // At least one direction is open, so this terminates.
            let direction = loop {
                let dir: Direction = rng.gen();
                if open.contains(dir) {
                    break dir;
                }
            };
            self.place_ship(ship, start, direction)?;
        }
        Ok(())
    }
}
