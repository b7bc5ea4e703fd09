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
//! Board setup parameters.

use crate::board::Dimensions;

/// Lengths of the ships every board starts with by default, one of each.
pub const STANDARD_FLEET: [i64; 5] = [1, 2, 3, 4, 5];

/// Parameters used to build a [`Gameboard`][crate::Gameboard].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BoardConfig {
    /// Size of the grid.
    pub dimensions: Dimensions,
    /// Lengths of the ships the board starts with, in the order they are offered as
    /// unplaced ships. Validated when the board is built.
    pub fleet: Vec<i64>,
}

impl BoardConfig {
    /// Config for a board with the given dimensions and fleet.
    pub fn new(dimensions: Dimensions, fleet: Vec<i64>) -> Self {
        Self { dimensions, fleet }
    }
}

impl Default for BoardConfig {
    /// An 8x8 grid with one ship of each length from 1 to 5.
    fn default() -> Self {
        Self {
            dimensions: Dimensions::default(),
            fleet: STANDARD_FLEET.to_vec(),
        }
    }
}
