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
//! Ships and the identifiers a board hands out for them.
use std::{convert::TryFrom, fmt};

use thiserror::Error;

use crate::board::ErrorKind;

/// Identifies a ship owned by a particular [`Gameboard`][crate::Gameboard]. IDs are only
/// meaningful to the board that issued them; any other board will report them as not
/// found.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ShipId {
    /// Tag of the board that issued this ID.
    board: u64,
    /// Index of the ship in the board's ship arena.
    index: usize,
}

impl ShipId {
    pub(crate) fn new(board: u64, index: usize) -> Self {
        Self { board, index }
    }

    pub(crate) fn board(self) -> u64 {
        self.board
    }

    pub(crate) fn index(self) -> usize {
        self.index
    }
}

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ship #{}", self.index)
    }
}

/// A linear ship of fixed length which counts the hits it has taken.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Ship {
    length: usize,
    hit_count: usize,
}

impl Ship {
    /// Construct an unhit ship with the given length. Fails if the length is not positive.
    pub fn new(length: i64) -> Result<Self, InvalidLengthError> {
        if length < 1 {
            return Err(InvalidLengthError::new(
                InvalidLengthReason::NotPositive,
                length as f64,
            ));
        }
        let length = usize::try_from(length)
            .map_err(|_| InvalidLengthError::new(InvalidLengthReason::TooLarge, length as f64))?;
        Ok(Self {
            length,
            hit_count: 0,
        })
    }

    /// Construct an unhit ship from a length already known to be positive.
    pub(crate) fn with_len(length: usize) -> Self {
        debug_assert!(length > 0);
        Self {
            length,
            hit_count: 0,
        }
    }

    /// Construct an unhit ship from a length that may not be a whole number. Lengths
    /// below 1 are reported as [`InvalidLengthReason::NotPositive`] even if they are also
    /// fractional.
    pub fn from_float(length: f64) -> Result<Self, InvalidLengthError> {
        if length < 1.0 {
            Err(InvalidLengthError::new(
                InvalidLengthReason::NotPositive,
                length,
            ))
        } else if !length.is_finite() || length.fract() != 0.0 {
            Err(InvalidLengthError::new(
                InvalidLengthReason::NotInteger,
                length,
            ))
        } else if length > i64::max_value() as f64 {
            Err(InvalidLengthError::new(InvalidLengthReason::TooLarge, length))
        } else {
            Self::new(length as i64)
        }
    }

    /// Get the length of this ship.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Number of times this ship has been hit. Never exceeds [`len`][Ship::len].
    pub fn hit_count(&self) -> usize {
        self.hit_count
    }

    /// Record a hit on this ship. Hitting a ship which is already sunk does nothing.
    pub fn hit(&mut self) {
        if !self.is_sunk() {
            self.hit_count += 1;
        }
    }

    /// Returns true once the ship has been hit as many times as it is long.
    pub fn is_sunk(&self) -> bool {
        self.hit_count == self.length
    }
}

/// Reason why a ship length was rejected.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum InvalidLengthReason {
    /// The length was zero or negative.
    #[error("ship length must be greater than 0")]
    NotPositive,
    /// The length was not a whole number.
    #[error("ship length must be an integer")]
    NotInteger,
    /// The length does not fit in the address space of this platform.
    #[error("ship length is too large")]
    TooLarge,
}

/// Error returned when constructing a ship with an invalid length.
#[derive(Debug, Error, Copy, Clone, PartialEq)]
#[error("invalid ship length {length}: {reason}")]
pub struct InvalidLengthError {
    #[source]
    reason: InvalidLengthReason,
    length: f64,
}

impl InvalidLengthError {
    fn new(reason: InvalidLengthReason, length: f64) -> Self {
        Self { reason, length }
    }

    /// Get the reason the length was rejected.
    pub fn reason(&self) -> InvalidLengthReason {
        self.reason
    }

    /// The rejected length.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Always [`ErrorKind::InvalidArgument`].
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidArgument
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ship_is_unhit() {
        let ship = Ship::new(3).unwrap();
        assert_eq!(ship.len(), 3);
        assert_eq!(ship.hit_count(), 0);
        assert!(!ship.is_sunk());
    }

    #[test]
    fn rejects_non_positive() {
        for &len in &[0, -1, i64::min_value()] {
            let err = Ship::new(len).unwrap_err();
            assert_eq!(err.reason(), InvalidLengthReason::NotPositive);
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        }
    }

    #[test]
    fn rejects_fractional() {
        let err = Ship::from_float(1.5).unwrap_err();
        assert_eq!(err.reason(), InvalidLengthReason::NotInteger);
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.to_string(), "invalid ship length 1.5: ship length must be an integer");
    }

    #[test]
    fn range_is_checked_before_integrality() {
        assert_eq!(
            Ship::from_float(0.5).unwrap_err().reason(),
            InvalidLengthReason::NotPositive
        );
        assert_eq!(
            Ship::from_float(-1.0).unwrap_err().reason(),
            InvalidLengthReason::NotPositive
        );
    }

    #[test]
    fn rejects_non_finite() {
        assert_eq!(
            Ship::from_float(std::f64::NAN).unwrap_err().reason(),
            InvalidLengthReason::NotInteger
        );
        assert_eq!(
            Ship::from_float(std::f64::INFINITY).unwrap_err().reason(),
            InvalidLengthReason::NotInteger
        );
    }

    #[test]
    fn whole_floats_are_accepted() {
        assert_eq!(Ship::from_float(4.0).unwrap(), Ship::new(4).unwrap());
    }

    #[test]
    fn hits_saturate_at_length() {
        let mut ship = Ship::new(3).unwrap();
        ship.hit();
        assert_eq!(ship.hit_count(), 1);
        ship.hit();
        assert_eq!(ship.hit_count(), 2);
        assert!(!ship.is_sunk());
        ship.hit();
        assert!(ship.is_sunk());
        ship.hit();
        assert_eq!(ship.hit_count(), ship.len());
        assert!(ship.is_sunk());
    }
}
