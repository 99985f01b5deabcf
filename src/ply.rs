//
// This file is part of tictactoe_analysis.
//
// tictactoe_analysis is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// tictactoe_analysis is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with tictactoe_analysis. If not, see <http://www.gnu.org/licenses/>.
//
// Copyright 2016-2017 Chris Foster
//

use std::fmt;
use std::hash::{Hash, Hasher};

/// A board coordinate that a mark may be placed on.
///
/// A ply carries no mark of its own.  The mark is supplied when the ply is
/// placed, so the same enumeration of empty spaces serves both players.
///
/// Coordinates are zero-based.  A ply is only legal for a particular board,
/// see [`Board::is_legal`](crate::Board::is_legal).
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub struct Ply {
    pub row: usize,
    pub column: usize,
}

impl Ply {
    pub fn new(row: usize, column: usize) -> Ply {
        Ply {
            row,
            column,
        }
    }

    /// Returns the row-major index of this ply on a board of side `size`.
    pub fn index(&self, size: usize) -> usize {
        self.row * size + self.column
    }

    /// The inverse of `index`.
    pub fn from_index(index: usize, size: usize) -> Ply {
        Ply::new(index / size, index % size)
    }
}

impl Hash for Ply {
    fn hash<H>(&self, state: &mut H) where H: Hasher {
        state.write_u64(((self.row as u64) << 32) | self.column as u64);
    }
}

impl fmt::Display for Ply {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
