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

//! Errors reported by the board and the search engines.

use thiserror::Error;

use crate::ply::Ply;
use crate::resolution::Resolution;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("board size must be at least 1")]
    InvalidSize,

    #[error("invalid move {0}: coordinates out of bounds")]
    OutOfBounds(Ply),

    #[error("invalid move {0}: space already occupied")]
    Occupied(Ply),

    /// A move was requested on a board that is already resolved.
    #[error("no move to make: game is over ({0})")]
    GameOver(Resolution),

    /// Both players own a complete line.  Alternating legal play can never
    /// produce this, so the board was built by bypassing `execute_ply`.
    #[error("malformed board: X owns {x_lines} line(s) and O owns {o_lines} line(s)")]
    MalformedBoard { x_lines: usize, o_lines: usize },

    /// Only raised under `Cutoff::Reject`.
    #[error("depth limit of {depth} reached on an unresolved board")]
    DepthExhausted { depth: u32 },

    #[error("invalid board notation '{notation}': {reason}")]
    InvalidNotation { notation: String, reason: String },
}

impl Error {
    /// Returns `true` for moves that cannot be made: off the board, onto an
    /// occupied space, or on a board whose game is already over.
    pub fn is_invalid_move(&self) -> bool {
        matches!(*self, Error::OutOfBounds(_) | Error::Occupied(_) | Error::GameOver(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
