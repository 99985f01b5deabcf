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

//! Tools for searching the game tree.
//!
//! Two engines are provided.  [`ExhaustiveSearch`] counts how every
//! continuation within a horizon ends and picks the move with the best
//! win/loss balance.  [`MinimaxSearch`] finds the game-theoretically optimal
//! move.  Both implement [`Search`].

use crate::board::Board;
use crate::error::{Error, Result};
use crate::mark::Mark;
use crate::ply::Ply;

/// The result of a search.
pub trait Analysis {
    /// The move the search settled on.
    fn ply(&self) -> Ply;
}

/// Provides move selection.
pub trait Search {
    type Analysis: Analysis;

    /// Analyzes `board` with `mark` to move.
    ///
    /// Fails with `Error::GameOver` if the board is already resolved; a game
    /// loop must not ask for a move once the game has ended.
    fn search(&mut self, board: &Board, mark: Mark) -> Result<Self::Analysis>;

    /// Searches and returns only the chosen move.
    fn choose_ply(&mut self, board: &Board, mark: Mark) -> Result<Ply> {
        Ok(self.search(board, mark)?.ply())
    }
}

/// Keeps the first candidate and replaces it only with one that is strictly
/// `better`, so among equal values the earliest in iteration order wins.
pub fn select_best<T, I, F>(candidates: I, better: F) -> Option<(Ply, T)> where
    I: IntoIterator<Item = (Ply, T)>,
    F: Fn(&T, &T) -> bool {
    let mut best: Option<(Ply, T)> = None;

    for (ply, value) in candidates {
        let replace = match best {
            Some((_, ref best_value)) => better(&value, best_value),
            None => true,
        };

        if replace {
            best = Some((ply, value));
        }
    }

    best
}

/// Fails with `Error::GameOver` if `board` is resolved.
pub(crate) fn ensure_unresolved(board: &Board) -> Result<()> {
    match board.check_resolution()? {
        Some(resolution) => Err(Error::GameOver(resolution)),
        None => Ok(()),
    }
}

pub use self::exhaustive::{ExhaustiveSearch, OutcomeAnalysis, VisitedKey, VisitedStates};
pub use self::minimax::{Cutoff, MinimaxAnalysis, MinimaxSearch};
pub use self::statistics::Statistics;

mod exhaustive;
mod minimax;
mod statistics;
