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

//! Exhaustive outcome counting.

use std::fmt;
use std::time::Instant;

use tracing::{debug, trace};

use crate::analysis::OutcomeCount;
use crate::board::Board;
use crate::error::{Error, Result};
use crate::mark::Mark;
use crate::ply::Ply;
use crate::resolution::Resolution;
use super::{ensure_unresolved, select_best, Analysis, Search, Statistics};

pub use self::visited_states::{VisitedKey, VisitedStates};

/// The results of an exhaustive search.
#[derive(Clone, Debug)]
pub struct OutcomeAnalysis {
    /// The mark the search chose a move for.
    pub mark: Mark,
    /// The horizon the counts were gathered with.
    pub horizon: u32,
    /// Every legal move, in row-major order, with the outcomes reachable after it.
    pub candidates: Vec<(Ply, OutcomeCount)>,
    /// The chosen move.
    pub ply: Ply,
    /// `mark`'s wins minus losses after `ply`.
    pub score: i64,
    pub statistics: Statistics,
}

impl OutcomeAnalysis {
    /// The counts gathered for `ply`, if it was a candidate.
    pub fn count(&self, ply: Ply) -> Option<OutcomeCount> {
        self.candidates.iter().find(|candidate| candidate.0 == ply).map(|candidate| candidate.1)
    }

    /// The counts over every candidate.
    pub fn total(&self) -> OutcomeCount {
        self.candidates.iter().map(|candidate| candidate.1).sum()
    }
}

impl Analysis for OutcomeAnalysis {
    fn ply(&self) -> Ply {
        self.ply
    }
}

impl fmt::Display for OutcomeAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Mark: {}", self.mark)?;
        writeln!(f, "Horizon: {}", self.horizon)?;
        write!(f, "Candidates:")?;
        for &(ply, count) in &self.candidates {
            write!(f, "\n  {}: {} (score {})", ply, count, count.score(self.mark))?;
        }
        writeln!(f, "\nSelected: {} (score {})", self.ply, self.score)?;
        write!(f, "Statistics:\n{}", self.statistics)
    }
}

/// Counts, for every legal move, how each continuation within a horizon
/// ends, and picks the move whose continuations favor the mover most.
///
/// The horizon is the number of plies explored, including the candidate
/// move itself.  A branch still unresolved at the horizon contributes
/// nothing, so with a horizon shorter than the number of empty spaces the
/// counts describe only the games that end early.
///
/// Subtree counts are memoized by board contents, mover and remaining
/// horizon.  The table persists across searches, so an engine kept for a
/// whole game reuses work from its earlier turns.
///
/// # Example
///
/// ```rust
/// # use tictactoe_analysis::{Board, Mark, Ply};
/// # use tictactoe_analysis::analysis::search::{ExhaustiveSearch, Search};
/// let board: Board = "OO./XX./...".parse().unwrap();
/// let mut search = ExhaustiveSearch::with_horizon(2);
/// assert_eq!(search.choose_ply(&board, Mark::O).unwrap(), Ply::new(0, 2));
/// ```
pub struct ExhaustiveSearch {
    horizon: Option<u32>,
    visited: VisitedStates,
}

impl ExhaustiveSearch {
    /// Creates an `ExhaustiveSearch` whose horizon is the side length of the
    /// board being searched.
    pub fn new() -> ExhaustiveSearch {
        ExhaustiveSearch {
            horizon: None,
            visited: VisitedStates::new(),
        }
    }

    /// Creates an `ExhaustiveSearch` that explores `horizon` plies.
    pub fn with_horizon(horizon: u32) -> ExhaustiveSearch {
        let mut search = ExhaustiveSearch::new();
        search.horizon = Some(horizon);
        search
    }

    /// `None` restores the default horizon.
    pub fn set_horizon(&mut self, horizon: Option<u32>) {
        self.horizon = horizon;
    }

    /// The horizon this engine will use on `board`.
    pub fn horizon_for(&self, board: &Board) -> u32 {
        self.horizon.unwrap_or(board.size() as u32)
    }

    pub fn visited(&self) -> &VisitedStates {
        &self.visited
    }

    /// Forgets every memoized subtree.
    pub fn clear_visited(&mut self) {
        self.visited.clear();
    }

    /// Returns, for every legal move in row-major order, the outcomes of the
    /// continuations within the horizon.  Unlike `search`, this does not
    /// refuse a resolved board; it simply finds no candidates on one.
    pub fn count_outcomes(&mut self, board: &Board, mark: Mark) -> Result<Vec<(Ply, OutcomeCount)>> {
        if board.check_resolution()?.is_some() {
            return Ok(Vec::new());
        }

        let horizon = self.horizon_for(board);
        self.count_candidates(board, mark, horizon, &mut Statistics::new())
    }

    fn count_candidates(
        &mut self,
        board: &Board,
        mark: Mark,
        horizon: u32,
        statistics: &mut Statistics,
    ) -> Result<Vec<(Ply, OutcomeCount)>> {
        let mut board = board.clone();
        let plies = board.legal_plies().collect::<Vec<_>>();
        let mut candidates = Vec::with_capacity(plies.len());

        for ply in plies {
            let count = {
                let mut next = board.place_scoped(ply, mark);
                self.explore(&mut next, mark.opponent(), horizon, statistics)?
            };
            candidates.push((ply, count));
        }

        Ok(candidates)
    }

    /// Counts the outcomes below `board`, which is `remaining` plies from the
    /// horizon, with `mover` to play.
    fn explore(
        &mut self,
        board: &mut Board,
        mover: Mark,
        remaining: u32,
        statistics: &mut Statistics,
    ) -> Result<OutcomeCount> {
        if remaining == 0 {
            statistics.cutoffs += 1;
            return Ok(OutcomeCount::default());
        }

        // One ply past the last empty space, the horizon can no longer cut anything off.
        let remaining = remaining.min(board.empty_count() as u32 + 1);

        let key = VisitedKey::new(board, mover, remaining);
        if let Some(count) = self.visited.get(&key) {
            statistics.cache_hits += 1;
            return Ok(count);
        }

        let count = match board.check_resolution()? {
            Some(resolution) => {
                statistics.evaluated += 1;
                OutcomeCount::from(resolution)
            },
            None => {
                statistics.visited += 1;

                let plies = board.legal_plies().collect::<Vec<_>>();
                let mut count = OutcomeCount::default();
                for ply in plies {
                    let mut next = board.place_scoped(ply, mover);
                    count += self.explore(&mut next, mover.opponent(), remaining - 1, statistics)?;
                }
                count
            },
        };

        self.visited.insert(key, count);
        statistics.cache_stores += 1;
        Ok(count)
    }
}

impl Default for ExhaustiveSearch {
    fn default() -> ExhaustiveSearch {
        ExhaustiveSearch::new()
    }
}

impl Search for ExhaustiveSearch {
    type Analysis = OutcomeAnalysis;

    fn search(&mut self, board: &Board, mark: Mark) -> Result<OutcomeAnalysis> {
        ensure_unresolved(board)?;

        let start = Instant::now();
        let horizon = self.horizon_for(board);
        let mut statistics = Statistics::new();

        let candidates = self.count_candidates(board, mark, horizon, &mut statistics)?;

        for &(ply, count) in &candidates {
            debug!(
                ply = %ply,
                wins = count.wins(mark),
                losses = count.losses(mark),
                ties = count.ties,
                score = count.score(mark),
                "candidate"
            );
        }

        let (ply, score) = select_best(
            candidates.iter().map(|&(ply, count)| (ply, count.score(mark))),
            |score, best| score > best,
        ).ok_or(Error::GameOver(Resolution::Tie))?;

        statistics.stop_clock(start);

        debug!(mark = %mark, ply = %ply, score, horizon, "selected move");
        trace!(visited = self.visited.len(), hits = statistics.cache_hits, "visited states");

        Ok(OutcomeAnalysis {
            mark,
            horizon,
            candidates,
            ply,
            score,
            statistics,
        })
    }
}

mod visited_states;
