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

//! Depth-limited minimax.

use std::fmt;
use std::time::Instant;

use tracing::debug;

use crate::board::Board;
use crate::error::{Error, Result};
use crate::mark::Mark;
use crate::ply::Ply;
use crate::resolution::Resolution;
use super::{ensure_unresolved, select_best, Analysis, Search, Statistics};

/// What an unresolved board is worth when the depth limit is reached.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Cutoff {
    /// Score it as a draw.
    Draw,
    /// Abandon the search with `Error::DepthExhausted`.
    Reject,
}

impl Default for Cutoff {
    fn default() -> Cutoff {
        Cutoff::Draw
    }
}

/// The results of a minimax search.
#[derive(Clone, Debug)]
pub struct MinimaxAnalysis {
    pub mark: Mark,
    /// The depth limit the search ran with.
    pub depth: u32,
    pub ply: Ply,
    /// `+1` if O wins with best play, `-1` if X does, `0` otherwise.
    pub score: i8,
    /// `false` if the depth limit cut off any line, in which case `score`
    /// may count an undecided position as a draw.
    pub exact: bool,
    pub statistics: Statistics,
}

impl Analysis for MinimaxAnalysis {
    fn ply(&self) -> Ply {
        self.ply
    }
}

impl fmt::Display for MinimaxAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Mark: {}", self.mark)?;
        writeln!(f, "Depth: {}", self.depth)?;
        writeln!(f, "Selected: {}", self.ply)?;
        writeln!(f, "Score: {}{}", self.score, if self.exact { "" } else { " (depth limited)" })?;
        write!(f, "Statistics:\n{}", self.statistics)
    }
}

/// Plain minimax, without pruning or memoization.
///
/// O maximizes and X minimizes a score of `+1` for an O win, `-1` for an X
/// win and `0` for a tie.  Among equally scored moves the first in row-major
/// order is kept.
///
/// # Example
///
/// ```rust
/// # use tictactoe_analysis::{Board, Mark, Ply};
/// # use tictactoe_analysis::analysis::search::{MinimaxSearch, Search};
/// let board: Board = ".../.X./OO.".parse().unwrap();
/// let mut search = MinimaxSearch::new();
/// let analysis = search.search(&board, Mark::X).unwrap();
/// assert_eq!(analysis.ply, Ply::new(2, 2));
/// assert_eq!(analysis.score, 0);
/// ```
pub struct MinimaxSearch {
    depth: Option<u32>,
    cutoff: Cutoff,
}

impl MinimaxSearch {
    /// Creates a `MinimaxSearch` limited only by the number of spaces on the board.
    pub fn new() -> MinimaxSearch {
        MinimaxSearch {
            depth: None,
            cutoff: Cutoff::default(),
        }
    }

    /// Creates a `MinimaxSearch` that looks at most `depth` plies ahead.
    pub fn with_depth(depth: u32) -> MinimaxSearch {
        let mut search = MinimaxSearch::new();
        search.depth = Some(depth);
        search
    }

    pub fn with_cutoff(mut self, cutoff: Cutoff) -> MinimaxSearch {
        self.cutoff = cutoff;
        self
    }

    /// `None` restores the default depth.
    pub fn set_depth(&mut self, depth: Option<u32>) {
        self.depth = depth;
    }

    /// The depth limit this engine will use on `board`.  At least one ply is
    /// always searched.
    pub fn depth_for(&self, board: &Board) -> u32 {
        self.depth.unwrap_or(board.cells().len() as u32).max(1)
    }

    /// Scores `board` with `mover` to play and returns the best move, if the
    /// board was expanded.
    pub fn score(&self, board: &Board, mover: Mark) -> Result<(Option<Ply>, i8)> {
        let limit = self.depth_for(board);
        self.minimax(&mut board.clone(), mover, limit, limit, &mut Statistics::new())
    }

    fn minimax(
        &self,
        board: &mut Board,
        mover: Mark,
        depth: u32,
        limit: u32,
        statistics: &mut Statistics,
    ) -> Result<(Option<Ply>, i8)> {
        if let Some(resolution) = board.check_resolution()? {
            statistics.evaluated += 1;
            return Ok((None, resolution.score()));
        }

        if depth == 0 {
            statistics.cutoffs += 1;
            return match self.cutoff {
                Cutoff::Draw => Ok((None, 0)),
                Cutoff::Reject => Err(Error::DepthExhausted { depth: limit }),
            };
        }

        statistics.visited += 1;

        let plies = board.legal_plies().collect::<Vec<_>>();
        let mut scored = Vec::with_capacity(plies.len());
        for ply in plies {
            let mut next = board.place_scoped(ply, mover);
            let (_, score) = self.minimax(&mut next, mover.opponent(), depth - 1, limit, statistics)?;
            scored.push((ply, score));
        }

        Ok(match select_best(scored, |&score, &best| prefers(mover, score, best)) {
            Some((ply, score)) => (Some(ply), score),
            None => (None, 0),
        })
    }
}

impl Default for MinimaxSearch {
    fn default() -> MinimaxSearch {
        MinimaxSearch::new()
    }
}

/// O wants the higher score, X the lower.
fn prefers(mover: Mark, score: i8, best: i8) -> bool {
    match mover {
        Mark::O => score > best,
        Mark::X => score < best,
    }
}

impl Search for MinimaxSearch {
    type Analysis = MinimaxAnalysis;

    fn search(&mut self, board: &Board, mark: Mark) -> Result<MinimaxAnalysis> {
        ensure_unresolved(board)?;

        let start = Instant::now();
        let depth = self.depth_for(board);
        let mut statistics = Statistics::new();

        let (ply, score) = self.minimax(&mut board.clone(), mark, depth, depth, &mut statistics)?;
        let ply = ply.ok_or(Error::GameOver(Resolution::Tie))?;

        statistics.stop_clock(start);

        let exact = statistics.cutoffs == 0;
        debug!(mark = %mark, ply = %ply, score, depth, exact, visited = statistics.visited, "selected move");

        Ok(MinimaxAnalysis {
            mark,
            depth,
            ply,
            score,
            exact,
            statistics,
        })
    }
}

#[cfg(test)]
mod test {
    use lazy_static::lazy_static;

    use crate::analysis::search::Search;
    use crate::board::Board;
    use crate::error::Error;
    use crate::mark::Mark;
    use crate::ply::Ply;
    use crate::resolution::Resolution;
    use super::{Cutoff, MinimaxSearch};

    lazy_static! {
        static ref EMPTY: Board = Board::new(3).unwrap();
    }

    fn board(notation: &str) -> Board {
        notation.parse().unwrap()
    }

    #[test]
    fn test_blocks_to_hold_the_draw() {
        // O threatens the bottom row; only (2,2), the last empty space in
        // row-major order, keeps X from losing.
        let analysis = MinimaxSearch::new().search(&board(".../.X./OO."), Mark::X).unwrap();
        assert_eq!(analysis.ply, Ply::new(2, 2));
        assert_eq!(analysis.score, 0);
        assert!(analysis.exact);
    }

    #[test]
    fn test_blocks_even_when_lost() {
        // With an extra tempo O forks after the block, so every move loses and
        // the first one, the block, is kept.
        let analysis = MinimaxSearch::new().search(&board("OO./.../..."), Mark::X).unwrap();
        assert_eq!(analysis.ply, Ply::new(0, 2));
        assert_eq!(analysis.score, 1);
    }

    #[test]
    fn test_takes_the_win() {
        let analysis = MinimaxSearch::new().search(&board(".../XX./OO."), Mark::O).unwrap();
        assert_eq!(analysis.ply, Ply::new(2, 2));
        assert_eq!(analysis.score, 1);
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        for &mark in &[Mark::O, Mark::X] {
            let analysis = MinimaxSearch::new().search(&EMPTY, mark).unwrap();
            assert_eq!(analysis.ply, Ply::new(0, 0));
            assert_eq!(analysis.score, 0);
            assert_eq!(analysis.depth, 9);
            assert!(analysis.exact);
        }
    }

    #[test]
    fn test_deterministic() {
        let board = board("X../.O./...");
        let mut search = MinimaxSearch::new();
        let first = search.search(&board, Mark::X).unwrap();
        let second = search.search(&board, Mark::X).unwrap();

        assert_eq!(first.ply, second.ply);
        assert_eq!(first.score, second.score);
        assert_eq!(first.statistics.visited, second.statistics.visited);
    }

    #[test]
    fn test_depth_cutoff_is_distinguishable() {
        let shallow = MinimaxSearch::with_depth(2).search(&EMPTY, Mark::O).unwrap();
        assert_eq!(shallow.score, 0);
        assert!(!shallow.exact);
        assert!(shallow.statistics.cutoffs > 0);

        let strict = MinimaxSearch::with_depth(2).with_cutoff(Cutoff::Reject).search(&EMPTY, Mark::O);
        assert_eq!(strict.unwrap_err(), Error::DepthExhausted { depth: 2 });

        // A win found within the limit is never affected by the cutoff policy.
        let near = board(".../XX./OO.");
        let analysis = MinimaxSearch::with_depth(1).with_cutoff(Cutoff::Draw).search(&near, Mark::O).unwrap();
        assert_eq!(analysis.ply, Ply::new(2, 2));
        assert_eq!(analysis.score, 1);
    }

    #[test]
    fn test_zero_depth_still_expands_one_ply() {
        let mut search = MinimaxSearch::with_depth(0);
        let analysis = search.search(&board(".../XX./OO."), Mark::O).unwrap();
        assert_eq!(analysis.depth, 1);
        assert_eq!(analysis.ply, Ply::new(2, 2));

        search.set_depth(None);
        assert_eq!(search.depth_for(&EMPTY), 9);
    }

    #[test]
    fn test_refuses_resolved_board() {
        let mut search = MinimaxSearch::new();
        let error = search.choose_ply(&board("XOX/XOO/OXX"), Mark::X).unwrap_err();
        assert_eq!(error, Error::GameOver(Resolution::Tie));
        assert!(error.is_invalid_move());
        assert_eq!(
            search.choose_ply(&board("OOO/XX./..."), Mark::X).unwrap_err(),
            Error::GameOver(Resolution::Win(Mark::O)),
        );
    }

    #[test]
    fn test_self_play_draws() {
        let mut board = EMPTY.clone();
        let mut x = MinimaxSearch::new();
        let mut o = MinimaxSearch::new();
        let mut mark = Mark::X;

        while board.check_resolution().unwrap().is_none() {
            let ply = match mark {
                Mark::X => x.choose_ply(&board, mark).unwrap(),
                Mark::O => o.choose_ply(&board, mark).unwrap(),
            };
            board.execute_ply(ply, mark).unwrap();
            mark = mark.opponent();
        }

        assert_eq!(board.check_resolution().unwrap(), Some(Resolution::Tie));
    }

    #[test]
    fn test_score_without_selection() {
        let search = MinimaxSearch::new();
        assert_eq!(search.score(&board("OOO/XX./..."), Mark::X).unwrap(), (None, 1));
        assert_eq!(search.score(&board(".../.X./OO."), Mark::X).unwrap(), (Some(Ply::new(2, 2)), 0));
    }
}

#[cfg(all(test, feature = "nightly"))]
mod bench {
    extern crate test;

    use self::test::Bencher;

    use crate::analysis::search::Search;
    use crate::board::Board;
    use crate::mark::Mark;
    use super::MinimaxSearch;

    #[bench]
    fn bench_search_midgame(b: &mut Bencher) {
        let board: Board = "O../.X./...".parse().unwrap();
        let mut search = MinimaxSearch::new();

        b.iter(|| search.search(test::black_box(&board), Mark::O).unwrap());
    }
}
