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

//! Move analysis for N×N tic-tac-toe.
//!
//! A [`Board`] holds an N×N grid of [`Mark`]s.  A line (a row, a column or
//! one of the two main diagonals) completely filled by one mark wins the game
//! for that mark; a full board with no such line is a tie.
//!
//! Two searches are provided in [`analysis::search`]:
//!
//! * [`ExhaustiveSearch`](analysis::search::ExhaustiveSearch) enumerates
//!   every continuation up to a horizon, counts how each one ends, and picks
//!   the move with the best balance of wins over losses.  Subtrees it has
//!   already counted are remembered across searches.
//! * [`MinimaxSearch`](analysis::search::MinimaxSearch) picks the move that
//!   is best against a perfect opponent.
//!
//! Both break ties in favor of the first move in row-major order, so their
//! choices are deterministic.
//!
//! # Example
//!
//! ```rust
//! use tictactoe_analysis::{Board, Mark, Ply, Resolution};
//! use tictactoe_analysis::analysis::search::{ExhaustiveSearch, MinimaxSearch, Search};
//!
//! let mut board = Board::new(3).unwrap();
//! let mut o = ExhaustiveSearch::with_horizon(9);
//! let mut x = MinimaxSearch::new();
//! let mut mark = Mark::O;
//!
//! while board.check_resolution().unwrap().is_none() {
//!     let ply: Ply = match mark {
//!         Mark::O => o.choose_ply(&board, mark).unwrap(),
//!         Mark::X => x.choose_ply(&board, mark).unwrap(),
//!     };
//!     board.execute_ply(ply, mark).unwrap();
//!     mark = mark.opponent();
//! }
//!
//! assert_eq!(board.check_resolution().unwrap(), Some(Resolution::Tie));
//! ```
//!
//! Boards can be written in a compact notation, rows separated by `/`:
//!
//! ```rust
//! # use tictactoe_analysis::{Board, Mark, Resolution};
//! let board: Board = "XO./XO./X..".parse().unwrap();
//! assert_eq!(board.check_resolution().unwrap(), Some(Resolution::Win(Mark::X)));
//! assert_eq!(board.to_notation(), "XO./XO./X..");
//! ```

#![cfg_attr(feature = "nightly", feature(test))]

pub use self::board::{Board, Evaluation, LegalPlies, LineSums, Placement};
pub use self::error::{Error, Result};
pub use self::mark::Mark;
pub use self::ply::Ply;
pub use self::resolution::Resolution;

pub mod analysis;
pub mod board;
pub mod error;

mod mark;
mod ply;
mod resolution;
