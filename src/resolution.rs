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

use crate::mark::Mark;

/// The way a game ended.
///
/// A game that has not ended has no resolution; functions that inspect a
/// board return `Option<Resolution>` and use `None` for a game still in
/// progress.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Resolution {
    Win(Mark),
    Tie,
}

impl Resolution {
    /// Returns the winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        match *self {
            Resolution::Win(mark) => Some(mark),
            Resolution::Tie => None,
        }
    }

    /// The game-theoretic value of this resolution: `+1` when O wins,
    /// `-1` when X wins, `0` for a tie.
    pub fn score(&self) -> i8 {
        match *self {
            Resolution::Win(mark) => mark.value(),
            Resolution::Tie => 0,
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Resolution::Win(mark) => write!(f, "{} wins", mark),
            Resolution::Tie => write!(f, "tie"),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::mark::Mark;
    use super::Resolution;

    #[test]
    fn test_winner_and_score() {
        assert_eq!(Resolution::Win(Mark::X).winner(), Some(Mark::X));
        assert_eq!(Resolution::Win(Mark::O).winner(), Some(Mark::O));
        assert_eq!(Resolution::Tie.winner(), None);

        assert_eq!(Resolution::Win(Mark::X).score(), -1);
        assert_eq!(Resolution::Win(Mark::O).score(), 1);
        assert_eq!(Resolution::Tie.score(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Resolution::Win(Mark::O)), "O wins");
        assert_eq!(format!("{}", Resolution::Tie), "tie");
    }
}
