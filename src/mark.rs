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

/// Either X or O.
///
/// X is the first player ("player A") and is stored on the board as `-1`.
/// O is the second player ("player B") and is stored as `+1`.  Line sums are
/// computed over these values, so a line is owned by a mark exactly when its
/// sum equals `size * mark.value()`.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The cell value used for this mark in the board's numeric encoding.
    pub fn value(self) -> i8 {
        match self {
            Mark::X => -1,
            Mark::O => 1,
        }
    }

    /// Converts a cell value back into a mark.  `0` (an empty cell) and any
    /// out-of-range value return `None`.
    pub fn from_value(value: i8) -> Option<Mark> {
        match value {
            -1 => Some(Mark::X),
            1 => Some(Mark::O),
            _ => None,
        }
    }

    /// The other mark.
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match *self {
            Mark::X => "X",
            Mark::O => "O",
        })
    }
}

#[cfg(test)]
mod test {
    use super::Mark;

    #[test]
    fn test_value_round_trip() {
        for &mark in &[Mark::X, Mark::O] {
            assert_eq!(Mark::from_value(mark.value()), Some(mark));
        }
        assert_eq!(Mark::from_value(0), None);
        assert_eq!(Mark::from_value(2), None);
    }

    #[test]
    fn test_opponent_values_cancel() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
        assert_eq!(Mark::X.value() + Mark::X.opponent().value(), 0);
    }
}
