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
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use crate::mark::Mark;
use crate::resolution::Resolution;

/// A tally of how a set of game continuations ended.
///
/// Counts combine by elementwise addition, with `OutcomeCount::default()` as
/// the identity.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct OutcomeCount {
    pub x_wins: u64,
    pub o_wins: u64,
    pub ties: u64,
}

impl OutcomeCount {
    pub fn new(x_wins: u64, o_wins: u64, ties: u64) -> OutcomeCount {
        OutcomeCount {
            x_wins,
            o_wins,
            ties,
        }
    }

    /// A single game ending in `resolution`.  An unresolved game contributes
    /// nothing.
    pub fn from_resolution(resolution: Option<Resolution>) -> OutcomeCount {
        resolution.map(OutcomeCount::from).unwrap_or_default()
    }

    /// Games won by `mark`.
    pub fn wins(&self, mark: Mark) -> u64 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    /// Games won by `mark`'s opponent.
    pub fn losses(&self, mark: Mark) -> u64 {
        self.wins(mark.opponent())
    }

    /// Wins minus losses from `mark`'s perspective.  Ties do not count.
    pub fn score(&self, mark: Mark) -> i64 {
        self.wins(mark) as i64 - self.losses(mark) as i64
    }

    pub fn total(&self) -> u64 {
        self.x_wins + self.o_wins + self.ties
    }
}

impl From<Resolution> for OutcomeCount {
    fn from(resolution: Resolution) -> OutcomeCount {
        match resolution.winner() {
            Some(Mark::X) => OutcomeCount::new(1, 0, 0),
            Some(Mark::O) => OutcomeCount::new(0, 1, 0),
            None => OutcomeCount::new(0, 0, 1),
        }
    }
}

impl Add for OutcomeCount {
    type Output = OutcomeCount;

    fn add(self, other: OutcomeCount) -> OutcomeCount {
        OutcomeCount {
            x_wins: self.x_wins + other.x_wins,
            o_wins: self.o_wins + other.o_wins,
            ties: self.ties + other.ties,
        }
    }
}

impl AddAssign for OutcomeCount {
    fn add_assign(&mut self, other: OutcomeCount) {
        *self = *self + other;
    }
}

impl Sum for OutcomeCount {
    fn sum<I>(iter: I) -> OutcomeCount where I: Iterator<Item = OutcomeCount> {
        iter.fold(OutcomeCount::default(), Add::add)
    }
}

impl fmt::Display for OutcomeCount {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "X wins: {}, O wins: {}, ties: {}", self.x_wins, self.o_wins, self.ties)
    }
}
