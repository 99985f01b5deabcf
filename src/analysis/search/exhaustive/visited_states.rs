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

use std::collections::HashMap;
use std::hash::BuildHasherDefault;

use fnv::FnvHasher;

use crate::analysis::OutcomeCount;
use crate::board::Board;
use crate::mark::Mark;

/// Identifies a subtree: the exact board contents, the mark to move, and the
/// number of plies the horizon still allows from it.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct VisitedKey {
    cells: Box<[i8]>,
    mover: Mark,
    remaining: u32,
}

impl VisitedKey {
    pub fn new(board: &Board, mover: Mark, remaining: u32) -> VisitedKey {
        VisitedKey {
            cells: board.cells().into(),
            mover,
            remaining,
        }
    }
}

/// Outcome counts of subtrees that have been fully explored.
///
/// The table only grows.  It belongs to a single `ExhaustiveSearch` and is
/// reused by every search that engine runs.
pub struct VisitedStates {
    map: HashMap<VisitedKey, OutcomeCount, BuildHasherDefault<FnvHasher>>,
}

impl VisitedStates {
    pub fn new() -> VisitedStates {
        VisitedStates {
            map: HashMap::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn get(&self, key: &VisitedKey) -> Option<OutcomeCount> {
        self.map.get(key).cloned()
    }

    pub fn insert(&mut self, key: VisitedKey, count: OutcomeCount) -> Option<OutcomeCount> {
        self.map.insert(key, count)
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }
}

impl Default for VisitedStates {
    fn default() -> VisitedStates {
        VisitedStates::new()
    }
}
