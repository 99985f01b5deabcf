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

use crate::ply::Ply;
use super::Board;

/// The sum of every line on a board.
///
/// These are informational: the resolution is derived from them, but a game
/// loop only needs them for display.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LineSums {
    pub rows: Vec<i32>,
    pub columns: Vec<i32>,
    /// Top-left to bottom-right.
    pub diagonal: i32,
    /// Top-right to bottom-left.
    pub anti_diagonal: i32,
}

impl LineSums {
    pub(super) fn of(board: &Board) -> LineSums {
        let n = board.size();
        let mut rows = vec![0; n];
        let mut columns = vec![0; n];
        let mut diagonal = 0;
        let mut anti_diagonal = 0;

        for (index, &cell) in board.cells().iter().enumerate() {
            let ply = Ply::from_index(index, n);
            let value = cell as i32;

            rows[ply.row] += value;
            columns[ply.column] += value;
            if ply.row == ply.column {
                diagonal += value;
            }
            if ply.row + ply.column == n - 1 {
                anti_diagonal += value;
            }
        }

        LineSums {
            rows,
            columns,
            diagonal,
            anti_diagonal,
        }
    }

    /// Every sum, in order: rows, columns, the diagonal, the anti-diagonal.
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.rows.iter()
            .chain(self.columns.iter())
            .cloned()
            .chain(Some(self.diagonal))
            .chain(Some(self.anti_diagonal))
    }
}

impl fmt::Display for LineSums {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "rows: {:?}, columns: {:?}, diagonals: [{}, {}]",
            self.rows, self.columns, self.diagonal, self.anti_diagonal)
    }
}

pub(super) fn sum<I>(board: &Board, plies: I) -> i32 where I: Iterator<Item = Ply> {
    let size = board.size();
    plies.map(|ply| board.cells()[ply.index(size)] as i32).sum()
}
