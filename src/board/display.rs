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
use std::str::FromStr;

use crate::error::Error;
use crate::mark::Mark;
use crate::ply::Ply;
use super::Board;

impl Board {
    /// Compact notation: rows top to bottom separated by `/`, with `X`, `O`,
    /// and `.` for an empty space.  `"XO./.X./..O"` is a 3×3 board.
    pub fn to_notation(&self) -> String {
        let mut notation = String::with_capacity(self.size * (self.size + 1));
        for row in 0..self.size {
            if row > 0 {
                notation.push('/');
            }
            for column in 0..self.size {
                notation.push(match self.get(Ply::new(row, column)) {
                    Some(Mark::X) => 'X',
                    Some(Mark::O) => 'O',
                    None => '.',
                });
            }
        }
        notation
    }
}

impl FromStr for Board {
    type Err = Error;

    fn from_str(notation: &str) -> Result<Board, Error> {
        let invalid = |reason: String| Error::InvalidNotation {
            notation: notation.to_string(),
            reason,
        };

        let rows = notation.trim().split('/').collect::<Vec<_>>();
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);

        for (row, line) in rows.iter().enumerate() {
            let length = line.chars().count();
            if length != size {
                return Err(invalid(format!("row {} has {} spaces, expected {}", row, length, size)));
            }

            for (column, character) in line.chars().enumerate() {
                cells.push(match character {
                    'X' => Mark::X.value(),
                    'O' => Mark::O.value(),
                    '.' => 0,
                    c => return Err(invalid(format!("unexpected '{}' at {}", c, Ply::new(row, column)))),
                });
            }
        }

        Ok(Board::from_cells(size, cells))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "  ")?;
        for column in 0..self.size {
            write!(f, "{:>3}", column)?;
        }
        for row in 0..self.size {
            write!(f, "\n{:>2} ", row)?;
            for column in 0..self.size {
                match self.get(Ply::new(row, column)) {
                    Some(mark) => write!(f, "[{}]", mark)?,
                    None => write!(f, "[ ]")?,
                }
            }
        }
        Ok(())
    }
}
