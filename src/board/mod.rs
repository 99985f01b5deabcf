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

//! The N×N game board.
//!
//! Cells are stored row-major as `i8` values: `0` for an empty space and
//! [`Mark::value`](crate::Mark::value) for an occupied one.  Win detection
//! relies on that encoding: a line of `size` cells sums to `±size` only when
//! every cell on it holds the same mark.

use std::ops::{Deref, DerefMut};

use crate::error::{Error, Result};
use crate::mark::Mark;
use crate::ply::Ply;
use crate::resolution::Resolution;

pub use self::lines::LineSums;

/// The game board.
///
/// The size is fixed at construction.  Boards are plain values: cloning one
/// gives an independent snapshot.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Board {
    size: usize,
    cells: Vec<i8>,
}

/// The result of [`Board::evaluate`].
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    /// `None` while the game is still in progress.
    pub resolution: Option<Resolution>,
    pub lines: LineSums,
}

impl Evaluation {
    pub fn is_ongoing(&self) -> bool {
        self.resolution.is_none()
    }
}

impl Board {
    /// Creates an empty board with `size` rows and columns.
    pub fn new(size: usize) -> Result<Board> {
        if size == 0 {
            return Err(Error::InvalidSize);
        }

        Ok(Board {
            size,
            cells: vec![0; size * size],
        })
    }

    /// Builds a board from row-major cell values.
    pub(crate) fn from_cells(size: usize, cells: Vec<i8>) -> Board {
        debug_assert_eq!(cells.len(), size * size);
        Board { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// The row-major numeric encoding of the board.
    pub fn cells(&self) -> &[i8] {
        &self.cells
    }

    pub fn in_bounds(&self, ply: Ply) -> bool {
        ply.row < self.size && ply.column < self.size
    }

    /// Returns the mark occupying `ply`, or `None` if the space is empty or
    /// off the board.
    pub fn get(&self, ply: Ply) -> Option<Mark> {
        if !self.in_bounds(ply) {
            return None;
        }
        Mark::from_value(self.cells[ply.index(self.size)])
    }

    /// Returns `true` if `ply` is on the board and its space is empty.
    pub fn is_legal(&self, ply: Ply) -> bool {
        self.in_bounds(ply) && self.cells[ply.index(self.size)] == 0
    }

    /// Places `mark` on `ply` without checking legality.  Use `execute_ply`
    /// for moves that have not been validated.
    pub fn place(&mut self, ply: Ply, mark: Mark) {
        debug_assert!(self.is_legal(ply), "illegal placement at {}", ply);
        self.cells[ply.index(self.size)] = mark.value();
    }

    /// Empties the space at `ply`.
    pub fn clear(&mut self, ply: Ply) {
        self.cells[ply.index(self.size)] = 0;
    }

    /// Places `mark` on `ply` after checking that the move is legal.
    pub fn execute_ply(&mut self, ply: Ply, mark: Mark) -> Result<()> {
        if !self.in_bounds(ply) {
            return Err(Error::OutOfBounds(ply));
        }

        if self.cells[ply.index(self.size)] != 0 {
            return Err(Error::Occupied(ply));
        }

        self.place(ply, mark);
        Ok(())
    }

    /// Executes each ply in turn, alternating marks starting with `first`.
    pub fn execute_plies(&mut self, plies: &[Ply], first: Mark) -> Result<()> {
        let mut mark = first;
        for &ply in plies {
            self.execute_ply(ply, mark)?;
            mark = mark.opponent();
        }
        Ok(())
    }

    /// Places `mark` on `ply` for the lifetime of the returned guard.  The
    /// space is emptied again when the guard is dropped, whether the code
    /// holding it returns normally or early with an error.
    pub fn place_scoped(&mut self, ply: Ply, mark: Mark) -> Placement<'_> {
        self.place(ply, mark);
        Placement {
            board: self,
            ply,
        }
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == 0).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != 0)
    }

    /// Number of spaces occupied by `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        let value = mark.value();
        self.cells.iter().filter(|&&cell| cell == value).count()
    }

    /// Infers whose turn it is from the mark counts, for callers that do not
    /// track turns themselves.  With equal counts, `first` is to move.
    pub fn next_mark(&self, first: Mark) -> Mark {
        let (mine, theirs) = (self.count(first), self.count(first.opponent()));
        if mine <= theirs {
            first
        } else {
            first.opponent()
        }
    }

    /// Lazily enumerates the empty spaces in row-major order.
    pub fn legal_plies(&self) -> LegalPlies<'_> {
        LegalPlies {
            board: self,
            index: 0,
        }
    }

    /// Appends the empty spaces, in row-major order, to `plies`.
    pub fn extrapolate_into(&self, plies: &mut Vec<Ply>) {
        plies.extend(self.legal_plies());
    }

    /// Sums every row, column and both diagonals.
    pub fn line_sums(&self) -> LineSums {
        LineSums::of(self)
    }

    /// Returns the resolution of the board along with its line sums.
    ///
    /// Fails with `Error::MalformedBoard` if both marks own a complete line.
    pub fn evaluate(&self) -> Result<Evaluation> {
        let lines = self.line_sums();
        let resolution = self.resolve(lines.iter())?;
        Ok(Evaluation { resolution, lines })
    }

    /// Like `evaluate`, but without collecting the line sums.
    pub fn check_resolution(&self) -> Result<Option<Resolution>> {
        let n = self.size;
        let rows = (0..n).map(move |row| lines::sum(self, (0..n).map(move |column| Ply::new(row, column))));
        let columns = (0..n).map(move |column| lines::sum(self, (0..n).map(move |row| Ply::new(row, column))));
        let diagonal = lines::sum(self, (0..n).map(|i| Ply::new(i, i)));
        let anti_diagonal = lines::sum(self, (0..n).map(|i| Ply::new(i, n - 1 - i)));

        self.resolve(rows.chain(columns).chain(Some(diagonal)).chain(Some(anti_diagonal)))
    }

    /// Checks every line sum for a completed line.  A board on which both
    /// marks own a line is rejected.
    fn resolve<I>(&self, sums: I) -> Result<Option<Resolution>> where I: Iterator<Item = i32> {
        let target = self.size as i32;
        let mut winner = None;
        let mut x_lines = 0;
        let mut o_lines = 0;

        for sum in sums {
            let owner = if sum == target * Mark::X.value() as i32 {
                x_lines += 1;
                Mark::X
            } else if sum == target * Mark::O.value() as i32 {
                o_lines += 1;
                Mark::O
            } else {
                continue;
            };

            if winner.is_none() {
                winner = Some(owner);
            }
        }

        if x_lines > 0 && o_lines > 0 {
            return Err(Error::MalformedBoard { x_lines, o_lines });
        }

        Ok(match winner {
            Some(mark) => Some(Resolution::Win(mark)),
            None if self.is_full() => Some(Resolution::Tie),
            None => None,
        })
    }
}

/// Iterator over the empty spaces of a board, in row-major order.
pub struct LegalPlies<'a> {
    board: &'a Board,
    index: usize,
}

impl<'a> Iterator for LegalPlies<'a> {
    type Item = Ply;

    fn next(&mut self) -> Option<Ply> {
        while self.index < self.board.cells.len() {
            let index = self.index;
            self.index += 1;

            if self.board.cells[index] == 0 {
                return Some(Ply::from_index(index, self.board.size));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.board.cells.len() - self.index))
    }
}

/// A mark placed by [`Board::place_scoped`].  Dereferences to the board and
/// empties the space again when dropped.
pub struct Placement<'a> {
    board: &'a mut Board,
    ply: Ply,
}

impl<'a> Placement<'a> {
    pub fn ply(&self) -> Ply {
        self.ply
    }
}

impl<'a> Deref for Placement<'a> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl<'a> DerefMut for Placement<'a> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl<'a> Drop for Placement<'a> {
    fn drop(&mut self) {
        self.board.clear(self.ply);
    }
}

mod display;
mod lines;

#[cfg(test)]
mod test {
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    use crate::error::Error;
    use crate::mark::Mark;
    use crate::ply::Ply;
    use crate::resolution::Resolution;
    use super::Board;

    fn board(notation: &str) -> Board {
        notation.parse().unwrap()
    }

    #[test]
    fn test_new_rejects_zero_size() {
        assert_eq!(Board::new(0), Err(Error::InvalidSize));
        assert_eq!(Board::new(1).unwrap().cells(), &[0]);
    }

    #[test]
    fn test_legality() {
        let mut board = Board::new(3).unwrap();
        assert!(board.is_legal(Ply::new(2, 2)));
        assert!(!board.is_legal(Ply::new(3, 0)));
        assert!(!board.is_legal(Ply::new(0, 3)));

        board.execute_ply(Ply::new(1, 1), Mark::X).unwrap();
        assert!(!board.is_legal(Ply::new(1, 1)));
        assert_eq!(board.get(Ply::new(1, 1)), Some(Mark::X));
        assert_eq!(board.execute_ply(Ply::new(1, 1), Mark::O), Err(Error::Occupied(Ply::new(1, 1))));
        assert_eq!(board.execute_ply(Ply::new(0, 5), Mark::O), Err(Error::OutOfBounds(Ply::new(0, 5))));
        assert!(Error::Occupied(Ply::new(1, 1)).is_invalid_move());
    }

    #[test]
    fn test_legal_plies_row_major() {
        let board = board("X.O/.X./O..");
        let plies = board.legal_plies().collect::<Vec<_>>();
        assert_eq!(plies, vec![
            Ply::new(0, 1),
            Ply::new(1, 0),
            Ply::new(1, 2),
            Ply::new(2, 1),
            Ply::new(2, 2),
        ]);

        let mut buffer = vec![Ply::new(9, 9)];
        board.extrapolate_into(&mut buffer);
        assert_eq!(&buffer[1..], &plies[..]);
    }

    #[test]
    fn test_placement_is_undone_on_drop() {
        let mut board = Board::new(3).unwrap();
        {
            let mut placed = board.place_scoped(Ply::new(0, 0), Mark::O);
            assert_eq!(placed.ply(), Ply::new(0, 0));
            assert_eq!(placed.get(Ply::new(0, 0)), Some(Mark::O));
            {
                let nested = placed.place_scoped(Ply::new(2, 1), Mark::X);
                assert_eq!(nested.ply(), Ply::new(2, 1));
                assert_eq!(nested.count(Mark::X), 1);
            }
            assert_eq!(placed.get(Ply::new(2, 1)), None);
        }
        assert_eq!(board, Board::new(3).unwrap());
    }

    #[test]
    fn test_placement_is_undone_on_error() {
        fn complete_row(board: &mut Board) -> Result<(), Error> {
            let placed = board.place_scoped(Ply::new(0, 2), Mark::X);
            placed.check_resolution()?;
            Ok(())
        }

        let mut board = board("XX./OOO/...");
        assert!(complete_row(&mut board).is_err());
        assert_eq!(board, self::board("XX./OOO/..."));
    }

    #[test]
    fn test_evaluate_rows_columns_diagonals() {
        let cases = [
            ("OOO/XX./...", Some(Resolution::Win(Mark::O))),
            ("X.O/XO./X..", Some(Resolution::Win(Mark::X))),
            ("O.X/XO./..O", Some(Resolution::Win(Mark::O))),
            ("O.X/OX./X..", Some(Resolution::Win(Mark::X))),
            ("XOX/XOO/OXX", Some(Resolution::Tie)),
            ("XO./.../...", None),
        ];

        for &(notation, expected) in &cases {
            assert_eq!(board(notation).check_resolution().unwrap(), expected, "{}", notation);
            assert_eq!(board(notation).evaluate().unwrap().resolution, expected, "{}", notation);
        }
    }

    #[test]
    fn test_evaluate_line_sums() {
        let evaluation = board("OOO/XX./..X").evaluate().unwrap();
        assert_eq!(evaluation.lines.rows, vec![3, -2, -1]);
        assert_eq!(evaluation.lines.columns, vec![0, 0, 0]);
        assert_eq!(evaluation.lines.diagonal, -1);
        assert_eq!(evaluation.lines.anti_diagonal, 0);
        assert!(!evaluation.is_ongoing());
    }

    #[test]
    fn test_win_ignores_remaining_cells() {
        // A full line wins whether the rest of the board is empty, mixed, or full.
        assert_eq!(board("XXXX/..../..../....").check_resolution().unwrap(), Some(Resolution::Win(Mark::X)));
        assert_eq!(board("XXXX/OOXO/OXOO/XOOX").check_resolution().unwrap(), Some(Resolution::Win(Mark::X)));
        assert_eq!(board("O").check_resolution().unwrap(), Some(Resolution::Win(Mark::O)));
    }

    #[test]
    fn test_double_line_single_mark_is_a_win() {
        // One move can complete a row and a column at once.
        assert_eq!(board("XXX/XOO/XOO").check_resolution().unwrap(), Some(Resolution::Win(Mark::X)));
    }

    #[test]
    fn test_malformed_board() {
        assert_eq!(
            board("XXX/OOO/...").evaluate(),
            Err(Error::MalformedBoard { x_lines: 1, o_lines: 1 }),
        );
        assert!(board("XXX/OOO/...").check_resolution().is_err());
    }

    #[test]
    fn test_next_mark() {
        assert_eq!(Board::new(3).unwrap().next_mark(Mark::O), Mark::O);
        assert_eq!(board("O../.../...").next_mark(Mark::O), Mark::X);
        assert_eq!(board("OX./.../...").next_mark(Mark::O), Mark::O);
    }

    #[test]
    fn test_random_playouts_resolve_consistently() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for size in 1..6 {
            for _ in 0..50 {
                let mut board = Board::new(size).unwrap();
                let mut plies = board.legal_plies().collect::<Vec<_>>();
                plies.shuffle(&mut rng);

                let mut mark = Mark::X;
                for ply in plies {
                    let resolution = board.check_resolution().unwrap();
                    let lines = board.line_sums();
                    let has_full_line = lines.iter().any(|sum| sum.abs() == size as i32);

                    // Ongoing exactly when a space remains and no line is complete.
                    assert_eq!(resolution.is_none(), !board.is_full() && !has_full_line);
                    if resolution.is_some() {
                        break;
                    }

                    board.execute_ply(ply, mark).unwrap();
                    mark = mark.opponent();
                }

                assert!(board.evaluate().unwrap().resolution.is_some());
            }
        }
    }
}
