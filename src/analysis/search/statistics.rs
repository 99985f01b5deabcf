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
use std::time::Instant;

/// Counters collected over a single search.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Statistics {
    /// Interior nodes expanded.
    pub visited: u64,
    /// Resolved boards reached.
    pub evaluated: u64,
    pub cache_hits: u64,
    pub cache_stores: u64,
    /// Boards at which the horizon or depth limit stopped the search.
    pub cutoffs: u64,
    /// Seconds.
    pub time: f32,
}

impl Statistics {
    pub fn new() -> Statistics {
        Statistics::default()
    }

    pub(crate) fn stop_clock(&mut self, start: Instant) {
        let elapsed = start.elapsed();
        self.time = elapsed.as_secs() as f32 + elapsed.subsec_nanos() as f32 / 1_000_000_000.0;
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rows = [
            ("Visited:", format!("{}", self.visited)),
            ("Evaluated:", format!("{}", self.evaluated)),
            ("Cache Hits:", format!("{}", self.cache_hits)),
            ("Cache Stores:", format!("{}", self.cache_stores)),
            ("Cutoffs:", format!("{}", self.cutoffs)),
            ("Time:", format!("{:.2}", self.time)),
        ];

        let title_width = rows.iter().map(|row| row.0.len()).max().unwrap_or(0) + 1;
        let value_width = rows.iter().map(|row| row.1.len()).max().unwrap_or(0);

        for (i, (title, value)) in rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  {0:1$}{2:>3$}", title, title_width, value, value_width)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::Statistics;

    #[test]
    fn test_display_aligns_values() {
        let statistics = Statistics {
            visited: 1200,
            evaluated: 7,
            ..Statistics::new()
        };

        let printed = format!("{}", statistics);
        let lines = printed.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "  Visited:      1200");
        assert_eq!(lines[1], "  Evaluated:       7");
        assert_eq!(lines[5], "  Time:         0.00");
    }
}
