//! Read-only view of who occupies each cell.

use crate::{BoardPlayer, GameError, GameErrorKind, GameResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Square grid of optional occupants.
///
/// Cell `[i][j]` corresponds to board coordinate `(min + i, min + j)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot<P> {
    /// Board coordinate of cell `[0][0]` on both axes.
    min: i32,
    /// Rows of cells.
    cells: Vec<Vec<Option<P>>>,
}

impl<P> Snapshot<P> {
    /// Builds a snapshot of the board `[min, max]²` by querying `occupant`
    /// for every coordinate.
    pub fn from_fn(min: i32, max: i32, mut occupant: impl FnMut(i32, i32) -> Option<P>) -> Self {
        let cells = (min..=max)
            .map(|row| (min..=max).map(|column| occupant(row, column)).collect())
            .collect();
        Self { min, cells }
    }

    /// Builds a snapshot directly from rows.
    ///
    /// # Errors
    ///
    /// Returns [`GameErrorKind::NonSquareGrid`] if any row's length differs
    /// from the number of rows.
    pub fn from_rows(min: i32, cells: Vec<Vec<Option<P>>>) -> GameResult<Self> {
        let side = cells.len();
        if let Some((row, ragged)) = cells.iter().enumerate().find(|(_, row)| row.len() != side) {
            return Err(GameError::new(GameErrorKind::NonSquareGrid {
                row,
                len: ragged.len(),
                side,
            }));
        }
        Ok(Self { min, cells })
    }

    /// Number of cells along one side.
    pub fn side_len(&self) -> usize {
        self.cells.len()
    }

    /// Board coordinate of cell `[0][0]`.
    pub fn min_bound(&self) -> i32 {
        self.min
    }

    /// Occupant of cell `[row][column]` by grid index.
    pub fn cell(&self, row: usize, column: usize) -> Option<&P> {
        self.cells.get(row)?.get(column)?.as_ref()
    }

    /// Occupant of the cell at board coordinate `(row, column)`.
    pub fn at(&self, row: i32, column: i32) -> Option<&P> {
        let row = usize::try_from(row.checked_sub(self.min)?).ok()?;
        let column = usize::try_from(column.checked_sub(self.min)?).ok()?;
        self.cell(row, column)
    }

    /// All rows.
    pub fn rows(&self) -> &[Vec<Option<P>>] {
        &self.cells
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    /// True if no cell is occupied.
    pub fn is_clear(&self) -> bool {
        self.occupied_count() == 0
    }
}

impl<P: BoardPlayer> fmt::Display for Snapshot<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .cells
            .iter()
            .flatten()
            .flatten()
            .map(|player| player.display_name().chars().count())
            .max()
            .unwrap_or(1)
            .max(1);
        let separator = vec!["-".repeat(width); self.side_len()].join("+");

        for (index, row) in self.cells.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
                writeln!(f, "{separator}")?;
            }
            let line = row
                .iter()
                .map(|cell| {
                    let symbol = cell.as_ref().map_or(".", |player| player.display_name());
                    format!("{symbol:^width$}")
                })
                .collect::<Vec<_>>()
                .join("|");
            write!(f, "{line}")?;
        }
        Ok(())
    }
}
