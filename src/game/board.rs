use super::player::Player;

/// Occupancy of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

/// The vertical grid. Cells are stored column-major and **row 0 is the
/// bottom** of each column, so a drop fills the lowest empty row and
/// occupied cells always form a contiguous run up from row 0.
///
/// The board knows nothing about turns or timing; it answers legality and
/// line queries for whoever asks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    columns: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(columns: usize, rows: usize) -> Self {
        Board {
            columns,
            rows,
            cells: vec![Cell::Empty; columns * rows],
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Get the cell at a position. Out-of-range reads return `Empty` rather
    /// than panicking, so line scans never need bounds branches.
    pub fn cell_at(&self, column: usize, row: usize) -> Cell {
        if column >= self.columns || row >= self.rows {
            return Cell::Empty;
        }
        self.cells[column * self.rows + row]
    }

    /// True iff `column` is in range and its topmost cell is still empty.
    pub fn is_column_playable(&self, column: usize) -> bool {
        column < self.columns && self.cell_at(column, self.rows - 1) == Cell::Empty
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.columns).all(|column| !self.is_column_playable(column))
    }

    /// Drop a piece into a column, returning the row where it landed.
    ///
    /// The caller must have checked `is_column_playable` first; dropping
    /// into a full or out-of-range column is a programming defect, not a
    /// runtime condition.
    pub fn drop_piece(&mut self, column: usize, player: Player) -> usize {
        debug_assert!(
            self.is_column_playable(column),
            "drop into unplayable column {column}"
        );

        // Find the lowest empty row in this column
        for row in 0..self.rows {
            if self.cells[column * self.rows + row] == Cell::Empty {
                self.cells[column * self.rows + row] = player.to_cell();
                return row;
            }
        }

        unreachable!("column {column} reported playable but has no empty cell");
    }

    /// Whether `player` currently owns `length` consecutive cells anywhere
    /// on the board.
    ///
    /// Scans every window of `length` cells in the four line directions,
    /// anchored at every cell of the grid. Probes that step off the board
    /// read `Empty` and the window just fails. The scan does not depend on
    /// where the last piece landed; at 7x6 it is a few hundred cell reads.
    pub fn has_run(&self, player: Player, length: usize) -> bool {
        debug_assert!(length >= 1, "run length must be at least 1");

        let target = player.to_cell();
        // (column step, row step): vertical, horizontal, ascending and
        // descending diagonals. Left-leaning runs are the same windows
        // anchored at their other end.
        const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

        for (step_col, step_row) in DIRECTIONS {
            for column in 0..self.columns {
                for row in 0..self.rows {
                    let window = (0..length).all(|i| {
                        let c = column as isize + step_col * i as isize;
                        let r = row as isize + step_row * i as isize;
                        self.probe(c, r) == target
                    });
                    if window {
                        return true;
                    }
                }
            }
        }
        false
    }

    fn probe(&self, column: isize, row: isize) -> Cell {
        if column < 0 || row < 0 {
            return Cell::Empty;
        }
        self.cell_at(column as usize, row as usize)
    }
}
