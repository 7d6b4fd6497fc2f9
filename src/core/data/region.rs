/// Closed index ranges into a grid: rows `row_start..=row_end`, columns
/// `col_start..=col_end`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Region {
    pub row_start: usize,
    pub row_end: usize,
    pub col_start: usize,
    pub col_end: usize,
}

impl Region {
    #[must_use]
    pub fn at(row: usize, col: usize, window_rows: usize, window_cols: usize) -> Self {
        Self {
            row_start: row,
            row_end: row + window_rows,
            col_start: col,
            col_end: col + window_cols,
        }
    }

    #[must_use]
    pub fn top_left(&self) -> (usize, usize) {
        (self.row_start, self.col_start)
    }

    #[must_use]
    pub fn bottom_right(&self) -> (usize, usize) {
        (self.row_end, self.col_end)
    }

    /// Number of grid cells covered, both ends included.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        (self.row_end - self.row_start + 1) * (self.col_end - self.col_start + 1)
    }
}
