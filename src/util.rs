#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Converts the row/col to a 1d index for a row-major grid of the given side
    pub fn as_index(&self, side: usize) -> usize {
        self.row * side + self.col
    }

    /// Returns all valid adjacent positions (up to 8, no wraparound) on a
    /// side x side grid, excluding the position itself
    pub fn adjacent(&self, side: usize) -> Vec<Position> {
        let min_row = self.row.saturating_sub(1);
        let max_row = (self.row + 1).min(side - 1);
        let min_col = self.col.saturating_sub(1);
        let max_col = (self.col + 1).min(side - 1);

        let mut result = Vec::with_capacity(8);
        for row in min_row..=max_row {
            for col in min_col..=max_col {
                if row == self.row && col == self.col {
                    continue;
                }
                result.push(Position { row, col });
            }
        }
        result
    }
}
