/// A board coordinate. Rows and columns are 1-based; row 1 is the top of the
/// board and column 1 is the left edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub fn new(row: usize, col: usize) -> Point {
        Point { row, col }
    }

    /// The four orthogonally adjacent points. No bounds filtering happens
    /// here; callers check `Board::is_on_grid`.
    pub fn neighbors(&self) -> Vec<Point> {
        vec![
            Point::new(self.row - 1, self.col),
            Point::new(self.row + 1, self.col),
            Point::new(self.row, self.col - 1),
            Point::new(self.row, self.col + 1),
        ]
    }
}
