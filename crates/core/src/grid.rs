//! Occupancy grid construction.
//!
//! A page becomes a `rows x width` boolean matrix where a cell is occupied
//! when the page has a non-blank character there. A single space between two
//! non-blank characters counts as occupied so that words on one line stay in
//! one island. Wider gaps stay blank.

use crate::SegmentError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    rows: usize,
    width: usize,
    cells: Vec<bool>,
}

impl OccupancyGrid {
    /// Build the grid for a page. Zero lines give an empty grid.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self, SegmentError> {
        let occupancy: Vec<Vec<bool>> = lines
            .iter()
            .map(|line| occupancy_row(line.as_ref()))
            .collect();
        let width = lines
            .iter()
            .map(|line| line.as_ref().chars().count())
            .max()
            .unwrap_or(0);

        let mut cells = Vec::with_capacity(occupancy.len() * width);
        for (row, mut occupied) in occupancy.into_iter().enumerate() {
            if occupied.len() > width {
                return Err(SegmentError::MalformedGrid {
                    row,
                    len: occupied.len(),
                    width,
                });
            }
            occupied.resize(width, false);
            cells.extend(occupied);
        }

        Ok(Self {
            rows: lines.len(),
            width,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// `true` when the grid has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Occupancy of `(row, col)`. Out-of-range cells are blank.
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.width && self.cells[row * self.width + col]
    }

    pub fn row(&self, row: usize) -> &[bool] {
        &self.cells[row * self.width..(row + 1) * self.width]
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Occupied cells in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c)
            .map(|(i, _)| (i / self.width, i % self.width))
    }

    /// Render the grid with `#` for occupied and `.` for blank cells, one
    /// line per row.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.rows * (self.width + 1));
        for row in 0..self.rows {
            out.extend(self.row(row).iter().map(|&c| if c { '#' } else { '.' }));
            out.push('\n');
        }
        out
    }
}

/// Occupancy of a single line, one entry per `char`.
///
/// Whitespace is blank, except a lone `' '` with non-blank characters on both
/// sides, which joins the two words.
pub fn occupancy_row(line: &str) -> Vec<bool> {
    let chars: Vec<char> = line.chars().collect();
    let blank = |i: usize| chars[i].is_whitespace();

    (0..chars.len())
        .map(|i| {
            if !blank(i) {
                return true;
            }
            chars[i] == ' ' && i > 0 && i + 1 < chars.len() && !blank(i - 1) && !blank(i + 1)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_pattern(grid: &OccupancyGrid, row: usize) -> String {
        grid.row(row)
            .iter()
            .map(|&c| if c { '#' } else { '.' })
            .collect()
    }

    #[test]
    fn test_empty_page_gives_empty_grid() {
        let lines: [&str; 0] = [];
        let grid = OccupancyGrid::from_lines(&lines).unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.rows(), 0);
        assert_eq!(grid.width(), 0);
        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn test_width_is_longest_line() {
        let lines = ["ab", "abcdef", "", "abc"];
        let grid = OccupancyGrid::from_lines(&lines).unwrap();
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.width(), 6);
        for row in 0..grid.rows() {
            assert_eq!(grid.row(row).len(), 6);
        }
        assert_eq!(row_pattern(&grid, 0), "##....");
        assert_eq!(row_pattern(&grid, 2), "......");
    }

    #[test]
    fn test_width_counts_chars_not_bytes() {
        let lines = ["héllo", "ab"];
        let grid = OccupancyGrid::from_lines(&lines).unwrap();
        assert_eq!(grid.width(), 5);
        assert_eq!(row_pattern(&grid, 0), "#####");
    }

    #[test]
    fn test_single_space_between_words_is_occupied() {
        assert_eq!(
            occupancy_row("a b c"),
            vec![true, true, true, true, true]
        );
    }

    #[test]
    fn test_double_space_stays_blank() {
        assert_eq!(
            occupancy_row("ab  cd"),
            vec![true, true, false, false, true, true]
        );
    }

    #[test]
    fn test_wide_gap_interior_stays_blank() {
        let row = occupancy_row("a     b");
        assert!(row[0] && row[6]);
        assert!(row[1..6].iter().all(|&c| !c));
    }

    #[test]
    fn test_leading_and_trailing_spaces_are_blank() {
        assert_eq!(
            occupancy_row(" ab "),
            vec![false, true, true, false]
        );
    }

    #[test]
    fn test_tab_is_never_joined() {
        assert_eq!(occupancy_row("a\tb"), vec![true, false, true]);
    }

    #[test]
    fn test_all_blank_page_has_no_occupied_cells() {
        let lines = ["    ", "  ", "      "];
        let grid = OccupancyGrid::from_lines(&lines).unwrap();
        assert_eq!(grid.width(), 6);
        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn test_occupied_is_row_major() {
        let lines = [" x", "y "];
        let grid = OccupancyGrid::from_lines(&lines).unwrap();
        let cells: Vec<_> = grid.occupied().collect();
        assert_eq!(cells, vec![(0, 1), (1, 0)]);
    }

    #[test]
    fn test_get_out_of_range_is_blank() {
        let lines = ["ab"];
        let grid = OccupancyGrid::from_lines(&lines).unwrap();
        assert!(grid.get(0, 1));
        assert!(!grid.get(0, 2));
        assert!(!grid.get(1, 0));
    }

    #[test]
    fn test_render() {
        let lines = ["ab  c", "", " d"];
        let grid = OccupancyGrid::from_lines(&lines).unwrap();
        assert_eq!(grid.render(), "##..#\n.....\n.#...\n");
    }
}
