use serde::{Deserialize, Serialize};

/// A `(row, column)` position on the page grid. Columns count `char`s.
pub type Cell = (usize, usize);

/// One page of text: its rows, top to bottom.
pub type Page = Vec<String>;

/// Default tolerance, in columns, for two blocks to count as
/// indentation-compatible.
pub const DEFAULT_INDENTATION_THRESHOLD: usize = 3;

/// Inclusive bounding rectangle of one island, or of several merged islands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Block {
    pub row_min: usize,
    pub col_min: usize,
    pub row_max: usize,
    pub col_max: usize,
}

impl Block {
    pub fn new(top_left: Cell, bottom_right: Cell) -> Self {
        Block {
            row_min: top_left.0,
            col_min: top_left.1,
            row_max: bottom_right.0,
            col_max: bottom_right.1,
        }
    }

    /// A block covering exactly one cell.
    pub fn from_cell(cell: Cell) -> Self {
        Block::new(cell, cell)
    }

    pub fn top_left(&self) -> Cell {
        (self.row_min, self.col_min)
    }

    pub fn bottom_right(&self) -> Cell {
        (self.row_max, self.col_max)
    }

    pub fn height(&self) -> usize {
        self.row_max - self.row_min + 1
    }

    pub fn width(&self) -> usize {
        self.col_max - self.col_min + 1
    }

    pub fn contains(&self, (row, col): Cell) -> bool {
        (self.row_min..=self.row_max).contains(&row) && (self.col_min..=self.col_max).contains(&col)
    }

    /// Grow the rectangle so that it covers `cell`.
    pub fn include(&mut self, (row, col): Cell) {
        self.row_min = self.row_min.min(row);
        self.col_min = self.col_min.min(col);
        self.row_max = self.row_max.max(row);
        self.col_max = self.col_max.max(col);
    }

    /// Move the bottom-right corner to the component-wise maximum of its
    /// current position and `corner`. The top-left corner is untouched.
    pub fn extend_to(&mut self, corner: Cell) {
        self.row_max = self.row_max.max(corner.0);
        self.col_max = self.col_max.max(corner.1);
    }
}

/// A [`Block`] together with the text it covers on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBlock {
    #[serde(flatten)]
    pub block: Block,
    pub text: String,
}

impl TextBlock {
    /// First non-blank line of the block, trimmed. Handy for previews.
    pub fn first_line(&self) -> &str {
        self.text
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or("")
    }
}

/// Tunables for the segmentation pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentOptions {
    /// Two blocks are indentation-compatible when their starting columns
    /// differ by strictly less than this many columns. Zero disables merging.
    pub indentation_threshold: usize,
}

impl SegmentOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indentation_threshold(mut self, threshold: usize) -> Self {
        self.indentation_threshold = threshold;
        self
    }
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            indentation_threshold: DEFAULT_INDENTATION_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_dimensions() {
        let block = Block::new((2, 4), (5, 10));
        assert_eq!(block.height(), 4);
        assert_eq!(block.width(), 7);
        assert_eq!(block.top_left(), (2, 4));
        assert_eq!(block.bottom_right(), (5, 10));
    }

    #[test]
    fn test_block_include_grows_both_corners() {
        let mut block = Block::from_cell((3, 3));
        block.include((1, 5));
        block.include((4, 0));
        assert_eq!(block, Block::new((1, 0), (4, 5)));
        assert!(block.contains((2, 2)));
        assert!(!block.contains((5, 2)));
    }

    #[test]
    fn test_block_extend_to_never_shrinks() {
        let mut block = Block::new((0, 0), (1, 20));
        block.extend_to((4, 8));
        assert_eq!(block, Block::new((0, 0), (4, 20)));
    }

    #[test]
    fn test_segment_options_default() {
        assert_eq!(SegmentOptions::default().indentation_threshold, 3);
        assert_eq!(
            SegmentOptions::new()
                .with_indentation_threshold(0)
                .indentation_threshold,
            0
        );
    }

    #[test]
    fn test_text_block_serializes_flat() {
        let tb = TextBlock {
            block: Block::new((0, 1), (2, 3)),
            text: "abc\n".to_string(),
        };
        let json = serde_json::to_value(&tb).unwrap();
        assert_eq!(json["row_min"], 0);
        assert_eq!(json["col_max"], 3);
        assert_eq!(json["text"], "abc\n");
    }

    #[test]
    fn test_text_block_first_line_skips_blank_rows() {
        let tb = TextBlock {
            block: Block::new((0, 0), (2, 5)),
            text: "      \n  Title \nbody\n".to_string(),
        };
        assert_eq!(tb.first_line(), "Title");
    }
}
