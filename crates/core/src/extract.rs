//! Rectangular text extraction.
//!
//! Every row of the rectangle is sliced from the page verbatim and terminated
//! with `'\n'`. Blank cells and unrelated characters that fall inside the
//! rectangle are kept, so the result looks like the block does on the page.

use crate::types::Block;

/// Text covered by `block` on the page.
pub fn extract_text<S: AsRef<str>>(lines: &[S], block: &Block) -> String {
    let mut text = String::with_capacity(block.height() * (block.width() + 1));

    for row in block.row_min..=block.row_max {
        let line = lines.get(row).map(|l| l.as_ref()).unwrap_or_default();
        text.extend(line.chars().skip(block.col_min).take(block.width()));
        text.push('\n');
    }

    text
}

/// Text of each block, in the same order as `blocks`.
pub fn extract_texts<S: AsRef<str>>(lines: &[S], blocks: &[Block]) -> Vec<String> {
    blocks
        .iter()
        .map(|block| extract_text(lines, block))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_row() {
        let lines = ["  Hello world.  "];
        let text = extract_text(&lines, &Block::new((0, 2), (0, 13)));
        assert_eq!(text, "Hello world.\n");
    }

    #[test]
    fn test_short_rows_are_not_padded() {
        let lines = ["A line that", "continues here."];
        let text = extract_text(&lines, &Block::new((0, 0), (1, 14)));
        assert_eq!(text, "A line that\ncontinues here.\n");
    }

    #[test]
    fn test_interior_gaps_and_foreign_cells_are_kept() {
        let lines = ["xxxx", "x   ", "x  y"];
        let text = extract_text(&lines, &Block::new((0, 0), (2, 3)));
        assert_eq!(text, "xxxx\nx   \nx  y\n");
    }

    #[test]
    fn test_column_slice_uses_chars() {
        let lines = ["ñandú  über"];
        let text = extract_text(&lines, &Block::new((0, 7), (0, 10)));
        assert_eq!(text, "über\n");
    }

    #[test]
    fn test_rows_past_the_page_are_empty() {
        let lines = ["ab"];
        let text = extract_text(&lines, &Block::new((0, 0), (1, 1)));
        assert_eq!(text, "ab\n\n");
    }

    #[test]
    fn test_extract_texts_keeps_order() {
        let lines = ["one  two"];
        let blocks = [Block::new((0, 5), (0, 7)), Block::new((0, 0), (0, 2))];
        assert_eq!(extract_texts(&lines, &blocks), vec!["two\n", "one\n"]);
    }
}
