//! Connected-component labeling over an [`OccupancyGrid`].
//!
//! Islands are 4-connected: cells touching only at a corner belong to
//! different islands. Labels are handed out in raster order, so the island
//! whose first cell comes earliest in a row-major scan is label 1.

use crate::grid::OccupancyGrid;
use crate::types::Block;

/// Island membership per cell. `0` is background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMap {
    rows: usize,
    width: usize,
    labels: Vec<u32>,
    count: u32,
}

impl LabelMap {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of islands. Labels run `1..=count`.
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.labels[row * self.width + col]
    }

    /// Bounding rectangle of every island, indexed by `label - 1`.
    pub fn bounding_blocks(&self) -> Vec<Block> {
        let mut blocks: Vec<Option<Block>> = vec![None; self.count as usize];

        for (i, &label) in self.labels.iter().enumerate() {
            if label == 0 {
                continue;
            }
            let cell = (i / self.width, i % self.width);
            match &mut blocks[label as usize - 1] {
                Some(block) => block.include(cell),
                slot => *slot = Some(Block::from_cell(cell)),
            }
        }

        // Every label owns at least one cell, so no slot is left empty.
        blocks.into_iter().flatten().collect()
    }
}

/// Label the 4-connected islands of `grid` with an iterative flood fill.
pub fn label(grid: &OccupancyGrid) -> LabelMap {
    let (rows, width) = (grid.rows(), grid.width());
    let mut labels = vec![0u32; rows * width];
    let mut count = 0u32;
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for (row, col) in grid.occupied() {
        if labels[row * width + col] != 0 {
            continue;
        }

        count += 1;
        labels[row * width + col] = count;
        stack.push((row, col));

        while let Some((r, c)) = stack.pop() {
            for (nr, nc) in neighbours(r, c, rows, width) {
                let idx = nr * width + nc;
                if labels[idx] == 0 && grid.get(nr, nc) {
                    labels[idx] = count;
                    stack.push((nr, nc));
                }
            }
        }
    }

    LabelMap {
        rows,
        width,
        labels,
        count,
    }
}

/// Bounding rectangles of all islands in label order.
pub fn detect(grid: &OccupancyGrid) -> Vec<Block> {
    let blocks = label(grid).bounding_blocks();
    log::trace!(
        "labeled {} islands on a {}x{} grid",
        blocks.len(),
        grid.rows(),
        grid.width()
    );
    blocks
}

fn neighbours(
    row: usize,
    col: usize,
    rows: usize,
    width: usize,
) -> impl Iterator<Item = (usize, usize)> {
    let up = row.checked_sub(1).map(|r| (r, col));
    let down = (row + 1 < rows).then_some((row + 1, col));
    let left = col.checked_sub(1).map(|c| (row, c));
    let right = (col + 1 < width).then_some((row, col + 1));
    [up, down, left, right].into_iter().flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(lines: &[&str]) -> OccupancyGrid {
        OccupancyGrid::from_lines(lines).unwrap()
    }

    #[test]
    fn test_empty_grid_has_no_islands() {
        let g = grid(&[]);
        let map = label(&g);
        assert_eq!(map.count(), 0);
        assert!(detect(&g).is_empty());
    }

    #[test]
    fn test_all_blank_grid_has_no_islands() {
        let g = grid(&["    ", "   "]);
        assert!(detect(&g).is_empty());
    }

    #[test]
    fn test_single_island_bounding_box() {
        let g = grid(&["  ab", "  cde"]);
        assert_eq!(detect(&g), vec![Block::new((0, 2), (1, 4))]);
    }

    #[test]
    fn test_diagonal_cells_are_separate_islands() {
        let g = grid(&["x ", " y"]);
        let blocks = detect(&g);
        assert_eq!(
            blocks,
            vec![Block::from_cell((0, 0)), Block::from_cell((1, 1))]
        );
    }

    #[test]
    fn test_double_space_splits_columns() {
        let g = grid(&["left  right", "more  again"]);
        let blocks = detect(&g);
        assert_eq!(
            blocks,
            vec![Block::new((0, 0), (1, 3)), Block::new((0, 6), (1, 10))]
        );
    }

    #[test]
    fn test_labels_follow_raster_discovery_order() {
        // The right-hand island starts on row 0, so it is discovered before
        // the left-hand one that starts on row 1.
        let g = grid(&["     r", "l    r"]);
        let map = label(&g);
        assert_eq!(map.get(0, 5), 1);
        assert_eq!(map.get(1, 0), 2);
        assert_eq!(
            map.bounding_blocks(),
            vec![Block::new((0, 5), (1, 5)), Block::from_cell((1, 0))]
        );
    }

    #[test]
    fn test_u_shape_is_one_island() {
        let g = grid(&["x  x", "x  x", "xxxx"]);
        let map = label(&g);
        assert_eq!(map.count(), 1);
        assert_eq!(map.bounding_blocks(), vec![Block::new((0, 0), (2, 3))]);
    }

    #[test]
    fn test_label_map_partitions_occupied_cells() {
        let g = grid(&[
            "Title here",
            "",
            "col one   col two",
            "text a    text b",
            "   x",
            "  yy  z",
        ]);
        let map = label(&g);

        for row in 0..g.rows() {
            for col in 0..g.width() {
                let l = map.get(row, col);
                assert_eq!(g.get(row, col), l != 0, "cell ({row},{col})");
                assert!(l <= map.count());
            }
        }

        // Every occupied cell lies inside its own island's rectangle.
        let blocks = map.bounding_blocks();
        assert_eq!(blocks.len(), map.count() as usize);
        for (row, col) in g.occupied() {
            let l = map.get(row, col) as usize;
            assert!(blocks[l - 1].contains((row, col)));
        }
    }

    #[test]
    fn test_bounding_boxes_may_overlap() {
        // An L-shaped island wraps around a separate dot.
        let g = grid(&["xxxx", "x   ", "x  y", "x   "]);
        let blocks = detect(&g);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], Block::new((0, 0), (3, 3)));
        assert_eq!(blocks[1], Block::from_cell((2, 3)));
        assert!(blocks[0].contains(blocks[1].top_left()));
    }
}
