//! Core library for textblocks
//!
//! This crate implements the **Functional Core** of the textblocks application:
//! recovering logical text blocks (paragraphs, headings, captions) from the raw
//! line grid of a single page, using nothing but character presence.
//!
//! # Architecture Overview
//!
//! - **`textblocks_core`** (this crate): pure transformations with zero I/O
//! - **`pages`**: loads documents and turns them into normalized pages
//! - **`textblocks`**: the command line (the Imperative Shell)
//!
//! # Pipeline
//!
//! ```text
//! Page  ->  OccupancyGrid  ->  Block[]  ->  String[]  ->  Block[] (merged)
//!            grid               islands      extract       merge
//! ```
//!
//! Every stage is deterministic. Pages are independent of each other, so a
//! batch of pages can be segmented in parallel (see [`segment::segment_pages`]
//! and the `parallel` feature).
//!
//! # Example Usage
//!
//! ```rust
//! use textblocks_core::{segment_page, SegmentOptions};
//!
//! let lines = ["Hello world.", "", "A line that", "continues here."];
//! let blocks = segment_page(&lines, &SegmentOptions::default()).unwrap();
//!
//! assert_eq!(blocks.len(), 2);
//! assert_eq!(blocks[0].text, "Hello world.\n");
//! ```

use thiserror::Error;

pub mod extract;
pub mod grid;
pub mod islands;
pub mod merge;
pub mod segment;
pub mod types;

pub use grid::OccupancyGrid;
pub use segment::{segment_page, segment_pages, PageError, PageResult};
pub use types::*;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SegmentError {
    /// A row produced more occupancy cells than the grid is wide.
    #[error("malformed grid: row {row} has {len} cells but the grid is {width} wide")]
    MalformedGrid { row: usize, len: usize, width: usize },
}
