//! Page-level entry points tying the pipeline stages together.

use thiserror::Error;

use crate::extract::{extract_text, extract_texts};
use crate::grid::OccupancyGrid;
use crate::islands;
use crate::merge::merge_blocks;
use crate::types::{SegmentOptions, TextBlock};
use crate::SegmentError;

/// A page that could not be segmented. `page` is the 0-based page index.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("page {page}: {source}")]
pub struct PageError {
    pub page: usize,
    #[source]
    pub source: SegmentError,
}

pub type PageResult = Result<Vec<TextBlock>, PageError>;

/// Segment one page into text blocks.
///
/// Blocks come back in merge order: label-discovery order of the islands,
/// minus the ones absorbed by an earlier incomplete block. An empty page
/// yields no blocks.
pub fn segment_page<S: AsRef<str>>(
    lines: &[S],
    options: &SegmentOptions,
) -> Result<Vec<TextBlock>, SegmentError> {
    if lines.is_empty() {
        return Ok(Vec::new());
    }

    let grid = OccupancyGrid::from_lines(lines)?;
    let islands = islands::detect(&grid);
    let texts = extract_texts(lines, &islands);
    let merged = merge_blocks(&islands, &texts, options);

    log::debug!(
        "{} islands merged into {} blocks (threshold {})",
        islands.len(),
        merged.len(),
        options.indentation_threshold
    );

    Ok(merged
        .into_iter()
        .map(|block| TextBlock {
            text: extract_text(lines, &block),
            block,
        })
        .collect())
}

/// Segment every page independently. A failing page is reported in its slot
/// and does not affect the others. Results are in page order.
///
/// With the `parallel` feature the pages are processed on the rayon pool.
pub fn segment_pages<P, S>(pages: &[P], options: &SegmentOptions) -> Vec<PageResult>
where
    P: AsRef<[S]> + Sync,
    S: AsRef<str> + Sync,
{
    let run = |(page, lines): (usize, &P)| {
        let lines: &[S] = lines.as_ref();
        segment_page(lines, options).map_err(|source| PageError { page, source })
    };

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        pages.par_iter().enumerate().map(run).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        pages.iter().enumerate().map(run).collect()
    }
}
