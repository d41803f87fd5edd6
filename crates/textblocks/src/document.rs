use std::path::Path;

use pages::Document;
use textblocks_core::Page;

use crate::prelude::*;

/// Load a document from disk, text dump or PDF.
pub fn load(path: &Path) -> Result<Document> {
    pages::load_path(path).with_context(|| f!("Failed to load {}", path.display()))
}

/// Pages to work on as `(1-based page number, page)` pairs: a single page
/// when `page` is set, all of them otherwise.
pub fn select_pages(document: &Document, page: Option<usize>) -> Result<Vec<(usize, &Page)>> {
    match page {
        Some(number) => {
            let selected = document.page(number).ok_or(Error::PageNotFound {
                page: number,
                count: document.page_count(),
            })?;
            Ok(vec![(number, selected)])
        }
        None => Ok(document
            .pages
            .iter()
            .enumerate()
            .map(|(i, p)| (i + 1, p))
            .collect()),
    }
}
