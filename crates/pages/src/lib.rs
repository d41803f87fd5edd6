//! Page source for the textblocks engine.
//!
//! Loads a document, splits it into pages and normalizes each page into the
//! rows consumed by [`textblocks_core::segment_page`]. All file and PDF I/O of
//! the workspace lives here.

use std::path::Path;

use serde::{Deserialize, Serialize};
use textblocks_core::Page;
use thiserror::Error;

use backend::{LopdfBackend, PageBackend, TextBackend};

pub mod backend;
pub mod normalize;

pub use normalize::{normalize_page, separate_sentences};

#[derive(Debug, Error)]
pub enum PageSourceError {
    #[error("PDF parsing error: {0}")]
    Parse(String),
    #[error("Document is encrypted")]
    Encrypted,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Which backend produced a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentSource {
    Text,
    Pdf,
}

/// A loaded document: normalized pages, ready for segmentation.
#[derive(Debug, Clone)]
pub struct Document {
    pub source: DocumentSource,
    pub pages: Vec<Page>,
}

impl Document {
    /// Normalize every page handed out by `backend`.
    pub fn from_backend(
        backend: &impl PageBackend,
        source: DocumentSource,
    ) -> Result<Self, PageSourceError> {
        let pages = backend
            .page_texts()?
            .iter()
            .map(|raw| normalize_page(raw))
            .collect();
        Ok(Self { source, pages })
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Page by 1-based page number.
    pub fn page(&self, number: usize) -> Option<&Page> {
        number.checked_sub(1).and_then(|i| self.pages.get(i))
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Load a plain-text dump whose pages are separated by form feeds.
pub fn load_text(bytes: &[u8]) -> Result<Document, PageSourceError> {
    let backend = TextBackend::load_bytes(bytes);
    Document::from_backend(&backend, DocumentSource::Text)
}

/// Load a PDF, taking the text of each page in page-number order.
pub fn load_pdf(bytes: &[u8]) -> Result<Document, PageSourceError> {
    let backend = LopdfBackend::load_bytes(bytes)?;
    Document::from_backend(&backend, DocumentSource::Pdf)
}

/// Load a document from memory, picking the backend from its contents.
pub fn load_bytes(bytes: &[u8]) -> Result<Document, PageSourceError> {
    if backend::is_pdf(bytes) {
        log::debug!("loading {} bytes as PDF", bytes.len());
        load_pdf(bytes)
    } else {
        log::debug!("loading {} bytes as text", bytes.len());
        load_text(bytes)
    }
}

/// Read a document from disk.
pub fn load_path(path: impl AsRef<Path>) -> Result<Document, PageSourceError> {
    let bytes = std::fs::read(path.as_ref())?;
    load_bytes(&bytes)
}
