use std::collections::BTreeMap;

use crate::PageSourceError;

/// A page identifier mirroring `lopdf::ObjectId`: (object number, generation number).
pub type PageId = (u32, u16);

/// Marker every PDF file starts with.
pub const PDF_MAGIC: &[u8] = b"%PDF-";

/// Form feed: the page separator in plain-text dumps such as the output of
/// `pdftotext -layout`.
pub const PAGE_BREAK: char = '\x0c';

// ---------------------------------------------------------------------------
// PageBackend trait
// ---------------------------------------------------------------------------

/// Anything that can hand out the raw text of each page of a document.
///
/// Implemented by [`LopdfBackend`] for PDF files and [`TextBackend`] for
/// plain-text dumps, so the loading code can be tested without real files.
pub trait PageBackend {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Raw text of every page, in page order. Lines are separated by `\n`.
    fn page_texts(&self) -> Result<Vec<String>, PageSourceError>;
}

// ---------------------------------------------------------------------------
// TextBackend
// ---------------------------------------------------------------------------

/// Plain-text document whose pages are separated by form feeds.
pub struct TextBackend {
    pages: Vec<String>,
}

impl TextBackend {
    pub fn new(text: &str) -> Self {
        Self {
            pages: split_pages(text),
        }
    }

    /// Decode bytes as UTF-8, replacing invalid sequences.
    pub fn load_bytes(data: &[u8]) -> Self {
        Self::new(&String::from_utf8_lossy(data))
    }
}

impl PageBackend for TextBackend {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_texts(&self) -> Result<Vec<String>, PageSourceError> {
        Ok(self.pages.clone())
    }
}

/// Split a text dump into pages on form feeds. A final form feed does not
/// open an extra empty page, and empty text has no pages.
pub fn split_pages(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut pages: Vec<String> = text.split(PAGE_BREAK).map(str::to_string).collect();
    if text.ends_with(PAGE_BREAK) {
        pages.pop();
    }
    pages
}

// ---------------------------------------------------------------------------
// LopdfBackend
// ---------------------------------------------------------------------------

/// Concrete [`PageBackend`] implementation backed by [`lopdf::Document`].
pub struct LopdfBackend {
    doc: lopdf::Document,
}

impl LopdfBackend {
    /// Parse a PDF from an in-memory byte slice.
    pub fn load_bytes(data: &[u8]) -> Result<Self, PageSourceError> {
        let doc = lopdf::Document::load_mem(data)
            .map_err(|e| PageSourceError::Parse(e.to_string()))?;

        if doc.is_encrypted() {
            return Err(PageSourceError::Encrypted);
        }

        Ok(Self { doc })
    }

    /// Mapping from 1-based page number to [`PageId`].
    pub fn pages(&self) -> BTreeMap<u32, PageId> {
        self.doc.get_pages()
    }
}

impl PageBackend for LopdfBackend {
    fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    fn page_texts(&self) -> Result<Vec<String>, PageSourceError> {
        self.pages()
            .keys()
            .map(|&page_num| {
                self.doc
                    .extract_text(&[page_num])
                    .map_err(|e| PageSourceError::Parse(format!("page {page_num}: {e}")))
            })
            .collect()
    }
}

/// `true` when `data` looks like a PDF file.
pub fn is_pdf(data: &[u8]) -> bool {
    data.starts_with(PDF_MAGIC)
}
