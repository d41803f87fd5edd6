use std::sync::OnceLock;

use regex::Regex;
use textblocks_core::Page;
use unicode_normalization::UnicodeNormalization;

/// Turn the raw text of one page into the rows the segmentation engine
/// expects.
///
/// Applies Unicode NFC normalization, folds CRLF line endings, inserts a
/// blank line after every line ending in a period, then splits into rows.
pub fn normalize_page(raw: &str) -> Page {
    let text: String = raw.nfc().collect();
    let text = separate_sentences(&text.replace("\r\n", "\n"));

    text.split('\n')
        .map(|row| row.strip_suffix('\r').unwrap_or(row).to_string())
        .collect()
}

/// Insert a blank line after each line that ends in a period.
pub fn separate_sentences(text: &str) -> String {
    static RE_PERIOD_EOL: OnceLock<Regex> = OnceLock::new();
    let re = RE_PERIOD_EOL.get_or_init(|| Regex::new(r"\.\n").unwrap());
    re.replace_all(text, ".\n\n").into_owned()
}
