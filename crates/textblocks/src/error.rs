#[derive(thiserror::Error, Debug, serde::Deserialize, serde::Serialize)]
pub enum Error {
    #[error("Page {page} not found (document has {count} pages)")]
    PageNotFound { page: usize, count: usize },

    #[error("{0} page(s) could not be segmented")]
    PagesFailed(usize),
}
