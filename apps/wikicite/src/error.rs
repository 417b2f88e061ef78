//! Error types for the wikicite binary

use thiserror::Error;

/// Errors fetching an article's markup
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request failed: {message}")]
    RequestFailed { message: String },
    #[error("Invalid URL: {url}")]
    InvalidUrl { url: String },
    #[error("Parse error: {message}")]
    ParseError { message: String },
    #[error("No page in reply")]
    MissingPage,
    #[error("Page {title} has no revision")]
    MissingRevision { title: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Rewrite(#[from] wikicite_identifiers::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
