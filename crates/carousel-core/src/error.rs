use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid loop padding: {pad} pages per side needs more than twice as many items, got {len}")]
    InvalidPadding { pad: usize, len: usize },

    #[error("Invalid initialPage {page} (dataset has {len} items)")]
    InvalidInitialPage { page: usize, len: usize },

    #[error("Index not valid {index} (dataset has {len} items)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Carousel runtime is not running")]
    Closed,
}

pub type Result<T> = std::result::Result<T, Error>;
