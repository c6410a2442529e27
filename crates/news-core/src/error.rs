use thiserror::Error;

#[derive(Error, Debug)]
pub enum NewsError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Feed parse error: {0}")]
    FeedParse(String),
}

pub type NewsResult<T> = Result<T, NewsError>;
