use thiserror::Error;

// * Unified Error type for the Network Layer.
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("HTTP {0} returned for {1}")]
    Status(u16, String),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
