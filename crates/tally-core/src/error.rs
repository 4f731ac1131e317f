#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("api transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("api returned {status} for {url}: {body}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
        body: String,
    },

    #[error("invalid api response: {0}")]
    InvalidResponse(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("csv serialization failure: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
