use thiserror::Error;

pub type NarrativeResult<T> = Result<T, NarrativeError>;

#[derive(Debug, Error)]
pub enum NarrativeError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("failed to read `{path}`: {message}")]
    Io { path: String, message: String },
}
