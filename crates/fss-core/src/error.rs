use thiserror::Error;

/// Errors from state codec and archive operations.
#[derive(Debug, Error)]
pub enum StudioError {
    #[error("state parse error: {0}")]
    Parse(String),

    #[error("archive error: {0}")]
    Archive(String),

    #[error("runner fetch error: {0}")]
    RunnerFetch(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl StudioError {
    /// Short message suitable for a blocking user alert.
    pub fn user_message(&self) -> &str {
        match self {
            Self::Parse(_) => "Failed to parse or send, incorrect format?",
            Self::Archive(_) | Self::RunnerFetch(_) | Self::Io(_) => "Failed to create .zip",
        }
    }
}

impl From<serde_json::Error> for StudioError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<zip::result::ZipError> for StudioError {
    fn from(err: zip::result::ZipError) -> Self {
        Self::Archive(err.to_string())
    }
}

impl From<std::io::Error> for StudioError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, StudioError>;
