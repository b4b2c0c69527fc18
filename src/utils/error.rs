use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChaosError {
    #[error("Authorization token not specified")]
    MissingCredential,

    #[error("Domain not specified")]
    MissingDomain,

    #[error("Invalid authorization token: {reason}")]
    InvalidCredential { reason: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Could not send request: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Could not finish request: {status} statuscode")]
    UnexpectedStatus { status: u16 },

    #[error("Could not unmarshal result: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Could not open {path}: {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Transport,
    Protocol,
    Decode,
    LocalIo,
}

impl ChaosError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ChaosError::MissingCredential
            | ChaosError::MissingDomain
            | ChaosError::InvalidCredential { .. }
            | ChaosError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ChaosError::Transport(_) => ErrorCategory::Transport,
            ChaosError::UnexpectedStatus { .. } => ErrorCategory::Protocol,
            ChaosError::Decode(_) => ErrorCategory::Decode,
            ChaosError::File { .. } | ChaosError::IoError(_) => ErrorCategory::LocalIo,
        }
    }

    /// Configuration errors are raised before any request leaves the process.
    pub fn is_configuration(&self) -> bool {
        self.category() == ErrorCategory::Configuration
    }
}

pub type Result<T> = std::result::Result<T, ChaosError>;
