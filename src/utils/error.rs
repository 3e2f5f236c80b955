use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl FixtureError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FixtureError::IoError(_) => {
                "Check that stdout is still open and the config file is readable"
            }
            FixtureError::ConfigError { .. } => "Make sure the config file is valid TOML",
            FixtureError::InvalidConfigValueError { .. } => {
                "Fix the value in the config file or on the command line"
            }
        }
    }

    /// Process exit code for this error. I/O failures map to EX_IOERR.
    pub fn exit_code(&self) -> i32 {
        match self {
            FixtureError::IoError(_) => 74,
            FixtureError::ConfigError { .. } | FixtureError::InvalidConfigValueError { .. } => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, FixtureError>;
