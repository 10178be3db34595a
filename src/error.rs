use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("CliError: {0}")]
    Cli(#[from] CliError),
    #[error("ApiError: {0}")]
    Api(#[from] ApiError),
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
    #[error("DisplayError: {0}")]
    Display(#[from] DisplayError),
    #[error("ServiceError: {0}")]
    Service(#[from] ServiceError),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid numeric option: '{input}'")]
    InvalidNumber { input: String },
}

/// Failures of a single FIPE API call.
///
/// Every variant displays as its `message` alone, so callers that only print
/// the error see one uniform kind of failure. The variant and status stay
/// available for logging and tests.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{message}")]
    InvalidInput {
        status: u16,
        endpoint: String,
        message: String,
    },
    #[error("{message}")]
    Server {
        status: u16,
        endpoint: String,
        message: String,
    },
    #[error("{message}")]
    Connectivity { endpoint: String, message: String },
    #[error("{message}")]
    Unexpected { endpoint: String, message: String },
}

impl ApiError {
    pub fn endpoint(&self) -> &str {
        match self {
            ApiError::InvalidInput { endpoint, .. }
            | ApiError::Server { endpoint, .. }
            | ApiError::Connectivity { endpoint, .. }
            | ApiError::Unexpected { endpoint, .. } => endpoint,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::InvalidInput { message, .. }
            | ApiError::Server { message, .. }
            | ApiError::Connectivity { message, .. }
            | ApiError::Unexpected { message, .. } => message,
        }
    }
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}

#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("Terminal output error: {0}")]
    TerminalOutput(String),
    #[error("Terminal input error: {0}")]
    TerminalInput(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration value for '{field}': {value}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

/// Errors raised by the orchestration layer itself, as opposed to the API.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("{message}")]
    InvalidArgument { field: String, message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    Critical,
    High,
    Medium,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            ErrorSeverity::Critical => "🚨",
            ErrorSeverity::High => "❌",
            ErrorSeverity::Medium => "⚠️",
        }
    }
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Api(_) | AppError::Service(_) => ErrorSeverity::Critical,
            AppError::Cli(_) => ErrorSeverity::Medium,
            AppError::Config(_) | AppError::Storage(_) | AppError::Display(_) => {
                ErrorSeverity::High
            }
        }
    }

    /// Whether the failure has a cause the user can act on. Known causes are
    /// shown with their message; everything else gets a generic line.
    pub fn is_known_cause(&self) -> bool {
        matches!(self, AppError::Api(_) | AppError::Service(_) | AppError::Cli(_))
    }

    pub fn display_friendly(&self) -> String {
        match self {
            AppError::Api(api_error) => api_error.message().to_string(),
            AppError::Service(service_error) => service_error.to_string(),
            AppError::Cli(CliError::InvalidNumber { .. }) => {
                "Invalid input. Please enter a numeric option.".to_string()
            }
            AppError::Config(ConfigError::InvalidValue { field, reason, .. }) => {
                format!("Invalid value for '{}': {}", field, reason)
            }
            _ => format!("{}", self),
        }
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Api(ApiError::Connectivity { .. }) => {
                Some("Check your internet connection and try again".to_string())
            }
            AppError::Storage(StorageError::ConfigParseError { .. }) => Some(
                "Fix or remove ~/.config/fipe-explorer/config.toml and start again".to_string(),
            ),
            AppError::Config(ConfigError::InvalidValue { field, .. }) if field == "base_url" => {
                Some("Set base_url (or FIPE_URL) to an http:// or https:// URL".to_string())
            }
            _ => None,
        }
    }
}
