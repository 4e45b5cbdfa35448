use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Io(std::io::Error),
    Parse(String),
    SystemInfo(String),
    Config(crate::config::ConfigError),
    Telemetry(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Io(err) => write!(f, "I/O error: {}", err),
            AppError::Parse(msg) => write!(f, "Parse error: {}", msg),
            AppError::SystemInfo(msg) => write!(f, "System info error: {}", msg),
            AppError::Config(err) => write!(f, "Configuration error: {}", err),
            AppError::Telemetry(msg) => write!(f, "Telemetry error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Io(err) => Some(err),
            AppError::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(err: crate::config::ConfigError) -> Self {
        AppError::Config(err)
    }
}

impl From<std::num::ParseFloatError> for AppError {
    fn from(err: std::num::ParseFloatError) -> Self {
        AppError::Parse(err.to_string())
    }
}

// Convenience type alias
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    pub fn parse(msg: &str) -> Self {
        AppError::Parse(msg.to_string())
    }

    pub fn system_info(msg: &str) -> Self {
        AppError::SystemInfo(msg.to_string())
    }

    pub fn telemetry(msg: &str) -> Self {
        AppError::Telemetry(msg.to_string())
    }

    /// Negated errno, the status convention of the C uptime routines.
    ///
    /// I/O failures carry the OS error code (`EIO` when the error did not
    /// come from the OS), malformed counter records map to `ERANGE`.
    pub fn code(&self) -> i32 {
        match self {
            AppError::Io(err) => -err.raw_os_error().unwrap_or(libc::EIO),
            AppError::Parse(_) => -libc::ERANGE,
            AppError::SystemInfo(_) | AppError::Config(_) | AppError::Telemetry(_) => -libc::EINVAL,
        }
    }
}
