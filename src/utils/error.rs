use std::error::Error;
use std::fmt;
use std::io;

/// Common result type for Rustfolio operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for Rustfolio operations
#[derive(Debug)]
pub enum RustfolioError {
    /// IO error wrapper
    Io(io::Error),
    /// Configuration error
    Config(String),
    /// Site data error (routes, modules, posts, locales, redirects)
    Data(String),
    /// Page export (JSON sidecar) error
    Export(String),
    /// File handling error
    File(String),
    /// Generic error message
    Generic(String),
}

impl fmt::Display for RustfolioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RustfolioError::Io(err) => write!(f, "IO error: {}", err),
            RustfolioError::Config(msg) => write!(f, "Configuration error: {}", msg),
            RustfolioError::Data(msg) => write!(f, "Site data error: {}", msg),
            RustfolioError::Export(msg) => write!(f, "Page export error: {}", msg),
            RustfolioError::File(msg) => write!(f, "File error: {}", msg),
            RustfolioError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for RustfolioError {}

impl From<io::Error> for RustfolioError {
    fn from(err: io::Error) -> Self {
        RustfolioError::Io(err)
    }
}

impl From<String> for RustfolioError {
    fn from(msg: String) -> Self {
        RustfolioError::Generic(msg)
    }
}

impl From<&str> for RustfolioError {
    fn from(msg: &str) -> Self {
        RustfolioError::Generic(msg.to_string())
    }
}
