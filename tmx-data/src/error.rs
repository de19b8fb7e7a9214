use std::fmt;

/// Fatal errors raised while loading the daily temperature table.
///
/// Individual malformed rows are not errors; the loader skips and counts them.
#[derive(Debug)]
pub enum LoadError {
    /// The resource could not be read.
    Io(std::io::Error),
    /// The resource is not readable as CSV.
    Csv(csv::Error),
    /// The header row lacks a required column.
    MissingColumn(&'static str),
    /// The resource looked gzip-compressed but did not inflate.
    Decompress(std::io::Error),
    /// The HTTP request failed or returned a non-success status.
    #[cfg(feature = "api")]
    Http(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "failed to read temperature data: {}", e),
            LoadError::Csv(e) => write!(f, "temperature data is not valid CSV: {}", e),
            LoadError::MissingColumn(name) => {
                write!(f, "temperature data has no `{}` column", name)
            }
            LoadError::Decompress(e) => {
                write!(f, "failed to decompress temperature data: {}", e)
            }
            #[cfg(feature = "api")]
            LoadError::Http(msg) => write!(f, "failed to fetch temperature data: {}", msg),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) | LoadError::Decompress(e) => Some(e),
            LoadError::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(value: std::io::Error) -> Self {
        LoadError::Io(value)
    }
}

impl From<csv::Error> for LoadError {
    fn from(value: csv::Error) -> Self {
        LoadError::Csv(value)
    }
}
