use std::path::PathBuf;

use thiserror::Error;

/// Upload validation and storage path failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("only {expected} files are allowed (got '{actual}')")]
    WrongContentType { expected: &'static str, actual: String },
    #[error("file is {size} bytes; the limit is {limit} bytes")]
    TooLarge { size: u64, limit: u64 },
    #[error("'{0}' is not a public URL of bucket '{1}'")]
    InvalidUrl(String, &'static str),
}

/// Site configuration loading failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}
