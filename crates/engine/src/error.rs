use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode line {line} in '{path}' as {encoding}")]
    Decode {
        path: PathBuf,
        line: usize,
        encoding: &'static str,
    },

    #[error("Line {line} in '{path}' has {found} tab-separated field(s), field {field} requested")]
    MalformedField {
        path: PathBuf,
        line: usize,
        field: usize,
        found: usize,
    },

    #[error("No tokens processed in '{path}'")]
    NoTokens { path: PathBuf },

    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),

    #[error("Unknown encoding: {0}")]
    UnknownEncoding(String),

    #[error("Encoding {0} is not ASCII-compatible")]
    UnsupportedEncoding(&'static str),
}

impl EngineError {
    pub(crate) fn file_read(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
