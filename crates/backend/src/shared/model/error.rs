use std::path::PathBuf;
use thiserror::Error;

/// Ошибки загрузки артефакта модели (фатальны при старте)
#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("cannot read model artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("model artifact {path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("incompatible model artifact: {0}")]
    Incompatible(String),
}

/// Ошибки вычисления прогноза для конкретной записи
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("column '{column}' is empty")]
    EmptyFrame { column: &'static str },

    #[error("column '{column}' has {len} values, expected 1 or {rows}")]
    ShapeMismatch {
        column: &'static str,
        len: usize,
        rows: usize,
    },

    #[error("model evaluation failed: {0}")]
    Evaluation(String),
}
