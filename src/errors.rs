use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Arithmetic Error: division by zero (classes must not be 0)")]
    DivisionByZero,

    #[error("Non-terminating range: start {start} < stop {stop} but step {step} never reaches stop")]
    NonTerminatingRange { start: f64, stop: f64, step: f64 },

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("File I/O Error for '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AppError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io { path: path.into(), source }
    }
}
