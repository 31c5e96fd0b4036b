use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibraError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Data format error in '{name}': {message}")]
    DataFormat { name: String, message: String },

    #[error("Empty data: {0}")]
    EmptyData(String),

    #[error(
        "Unsupported combination of {coincident} coincident and {vetoed} veto channels"
    )]
    UnsupportedCoincidence { coincident: usize, vetoed: usize },

    #[error("Nuclide '{0}' has no half-life")]
    MissingHalfLife(String),

    #[error("Nuclide '{0}' has no atomic mass")]
    MissingAtomicMass(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type LibraResult<T> = Result<T, LibraError>;
