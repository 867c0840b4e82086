use std::path::PathBuf;

pub type ChartResult<T> = Result<T, ChartError>;

/// Failure to obtain rows from a data source.
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("failed to read data source '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse csv: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(thiserror::Error, Debug)]
pub enum ChartError {
    #[error("load error: {0}")]
    Load(#[from] LoadError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("encode error: {0}")]
    Encode(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ChartError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
