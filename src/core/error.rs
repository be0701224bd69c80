use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("load error: {0}")]
    Load(#[from] crate::tree::loader::LoadError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TreeError>;
