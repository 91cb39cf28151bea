use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpendwiseChatError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(String),
    #[error("serialization error: {0}")]
    Serialization(String),
}

pub use crate::Result;
