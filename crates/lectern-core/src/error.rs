//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Navigation error: {0}")]
    Nav(#[from] lectern_nav::NavError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
