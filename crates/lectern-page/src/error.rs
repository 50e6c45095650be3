//! Page error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("Duplicate element id: {0}")]
    DuplicateId(String),
}
