//! Navigation error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavError {
    #[error("Selector marker cannot be empty: {0}")]
    EmptySelector(&'static str),
}
