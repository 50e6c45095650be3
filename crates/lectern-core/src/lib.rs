//! Lectern Core
//!
//! Coordination layer for the Lectern documentation shell. Rust owns the
//! navigation state; the rendering host is a thin consumer of it.

mod error;
mod shell;

pub use error::CoreError;
pub use shell::Shell;

// Re-export the navigation surface
pub use lectern_nav::{FrameMessage, NavController, NavError, NavState, Selectors};
pub use lectern_page::{Element, NodeId, Page, PageError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
