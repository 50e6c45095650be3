//! Lectern Navigation
//!
//! Wires sidebar link activation to the content frame's navigation target
//! and reacts to visibility-control messages sent by content loaded into
//! the frame. State lives in an explicit value type updated by pure
//! transitions; a separate render step applies it to the page tree.

mod controller;
mod error;
mod message;
mod selectors;
mod state;

pub use controller::NavController;
pub use error::NavError;
pub use message::FrameMessage;
pub use selectors::Selectors;
pub use state::NavState;

pub type Result<T> = std::result::Result<T, NavError>;
