//! Navigation state
//!
//! The owned value behind the navigation surface: which link is selected,
//! what the frame should display, and which console nav entries have been
//! hidden. Transitions are pure so the "what changed" logic stays separate
//! from tree mutation.

use serde::{Deserialize, Serialize};

use lectern_page::NodeId;

use crate::message::FrameMessage;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavState {
    /// Currently selected sidebar link, at most one
    pub active_link: Option<NodeId>,
    /// Path the content frame should display
    pub frame_target: Option<String>,
    /// API test console nav entry has been hidden
    pub api_nav_hidden: bool,
    /// Load test console nav entry has been hidden
    pub load_nav_hidden: bool,
}

impl NavState {
    /// Select a link and retarget the frame
    pub fn select(self, link: NodeId, target: impl Into<String>) -> Self {
        Self {
            active_link: Some(link),
            frame_target: Some(target.into()),
            ..self
        }
    }

    /// Fold a cross-frame message into the state. Hide flags only ever go
    /// from false to true; there is no corresponding show message.
    pub fn absorb(self, message: FrameMessage) -> Self {
        match message {
            FrameMessage::HideApiTestNav => Self {
                api_nav_hidden: true,
                ..self
            },
            FrameMessage::HideLoadTestNav => Self {
                load_nav_hidden: true,
                ..self
            },
            FrameMessage::Unknown => self,
        }
    }
}
