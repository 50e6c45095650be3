//! Documentation shell
//!
//! Thread-safe wrapper around the page and its navigation controller. The
//! shell is the embedding seam: a host UI hands it clicks and raw frame
//! payloads and reads the resulting state back.

use parking_lot::RwLock;
use std::sync::Arc;

use lectern_nav::{FrameMessage, NavController, NavState, Selectors};
use lectern_page::{NodeId, Page};

use crate::Result;

pub struct Shell {
    page: Arc<RwLock<Page>>,
    controller: Arc<RwLock<NavController>>,
}

impl Shell {
    /// Build a shell over `page`. Selectors are validated up front; binding
    /// itself is best-effort and silent, matching the page contract.
    pub fn new(page: Page, selectors: Selectors) -> Result<Self> {
        selectors.validate()?;

        let controller = NavController::attach(&page, selectors);

        tracing::info!(bound = controller.is_bound(), "Documentation shell attached");

        Ok(Self {
            page: Arc::new(RwLock::new(page)),
            controller: Arc::new(RwLock::new(controller)),
        })
    }

    /// Whether click handling found its sidebar and content frame
    pub fn is_bound(&self) -> bool {
        self.controller.read().is_bound()
    }

    /// Forward a click landing on `target`; returns whether it was consumed
    pub fn click(&self, target: NodeId) -> bool {
        let mut page = self.page.write();
        self.controller.write().handle_click(&mut page, target)
    }

    /// Deliver an already-classified frame message
    pub fn deliver(&self, message: FrameMessage) {
        let mut page = self.page.write();
        self.controller.write().handle_message(&mut page, message);
    }

    /// Deliver a raw JSON payload posted by frame content
    pub fn deliver_json(&self, raw: &str) {
        self.deliver(FrameMessage::from_json(raw));
    }

    pub fn active_link(&self) -> Option<NodeId> {
        self.controller.read().state().active_link
    }

    pub fn frame_target(&self) -> Option<String> {
        self.controller.read().state().frame_target.clone()
    }

    pub fn state(&self) -> NavState {
        self.controller.read().state().clone()
    }

    /// JSON export of the navigation state for a host UI
    pub fn snapshot(&self) -> Result<String> {
        Ok(serde_json::to_string(self.controller.read().state())?)
    }

    /// Read access to the page tree
    pub fn with_page<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&Page) -> T,
    {
        f(&self.page.read())
    }
}

impl Clone for Shell {
    fn clone(&self) -> Self {
        Self {
            page: Arc::clone(&self.page),
            controller: Arc::clone(&self.controller),
        }
    }
}
