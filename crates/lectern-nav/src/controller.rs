//! Navigation controller
//!
//! Locates its collaborators once at attach time and reacts to two kinds of
//! input: sidebar clicks and cross-frame messages. Click handling needs both
//! the sidebar and the content frame and stays unbound when either is
//! missing; message handling works regardless of binding.

use lectern_page::{NodeId, Page};

use crate::message::FrameMessage;
use crate::selectors::Selectors;
use crate::state::NavState;

/// Attribute receiving the frame's navigation target
const FRAME_TARGET_ATTR: &str = "src";

#[derive(Debug, Clone, Copy)]
struct ClickBinding {
    sidebar: NodeId,
    frame: NodeId,
}

#[derive(Debug, Clone)]
pub struct NavController {
    selectors: Selectors,
    binding: Option<ClickBinding>,
    state: NavState,
}

impl NavController {
    /// Attach to a page. Missing sidebar or content frame leaves click
    /// handling unbound; that is not an error.
    pub fn attach(page: &Page, selectors: Selectors) -> Self {
        let sidebar = page.first_by_class(&selectors.sidebar_class);
        let frame = page.by_id(&selectors.frame_id);

        let binding = match (sidebar, frame) {
            (Some(sidebar), Some(frame)) => {
                tracing::debug!(
                    sidebar_class = %selectors.sidebar_class,
                    frame_id = %selectors.frame_id,
                    "Navigation click handling bound"
                );
                Some(ClickBinding { sidebar, frame })
            }
            _ => {
                tracing::debug!(
                    sidebar_found = sidebar.is_some(),
                    frame_found = frame.is_some(),
                    "Navigation click handling not bound"
                );
                None
            }
        };

        Self {
            selectors,
            binding,
            state: NavState::default(),
        }
    }

    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }

    pub fn state(&self) -> &NavState {
        &self.state
    }

    pub fn selectors(&self) -> &Selectors {
        &self.selectors
    }

    /// React to a click landing on `target`. Returns whether the click was
    /// consumed: only anchors under the sidebar carrying the content
    /// attribute are; everything else leaves the page untouched.
    pub fn handle_click(&mut self, page: &mut Page, target: NodeId) -> bool {
        let Some(binding) = self.binding else {
            return false;
        };

        if !page.contains(binding.sidebar, target) {
            return false;
        }

        let element = page.element(target);
        if !element.is_anchor() {
            return false;
        }
        let Some(path) = element.attr(&self.selectors.content_attr) else {
            return false;
        };
        let path = path.to_string();

        tracing::debug!(path = %path, "Sidebar navigation");

        self.state = self.state.clone().select(target, path);
        self.render(page);
        true
    }

    /// React to a cross-frame message. Unknown payloads are ignored by
    /// contract; the page is not touched for them.
    pub fn handle_message(&mut self, page: &mut Page, message: FrameMessage) {
        match message {
            FrameMessage::HideApiTestNav | FrameMessage::HideLoadTestNav => {
                tracing::debug!(message = %message, "Hiding console nav entry");
                self.state = self.state.clone().absorb(message);
                self.render(page);
            }
            FrameMessage::Unknown => {
                tracing::trace!("Ignoring unrecognized frame message");
            }
        }
    }

    /// Apply the current state to the page tree
    fn render(&self, page: &mut Page) {
        if let Some(binding) = self.binding {
            for node in page.descendants(binding.sidebar) {
                if page.element(node).is_anchor() {
                    page.element_mut(node)
                        .remove_class(&self.selectors.active_class);
                }
            }

            if let Some(link) = self.state.active_link {
                page.element_mut(link).add_class(&self.selectors.active_class);
            }

            if let Some(target) = &self.state.frame_target {
                page.element_mut(binding.frame)
                    .set_attr(FRAME_TARGET_ATTR, target.clone());
            }
        }

        // Hide effects are one-directional: entries are never re-shown here
        if self.state.api_nav_hidden {
            if let Some(node) = page.by_id(&self.selectors.api_nav_id) {
                page.element_mut(node).hide();
            }
        }
        if self.state.load_nav_hidden {
            if let Some(node) = page.by_id(&self.selectors.load_nav_id) {
                page.element_mut(node).hide();
            }
        }
    }
}
