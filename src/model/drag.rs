//! Drag engine: capture, clamping, and release policy
//!
//! The engine owns no state of its own between sequences. Per-sequence data
//! (captured panel, last consumed position) lives in [`GestureState`]; the
//! engine only needs the current menu height to do its job.

use super::container::PanelRole;
use super::gesture::{DragAnchor, GestureState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragEngine {
    menu_height: i32,
}

impl DragEngine {
    pub fn new(menu_height: i32) -> Self {
        Self {
            menu_height: menu_height.max(0),
        }
    }

    pub fn menu_height(&self) -> i32 {
        self.menu_height
    }

    /// Only the content panel can be dragged; the menu never moves
    pub fn try_capture(&self, panel: PanelRole) -> bool {
        panel == PanelRole::Content
    }

    /// Arm a capture at touch-down for whatever panel is under the finger
    pub fn arm(&self, gesture: &mut GestureState, panel_under: Option<PanelRole>) -> bool {
        gesture.captured_panel = panel_under.filter(|p| self.try_capture(*p));
        gesture.captured_panel.is_some()
    }

    /// Keep the content between fully covering (0) and fully revealing the menu
    pub fn clamp(&self, proposed: i32) -> i32 {
        proposed.min(self.menu_height).max(0)
    }

    /// Retry the capture mid-sequence once the container owns the gesture
    ///
    /// The panel now under the finger is tried first. While the menu is open
    /// the content is taken regardless, so a drag that starts on the revealed
    /// menu strip can still close it. A new capture anchors at `y`.
    pub fn capture_on_move(
        &self,
        gesture: &mut GestureState,
        panel_under: Option<PanelRole>,
        menu_open: bool,
        y: f32,
        current_offset: i32,
    ) -> bool {
        if gesture.captured_panel.is_some() {
            return true;
        }

        let panel = panel_under
            .filter(|p| self.try_capture(*p))
            .or(menu_open.then_some(PanelRole::Content));
        let Some(panel) = panel else {
            return false;
        };

        gesture.captured_panel = Some(panel);
        gesture.last_y = y;
        gesture.anchor = Some(DragAnchor {
            y,
            offset: current_offset,
        });
        true
    }

    /// Move the captured panel with the finger. Returns the clamped new
    /// offset, or `None` when nothing is captured.
    ///
    /// The first step anchors at the last consumed position and the current
    /// offset; later steps apply the whole travel since the anchor. When the
    /// clamp bites the anchor moves to the limit, so travel past either end is
    /// not owed back.
    pub fn drag(&self, gesture: &mut GestureState, y: f32, current_offset: i32) -> Option<i32> {
        gesture.captured_panel?;
        let anchor = *gesture.anchor.get_or_insert(DragAnchor {
            y: gesture.last_y,
            offset: current_offset,
        });
        gesture.last_y = y;

        let proposed = anchor.offset.saturating_add((y - anchor.y) as i32);
        let clamped = self.clamp(proposed);
        if clamped != proposed {
            gesture.anchor = Some(DragAnchor { y, offset: clamped });
        }
        Some(clamped)
    }

    /// Resting offset for a released drag
    ///
    /// Position decides alone: past the halfway mark opens, anything else
    /// (including exactly half) closes. Velocity is accepted but not used.
    pub fn on_release(&self, final_offset: i32, _velocity_y: f32) -> i32 {
        if final_offset > self.menu_height / 2 {
            self.menu_height
        } else {
            0
        }
    }
}
