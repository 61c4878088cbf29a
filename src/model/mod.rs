//! Model module - the controller's state
//!
//! Everything the controller knows lives in [`DragMenuModel`]. The host owns
//! one model per drag container and feeds it messages through `update()`.

pub mod container;
pub mod drag;
pub mod gesture;
pub mod settle;

pub use container::{ChildView, Container, ContainerBuilder, ContainerError, Panel, PanelRole};
pub use drag::DragEngine;
pub use gesture::{DragAnchor, GestureState, VelocityTracker};
pub use settle::{SettleAnimator, SettleFrames, SettleStep};

use serde::{Deserialize, Serialize};

use crate::config::DragConfig;

/// Settled position of the content panel; survives between gestures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MenuState {
    /// Content covers the menu (offset 0)
    #[default]
    Closed,
    /// Content pushed down by the full menu height
    Open,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open)
    }

    /// Resting content offset for this state
    pub fn rest_offset(&self, menu_height: i32) -> i32 {
        match self {
            MenuState::Closed => 0,
            MenuState::Open => menu_height,
        }
    }

    /// State a settle towards `target` ends in
    pub fn for_target(target: i32, menu_height: i32) -> Self {
        if target >= menu_height && menu_height > 0 {
            MenuState::Open
        } else {
            MenuState::Closed
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }
}

impl std::fmt::Display for MenuState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MenuState::Closed => write!(f, "closed"),
            MenuState::Open => write!(f, "open"),
        }
    }
}

/// Complete controller state
#[derive(Debug, Clone)]
pub struct DragMenuModel {
    pub container: Container,
    pub config: DragConfig,
    /// Only mutated when a settle completes
    pub menu_state: MenuState,
    /// Present between touch-down and touch-up/cancel
    pub gesture: Option<GestureState>,
    /// Present while a settle animation is in flight
    pub settle: Option<SettleAnimator>,
    /// Bumped whenever a settle starts or is cancelled; stale ticks are dropped
    pub settle_revision: u64,
}

impl DragMenuModel {
    pub fn new(container: Container, config: DragConfig) -> Self {
        Self {
            container,
            config,
            menu_state: MenuState::Closed,
            gesture: None,
            settle: None,
            settle_revision: 0,
        }
    }

    pub fn menu_height(&self) -> i32 {
        self.container.menu_height()
    }

    pub fn content_offset(&self) -> i32 {
        self.container.content_offset()
    }

    pub fn drag_engine(&self) -> DragEngine {
        DragEngine::new(self.menu_height())
    }

    /// Whether the container owns the current touch sequence
    pub fn is_dragging(&self) -> bool {
        self.gesture.as_ref().is_some_and(|g| g.is_dragging)
    }

    pub fn is_settling(&self) -> bool {
        self.settle.as_ref().is_some_and(|s| s.is_running())
    }

    /// Panic if the model is in an impossible state (debug builds only)
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self, context: &str) {
        let offset = self.content_offset();
        let menu_height = self.menu_height();
        assert!(
            (0..=menu_height).contains(&offset),
            "[{}] content offset {} outside [0, {}]",
            context,
            offset,
            menu_height
        );
        assert_eq!(
            self.container.menu().offset,
            0,
            "[{}] menu panel moved",
            context
        );
        if let Some(gesture) = &self.gesture {
            assert_ne!(
                gesture.captured_panel,
                Some(PanelRole::Menu),
                "[{}] menu panel captured",
                context
            );
        }
        if self.gesture.is_none() && self.settle.is_none() {
            assert_eq!(
                offset,
                self.menu_state.rest_offset(menu_height),
                "[{}] idle content offset does not match menu state {}",
                context,
                self.menu_state
            );
        }
    }
}
