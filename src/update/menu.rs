//! Programmatic menu control
//!
//! Lets the host open or close the menu without a gesture, e.g. closing it
//! from a back button.

use crate::commands::Cmd;
use crate::messages::MenuMsg;
use crate::model::{DragMenuModel, MenuState};

use super::settle::begin_settle;

/// Handle menu messages
pub fn update_menu(model: &mut DragMenuModel, msg: MenuMsg) -> Option<Cmd> {
    // The finger wins over the host while a touch sequence is running
    if model.gesture.is_some() {
        tracing::debug!("Ignoring {:?} during an active touch sequence", msg);
        return None;
    }

    let (desired, timestamp_ms) = match msg {
        MenuMsg::Open { timestamp_ms } => (MenuState::Open, timestamp_ms),
        MenuMsg::Close { timestamp_ms } => (MenuState::Closed, timestamp_ms),
        MenuMsg::Toggle { timestamp_ms } => (heading_to(model).toggled(), timestamp_ms),
    };

    let target = desired.rest_offset(model.menu_height());
    if model.settle.as_ref().is_some_and(|s| s.target() == target) {
        return None;
    }

    begin_settle(model, target, timestamp_ms)
}

/// The state the panel is settled in, or settling towards
fn heading_to(model: &DragMenuModel) -> MenuState {
    match &model.settle {
        Some(settle) => MenuState::for_target(settle.target(), model.menu_height()),
        None => model.menu_state,
    }
}
