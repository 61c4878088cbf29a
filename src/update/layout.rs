//! Layout update handlers
//!
//! The host re-measures the panels after its layout pass. The menu height is
//! the content's travel range, so everything offset-related follows it.

use crate::commands::Cmd;
use crate::messages::LayoutMsg;
use crate::model::{DragMenuModel, MenuState};

use super::settle::cancel_settle;

/// Handle layout messages
pub fn update_layout(model: &mut DragMenuModel, msg: LayoutMsg) -> Option<Cmd> {
    match msg {
        LayoutMsg::Measured {
            menu_height,
            content_height,
        } => {
            if menu_height < 0 || content_height < 0 {
                tracing::warn!(
                    "Ignoring negative measurement (menu {}, content {})",
                    menu_height,
                    content_height
                );
                return None;
            }

            let old_offset = model.content_offset();
            let old_menu_height = model.menu_height();

            // A settle in flight is finished on the spot at the state it was
            // heading to; its pixel target no longer exists.
            let heading = model
                .settle
                .as_ref()
                .map(|s| MenuState::for_target(s.target(), old_menu_height));

            let mut cmds: Vec<Cmd> = cancel_settle(model).into_iter().collect();
            model.container.remeasure(menu_height, content_height);

            if model.gesture.is_none() {
                let state = heading.unwrap_or(model.menu_state);
                model
                    .container
                    .set_content_offset(state.rest_offset(model.menu_height()));
                if state != model.menu_state {
                    tracing::info!("Menu {} -> {} (settle cut short by layout)", model.menu_state, state);
                    model.menu_state = state;
                    cmds.push(Cmd::MenuStateChanged(state));
                }
            }

            let new_offset = model.content_offset();
            if new_offset != old_offset {
                cmds.push(Cmd::SetContentOffset(new_offset));
                cmds.push(Cmd::Redraw);
            }

            tracing::debug!(
                "Remeasured menu {} -> {}, content offset {} -> {}",
                old_menu_height,
                menu_height,
                old_offset,
                new_offset
            );

            Cmd::from_vec(cmds)
        }
    }
}
