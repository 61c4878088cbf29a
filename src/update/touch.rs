//! Gesture router
//!
//! Decides for every touch sample whether the container intercepts it (and
//! drags the content panel) or lets the nested content panel scroll.

use crate::commands::Cmd;
use crate::messages::{TouchMsg, TouchPhase, TouchSample};
use crate::model::{DragMenuModel, GestureState};

use super::settle::{begin_settle, cancel_settle};

/// Result of routing one touch sample
#[derive(Debug, Clone, PartialEq)]
pub struct TouchOutcome {
    /// Whether the container took the sample away from the content panel
    pub intercepted: bool,
    /// Side effects to run
    pub cmd: Option<Cmd>,
}

impl TouchOutcome {
    fn intercepted(cmd: Option<Cmd>) -> Self {
        Self {
            intercepted: true,
            cmd,
        }
    }

    fn forwarded(sample: TouchSample) -> Self {
        Self {
            intercepted: false,
            cmd: Some(Cmd::ForwardToContent(sample)),
        }
    }
}

/// Route one touch sample
pub fn dispatch_touch(model: &mut DragMenuModel, msg: TouchMsg) -> TouchOutcome {
    let TouchMsg {
        sample,
        content_can_scroll_up,
    } = msg;

    match sample.phase {
        TouchPhase::Down => on_down(model, sample),
        TouchPhase::Move => on_move(model, sample, content_can_scroll_up),
        TouchPhase::Up | TouchPhase::Cancel => on_end(model, sample),
    }
}

/// Touch-down never starts a drag on a closed menu: the content panel gets
/// to see it too, and the drag engine only arms a capture.
fn on_down(model: &mut DragMenuModel, sample: TouchSample) -> TouchOutcome {
    let mut cmds = Vec::new();

    // A new finger on the glass stops any settle in flight, right here
    cmds.extend(cancel_settle(model));

    if model.gesture.is_some() {
        tracing::debug!("Touch-down without a preceding up, restarting sequence");
    }

    let mut gesture = GestureState::new(
        sample.y,
        sample.timestamp_ms,
        model.config.velocity_window_ms,
    );
    let panel_under = model.container.panel_at(sample.y);
    let captured = model.drag_engine().arm(&mut gesture, panel_under);

    let intercepted = model.menu_state.is_open();
    gesture.is_dragging = intercepted;
    model.gesture = Some(gesture);

    tracing::debug!(
        y = sample.y,
        ?panel_under,
        captured,
        intercepted,
        "touch down"
    );

    if !intercepted {
        cmds.push(Cmd::ForwardToContent(sample));
    }

    TouchOutcome {
        intercepted,
        cmd: Cmd::from_vec(cmds),
    }
}

fn on_move(
    model: &mut DragMenuModel,
    sample: TouchSample,
    content_can_scroll_up: bool,
) -> TouchOutcome {
    let menu_open = model.menu_state.is_open();
    let engine = model.drag_engine();
    let current = model.content_offset();

    let Some(gesture) = model.gesture.as_mut() else {
        tracing::trace!("Move without touch-down, engine idle");
        return if menu_open {
            TouchOutcome::intercepted(None)
        } else {
            TouchOutcome::forwarded(sample)
        };
    };

    gesture.velocity.add(sample.y, sample.timestamp_ms);

    let delta = gesture.delta(sample.y);
    let take_over =
        menu_open || gesture.is_dragging || (delta > 0.0 && !content_can_scroll_up);

    if !take_over {
        // The content consumed this travel; a later takeover drags from here
        gesture.last_y = sample.y;
        return TouchOutcome::forwarded(sample);
    }

    if !gesture.is_dragging {
        tracing::debug!(delta, "content at top, intercepting downward drag");
        gesture.is_dragging = true;
    }

    if gesture.captured_panel.is_none() {
        let panel_under = model.container.panel_at(sample.y);
        if engine.capture_on_move(gesture, panel_under, menu_open, sample.y, current) {
            tracing::debug!(y = sample.y, ?panel_under, "captured content mid-sequence");
        }
    }

    let cmd = match engine.drag(gesture, sample.y, current) {
        Some(offset) if offset != current => {
            model.container.set_content_offset(offset);
            Some(Cmd::batch(vec![Cmd::SetContentOffset(offset), Cmd::Redraw]))
        }
        _ => None,
    };

    TouchOutcome::intercepted(cmd)
}

/// Up and cancel end the sequence and resolve the panel to a rest position
fn on_end(model: &mut DragMenuModel, sample: TouchSample) -> TouchOutcome {
    let menu_open = model.menu_state.is_open();

    let Some(mut gesture) = model.gesture.take() else {
        tracing::trace!("{:?} without touch-down, engine idle", sample.phase);
        return if menu_open {
            TouchOutcome::intercepted(None)
        } else {
            TouchOutcome::forwarded(sample)
        };
    };

    gesture.velocity.add(sample.y, sample.timestamp_ms);

    let intercepted = menu_open || gesture.is_dragging;
    let mut cmds = Vec::new();
    if !intercepted {
        cmds.push(Cmd::ForwardToContent(sample));
    }

    let final_offset = model.content_offset();
    let velocity = gesture.velocity.velocity();
    let target = model.drag_engine().on_release(final_offset, velocity);

    tracing::debug!(
        phase = ?sample.phase,
        final_offset,
        velocity,
        target,
        "released"
    );

    cmds.extend(begin_settle(model, target, sample.timestamp_ms));

    TouchOutcome {
        intercepted,
        cmd: Cmd::from_vec(cmds),
    }
}
