//! Settle animation update handlers
//!
//! Starting, ticking, cancelling and completing the settle that follows a
//! released drag (or a programmatic open/close).

use crate::commands::Cmd;
use crate::messages::SettleMsg;
use crate::model::{DragMenuModel, MenuState, SettleAnimator, SettleStep};

/// Handle settle-related messages
pub fn update_settle(model: &mut DragMenuModel, msg: SettleMsg) -> Option<Cmd> {
    match msg {
        SettleMsg::Tick {
            revision,
            timestamp_ms,
        } => {
            // Skip if the settle was cancelled or replaced since scheduling
            if revision != model.settle_revision {
                tracing::debug!(
                    "Skipping stale settle tick: revision {} != current {}",
                    revision,
                    model.settle_revision
                );
                return None;
            }

            let step = model.settle.as_mut()?.tick(timestamp_ms)?;
            let offset = step.offset();
            model.container.set_content_offset(offset);

            match step {
                SettleStep::Moving(_) => Some(Cmd::batch(vec![
                    Cmd::SetContentOffset(offset),
                    Cmd::Redraw,
                    Cmd::ScheduleSettleTick { revision },
                ])),
                SettleStep::Settled(target) => {
                    let mut cmds = vec![Cmd::SetContentOffset(offset), Cmd::Redraw];
                    cmds.extend(finish_settle(model, target));
                    Cmd::from_vec(cmds)
                }
            }
        }
    }
}

/// Start settling the content panel towards `target`
///
/// Replaces any settle already in flight. Zero-distance settles complete
/// immediately without scheduling a tick.
pub(crate) fn begin_settle(model: &mut DragMenuModel, target: i32, now_ms: u64) -> Option<Cmd> {
    let mut cmds: Vec<Cmd> = cancel_settle(model).into_iter().collect();

    let target = model.drag_engine().clamp(target);
    let current = model.content_offset();

    if current == target {
        cmds.extend(finish_settle(model, target));
        return Cmd::from_vec(cmds);
    }

    model.settle_revision += 1;
    let revision = model.settle_revision;
    let animator = SettleAnimator::new(
        current,
        target,
        model.menu_height(),
        now_ms,
        &model.config.settle,
    );

    tracing::debug!(
        from = current,
        target,
        duration_ms = animator.duration_ms(),
        revision,
        "settle started"
    );

    model.settle = Some(animator);
    cmds.push(Cmd::Redraw);
    cmds.push(Cmd::ScheduleSettleTick { revision });
    Cmd::from_vec(cmds)
}

/// Stop the settle in flight, if any, leaving the panel where it is
pub(crate) fn cancel_settle(model: &mut DragMenuModel) -> Option<Cmd> {
    let mut animator = model.settle.take()?;
    animator.cancel();

    let revision = model.settle_revision;
    model.settle_revision += 1;

    tracing::debug!(
        at = model.content_offset(),
        target = animator.target(),
        revision,
        "settle cancelled"
    );

    Some(Cmd::CancelSettleTick { revision })
}

/// Completion: the content rests at `target`, publish the new menu state
pub(crate) fn finish_settle(model: &mut DragMenuModel, target: i32) -> Option<Cmd> {
    model.settle = None;

    let mut cmds = Vec::new();
    if model.content_offset() != target {
        model.container.set_content_offset(target);
        cmds.push(Cmd::SetContentOffset(target));
        cmds.push(Cmd::Redraw);
    }

    let state = MenuState::for_target(target, model.menu_height());
    if state != model.menu_state {
        tracing::info!("Menu {} -> {}", model.menu_state, state);
        model.menu_state = state;
        cmds.push(Cmd::MenuStateChanged(state));
    }

    Cmd::from_vec(cmds)
}
