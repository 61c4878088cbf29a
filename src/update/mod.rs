//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod layout;
mod menu;
mod settle;
mod touch;

use crate::commands::Cmd;
use crate::messages::{Msg, TouchMsg};
use crate::model::DragMenuModel;

#[cfg(debug_assertions)]
use crate::tracing::GestureSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use layout::update_layout;
pub use menu::update_menu;
pub use settle::update_settle;
pub use touch::{dispatch_touch, TouchOutcome};

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut DragMenuModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        traced(model, &msg, |model| update_inner(model, msg))
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Route a touch sample and report whether the container intercepted it
///
/// Same as `update(model, Msg::Touch(msg))`, but keeps the intercept decision
/// the host needs to tell its view system who owns the event.
#[inline]
pub fn route_touch(model: &mut DragMenuModel, msg: TouchMsg) -> TouchOutcome {
    #[cfg(debug_assertions)]
    {
        traced(model, &Msg::Touch(msg), |model| touch::dispatch_touch(model, msg))
    }
    #[cfg(not(debug_assertions))]
    {
        touch::dispatch_touch(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut DragMenuModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Touch(m) => touch::dispatch_touch(model, m).cmd,
        Msg::Settle(m) => settle::update_settle(model, m),
        Msg::Menu(m) => menu::update_menu(model, m),
        Msg::Layout(m) => layout::update_layout(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after gesture state and logs diffs for debugging.
/// Filters out noisy messages like moves and animation ticks from the span.
#[cfg(debug_assertions)]
fn traced<R>(
    model: &mut DragMenuModel,
    msg: &Msg,
    f: impl FnOnce(&mut DragMenuModel) -> R,
) -> R {
    use crate::messages::TouchPhase;

    let is_noisy = match msg {
        Msg::Settle(_) => true,
        Msg::Touch(m) => m.sample.phase == TouchPhase::Move,
        _ => false,
    };

    let msg_name = msg_type_name(msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = GestureSnapshot::from_model(model);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = f(model);

    let after = GestureSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "gesture", %diff, "state changed");
    }

    model.assert_invariants(&msg_name);

    result
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `Touch::Down(y=120.0)`
/// - `Settle::Tick(rev=3)`
/// - `Layout::Measured(300, 1200)`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    use crate::messages::{LayoutMsg, SettleMsg};

    match msg {
        Msg::Touch(m) => format!("Touch::{:?}(y={:.1})", m.sample.phase, m.sample.y),
        Msg::Settle(SettleMsg::Tick { revision, .. }) => format!("Settle::Tick(rev={})", revision),
        Msg::Menu(m) => format!("Menu::{:?}", m),
        Msg::Layout(LayoutMsg::Measured {
            menu_height,
            content_height,
        }) => format!("Layout::Measured({}, {})", menu_height, content_height),
    }
}
