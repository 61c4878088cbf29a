//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! The core never touches the content panel directly; the host executes these.

use crate::messages::TouchSample;
use crate::model::MenuState;

/// Commands returned by update functions
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Invalidate the container so the host redraws it
    Redraw,
    /// Move the content panel to this vertical offset (pixels from the top)
    SetContentOffset(i32),
    /// Let the nested content panel handle this sample (it keeps scrolling)
    ForwardToContent(TouchSample),
    /// Request an animation frame; the host answers with `SettleMsg::Tick`
    ScheduleSettleTick { revision: u64 },
    /// Drop any pending animation frame for this settle revision
    CancelSettleTick { revision: u64 },
    /// The settled menu state flipped
    MenuStateChanged(MenuState),
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Collapse a list of commands into an optional command
    ///
    /// Empty lists become `None`, single commands are returned unwrapped.
    pub fn from_vec(mut cmds: Vec<Cmd>) -> Option<Cmd> {
        cmds.retain(|c| !matches!(c, Cmd::None));
        match cmds.len() {
            0 => None,
            1 => cmds.pop(),
            _ => Some(Cmd::Batch(cmds)),
        }
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::SetContentOffset(_) => true,
            Cmd::ForwardToContent(_) => false,
            Cmd::ScheduleSettleTick { .. } => false,
            Cmd::CancelSettleTick { .. } => false,
            Cmd::MenuStateChanged(_) => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Flatten nested batches into a plain list, in execution order
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            other => vec![other],
        }
    }

    /// The last content offset this command writes, if any
    pub fn content_offset(&self) -> Option<i32> {
        match self {
            Cmd::SetContentOffset(px) => Some(*px),
            Cmd::Batch(cmds) => cmds.iter().rev().find_map(|c| c.content_offset()),
            _ => None,
        }
    }

    /// Whether this command hands a sample to the content panel
    pub fn forwards_to_content(&self) -> bool {
        match self {
            Cmd::ForwardToContent(_) => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.forwards_to_content()),
            _ => false,
        }
    }

    /// The revision of the settle tick this command schedules, if any
    pub fn scheduled_tick(&self) -> Option<u64> {
        match self {
            Cmd::ScheduleSettleTick { revision } => Some(*revision),
            Cmd::Batch(cmds) => cmds.iter().rev().find_map(|c| c.scheduled_tick()),
            _ => None,
        }
    }
}
