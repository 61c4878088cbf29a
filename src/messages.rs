//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use serde::{Deserialize, Serialize};

/// Phase of a single touch sample within a touch sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TouchPhase {
    /// Finger touched the container
    Down,
    /// Finger moved while touching
    Move,
    /// Finger lifted
    Up,
    /// The host aborted the sequence (e.g. a parent stole the gesture)
    Cancel,
}

/// One raw touch sample in container-local coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchSample {
    pub phase: TouchPhase,
    /// Vertical position in pixels, relative to the container's top edge
    pub y: f32,
    /// Monotonic host timestamp in milliseconds
    #[serde(default)]
    pub timestamp_ms: u64,
}

impl TouchSample {
    pub fn new(phase: TouchPhase, y: f32, timestamp_ms: u64) -> Self {
        Self {
            phase,
            y,
            timestamp_ms,
        }
    }

    pub fn down(y: f32, timestamp_ms: u64) -> Self {
        Self::new(TouchPhase::Down, y, timestamp_ms)
    }

    pub fn moved(y: f32, timestamp_ms: u64) -> Self {
        Self::new(TouchPhase::Move, y, timestamp_ms)
    }

    pub fn up(y: f32, timestamp_ms: u64) -> Self {
        Self::new(TouchPhase::Up, y, timestamp_ms)
    }

    pub fn cancel(y: f32, timestamp_ms: u64) -> Self {
        Self::new(TouchPhase::Cancel, y, timestamp_ms)
    }
}

/// A touch sample together with the content panel's scroll capability at the
/// moment the sample arrived
///
/// The host queries the content panel for every sample, so the router never
/// acts on a stale answer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchMsg {
    pub sample: TouchSample,
    pub content_can_scroll_up: bool,
}

impl TouchMsg {
    pub fn new(sample: TouchSample, content_can_scroll_up: bool) -> Self {
        Self {
            sample,
            content_can_scroll_up,
        }
    }
}

/// Settle animation messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleMsg {
    /// An animation frame fired for the settle with this revision
    Tick { revision: u64, timestamp_ms: u64 },
}

/// Programmatic menu control (no gesture involved)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuMsg {
    /// Animate the content down to reveal the menu
    Open { timestamp_ms: u64 },
    /// Animate the content back over the menu
    Close { timestamp_ms: u64 },
    /// Open if closed, close if open
    Toggle { timestamp_ms: u64 },
}

/// Layout messages from the host's measure/layout pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMsg {
    /// Panels were re-measured
    Measured { menu_height: i32, content_height: i32 },
}

/// Top-level message type
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Msg {
    /// Raw touch input
    Touch(TouchMsg),
    /// Settle animation ticks
    Settle(SettleMsg),
    /// Programmatic open/close
    Menu(MenuMsg),
    /// Host layout changes
    Layout(LayoutMsg),
}
