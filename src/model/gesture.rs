//! Per-sequence touch state
//!
//! A `GestureState` lives from touch-down until touch-up or cancel.

use std::collections::VecDeque;

use super::container::PanelRole;

/// Upper bound on samples kept for velocity estimation
const MAX_VELOCITY_SAMPLES: usize = 20;

/// Transient state for one touch sequence
#[derive(Debug, Clone, PartialEq)]
pub struct GestureState {
    /// Vertical position at touch-down
    pub start_y: f32,
    /// Whether the container has taken ownership of this sequence
    pub is_dragging: bool,
    /// Panel the drag engine accepted at touch-down, if any
    pub captured_panel: Option<PanelRole>,
    /// Last position the router or the drag engine consumed
    pub last_y: f32,
    /// Where the current drag is measured from, set on the first drag step
    pub anchor: Option<DragAnchor>,
    pub velocity: VelocityTracker,
}

/// Finger position and content offset a drag measures its travel from
///
/// Offsets are derived from the total travel since the anchor, so sub-pixel
/// samples add up instead of being truncated one by one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragAnchor {
    pub y: f32,
    pub offset: i32,
}

impl GestureState {
    pub fn new(start_y: f32, timestamp_ms: u64, velocity_window_ms: u64) -> Self {
        let mut velocity = VelocityTracker::new(velocity_window_ms);
        velocity.add(start_y, timestamp_ms);
        Self {
            start_y,
            is_dragging: false,
            captured_panel: None,
            last_y: start_y,
            anchor: None,
            velocity,
        }
    }

    /// Net displacement since touch-down (positive = finger moved down)
    pub fn delta(&self, y: f32) -> f32 {
        y - self.start_y
    }
}

/// Estimates vertical velocity from recent samples
#[derive(Debug, Clone, PartialEq)]
pub struct VelocityTracker {
    window_ms: u64,
    samples: VecDeque<(f32, u64)>,
}

impl VelocityTracker {
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            samples: VecDeque::with_capacity(MAX_VELOCITY_SAMPLES),
        }
    }

    pub fn add(&mut self, y: f32, timestamp_ms: u64) {
        if self.samples.len() == MAX_VELOCITY_SAMPLES {
            self.samples.pop_front();
        }
        self.samples.push_back((y, timestamp_ms));
    }

    /// Pixels per second over the trailing window, 0 when undetermined
    pub fn velocity(&self) -> f32 {
        let Some(&(last_y, last_t)) = self.samples.back() else {
            return 0.0;
        };

        let oldest = self
            .samples
            .iter()
            .find(|(_, t)| last_t.saturating_sub(*t) <= self.window_ms);

        match oldest {
            Some(&(first_y, first_t)) if last_t > first_t => {
                (last_y - first_y) / (last_t - first_t) as f32 * 1000.0
            }
            _ => 0.0,
        }
    }
}
