//! Settle animator
//!
//! Moves the content panel from where a drag was released to its resting
//! offset. Motion follows a quintic ease-out curve over a duration that grows
//! with the travel distance, and is sampled once per animation tick.

use crate::config::SettleConfig;

/// Quintic ease-out: fast start, soft landing
pub fn quintic_ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0) - 1.0;
    t * t * t * t * t + 1.0
}

/// Settle duration for a given travel distance
///
/// A full-range settle takes twice the base duration; shorter ones scale
/// linearly down to the base. Never longer than `max_duration_ms`.
pub fn settle_duration_ms(distance: i32, menu_height: i32, config: &SettleConfig) -> u64 {
    if distance == 0 {
        return 0;
    }
    let range = distance.unsigned_abs() as f32 / menu_height.max(1) as f32;
    let duration = ((range + 1.0) * config.base_duration_ms as f32) as u64;
    duration.min(config.max_duration_ms)
}

/// Result of advancing the animator by one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleStep {
    /// Still travelling; apply this offset and schedule another tick
    Moving(i32),
    /// Arrived; apply this offset and stop. Reported exactly once.
    Settled(i32),
}

impl SettleStep {
    pub fn offset(&self) -> i32 {
        match self {
            SettleStep::Moving(px) | SettleStep::Settled(px) => *px,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Running,
    Finished,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SettleAnimator {
    from: i32,
    target: i32,
    current: i32,
    started_at_ms: u64,
    duration_ms: u64,
    ticks: u32,
    max_ticks: u32,
    epsilon_px: f32,
    phase: Phase,
}

impl SettleAnimator {
    pub fn new(
        from: i32,
        target: i32,
        menu_height: i32,
        started_at_ms: u64,
        config: &SettleConfig,
    ) -> Self {
        Self {
            from,
            target,
            current: from,
            started_at_ms,
            duration_ms: settle_duration_ms(target - from, menu_height, config),
            ticks: 0,
            max_ticks: config.max_ticks.max(1),
            epsilon_px: config.epsilon_px.max(0.0),
            phase: Phase::Running,
        }
    }

    pub fn from(&self) -> i32 {
        self.from
    }

    pub fn target(&self) -> i32 {
        self.target
    }

    /// Offset published by the most recent tick
    pub fn current(&self) -> i32 {
        self.current
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    pub fn is_cancelled(&self) -> bool {
        self.phase == Phase::Cancelled
    }

    /// Stop without reaching the target; later ticks produce nothing
    pub fn cancel(&mut self) {
        if self.phase == Phase::Running {
            self.phase = Phase::Cancelled;
        }
    }

    /// Advance to the host's frame time
    ///
    /// Returns `None` once the animator has finished or been cancelled, so the
    /// `Settled` step can only ever be observed once.
    pub fn tick(&mut self, now_ms: u64) -> Option<SettleStep> {
        if self.phase != Phase::Running {
            return None;
        }

        self.ticks += 1;
        let elapsed = now_ms.saturating_sub(self.started_at_ms);

        let arrived = if elapsed >= self.duration_ms || self.ticks >= self.max_ticks {
            true
        } else {
            let t = elapsed as f32 / self.duration_ms as f32;
            let position =
                self.from as f32 + (self.target - self.from) as f32 * quintic_ease_out(t);
            self.current = position.round() as i32;
            (position - self.target as f32).abs() <= self.epsilon_px
        };

        if arrived {
            self.current = self.target;
            self.phase = Phase::Finished;
            Some(SettleStep::Settled(self.target))
        } else {
            Some(SettleStep::Moving(self.current))
        }
    }

    /// The remaining motion as a lazy sequence of offsets sampled every
    /// `interval_ms`, ending with the target
    pub fn frames(self, interval_ms: u64) -> SettleFrames {
        let next_ms = self.started_at_ms + interval_ms.max(1);
        SettleFrames {
            animator: self,
            interval_ms: interval_ms.max(1),
            next_ms,
        }
    }
}

/// Fixed-rate iterator over a settle's offsets
///
/// Finite: the animator's tick cap bounds it even for huge durations.
#[derive(Debug, Clone)]
pub struct SettleFrames {
    animator: SettleAnimator,
    interval_ms: u64,
    next_ms: u64,
}

impl Iterator for SettleFrames {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let step = self.animator.tick(self.next_ms)?;
        self.next_ms += self.interval_ms;
        Some(step.offset())
    }
}
