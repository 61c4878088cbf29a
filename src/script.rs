//! Touch replay scripts
//!
//! A script is a list of timestamped touch samples (YAML or JSON). Replaying
//! it against a [`DragMenu`] interleaves the samples with animation frames at
//! a fixed interval and records every offset the controller publishes.

use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

use crate::content::ContentSurface;
use crate::messages::{TouchPhase, TouchSample};
use crate::model::MenuState;
use crate::runtime::DragMenu;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayScript {
    #[serde(default)]
    pub name: Option<String>,
    pub samples: Vec<TouchSample>,
}

impl ReplayScript {
    /// Load a script, picking the format from the file extension
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;

        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        let script = if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        };
        script.with_context(|| format!("Invalid script {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let script: Self = serde_yaml::from_str(content)?;
        script.validate()?;
        Ok(script)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let script: Self = serde_json::from_str(content)?;
        script.validate()?;
        Ok(script)
    }

    /// Samples must arrive in time order
    pub fn validate(&self) -> Result<()> {
        for pair in self.samples.windows(2) {
            ensure!(
                pair[1].timestamp_ms >= pair[0].timestamp_ms,
                "sample at {}ms comes after a sample at {}ms",
                pair[1].timestamp_ms,
                pair[0].timestamp_ms
            );
        }
        Ok(())
    }

    /// Pull the menu open past halfway, then push it closed again
    pub fn demo(menu_height: i32) -> Self {
        let h = menu_height.max(1) as f32;
        let mut samples = Vec::new();

        let start = 100.0;
        samples.push(TouchSample::down(start, 0));
        for step in 1..=8u64 {
            let y = start + h * 0.8 * step as f32 / 8.0;
            samples.push(TouchSample::moved(y, step * 16));
        }
        samples.push(TouchSample::up(start + h * 0.8, 9 * 16));

        // Grab the content below the revealed menu and push it back up
        let grab = h + 50.0;
        samples.push(TouchSample::down(grab, 1_000));
        for step in 1..=8u64 {
            let y = grab - h * 0.7 * step as f32 / 8.0;
            samples.push(TouchSample::moved(y, 1_000 + step * 16));
        }
        samples.push(TouchSample::up(grab - h * 0.7, 1_000 + 9 * 16));

        Self {
            name: Some("demo".to_string()),
            samples,
        }
    }
}

/// What happened at one point of a replay
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ReplayEventKind {
    Touch {
        phase: TouchPhase,
        y: f32,
        intercepted: bool,
    },
    Frame,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayEvent {
    pub timestamp_ms: u64,
    #[serde(flatten)]
    pub kind: ReplayEventKind,
    pub offset: i32,
    pub menu_state: MenuState,
}

/// Play `script` against `menu`, delivering animation frames between samples
pub fn replay<C: ContentSurface>(
    menu: &mut DragMenu<C>,
    script: &ReplayScript,
    frame_interval_ms: u64,
) -> Vec<ReplayEvent> {
    let interval = frame_interval_ms.max(1);
    let mut events = Vec::new();
    let mut clock = script.samples.first().map_or(0, |s| s.timestamp_ms);

    let mut record = |menu: &DragMenu<C>, timestamp_ms: u64, kind: ReplayEventKind| {
        events.push(ReplayEvent {
            timestamp_ms,
            kind,
            offset: menu.content_offset(),
            menu_state: menu.menu_state(),
        });
    };

    for sample in &script.samples {
        while menu.has_pending_frame() && clock + interval <= sample.timestamp_ms {
            clock += interval;
            menu.on_animation_frame(clock);
            record(menu, clock, ReplayEventKind::Frame);
        }
        clock = clock.max(sample.timestamp_ms);

        let intercepted = menu.on_touch_event(*sample);
        record(
            menu,
            sample.timestamp_ms,
            ReplayEventKind::Touch {
                phase: sample.phase,
                y: sample.y,
                intercepted,
            },
        );
    }

    while menu.has_pending_frame() {
        clock += interval;
        menu.on_animation_frame(clock);
        record(menu, clock, ReplayEventKind::Frame);
    }

    events
}
