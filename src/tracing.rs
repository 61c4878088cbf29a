//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging gesture
//! routing and settle state transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=gesture=debug,message=debug` - scoped filtering
//! - `RUST_LOG=dragmenu::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/dragmenu/logs/dragmenu.log` with daily rotation.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{DragMenuModel, MenuState};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). File logging always
/// records debug level.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "dragmenu.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of controller state for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct GestureSnapshot {
    pub menu_state: MenuState,
    pub content_offset: i32,
    pub tracking: bool,
    pub dragging: bool,
    pub settling_to: Option<i32>,
}

impl GestureSnapshot {
    pub fn from_model(model: &DragMenuModel) -> Self {
        Self {
            menu_state: model.menu_state,
            content_offset: model.content_offset(),
            tracking: model.gesture.is_some(),
            dragging: model.is_dragging(),
            settling_to: model
                .settle
                .as_ref()
                .filter(|s| s.is_running())
                .map(|s| s.target()),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &GestureSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.menu_state != other.menu_state {
            changes.push(format!("menu: {} → {}", self.menu_state, other.menu_state));
        }
        if self.content_offset != other.content_offset {
            changes.push(format!(
                "offset: {} → {}",
                self.content_offset, other.content_offset
            ));
        }
        if self.tracking != other.tracking {
            changes.push(if other.tracking {
                "sequence started".to_string()
            } else {
                "sequence ended".to_string()
            });
        }
        if self.dragging != other.dragging && other.dragging {
            changes.push("drag intercepted".to_string());
        }
        if self.settling_to != other.settling_to {
            changes.push(match other.settling_to {
                Some(target) => format!("settling to {}", target),
                None => "settle stopped".to_string(),
            });
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
