//! dragmenu - vertical drag-to-reveal menu controller
//!
//! A container holds two stacked panels: a static menu behind and a scrollable
//! content panel in front. Dragging the content down reveals the menu, but only
//! once the content itself cannot scroll any further up. Releasing the drag
//! settles the content at one of two rest positions (open or closed).
//!
//! The crate follows the Elm Architecture: all state lives in
//! [`DragMenuModel`], every transition goes through [`update::update`], and
//! side effects come back as [`Cmd`] values that the host executes.
//! [`runtime::DragMenu`] is a ready-made host that applies those commands to a
//! [`ContentSurface`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod content;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod script;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::DragConfig;
pub use content::{ContentSurface, ScrollCapability};
pub use messages::Msg;
pub use model::{ContainerBuilder, ContainerError, DragMenuModel, MenuState};
pub use runtime::DragMenu;
