//! Host runtime
//!
//! Glues a [`DragMenuModel`] to a concrete [`ContentSurface`]: queries the
//! surface's scroll capability for every touch sample, executes the commands
//! that come back, and keeps the single pending animation frame.

use crate::commands::Cmd;
use crate::config::DragConfig;
use crate::content::ContentSurface;
use crate::messages::{LayoutMsg, MenuMsg, Msg, SettleMsg, TouchMsg, TouchSample};
use crate::model::{Container, ContainerBuilder, ContainerError, DragMenuModel, MenuState};
use crate::update::{route_touch, update};

type MenuListener = Box<dyn FnMut(MenuState)>;

/// A drag container driving one content surface
pub struct DragMenu<C: ContentSurface> {
    model: DragMenuModel,
    content: C,
    /// Revision of the animation frame the host owes us, if any
    pending_tick: Option<u64>,
    listeners: Vec<MenuListener>,
}

impl<C: ContentSurface> DragMenu<C> {
    pub fn new(container: Container, config: DragConfig, content: C) -> Self {
        let mut menu = Self {
            model: DragMenuModel::new(container, config),
            content,
            pending_tick: None,
            listeners: Vec::new(),
        };
        let offset = menu.model.content_offset();
        menu.content.set_vertical_offset(offset);
        menu
    }

    /// Validate the children and build in one go
    pub fn build(
        builder: ContainerBuilder,
        config: DragConfig,
        content: C,
    ) -> Result<Self, ContainerError> {
        Ok(Self::new(builder.build()?, config, content))
    }

    /// Call `listener` every time the settled menu state flips
    pub fn on_menu_state_changed(&mut self, listener: impl FnMut(MenuState) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn model(&self) -> &DragMenuModel {
        &self.model
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut C {
        &mut self.content
    }

    pub fn menu_state(&self) -> MenuState {
        self.model.menu_state
    }

    pub fn content_offset(&self) -> i32 {
        self.model.content_offset()
    }

    /// Whether an animation frame has been requested and not yet delivered
    pub fn has_pending_frame(&self) -> bool {
        self.pending_tick.is_some()
    }

    /// Feed one touch sample; returns true if the container intercepted it
    pub fn on_touch_event(&mut self, sample: TouchSample) -> bool {
        let msg = TouchMsg::new(sample, self.content.can_scroll_up_further());
        let outcome = route_touch(&mut self.model, msg);
        if let Some(cmd) = outcome.cmd {
            self.process_cmd(cmd);
        }
        outcome.intercepted
    }

    /// Deliver the pending animation frame; returns true if another is needed
    pub fn on_animation_frame(&mut self, timestamp_ms: u64) -> bool {
        let Some(revision) = self.pending_tick.take() else {
            return false;
        };
        self.dispatch(Msg::Settle(SettleMsg::Tick {
            revision,
            timestamp_ms,
        }));
        self.pending_tick.is_some()
    }

    /// Pump animation frames every `interval_ms` until the panel rests
    ///
    /// Returns the timestamp of the last frame delivered.
    pub fn run_to_rest(&mut self, start_ms: u64, interval_ms: u64) -> u64 {
        let mut now = start_ms;
        while self.has_pending_frame() {
            now += interval_ms.max(1);
            self.on_animation_frame(now);
        }
        now
    }

    pub fn open(&mut self, timestamp_ms: u64) {
        self.dispatch(Msg::Menu(MenuMsg::Open { timestamp_ms }));
    }

    pub fn close(&mut self, timestamp_ms: u64) {
        self.dispatch(Msg::Menu(MenuMsg::Close { timestamp_ms }));
    }

    pub fn toggle(&mut self, timestamp_ms: u64) {
        self.dispatch(Msg::Menu(MenuMsg::Toggle { timestamp_ms }));
    }

    /// Report a new measurement from the host's layout pass
    pub fn on_layout(&mut self, menu_height: i32, content_height: i32) {
        self.dispatch(Msg::Layout(LayoutMsg::Measured {
            menu_height,
            content_height,
        }));
    }

    /// Run any message through the update loop
    pub fn dispatch(&mut self, msg: Msg) {
        if let Some(cmd) = update(&mut self.model, msg) {
            self.process_cmd(cmd);
        }
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::Redraw => self.content.request_redraw(),
            Cmd::SetContentOffset(px) => self.content.set_vertical_offset(px),
            Cmd::ForwardToContent(sample) => self.content.dispatch_touch(&sample),
            Cmd::ScheduleSettleTick { revision } => self.pending_tick = Some(revision),
            Cmd::CancelSettleTick { revision } => {
                if self.pending_tick == Some(revision) {
                    self.pending_tick = None;
                }
            }
            Cmd::MenuStateChanged(state) => {
                for listener in &mut self.listeners {
                    listener(state);
                }
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
        }
    }
}
