//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use dragmenu::content::{ContentSurface, ScrollCapability};
use dragmenu::messages::{Msg, SettleMsg, TouchMsg, TouchSample};
use dragmenu::model::{ContainerBuilder, DragMenuModel};
use dragmenu::update::{route_touch, update, TouchOutcome};
use dragmenu::{Cmd, DragConfig, DragMenu};

/// Menu height used by the reference scenarios
pub const MENU_HEIGHT: i32 = 300;

/// Frame interval used when pumping settle ticks
pub const FRAME_MS: u64 = 16;

/// Create a closed model with the given menu height
pub fn test_model(menu_height: i32) -> DragMenuModel {
    let container = ContainerBuilder::new()
        .child("menu", menu_height)
        .child("content", 1200)
        .build()
        .expect("two children always build");
    DragMenuModel::new(container, DragConfig::default())
}

/// Route one sample through the model
pub fn touch(model: &mut DragMenuModel, sample: TouchSample, can_scroll_up: bool) -> TouchOutcome {
    route_touch(model, TouchMsg::new(sample, can_scroll_up))
}

/// Drive every scheduled settle tick until the model rests
///
/// Returns the offsets published by the ticks, in order.
pub fn settle(model: &mut DragMenuModel, cmd: Option<Cmd>, start_ms: u64) -> Vec<i32> {
    let mut offsets = Vec::new();
    let mut pending = cmd.and_then(|c| c.scheduled_tick());
    let mut now = start_ms;

    while let Some(revision) = pending {
        now += FRAME_MS;
        let cmd = update(
            model,
            Msg::Settle(SettleMsg::Tick {
                revision,
                timestamp_ms: now,
            }),
        );
        if let Some(offset) = cmd.as_ref().and_then(|c| c.content_offset()) {
            offsets.push(offset);
        }
        pending = cmd.and_then(|c| c.scheduled_tick());
        assert!(offsets.len() <= 1_000, "settle never finished");
    }

    offsets
}

/// Drag the content from `from_y` to `to_y` in one move and release there
pub fn drag_and_release(
    model: &mut DragMenuModel,
    from_y: f32,
    to_y: f32,
    start_ms: u64,
) -> Option<Cmd> {
    touch(model, TouchSample::down(from_y, start_ms), false);
    touch(model, TouchSample::moved(to_y, start_ms + 16), false);
    touch(model, TouchSample::up(to_y, start_ms + 32), false).cmd
}

/// Bring a fresh model into the open state through a real drag
pub fn open_model(menu_height: i32) -> DragMenuModel {
    let mut model = test_model(menu_height);
    let cmd = drag_and_release(&mut model, 10.0, 10.0 + menu_height as f32, 0);
    settle(&mut model, cmd, 32);
    assert!(model.menu_state.is_open());
    model
}

/// Content panel double that records everything the runtime does to it
#[derive(Debug, Default)]
pub struct FakeContent {
    pub can_scroll_up: bool,
    pub offsets: Vec<i32>,
    pub redraws: usize,
    pub forwarded: Vec<TouchSample>,
}

impl FakeContent {
    pub fn at_top() -> Self {
        Self::default()
    }

    pub fn scrolled() -> Self {
        Self {
            can_scroll_up: true,
            ..Self::default()
        }
    }
}

impl ScrollCapability for FakeContent {
    fn can_scroll_up_further(&self) -> bool {
        self.can_scroll_up
    }
}

impl ContentSurface for FakeContent {
    fn set_vertical_offset(&mut self, px: i32) {
        self.offsets.push(px);
    }

    fn request_redraw(&mut self) {
        self.redraws += 1;
    }

    fn dispatch_touch(&mut self, sample: &TouchSample) {
        self.forwarded.push(*sample);
    }
}

/// Runtime over a fake content panel
pub fn test_menu(menu_height: i32, content: FakeContent) -> DragMenu<FakeContent> {
    let builder = ContainerBuilder::new()
        .child("menu", menu_height)
        .child("content", 1200);
    DragMenu::build(builder, DragConfig::default(), content).expect("two children always build")
}
