//! Gesture router tests - who owns each touch sample

mod common;

use common::{drag_and_release, open_model, settle, test_model, touch, MENU_HEIGHT};
use dragmenu::messages::{Msg, SettleMsg, TouchSample};
use dragmenu::model::{MenuState, PanelRole};
use dragmenu::update::update;
use dragmenu::Cmd;

// ========================================================================
// Closed menu: touch-down
// ========================================================================

#[test]
fn test_down_is_never_intercepted_when_closed() {
    for can_scroll_up in [false, true] {
        let mut model = test_model(MENU_HEIGHT);
        let outcome = touch(&mut model, TouchSample::down(100.0, 0), can_scroll_up);

        assert!(!outcome.intercepted);
        assert_eq!(
            outcome.cmd,
            Some(Cmd::ForwardToContent(TouchSample::down(100.0, 0)))
        );
    }
}

#[test]
fn test_down_arms_capture_of_content() {
    let mut model = test_model(MENU_HEIGHT);
    touch(&mut model, TouchSample::down(100.0, 0), false);

    let gesture = model.gesture.as_ref().unwrap();
    assert_eq!(gesture.start_y, 100.0);
    assert_eq!(gesture.captured_panel, Some(PanelRole::Content));
    assert!(!gesture.is_dragging);
}

// ========================================================================
// Closed menu: moves
// ========================================================================

#[test]
fn test_downward_moves_never_intercepted_while_content_can_scroll() {
    let mut model = test_model(MENU_HEIGHT);
    touch(&mut model, TouchSample::down(100.0, 0), true);

    for (i, y) in [101.0, 120.0, 180.0, 250.0, 400.0, 900.0].into_iter().enumerate() {
        let outcome = touch(&mut model, TouchSample::moved(y, 16 * (i as u64 + 1)), true);
        assert!(!outcome.intercepted, "move to {} was intercepted", y);
        assert!(outcome.cmd.unwrap().forwards_to_content());
        assert_eq!(model.content_offset(), 0);
    }
}

#[test]
fn test_downward_moves_always_intercepted_when_content_at_top() {
    for y in [100.5, 101.0, 150.0, 399.0, 2000.0] {
        let mut model = test_model(MENU_HEIGHT);
        touch(&mut model, TouchSample::down(100.0, 0), false);

        let outcome = touch(&mut model, TouchSample::moved(y, 16), false);
        assert!(outcome.intercepted, "move to {} was not intercepted", y);
        assert!(outcome
            .cmd
            .as_ref()
            .map_or(true, |c| !c.forwards_to_content()));
    }
}

#[test]
fn test_upward_move_at_top_goes_to_content() {
    let mut model = test_model(MENU_HEIGHT);
    touch(&mut model, TouchSample::down(300.0, 0), false);

    let outcome = touch(&mut model, TouchSample::moved(250.0, 16), false);
    assert!(!outcome.intercepted);
    assert_eq!(model.content_offset(), 0);
}

#[test]
fn test_zero_displacement_is_not_a_drag() {
    let mut model = test_model(MENU_HEIGHT);
    touch(&mut model, TouchSample::down(300.0, 0), false);

    let outcome = touch(&mut model, TouchSample::moved(300.0, 16), false);
    assert!(!outcome.intercepted);
}

#[test]
fn test_intercepted_sequence_keeps_ownership() {
    let mut model = test_model(MENU_HEIGHT);
    touch(&mut model, TouchSample::down(100.0, 0), false);
    touch(&mut model, TouchSample::moved(300.0, 16), false);
    assert_eq!(model.content_offset(), 200);

    // Finger comes back up above the start point: still our drag
    let outcome = touch(&mut model, TouchSample::moved(50.0, 32), false);
    assert!(outcome.intercepted);
    assert_eq!(model.content_offset(), 0);
}

#[test]
fn test_takeover_after_content_reaches_top_drags_from_there() {
    let mut model = test_model(MENU_HEIGHT);
    touch(&mut model, TouchSample::down(100.0, 0), true);

    // Content scrolls for the first 60px of travel
    assert!(!touch(&mut model, TouchSample::moved(130.0, 16), true).intercepted);
    assert!(!touch(&mut model, TouchSample::moved(160.0, 32), true).intercepted);

    // Now it is at its top: the next 30px reveal the menu
    let outcome = touch(&mut model, TouchSample::moved(190.0, 48), false);
    assert!(outcome.intercepted);
    assert_eq!(model.content_offset(), 30);
}

// ========================================================================
// Closed menu: release
// ========================================================================

#[test]
fn test_up_after_content_scroll_is_forwarded() {
    let mut model = test_model(MENU_HEIGHT);
    touch(&mut model, TouchSample::down(100.0, 0), true);
    touch(&mut model, TouchSample::moved(200.0, 16), true);

    let outcome = touch(&mut model, TouchSample::up(200.0, 32), true);
    assert!(!outcome.intercepted);
    assert!(outcome.cmd.unwrap().forwards_to_content());
    assert!(model.gesture.is_none());
    assert!(!model.menu_state.is_open());
}

#[test]
fn test_cancel_ends_sequence_like_up() {
    let mut model = test_model(MENU_HEIGHT);
    touch(&mut model, TouchSample::down(100.0, 0), false);
    touch(&mut model, TouchSample::moved(400.0, 16), false);

    let outcome = touch(&mut model, TouchSample::cancel(400.0, 32), false);
    assert!(outcome.intercepted);
    assert!(model.gesture.is_none());
    assert!(model.menu_state.is_open());
}

// ========================================================================
// Open menu
// ========================================================================

#[test]
fn test_open_menu_intercepts_every_event() {
    for can_scroll_up in [false, true] {
        let mut model = open_model(MENU_HEIGHT);

        let samples = [
            TouchSample::down(500.0, 100),
            TouchSample::moved(520.0, 116),
            TouchSample::moved(480.0, 132),
            TouchSample::moved(480.0, 148),
            TouchSample::up(480.0, 164),
        ];
        for sample in samples {
            let outcome = touch(&mut model, sample, can_scroll_up);
            assert!(outcome.intercepted, "{:?} not intercepted", sample.phase);
            assert!(outcome
                .cmd
                .as_ref()
                .map_or(true, |c| !c.forwards_to_content()));
        }
    }
}

#[test]
fn test_drag_from_open_menu_strip_closes_menu() {
    let mut model = open_model(MENU_HEIGHT);

    // Touch-down lands on the uncovered menu, not on the content
    let outcome = touch(&mut model, TouchSample::down(250.0, 100), true);
    assert!(outcome.intercepted);
    assert_eq!(model.gesture.as_ref().unwrap().captured_panel, None);

    // The first move takes the content; travel counts from there
    touch(&mut model, TouchSample::moved(200.0, 116), true);
    assert_eq!(
        model.gesture.as_ref().unwrap().captured_panel,
        Some(PanelRole::Content)
    );
    assert_eq!(model.content_offset(), MENU_HEIGHT);

    for (i, y) in [150.0, 100.0, 50.0, 10.0].into_iter().enumerate() {
        touch(&mut model, TouchSample::moved(y, 132 + 16 * i as u64), true);
    }
    assert_eq!(model.content_offset(), 110);

    let cmd = touch(&mut model, TouchSample::up(10.0, 200), true).cmd;
    settle(&mut model, cmd, 200);
    assert_eq!(model.content_offset(), 0);
    assert_eq!(model.menu_state, MenuState::Closed);
}

#[test]
fn test_drag_from_strip_during_opening_settle_captures_under_finger() {
    let mut model = test_model(MENU_HEIGHT);
    let cmd = drag_and_release(&mut model, 100.0, 300.0, 0);
    let revision = cmd.and_then(|c| c.scheduled_tick()).unwrap();
    update(
        &mut model,
        Msg::Settle(SettleMsg::Tick {
            revision,
            timestamp_ms: 80,
        }),
    );
    let frozen = model.content_offset();
    assert!(frozen > 200 && frozen < MENU_HEIGHT);

    // Still closed: touch-down is not intercepted
    assert!(!touch(&mut model, TouchSample::down(20.0, 90), false).intercepted);

    // Owned, but the finger is still over the menu: nothing moves yet
    assert!(touch(&mut model, TouchSample::moved(40.0, 106), false).intercepted);
    assert_eq!(model.gesture.as_ref().unwrap().captured_panel, None);
    assert_eq!(model.content_offset(), frozen);

    // Finger reaches the content: captured there, then dragged
    let reach = frozen as f32 + 10.0;
    touch(&mut model, TouchSample::moved(reach, 122), false);
    assert_eq!(model.content_offset(), frozen);
    touch(&mut model, TouchSample::moved(reach + 30.0, 138), false);
    assert_eq!(model.content_offset(), (frozen + 30).min(MENU_HEIGHT));
}

// ========================================================================
// Degenerate sequences
// ========================================================================

#[test]
fn test_move_without_down_is_forwarded_untouched() {
    let mut model = test_model(MENU_HEIGHT);
    let sample = TouchSample::moved(400.0, 16);

    let outcome = touch(&mut model, sample, false);
    assert!(!outcome.intercepted);
    assert_eq!(outcome.cmd, Some(Cmd::ForwardToContent(sample)));
    assert_eq!(model.content_offset(), 0);
    assert!(model.gesture.is_none());
}

#[test]
fn test_duplicate_up_is_ignored() {
    let mut model = test_model(MENU_HEIGHT);
    touch(&mut model, TouchSample::down(100.0, 0), false);
    touch(&mut model, TouchSample::moved(200.0, 16), false);
    touch(&mut model, TouchSample::up(200.0, 32), false);
    let settle_revision = model.settle_revision;

    let outcome = touch(&mut model, TouchSample::up(200.0, 48), false);
    assert!(!outcome.intercepted);
    assert_eq!(outcome.cmd, Some(Cmd::ForwardToContent(TouchSample::up(200.0, 48))));
    assert_eq!(model.settle_revision, settle_revision);
}

#[test]
fn test_move_without_down_while_open_changes_nothing() {
    let mut model = open_model(MENU_HEIGHT);

    let outcome = touch(&mut model, TouchSample::moved(10.0, 500), false);
    assert!(outcome.intercepted);
    assert_eq!(outcome.cmd, None);
    assert_eq!(model.content_offset(), MENU_HEIGHT);
}

#[test]
fn test_second_down_restarts_sequence() {
    let mut model = test_model(MENU_HEIGHT);
    touch(&mut model, TouchSample::down(100.0, 0), false);
    touch(&mut model, TouchSample::down(400.0, 16), false);

    assert_eq!(model.gesture.as_ref().unwrap().start_y, 400.0);
}
