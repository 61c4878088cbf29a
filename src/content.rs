//! Content panel capabilities
//!
//! The controller does not care what kind of scrollable surface sits in front
//! of the menu. It asks one question ("can you still scroll up?") and issues
//! two mutations (offset, redraw). Each surface kind answers the question in
//! its own way.

use crate::messages::{TouchPhase, TouchSample};

/// Can this surface scroll further towards its top?
///
/// Must reflect the surface's live scroll position, never a cached answer.
pub trait ScrollCapability {
    fn can_scroll_up_further(&self) -> bool;
}

/// A content panel the host runtime can drive
pub trait ContentSurface: ScrollCapability {
    /// Move the panel to `px` pixels below the container's top edge
    fn set_vertical_offset(&mut self, px: i32);

    /// Ask the host to repaint the container
    fn request_redraw(&mut self);

    /// Handle a sample the container did not intercept (nested scrolling)
    fn dispatch_touch(&mut self, _sample: &TouchSample) {}
}

/// Tracks the finger between forwarded samples so surfaces can scroll by it
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct FingerTracker {
    last_y: Option<f32>,
}

impl FingerTracker {
    /// Whole pixels of finger travel since the last consumed position
    /// (positive = down). The fraction left over stays pending.
    fn travel(&mut self, sample: &TouchSample) -> i32 {
        match sample.phase {
            TouchPhase::Down => {
                self.last_y = Some(sample.y);
                0
            }
            TouchPhase::Move => {
                let Some(last) = self.last_y else {
                    self.last_y = Some(sample.y);
                    return 0;
                };
                let dy = (sample.y - last) as i32;
                self.last_y = Some(last + dy as f32);
                dy
            }
            TouchPhase::Up | TouchPhase::Cancel => {
                self.last_y = None;
                0
            }
        }
    }
}

/// A row-based list, scrolled in whole pixels
///
/// Can scroll up while the first visible row is not row 0, or row 0 is
/// partially scrolled out above the top padding.
#[derive(Debug, Clone, PartialEq)]
pub struct ListSurface {
    pub rows: Vec<String>,
    pub row_height: i32,
    pub viewport_height: i32,
    pub padding_top: i32,
    /// Pixels scrolled past the first row
    pub scroll_px: i32,
    /// Offset last written by the controller
    pub vertical_offset: i32,
    pub redraw_requests: usize,
    finger: FingerTracker,
}

impl ListSurface {
    pub fn new(rows: Vec<String>, row_height: i32, viewport_height: i32) -> Self {
        Self {
            rows,
            row_height: row_height.max(1),
            viewport_height: viewport_height.max(0),
            padding_top: 0,
            scroll_px: 0,
            vertical_offset: 0,
            redraw_requests: 0,
            finger: FingerTracker::default(),
        }
    }

    /// A list of `count` demo rows labelled `i -> 0`, `i -> 1`, ...
    pub fn numbered(count: usize, row_height: i32, viewport_height: i32) -> Self {
        let rows = (0..count).map(|i| format!("i -> {}", i)).collect();
        Self::new(rows, row_height, viewport_height)
    }

    pub fn with_padding_top(mut self, padding_top: i32) -> Self {
        self.padding_top = padding_top.max(0);
        self
    }

    fn content_height(&self) -> i32 {
        let rows = i32::try_from(self.rows.len()).unwrap_or(i32::MAX);
        self.padding_top
            .saturating_add(rows.saturating_mul(self.row_height))
    }

    pub fn max_scroll(&self) -> i32 {
        (self.content_height() - self.viewport_height).max(0)
    }

    pub fn scroll_to(&mut self, px: i32) {
        self.scroll_px = px.clamp(0, self.max_scroll());
    }

    /// Index of the first row at least partially on screen
    pub fn first_visible_position(&self) -> usize {
        let past_padding = (self.scroll_px - self.padding_top).max(0);
        (past_padding / self.row_height) as usize
    }

    /// Top edge of the first visible row, relative to the viewport
    pub fn first_child_top(&self) -> i32 {
        let first = self.first_visible_position() as i32;
        self.padding_top + first * self.row_height - self.scroll_px
    }

    /// Labels of the rows currently on screen
    pub fn visible_rows(&self) -> impl Iterator<Item = &str> {
        let first = self.first_visible_position();
        let count = (self.viewport_height / self.row_height + 2) as usize;
        self.rows.iter().skip(first).take(count).map(String::as_str)
    }
}

impl ScrollCapability for ListSurface {
    fn can_scroll_up_further(&self) -> bool {
        !self.rows.is_empty()
            && (self.first_visible_position() > 0 || self.first_child_top() < self.padding_top)
    }
}

impl ContentSurface for ListSurface {
    fn set_vertical_offset(&mut self, px: i32) {
        self.vertical_offset = px;
    }

    fn request_redraw(&mut self) {
        self.redraw_requests += 1;
    }

    fn dispatch_touch(&mut self, sample: &TouchSample) {
        // Finger moving down pulls earlier rows into view
        let dy = self.finger.travel(sample);
        if dy != 0 {
            self.scroll_to(self.scroll_px - dy);
        }
    }
}

/// A free-scrolling surface (web view, text view, custom canvas)
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollSurface {
    pub content_height: i32,
    pub viewport_height: i32,
    pub scroll_y: i32,
    pub vertical_offset: i32,
    pub redraw_requests: usize,
    finger: FingerTracker,
}

impl ScrollSurface {
    pub fn new(content_height: i32, viewport_height: i32) -> Self {
        Self {
            content_height: content_height.max(0),
            viewport_height: viewport_height.max(0),
            scroll_y: 0,
            vertical_offset: 0,
            redraw_requests: 0,
            finger: FingerTracker::default(),
        }
    }

    pub fn max_scroll(&self) -> i32 {
        (self.content_height - self.viewport_height).max(0)
    }

    pub fn scroll_to(&mut self, y: i32) {
        self.scroll_y = y.clamp(0, self.max_scroll());
    }
}

impl ScrollCapability for ScrollSurface {
    fn can_scroll_up_further(&self) -> bool {
        self.scroll_y > 0
    }
}

impl ContentSurface for ScrollSurface {
    fn set_vertical_offset(&mut self, px: i32) {
        self.vertical_offset = px;
    }

    fn request_redraw(&mut self) {
        self.redraw_requests += 1;
    }

    fn dispatch_touch(&mut self, sample: &TouchSample) {
        let dy = self.finger.travel(sample);
        if dy != 0 {
            self.scroll_to(self.scroll_y - dy);
        }
    }
}
