//! Input aggregation: pointer drag, touch drag, keyboard and arrow clicks are
//! all reduced to a [`ScrollCommand`].

use crate::event::Key;

/// A request against the scroll region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollCommand {
    /// Animate by a relative amount.
    By(f32),
    /// Animate to an absolute position.
    To(f32),
    /// Jump to an absolute position without animating (drag tracking).
    Set(f32),
}

/// Distance scrolled by one arrow click or arrow key.
///
/// `max(fraction * viewport, first_item_width + gap)`, or `fallback` when the
/// strip has no items yet.
pub fn page_amount(
    viewport: f32,
    first_item_width: Option<f32>,
    gap: f32,
    fraction: f32,
    fallback: f32,
) -> f32 {
    let min_scroll = first_item_width.map_or(fallback, |width| width + gap);
    (viewport * fraction).max(min_scroll)
}

/// Map a key to a scroll command. Returns `None` for keys the strip ignores.
pub fn key_command(key: Key, page: f32, max_offset: f32) -> Option<ScrollCommand> {
    match key {
        Key::Left => Some(ScrollCommand::By(-page)),
        Key::Right => Some(ScrollCommand::By(page)),
        Key::Home => Some(ScrollCommand::To(0.0)),
        Key::End => Some(ScrollCommand::To(max_offset)),
        _ => None,
    }
}

/// A pointer drag in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Press {
    start_x: f32,
    start_offset: f32,
}

/// Pointer drag state for the region.
///
/// `moved` outlives the press itself: it is read by the click that follows
/// the release, and reset by the next press.
#[derive(Debug, Clone, Default)]
pub struct DragSession {
    press: Option<Press>,
    moved: bool,
    sensitivity: f32,
}

impl DragSession {
    pub fn new(sensitivity: f32) -> Self {
        Self {
            press: None,
            moved: false,
            sensitivity,
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    pub fn moved(&self) -> bool {
        self.moved
    }

    /// Begin a drag. `page_x` is in page coordinates, `nav_left` is the
    /// region's left edge on the page.
    pub fn press(&mut self, page_x: f32, nav_left: f32, offset: f32) {
        self.press = Some(Press {
            start_x: page_x - nav_left,
            start_offset: offset,
        });
        self.moved = false;
    }

    /// Track a pointer move. Returns the offset the region should jump to,
    /// or `None` when no press is active.
    pub fn drag(&mut self, page_x: f32, nav_left: f32) -> Option<ScrollCommand> {
        let press = self.press?;
        let x = page_x - nav_left;
        if x != press.start_x {
            self.moved = true;
        }
        let walk = (x - press.start_x) * self.sensitivity;
        Some(ScrollCommand::Set(press.start_offset - walk))
    }

    /// End the press. Returns true if a press was active.
    pub fn release(&mut self) -> bool {
        self.press.take().is_some()
    }

    /// Consume the "moved" flag for a click. Returns true if the click should
    /// be suppressed.
    pub fn take_click_suppression(&mut self) -> bool {
        std::mem::take(&mut self.moved)
    }
}

/// Touch drag state. Touch never prevents the browser's own scrolling.
#[derive(Debug, Clone, Copy, Default)]
pub struct TouchSession {
    start: Option<(f32, f32)>,
}

impl TouchSession {
    pub fn start(&mut self, client_x: f32, offset: f32) {
        self.start = Some((client_x, offset));
    }

    pub fn drag(&self, client_x: f32) -> Option<ScrollCommand> {
        let (start_x, start_offset) = self.start?;
        Some(ScrollCommand::Set(start_offset + (start_x - client_x)))
    }

    pub fn end(&mut self) {
        self.start = None;
    }

    pub fn is_active(&self) -> bool {
        self.start.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_amount_prefers_fraction_of_viewport() {
        assert_eq!(page_amount(500.0, Some(100.0), 12.0, 0.8, 120.0), 400.0);
    }

    #[test]
    fn test_page_amount_never_below_one_item() {
        assert_eq!(page_amount(100.0, Some(150.0), 12.0, 0.8, 120.0), 162.0);
    }

    #[test]
    fn test_page_amount_fallback_without_items() {
        assert_eq!(page_amount(100.0, None, 12.0, 0.8, 120.0), 120.0);
        assert_eq!(page_amount(400.0, None, 12.0, 0.8, 120.0), 320.0);
    }

    #[test]
    fn test_drag_walk_uses_sensitivity() {
        let mut drag = DragSession::new(2.0);
        drag.press(150.0, 50.0, 300.0);
        assert_eq!(drag.drag(130.0, 50.0), Some(ScrollCommand::Set(340.0)));
        assert_eq!(drag.drag(170.0, 50.0), Some(ScrollCommand::Set(260.0)));
        assert!(drag.moved());
    }

    #[test]
    fn test_drag_without_press_is_ignored() {
        let mut drag = DragSession::new(2.0);
        assert_eq!(drag.drag(10.0, 0.0), None);
        assert!(!drag.moved());
    }

    #[test]
    fn test_stationary_move_does_not_mark_moved() {
        let mut drag = DragSession::new(2.0);
        drag.press(40.0, 0.0, 0.0);
        drag.drag(40.0, 0.0);
        drag.release();
        assert!(!drag.take_click_suppression());
    }

    #[test]
    fn test_click_suppression_is_one_shot() {
        let mut drag = DragSession::new(2.0);
        drag.press(40.0, 0.0, 0.0);
        drag.drag(20.0, 0.0);
        drag.release();
        assert!(drag.take_click_suppression());
        assert!(!drag.take_click_suppression());
    }

    #[test]
    fn test_touch_has_no_multiplier() {
        let mut touch = TouchSession::default();
        assert_eq!(touch.drag(10.0), None);
        touch.start(200.0, 50.0);
        assert_eq!(touch.drag(150.0), Some(ScrollCommand::Set(100.0)));
        touch.end();
        assert!(!touch.is_active());
    }

    #[test]
    fn test_key_commands() {
        assert_eq!(key_command(Key::Left, 80.0, 500.0), Some(ScrollCommand::By(-80.0)));
        assert_eq!(key_command(Key::Right, 80.0, 500.0), Some(ScrollCommand::By(80.0)));
        assert_eq!(key_command(Key::Home, 80.0, 500.0), Some(ScrollCommand::To(0.0)));
        assert_eq!(key_command(Key::End, 80.0, 500.0), Some(ScrollCommand::To(500.0)));
        assert_eq!(key_command(Key::Char('a'), 80.0, 500.0), None);
    }
}
