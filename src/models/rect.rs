//! Screen-space rectangles and the panel proximity test.
use serde::{Deserialize, Serialize};

/// Pixel margin below the panel, scaled by the UI scale factor, within
/// which a window counts as touching the bar.
pub const PANEL_PROXIMITY_MARGIN: i32 = 5;

/// Position and size in screen coordinates, x/y from top left.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    #[must_use]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }
}

/// True when any frame's top edge sits above the panel's bottom edge plus
/// the scaled margin. Only top edges are considered; horizontal overlap
/// with the panel is deliberately ignored, as is where a window ends. An
/// empty frame set is always "far".
#[must_use]
pub fn window_near_panel(panel: Rect, frames: &[Rect], scale: f32) -> bool {
    let limit = panel.bottom() as f32 + PANEL_PROXIMITY_MARGIN as f32 * scale;
    frames.iter().any(|frame| (frame.y as f32) < limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_above_the_margin_is_near() {
        let panel = Rect::new(0, 0, 1920, 30);
        assert!(window_near_panel(panel, &[Rect::new(0, 34, 600, 400)], 1.0));
    }

    #[test]
    fn window_at_the_margin_is_far() {
        let panel = Rect::new(0, 0, 1920, 30);
        assert!(!window_near_panel(panel, &[Rect::new(0, 35, 600, 400)], 1.0));
    }

    #[test]
    fn window_below_the_margin_is_far() {
        let panel = Rect::new(0, 0, 1920, 30);
        assert!(!window_near_panel(panel, &[Rect::new(0, 36, 600, 400)], 1.0));
    }

    #[test]
    fn empty_frame_set_is_far() {
        let panel = Rect::new(0, 0, 1920, 30);
        assert!(!window_near_panel(panel, &[], 1.0));
    }

    #[test]
    fn one_near_window_among_far_ones_is_enough() {
        let panel = Rect::new(0, 0, 1920, 30);
        let frames = [Rect::new(0, 900, 600, 100), Rect::new(700, 20, 600, 400)];
        assert!(window_near_panel(panel, &frames, 1.0));
    }

    #[test]
    fn margin_scales_with_ui_scale_factor() {
        let panel = Rect::new(0, 0, 1920, 30);
        // At scale 2 the margin doubles to 10px.
        assert!(window_near_panel(panel, &[Rect::new(0, 39, 600, 400)], 2.0));
        assert!(!window_near_panel(panel, &[Rect::new(0, 40, 600, 400)], 2.0));
    }

    #[test]
    fn panel_offset_moves_the_threshold() {
        let panel = Rect::new(0, 100, 1920, 30);
        assert!(window_near_panel(panel, &[Rect::new(0, 134, 600, 400)], 1.0));
        assert!(!window_near_panel(panel, &[Rect::new(0, 135, 600, 400)], 1.0));
    }
}
