// ABOUTME: Window layout computation for the bingo board.
// ABOUTME: Derives cell size, grid origin, and control rectangles from the window size.

use std::collections::HashMap;

/// Outer margin around the grid.
pub const MARGIN: i32 = 20;
/// Vertical space reserved below the grid for the input row and banner.
pub const RESERVED: i32 = 200;
pub const INPUT_BOX_WIDTH: i32 = 300;
pub const INPUT_BOX_HEIGHT: i32 = 40;
pub const BUTTON_WIDTH: i32 = 120;
pub const BUTTON_HEIGHT: i32 = 40;
pub const MESSAGE_HEIGHT: i32 = 30;

/// Minimum y for the grid, keeping room for the title and button row above it.
const GRID_TOP_FLOOR: i32 = 120;

/// Rectangle in window pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Fixed UI controls positioned by the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    InputBox,
    ApplyButton,
    SizeButton,
    SaveButton,
    LoadButton,
    MessageBanner,
}

/// Computed geometry for one window size and grid size.
///
/// Derived data only; recompute on every resize or grid-size change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub window_width: i32,
    pub window_height: i32,
    pub grid_size: i32,
    pub cell_size: i32,
    pub grid_origin: (i32, i32),
    controls: HashMap<Control, Rect>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("invalid layout config: {width}x{height} window, grid size {grid_size}")]
    InvalidConfig {
        width: u32,
        height: u32,
        grid_size: u32,
    },
}

/// Compute the full window layout.
///
/// Couples the horizontal and vertical constraints so the grid stays square
/// and never overflows either axis, then centers the controls around it.
/// Fails only on zero inputs; degenerate small windows clamp the cell size
/// to 1 instead of failing.
pub fn compute_layout(
    window_width: u32,
    window_height: u32,
    grid_size: u32,
) -> Result<Layout, LayoutError> {
    if window_width == 0 || window_height == 0 || grid_size == 0 {
        return Err(LayoutError::InvalidConfig {
            width: window_width,
            height: window_height,
            grid_size,
        });
    }

    let w = window_width as i32;
    let h = window_height as i32;
    let n = grid_size as i32;

    let cell_size = ((w - 2 * MARGIN) / n)
        .min((h - 2 * MARGIN - INPUT_BOX_HEIGHT - RESERVED) / n)
        .max(1);

    let grid_px = n * cell_size;
    let origin_x = (w - grid_px) / 2;
    let origin_y = GRID_TOP_FLOOR.max((h - grid_px - INPUT_BOX_HEIGHT - RESERVED) / 2);

    let mut controls = HashMap::new();

    // Input box and apply button, centered as a pair below the grid.
    let input_y = origin_y + grid_px + 30;
    let pair_width = INPUT_BOX_WIDTH + BUTTON_WIDTH + 20;
    let pair_x = (w - pair_width) / 2;
    controls.insert(
        Control::InputBox,
        Rect::new(pair_x, input_y, INPUT_BOX_WIDTH, INPUT_BOX_HEIGHT),
    );
    let apply = Rect::new(
        pair_x + INPUT_BOX_WIDTH + 20,
        input_y,
        BUTTON_WIDTH,
        BUTTON_HEIGHT,
    );
    controls.insert(Control::ApplyButton, apply);

    // Save / size / load row above the grid.
    let row_width = BUTTON_WIDTH * 3 + 20;
    let row_x = (w - row_width) / 2;
    let row_y = origin_y - 60;
    controls.insert(
        Control::SaveButton,
        Rect::new(row_x, row_y, BUTTON_WIDTH, BUTTON_HEIGHT),
    );
    controls.insert(
        Control::SizeButton,
        Rect::new(row_x + BUTTON_WIDTH + 10, row_y, BUTTON_WIDTH, BUTTON_HEIGHT),
    );
    controls.insert(
        Control::LoadButton,
        Rect::new(
            row_x + BUTTON_WIDTH * 2 + 20,
            row_y,
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
        ),
    );

    // Full-width message banner below the input row.
    controls.insert(
        Control::MessageBanner,
        Rect::new(0, apply.bottom() + 20, w, MESSAGE_HEIGHT),
    );

    Ok(Layout {
        window_width: w,
        window_height: h,
        grid_size: n,
        cell_size,
        grid_origin: (origin_x, origin_y),
        controls,
    })
}

impl Layout {
    pub fn control(&self, control: Control) -> Rect {
        self.controls[&control]
    }

    pub fn controls(&self) -> &HashMap<Control, Rect> {
        &self.controls
    }

    /// Bounding rectangle of the whole grid.
    pub fn grid_rect(&self) -> Rect {
        let (x, y) = self.grid_origin;
        let px = self.grid_size * self.cell_size;
        Rect::new(x, y, px, px)
    }

    pub fn cell_rect(&self, row: usize, col: usize) -> Rect {
        let (ox, oy) = self.grid_origin;
        Rect::new(
            ox + col as i32 * self.cell_size,
            oy + row as i32 * self.cell_size,
            self.cell_size,
            self.cell_size,
        )
    }

    /// Grid cell under a window position, if any.
    pub fn cell_at(&self, x: i32, y: i32) -> Option<(usize, usize)> {
        let (ox, oy) = self.grid_origin;
        if x < ox || y < oy {
            return None;
        }
        let col = (x - ox) / self.cell_size;
        let row = (y - oy) / self.cell_size;
        if col < self.grid_size && row < self.grid_size {
            Some((row as usize, col as usize))
        } else {
            None
        }
    }

    /// Control under a window position, if any.
    pub fn control_at(&self, x: i32, y: i32) -> Option<Control> {
        self.controls
            .iter()
            .find(|(control, rect)| **control != Control::MessageBanner && rect.contains(x, y))
            .map(|(control, _)| *control)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_reproduces_reference_geometry() {
        let layout = compute_layout(800, 750, 5).unwrap();
        // min((800-40)/5, (750-40-40-200)/5) = min(152, 94)
        assert_eq!(layout.cell_size, 94);
        assert_eq!(layout.grid_origin, ((800 - 5 * 94) / 2, 120));

        let input = layout.control(Control::InputBox);
        let apply = layout.control(Control::ApplyButton);
        assert_eq!(input.y, 120 + 5 * 94 + 30);
        assert_eq!(apply.x, input.right() + 20);
        assert_eq!(apply.y, input.y);
    }

    #[test]
    fn grid_stays_within_window_for_all_sizes() {
        for n in 3..=7u32 {
            for &(w, h) in &[(400u32, 400u32), (800, 750), (1280, 1024), (1920, 600)] {
                let layout = compute_layout(w, h, n).unwrap();
                assert!(layout.cell_size >= 1, "{n} at {w}x{h}");
                let grid = layout.grid_rect();
                assert!(grid.x >= 0, "{n} at {w}x{h}");
                assert!(grid.y >= 0, "{n} at {w}x{h}");
                assert!(grid.right() <= w as i32, "{n} at {w}x{h}");
                assert!(grid.bottom() <= h as i32, "{n} at {w}x{h}");
            }
        }
    }

    #[test]
    fn layout_is_deterministic() {
        let a = compute_layout(1024, 768, 5).unwrap();
        let b = compute_layout(1024, 768, 5).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn resize_and_back_restores_layout() {
        let before = compute_layout(800, 750, 5).unwrap();
        let _ = compute_layout(1400, 900, 5).unwrap();
        let after = compute_layout(800, 750, 5).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn grid_size_change_has_no_hysteresis() {
        let before = compute_layout(800, 750, 5).unwrap();
        let _ = compute_layout(800, 750, 6).unwrap();
        let after = compute_layout(800, 750, 5).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn tiny_window_clamps_cell_size() {
        let layout = compute_layout(100, 100, 7).unwrap();
        assert_eq!(layout.cell_size, 1);
    }

    #[test]
    fn zero_inputs_are_rejected() {
        assert!(matches!(
            compute_layout(0, 750, 5),
            Err(LayoutError::InvalidConfig { .. })
        ));
        assert!(matches!(
            compute_layout(800, 0, 5),
            Err(LayoutError::InvalidConfig { .. })
        ));
        assert!(matches!(
            compute_layout(800, 750, 0),
            Err(LayoutError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn grid_top_never_rises_above_floor() {
        let layout = compute_layout(800, 420, 7).unwrap();
        assert!(layout.grid_origin.1 >= 120);
    }

    #[test]
    fn button_row_sits_above_the_grid() {
        let layout = compute_layout(800, 750, 5).unwrap();
        let save = layout.control(Control::SaveButton);
        let size = layout.control(Control::SizeButton);
        let load = layout.control(Control::LoadButton);
        assert_eq!(save.y, layout.grid_origin.1 - 60);
        assert_eq!(size.x, save.right() + 10);
        assert_eq!(load.x, save.x + BUTTON_WIDTH * 2 + 20);
    }

    #[test]
    fn banner_spans_the_window() {
        let layout = compute_layout(800, 750, 5).unwrap();
        let banner = layout.control(Control::MessageBanner);
        let apply = layout.control(Control::ApplyButton);
        assert_eq!(banner.x, 0);
        assert_eq!(banner.width, 800);
        assert_eq!(banner.y, apply.bottom() + 20);
    }

    #[test]
    fn cell_hit_testing_round_trips() {
        let layout = compute_layout(800, 750, 5).unwrap();
        for row in 0..5 {
            for col in 0..5 {
                let rect = layout.cell_rect(row, col);
                let (cx, cy) = rect.center();
                assert_eq!(layout.cell_at(cx, cy), Some((row, col)));
            }
        }
        let (ox, oy) = layout.grid_origin;
        assert_eq!(layout.cell_at(ox - 1, oy), None);
        assert_eq!(layout.cell_at(ox, oy - 1), None);
        let grid = layout.grid_rect();
        assert_eq!(layout.cell_at(grid.right(), grid.bottom()), None);
    }

    #[test]
    fn control_hit_testing_finds_buttons() {
        let layout = compute_layout(800, 750, 5).unwrap();
        for control in [
            Control::InputBox,
            Control::ApplyButton,
            Control::SaveButton,
            Control::SizeButton,
            Control::LoadButton,
        ] {
            let (cx, cy) = layout.control(control).center();
            assert_eq!(layout.control_at(cx, cy), Some(control));
        }
        // The banner is display-only and never reported as a hit.
        let (bx, by) = layout.control(Control::MessageBanner).center();
        assert_ne!(layout.control_at(bx, by), Some(Control::MessageBanner));
    }
}
