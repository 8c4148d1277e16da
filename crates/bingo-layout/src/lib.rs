// ABOUTME: Adaptive layout and text fitting for the bingo board.
// ABOUTME: Pure geometry and measurement code with no I/O or draw calls.

mod fit;
mod layout;
mod metrics;

pub use fit::{
    fit_word, TextFitPlan, CELL_TEXT_PADDING, DEFAULT_FONT_SIZE, MAX_LINES, MIN_FONT_SIZE,
};
pub use layout::{
    compute_layout, Control, Layout, LayoutError, Rect, BUTTON_HEIGHT, BUTTON_WIDTH,
    INPUT_BOX_HEIGHT, INPUT_BOX_WIDTH, MARGIN, MESSAGE_HEIGHT, RESERVED,
};
pub use metrics::{em_width, line_height, text_width};
