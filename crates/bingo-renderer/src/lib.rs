// ABOUTME: GPU rendering for the bingo board.
// ABOUTME: Uses wgpu to draw rectangles, lines, and atlas-based text.

mod atlas;
mod font;
mod gpu;
mod renderer;
mod shape_pipeline;
mod text_pipeline;

pub use atlas::{AtlasError, GlyphAtlas};
pub use font::{load_ui_font, FontError};
pub use renderer::{Align, Frame, Line, RenderError, Renderer, TextRun};
