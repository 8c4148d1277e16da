// ABOUTME: Color palette for the board UI.
// ABOUTME: Dark background with a blue accent and red marks.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Window background.
    pub const BACKGROUND: Self = Self::rgb(0.110, 0.110, 0.118);

    /// Cell fill, buttons, input box, and banner.
    pub const SECONDARY: Self = Self::rgb(0.173, 0.173, 0.180);

    /// Selection highlight and control borders.
    pub const ACCENT: Self = Self::rgb(0.039, 0.518, 1.0);

    /// Text and cell borders.
    pub const TEXT: Self = Self::rgb(1.0, 1.0, 1.0);

    /// X marks and the mark animation.
    pub const MARK: Self = Self::rgb(1.0, 0.0, 0.0);

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<Color> for [f32; 4] {
    fn from(c: Color) -> Self {
        c.to_array()
    }
}
