// ABOUTME: UI font discovery and loading.
// ABOUTME: Probes well-known system font paths instead of bundling assets.

use std::path::PathBuf;

/// Sans-serif fonts probed in order across the supported platforms.
const FONT_CANDIDATES: &[&str] = &[
    // Linux
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    // macOS
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Verdana.ttf",
    // Windows
    "C:\\Windows\\Fonts\\arial.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
];

#[derive(Debug, thiserror::Error)]
pub enum FontError {
    #[error("no usable UI font found; tried {0:?}")]
    NotFound(Vec<PathBuf>),

    #[error("failed to parse font {path}: {reason}")]
    Parse { path: PathBuf, reason: String },
}

/// Load the first available system font.
pub fn load_ui_font() -> Result<fontdue::Font, FontError> {
    let mut tried = Vec::new();
    for candidate in FONT_CANDIDATES {
        let path = PathBuf::from(candidate);
        let Ok(data) = std::fs::read(&path) else {
            tried.push(path);
            continue;
        };
        let font = fontdue::Font::from_bytes(data, fontdue::FontSettings::default()).map_err(
            |e| FontError::Parse {
                path: path.clone(),
                reason: e.to_string(),
            },
        )?;
        tracing::info!("Loaded UI font from {}", path.display());
        return Ok(font);
    }
    Err(FontError::NotFound(tried))
}
