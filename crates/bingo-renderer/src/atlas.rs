// ABOUTME: Glyph atlas for GPU text rendering.
// ABOUTME: Rasterizes glyphs at multiple sizes and packs them into one texture.

use fontdue::Font;
use std::collections::HashMap;

/// Shelf-packed alpha texture of rasterized glyphs.
///
/// Keyed by `(char, font_size)` because the text fitter picks a per-word
/// size and the UI adds a handful of fixed sizes; the whole working set
/// stays small (ASCII at sizes 10..=48).
pub struct GlyphAtlas {
    font: Font,
    glyphs: HashMap<(char, u32), GlyphInfo>,
    atlas_data: Vec<u8>,
    atlas_width: u32,
    atlas_height: u32,
    next_x: u32,
    next_y: u32,
    row_height: u32,
    dirty: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct GlyphInfo {
    pub uv_x: f32,
    pub uv_y: f32,
    pub uv_width: f32,
    pub uv_height: f32,
    pub width: u32,
    pub height: u32,
    pub advance: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

#[derive(Debug, thiserror::Error)]
pub enum AtlasError {
    #[error("Atlas is full")]
    AtlasFull,
}

impl GlyphAtlas {
    pub fn new(font: Font) -> Self {
        let atlas_width = 1024;
        let atlas_height = 1024;
        let atlas_data = vec![0u8; (atlas_width * atlas_height) as usize];

        Self {
            font,
            glyphs: HashMap::new(),
            atlas_data,
            atlas_width,
            atlas_height,
            next_x: 0,
            next_y: 0,
            row_height: 0,
            dirty: false,
        }
    }

    /// Baseline distance from the top of a line at the given size.
    pub fn ascent(&self, font_size: u32) -> f32 {
        self.font
            .horizontal_line_metrics(font_size as f32)
            .map(|m| m.ascent)
            .unwrap_or(font_size as f32 * 0.8)
    }

    /// Advance width of a string at the given size, from real glyph metrics.
    pub fn measure(&self, text: &str, font_size: u32) -> f32 {
        text.chars()
            .map(|c| self.font.metrics(c, font_size as f32).advance_width)
            .sum()
    }

    /// Get glyph info, rasterizing and packing on first use.
    pub fn get_glyph(&mut self, c: char, font_size: u32) -> Result<GlyphInfo, AtlasError> {
        if let Some(info) = self.glyphs.get(&(c, font_size)) {
            return Ok(*info);
        }

        let (metrics, bitmap) = self.font.rasterize(c, font_size as f32);

        if metrics.width == 0 || metrics.height == 0 {
            // Space or empty glyph
            let info = GlyphInfo {
                uv_x: 0.0,
                uv_y: 0.0,
                uv_width: 0.0,
                uv_height: 0.0,
                width: 0,
                height: 0,
                advance: metrics.advance_width,
                offset_x: metrics.xmin as f32,
                offset_y: metrics.ymin as f32,
            };
            self.glyphs.insert((c, font_size), info);
            return Ok(info);
        }

        if self.next_x + metrics.width as u32 > self.atlas_width {
            self.next_x = 0;
            self.next_y += self.row_height + 1;
            self.row_height = 0;
        }

        if self.next_y + metrics.height as u32 > self.atlas_height {
            return Err(AtlasError::AtlasFull);
        }

        for y in 0..metrics.height {
            for x in 0..metrics.width {
                let src_idx = y * metrics.width + x;
                let dst_x = self.next_x + x as u32;
                let dst_y = self.next_y + y as u32;
                let dst_idx = (dst_y * self.atlas_width + dst_x) as usize;
                self.atlas_data[dst_idx] = bitmap[src_idx];
            }
        }

        let info = GlyphInfo {
            uv_x: self.next_x as f32 / self.atlas_width as f32,
            uv_y: self.next_y as f32 / self.atlas_height as f32,
            uv_width: metrics.width as f32 / self.atlas_width as f32,
            uv_height: metrics.height as f32 / self.atlas_height as f32,
            width: metrics.width as u32,
            height: metrics.height as u32,
            advance: metrics.advance_width,
            offset_x: metrics.xmin as f32,
            offset_y: metrics.ymin as f32,
        };

        self.next_x += metrics.width as u32 + 1;
        self.row_height = self.row_height.max(metrics.height as u32);

        self.glyphs.insert((c, font_size), info);
        self.dirty = true;
        Ok(info)
    }

    /// True once new glyphs have been packed since the last upload.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn atlas_data(&self) -> &[u8] {
        &self.atlas_data
    }

    pub fn atlas_dimensions(&self) -> (u32, u32) {
        (self.atlas_width, self.atlas_height)
    }
}
