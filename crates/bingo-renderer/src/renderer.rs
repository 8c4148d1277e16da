// ABOUTME: Main GPU renderer using wgpu.
// ABOUTME: Turns a Frame of rects, lines, and text runs into draw calls.

use std::sync::Arc;
use winit::window::Window;

use crate::atlas::GlyphAtlas;
use crate::font::{load_ui_font, FontError};
use crate::gpu::{GpuContext, GpuError};
use crate::shape_pipeline::ShapePipeline;
use crate::text_pipeline::{PlacedGlyph, TextPipeline};

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Surface error: {0}")]
    Surface(#[from] wgpu::SurfaceError),

    #[error("GPU error: {0}")]
    Gpu(#[from] GpuError),

    #[error("Font error: {0}")]
    Font(#[from] FontError),

    #[error("Atlas error: {0}")]
    Atlas(#[from] crate::atlas::AtlasError),
}

/// Horizontal anchoring for a text run's `x` coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// A thick line segment in pixel coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Line {
    pub from: (f32, f32),
    pub to: (f32, f32),
    pub thickness: f32,
    pub color: [f32; 4],
}

/// One run of text. `y` is the top of the line box, not the baseline.
#[derive(Debug, Clone)]
pub struct TextRun {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub font_size: u32,
    pub color: [f32; 4],
    pub align: Align,
}

/// Everything to draw for one frame, in draw order: rects, then lines,
/// then text on top.
#[derive(Default)]
pub struct Frame {
    pub clear_color: [f32; 4],
    pub rects: Vec<(f32, f32, f32, f32, [f32; 4])>,
    pub lines: Vec<Line>,
    pub text: Vec<TextRun>,
}

impl Frame {
    pub fn new(clear_color: [f32; 4]) -> Self {
        Self {
            clear_color,
            ..Default::default()
        }
    }

    pub fn push_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: [f32; 4]) {
        self.rects.push((x, y, width, height, color));
    }

    pub fn push_line(&mut self, from: (f32, f32), to: (f32, f32), thickness: f32, color: [f32; 4]) {
        self.lines.push(Line {
            from,
            to,
            thickness,
            color,
        });
    }

    pub fn push_text(&mut self, run: TextRun) {
        self.text.push(run);
    }
}

pub struct Renderer {
    gpu: GpuContext,
    shape_pipeline: ShapePipeline,
    text_pipeline: TextPipeline,
    atlas: GlyphAtlas,
}

impl Renderer {
    pub async fn new(window: Arc<Window>) -> Result<Self, RenderError> {
        let gpu = GpuContext::new(window).await?;

        let font = load_ui_font()?;
        let atlas = GlyphAtlas::new(font);

        let shape_pipeline = ShapePipeline::new(&gpu.device, gpu.config.format);
        let text_pipeline = TextPipeline::new(&gpu.device, &gpu.queue, gpu.config.format, &atlas);

        Ok(Self {
            gpu,
            shape_pipeline,
            text_pipeline,
            atlas,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
        self.shape_pipeline
            .update_screen_size(&self.gpu.queue, width as f32, height as f32);
        self.text_pipeline
            .update_screen_size(&self.gpu.queue, width as f32, height as f32);
    }

    pub fn window_size(&self) -> (u32, u32) {
        self.gpu.size
    }

    /// Pixel width of a string at the given size, from real glyph metrics.
    pub fn measure(&self, text: &str, font_size: u32) -> f32 {
        self.atlas.measure(text, font_size)
    }

    pub fn render(&mut self, frame: &Frame) -> Result<(), RenderError> {
        let (width, height) = self.gpu.size;

        self.shape_pipeline
            .update_screen_size(&self.gpu.queue, width as f32, height as f32);
        self.text_pipeline
            .update_screen_size(&self.gpu.queue, width as f32, height as f32);

        self.shape_pipeline
            .prepare(&self.gpu.queue, &frame.rects, &frame.lines);

        let mut glyphs = Vec::new();
        for run in &frame.text {
            let start_x = match run.align {
                Align::Left => run.x,
                Align::Center => run.x - self.atlas.measure(&run.text, run.font_size) / 2.0,
            };
            let baseline_y = run.y + self.atlas.ascent(run.font_size);

            let mut pen_x = start_x;
            for c in run.text.chars() {
                glyphs.push(PlacedGlyph {
                    c,
                    font_size: run.font_size,
                    x: pen_x,
                    baseline_y,
                    color: run.color,
                });
                pen_x += self.atlas.get_glyph(c, run.font_size)?.advance;
            }
        }

        self.text_pipeline
            .prepare(&self.gpu.queue, &mut self.atlas, &glyphs);

        let output = match self.gpu.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                // Reconfigure and retry once; a resize is usually in flight.
                self.gpu.resize(width, height);
                self.gpu.surface.get_current_texture()?
            }
            Err(e) => return Err(e.into()),
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let [r, g, b, a] = frame.clear_color;
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Main Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: r as f64,
                            g: g as f64,
                            b: b as f64,
                            a: a as f64,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.shape_pipeline.render(&mut render_pass);
            self.text_pipeline.render(&mut render_pass);
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}
