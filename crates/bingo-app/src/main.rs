// ABOUTME: Main application entry point.
// ABOUTME: Sets up window, event loop, and wires input to board state.

mod view;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowAttributes, WindowId};

use bingo_core::{Board, Config, Preset};
use bingo_layout::{compute_layout, Control, Layout};
use bingo_renderer::Renderer;
use view::{MarkAnimation, ViewModel};

const MESSAGE_DURATION: Duration = Duration::from_secs(2);
const MARK_ANIMATION_DURATION: Duration = Duration::from_millis(150);

struct App {
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    config: Config,
    board: Board,
    layout: Option<Layout>,
    input_text: String,
    input_active: bool,
    editing_cell: Option<(usize, usize)>,
    message: Option<(String, Instant)>,
    mark_animations: HashMap<(usize, usize), (Instant, (f32, f32))>,
    mouse_pos: (f64, f64),
}

impl App {
    fn new() -> Self {
        let config = Config::load_or_default();
        tracing::info!(
            "Loaded config: {}x{} window",
            config.window_width,
            config.window_height
        );

        Self {
            window: None,
            renderer: None,
            config,
            board: Board::default(),
            layout: None,
            input_text: String::new(),
            input_active: false,
            editing_cell: None,
            message: None,
            mark_animations: HashMap::new(),
            mouse_pos: (0.0, 0.0),
        }
    }

    fn recompute_layout(&mut self) {
        let Some(renderer) = &self.renderer else {
            return;
        };
        let (width, height) = renderer.window_size();
        match compute_layout(width, height, self.board.size().value()) {
            Ok(layout) => self.layout = Some(layout),
            Err(e) => tracing::error!("Layout failed: {}", e),
        }
    }

    fn show_message(&mut self, text: impl Into<String>) {
        let text = text.into();
        tracing::info!("{}", text);
        self.message = Some((text, Instant::now()));
    }

    /// Commit the typed word to the cell being edited.
    fn apply_input(&mut self) {
        let Some((row, col)) = self.editing_cell else {
            self.show_message("Right-click a cell first");
            return;
        };
        let word = self.input_text.trim().to_string();
        self.board.set_word(row, col, word);
        self.input_text.clear();
        self.editing_cell = None;
        self.input_active = false;
    }

    fn cycle_grid_size(&mut self) {
        let next = self.board.size().next();
        self.board.resize(next);
        self.editing_cell = None;
        self.mark_animations.clear();
        self.recompute_layout();
        self.show_message(format!("Grid size: {}", next.label()));
    }

    fn save_preset(&mut self) {
        let size = self.board.size();
        let Some(path) = Preset::default_path(size) else {
            self.show_message("No data directory available");
            return;
        };
        match Preset::from_board(&self.board).save(&path) {
            Ok(()) => self.show_message(format!("Saved {} preset", size.label())),
            Err(e) => self.show_message(format!("Save failed: {e}")),
        }
    }

    fn load_preset(&mut self) {
        let size = self.board.size();
        let Some(path) = Preset::default_path(size) else {
            self.show_message("No data directory available");
            return;
        };
        let board = Preset::load(&path).and_then(Preset::into_board);
        match board {
            Ok(board) => {
                self.board = board;
                self.editing_cell = None;
                self.mark_animations.clear();
                self.recompute_layout();
                self.show_message(format!("Loaded {} preset", size.label()));
            }
            Err(e) => self.show_message(format!("Load failed: {e}")),
        }
    }

    fn handle_left_click(&mut self, x: i32, y: i32) {
        let Some(layout) = &self.layout else {
            return;
        };

        if let Some(control) = layout.control_at(x, y) {
            match control {
                Control::InputBox => self.input_active = true,
                Control::ApplyButton => self.apply_input(),
                Control::SizeButton => self.cycle_grid_size(),
                Control::SaveButton => self.save_preset(),
                Control::LoadButton => self.load_preset(),
                Control::MessageBanner => {}
            }
            return;
        }

        if let Some((row, col)) = layout.cell_at(x, y) {
            if self.board.toggle_mark(row, col) {
                self.mark_animations
                    .insert((row, col), (Instant::now(), (x as f32, y as f32)));
            } else {
                self.mark_animations.remove(&(row, col));
            }
            return;
        }

        self.input_active = false;
    }

    fn handle_right_click(&mut self, x: i32, y: i32) {
        let Some(layout) = &self.layout else {
            return;
        };
        if let Some((row, col)) = layout.cell_at(x, y) {
            self.editing_cell = Some((row, col));
            self.input_text = self.board.word(row, col).to_string();
            self.input_active = true;
        }
    }

    fn handle_key(&mut self, key: &Key) {
        match key {
            Key::Named(NamedKey::Enter) => {
                if self.input_active {
                    self.apply_input();
                }
            }
            Key::Named(NamedKey::Escape) => {
                self.input_active = false;
                self.editing_cell = None;
            }
            Key::Named(NamedKey::Backspace) if self.input_active => {
                self.input_text.pop();
            }
            Key::Named(NamedKey::Space) if self.input_active => {
                self.input_text.push(' ');
            }
            Key::Character(s) if self.input_active => {
                self.input_text.push_str(s);
            }
            _ => {}
        }
    }

    fn render_frame(&mut self) {
        // Expire stale messages and finished animations before drawing.
        if self
            .message
            .as_ref()
            .is_some_and(|(_, shown)| shown.elapsed() > MESSAGE_DURATION)
        {
            self.message = None;
        }
        self.mark_animations
            .retain(|_, (started, _)| started.elapsed() < MARK_ANIMATION_DURATION);

        let mark_animations: HashMap<(usize, usize), MarkAnimation> = self
            .mark_animations
            .iter()
            .map(|(cell, (started, from))| {
                let progress = started.elapsed().as_secs_f32()
                    / MARK_ANIMATION_DURATION.as_secs_f32();
                (
                    *cell,
                    MarkAnimation {
                        progress: progress.min(1.0),
                        from: *from,
                    },
                )
            })
            .collect();

        let (Some(renderer), Some(layout)) = (&mut self.renderer, &self.layout) else {
            return;
        };

        let frame = view::build_frame(&ViewModel {
            board: &self.board,
            layout,
            input_text: &self.input_text,
            input_active: self.input_active,
            editing_cell: self.editing_cell,
            message: self.message.as_ref().map(|(text, _)| text.as_str()),
            mark_animations: &mark_animations,
        });

        if let Err(e) = renderer.render(&frame) {
            tracing::error!("Render failed: {}", e);
        }
    }

    fn save_window_size(&mut self) {
        if let Some(renderer) = &self.renderer {
            let (width, height) = renderer.window_size();
            self.config.window_width = width;
            self.config.window_height = height;
        }
        match self.config.save_to_default() {
            Ok(path) => tracing::info!("Config saved to {}", path.display()),
            Err(e) => tracing::warn!("Failed to save config: {}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = WindowAttributes::default()
            .with_title("Bingo Board")
            .with_inner_size(LogicalSize::new(
                self.config.window_width,
                self.config.window_height,
            ));

        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .expect("Failed to create window"),
        );

        let renderer = pollster::block_on(Renderer::new(Arc::clone(&window)))
            .expect("Failed to create renderer");

        let physical_size = window.inner_size();
        tracing::info!(
            "Window created: {}x{} physical pixels, scale factor: {}",
            physical_size.width,
            physical_size.height,
            window.scale_factor()
        );

        self.window = Some(window);
        self.renderer = Some(renderer);
        self.recompute_layout();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Close requested, exiting");
                self.save_window_size();
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(new_size.width, new_size.height);
                }
                self.recompute_layout();
            }
            WindowEvent::RedrawRequested => {
                self.render_frame();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.mouse_pos = (position.x, position.y);
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button,
                ..
            } => {
                let (x, y) = (self.mouse_pos.0 as i32, self.mouse_pos.1 as i32);
                match button {
                    MouseButton::Left => self.handle_left_click(x, y),
                    MouseButton::Right => self.handle_right_click(x, y),
                    _ => {}
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    self.handle_key(&event.logical_key);
                }
            }
            _ => {}
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    tracing::info!("Starting bingo-board");

    let event_loop = EventLoop::new()?;
    let mut app = App::new();

    event_loop.run_app(&mut app)?;

    Ok(())
}
