// ABOUTME: Builds the render frame for the board UI.
// ABOUTME: Pure translation from app state to rects, lines, and text runs.

use std::collections::HashMap;

use bingo_core::{Board, Color};
use bingo_layout::{fit_word, Control, Layout, Rect};
use bingo_renderer::{Align, Frame, TextRun};

const TITLE_FONT_SIZE: u32 = 40;
const CONTROL_FONT_SIZE: u32 = 20;
const MESSAGE_FONT_SIZE: u32 = 18;
const BORDER_THICKNESS: f32 = 2.0;
const MARK_INSET: f32 = 5.0;
const MARK_THICKNESS: f32 = 4.0;
const MARK_DOT_SIZE: f32 = 10.0;

/// A mark animation in flight: a dot travels from the click point toward
/// the cell center, then the X appears.
pub struct MarkAnimation {
    pub progress: f32,
    pub from: (f32, f32),
}

/// Everything the view needs to draw one frame.
pub struct ViewModel<'a> {
    pub board: &'a Board,
    pub layout: &'a Layout,
    pub input_text: &'a str,
    pub input_active: bool,
    pub editing_cell: Option<(usize, usize)>,
    pub message: Option<&'a str>,
    pub mark_animations: &'a HashMap<(usize, usize), MarkAnimation>,
}

pub fn build_frame(view: &ViewModel) -> Frame {
    let mut frame = Frame::new(Color::BACKGROUND.to_array());

    push_title(&mut frame, view.layout);
    push_buttons(&mut frame, view);
    push_grid(&mut frame, view);
    push_input_row(&mut frame, view);
    push_message(&mut frame, view);

    frame
}

fn push_title(frame: &mut Frame, layout: &Layout) {
    let row_top = layout.control(Control::SaveButton).y;
    frame.push_text(TextRun {
        text: "Bingo".to_string(),
        x: layout.window_width as f32 / 2.0,
        y: ((row_top - 52).max(4)) as f32,
        font_size: TITLE_FONT_SIZE,
        color: Color::TEXT.to_array(),
        align: Align::Center,
    });
}

fn push_buttons(frame: &mut Frame, view: &ViewModel) {
    let size_label = view.board.size().label();
    let buttons = [
        (Control::SaveButton, "Save"),
        (Control::SizeButton, size_label.as_str()),
        (Control::LoadButton, "Load"),
    ];
    for (control, label) in buttons {
        let rect = view.layout.control(control);
        push_panel(frame, rect, Color::ACCENT);
        push_centered_label(frame, rect, label, CONTROL_FONT_SIZE);
    }
}

fn push_grid(frame: &mut Frame, view: &ViewModel) {
    let n = view.board.grid_size();
    for row in 0..n {
        for col in 0..n {
            let rect = view.layout.cell_rect(row, col);
            let fill = if view.editing_cell == Some((row, col)) {
                Color::ACCENT.with_alpha(0.4)
            } else {
                Color::SECONDARY
            };
            frame.push_rect(
                rect.x as f32,
                rect.y as f32,
                rect.width as f32,
                rect.height as f32,
                fill.to_array(),
            );
            push_outline(frame, rect, Color::TEXT.to_array());

            push_cell_word(frame, view, rect, row, col);

            if view.board.is_marked(row, col) {
                match view.mark_animations.get(&(row, col)) {
                    Some(anim) => push_mark_dot(frame, rect, anim),
                    None => push_mark(frame, rect),
                }
            }
        }
    }
}

fn push_cell_word(frame: &mut Frame, view: &ViewModel, rect: Rect, row: usize, col: usize) {
    let word = view.board.word(row, col);
    if word.is_empty() {
        return;
    }

    let plan = fit_word(word, rect.width);
    let line_height = plan.line_height();
    let (cx, _) = rect.center();
    let mut y = rect.y as f32 + (rect.height as f32 - plan.block_height()) / 2.0;

    for line in &plan.lines {
        frame.push_text(TextRun {
            text: line.clone(),
            x: cx as f32,
            y,
            font_size: plan.font_size,
            color: Color::TEXT.to_array(),
            align: Align::Center,
        });
        y += line_height;
    }
}

/// Red X across a cell, inset from the borders.
fn push_mark(frame: &mut Frame, rect: Rect) {
    let x0 = rect.x as f32 + MARK_INSET;
    let y0 = rect.y as f32 + MARK_INSET;
    let x1 = rect.right() as f32 - MARK_INSET;
    let y1 = rect.bottom() as f32 - MARK_INSET;

    let color = Color::MARK.to_array();
    frame.push_line((x0, y0), (x1, y1), MARK_THICKNESS, color);
    frame.push_line((x1, y0), (x0, y1), MARK_THICKNESS, color);
}

fn push_mark_dot(frame: &mut Frame, rect: Rect, anim: &MarkAnimation) {
    let t = anim.progress.clamp(0.0, 1.0);
    let (cx, cy) = rect.center();
    let x = anim.from.0 + (cx as f32 - anim.from.0) * t;
    let y = anim.from.1 + (cy as f32 - anim.from.1) * t;
    frame.push_rect(
        x - MARK_DOT_SIZE / 2.0,
        y - MARK_DOT_SIZE / 2.0,
        MARK_DOT_SIZE,
        MARK_DOT_SIZE,
        Color::MARK.to_array(),
    );
}

fn push_input_row(frame: &mut Frame, view: &ViewModel) {
    let input = view.layout.control(Control::InputBox);
    let border = if view.input_active {
        Color::ACCENT
    } else {
        Color::TEXT
    };
    push_panel(frame, input, border);

    frame.push_text(TextRun {
        text: "Enter a word:".to_string(),
        x: input.x as f32,
        y: (input.y - 26) as f32,
        font_size: MESSAGE_FONT_SIZE,
        color: Color::TEXT.to_array(),
        align: Align::Left,
    });

    let mut text = view.input_text.to_string();
    if view.input_active {
        text.push('_');
    }
    frame.push_text(TextRun {
        text,
        x: (input.x + 8) as f32,
        y: input.y as f32 + (input.height as f32 - CONTROL_FONT_SIZE as f32 * 1.2) / 2.0,
        font_size: CONTROL_FONT_SIZE,
        color: Color::TEXT.to_array(),
        align: Align::Left,
    });

    let apply = view.layout.control(Control::ApplyButton);
    push_panel(frame, apply, Color::ACCENT);
    push_centered_label(frame, apply, "Apply", CONTROL_FONT_SIZE);
}

fn push_message(frame: &mut Frame, view: &ViewModel) {
    let Some(message) = view.message else {
        return;
    };
    let banner = view.layout.control(Control::MessageBanner);
    frame.push_rect(
        banner.x as f32,
        banner.y as f32,
        banner.width as f32,
        banner.height as f32,
        Color::SECONDARY.to_array(),
    );
    push_centered_label(frame, banner, message, MESSAGE_FONT_SIZE);
}

/// Filled panel with a border, used for buttons and the input box.
fn push_panel(frame: &mut Frame, rect: Rect, border: Color) {
    frame.push_rect(
        rect.x as f32,
        rect.y as f32,
        rect.width as f32,
        rect.height as f32,
        Color::SECONDARY.to_array(),
    );
    push_outline(frame, rect, border.to_array());
}

fn push_outline(frame: &mut Frame, rect: Rect, color: [f32; 4]) {
    let x0 = rect.x as f32;
    let y0 = rect.y as f32;
    let x1 = rect.right() as f32;
    let y1 = rect.bottom() as f32;
    frame.push_line((x0, y0), (x1, y0), BORDER_THICKNESS, color);
    frame.push_line((x1, y0), (x1, y1), BORDER_THICKNESS, color);
    frame.push_line((x1, y1), (x0, y1), BORDER_THICKNESS, color);
    frame.push_line((x0, y1), (x0, y0), BORDER_THICKNESS, color);
}

fn push_centered_label(frame: &mut Frame, rect: Rect, label: &str, font_size: u32) {
    let (cx, _) = rect.center();
    frame.push_text(TextRun {
        text: label.to_string(),
        x: cx as f32,
        y: rect.y as f32 + (rect.height as f32 - font_size as f32 * 1.2) / 2.0,
        font_size,
        color: Color::TEXT.to_array(),
        align: Align::Center,
    });
}
