// ABOUTME: Shrink-to-fit word wrapping for grid cells.
// ABOUTME: Picks the largest font size whose wrapped lines fit the cell.

use crate::metrics;

/// Starting font size for the descending search.
pub const DEFAULT_FONT_SIZE: u32 = 24;
/// Smallest font size tried; plans at this size may still overflow.
pub const MIN_FONT_SIZE: u32 = 10;
/// Horizontal padding subtracted from the cell width.
pub const CELL_TEXT_PADDING: i32 = 10;
/// Maximum number of wrapped lines per cell.
pub const MAX_LINES: usize = 3;

/// A word-wrapped rendering plan for one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFitPlan {
    pub font_size: u32,
    pub lines: Vec<String>,
}

impl TextFitPlan {
    /// Vertical space one line occupies, in pixels.
    pub fn line_height(&self) -> f32 {
        metrics::line_height(self.font_size)
    }

    /// Total height of the wrapped block, for centering within the cell.
    pub fn block_height(&self) -> f32 {
        self.line_height() * self.lines.len() as f32
    }
}

/// Fit a word into a cell of the given size.
///
/// Greedy word-wrap at the current font size, shrinking from
/// [`DEFAULT_FONT_SIZE`] toward [`MIN_FONT_SIZE`] until the wrapped lines
/// satisfy both the width and line-count constraints. Best effort: at the
/// floor size the plan is returned even if it still overflows, and a single
/// token is never split mid-token.
pub fn fit_word(word: &str, cell_size: i32) -> TextFitPlan {
    let max_width = (cell_size - CELL_TEXT_PADDING) as f32;
    let mut font_size = DEFAULT_FONT_SIZE;
    loop {
        let lines = wrap(word, font_size, max_width);
        if font_size == MIN_FONT_SIZE || fits(&lines, font_size, max_width) {
            return TextFitPlan { font_size, lines };
        }
        font_size -= 1;
    }
}

/// Greedy whitespace wrap: accumulate tokens while the line still fits,
/// otherwise close the line and start a new one with the pending token.
/// The final line is emitted unconditionally, so empty input yields one
/// empty line.
fn wrap(text: &str, font_size: u32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for token in text.split_whitespace() {
        let candidate = if current.is_empty() {
            token.to_string()
        } else {
            format!("{current} {token}")
        };
        if current.is_empty() || metrics::text_width(&candidate, font_size) <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::take(&mut current));
            current = token.to_string();
        }
    }
    lines.push(current);
    lines
}

fn fits(lines: &[String], font_size: u32, max_width: f32) -> bool {
    lines.len() <= MAX_LINES
        && lines
            .iter()
            .all(|line| metrics::text_width(line, font_size) <= max_width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::text_width;

    #[test]
    fn short_word_fits_at_default_size() {
        let plan = fit_word("Hello", 90);
        assert_eq!(plan.font_size, DEFAULT_FONT_SIZE);
        assert_eq!(plan.lines, vec!["Hello".to_string()]);
    }

    #[test]
    fn overlong_token_hits_floor_unsplit() {
        let plan = fit_word("Supercalifragilisticexpialidocious", 90);
        assert_eq!(plan.font_size, MIN_FONT_SIZE);
        assert_eq!(
            plan.lines,
            vec!["Supercalifragilisticexpialidocious".to_string()]
        );
        // Still overflowing at the floor; callers must tolerate this.
        assert!(text_width(&plan.lines[0], plan.font_size) > 80.0);
    }

    #[test]
    fn empty_input_yields_one_empty_line() {
        let plan = fit_word("", 90);
        assert_eq!(plan.font_size, DEFAULT_FONT_SIZE);
        assert_eq!(plan.lines, vec![String::new()]);
    }

    #[test]
    fn whitespace_only_input_yields_one_empty_line() {
        let plan = fit_word("   ", 90);
        assert_eq!(plan.lines, vec![String::new()]);
    }

    #[test]
    fn multi_word_phrase_wraps() {
        let plan = fit_word("red fox jumps", 90);
        assert!(plan.lines.len() > 1);
        let rejoined = plan.lines.join(" ");
        assert_eq!(rejoined, "red fox jumps");
    }

    #[test]
    fn width_constraint_holds_above_the_floor() {
        for word in ["cat", "bingo night", "seven silver spoons", "abcdefghij"] {
            for cell in [60, 90, 140] {
                let plan = fit_word(word, cell);
                if plan.font_size > MIN_FONT_SIZE {
                    let max = (cell - CELL_TEXT_PADDING) as f32;
                    for line in &plan.lines {
                        assert!(
                            text_width(line, plan.font_size) <= max,
                            "{word:?} in {cell}: line {line:?} too wide at {}",
                            plan.font_size
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn line_count_constraint_holds_above_the_floor() {
        let plan = fit_word("one two three four five six seven", 140);
        if plan.font_size > MIN_FONT_SIZE {
            assert!(plan.lines.len() <= MAX_LINES);
        }
    }

    #[test]
    fn shrinking_prefers_the_largest_satisfying_size() {
        let plan = fit_word("moderate phrase", 90);
        if plan.font_size > MIN_FONT_SIZE && plan.font_size < DEFAULT_FONT_SIZE {
            // One size up must violate a constraint, otherwise it would
            // have been chosen.
            let bigger = wrap_at("moderate phrase", plan.font_size + 1, 80.0);
            let max = 80.0;
            let violates = bigger.len() > MAX_LINES
                || bigger
                    .iter()
                    .any(|line| text_width(line, plan.font_size + 1) > max);
            assert!(violates);
        }
    }

    #[test]
    fn plan_block_height_tracks_line_count() {
        let plan = fit_word("red fox jumps", 90);
        let expected = plan.line_height() * plan.lines.len() as f32;
        assert!((plan.block_height() - expected).abs() < 1e-4);
    }

    #[test]
    fn fitting_is_deterministic() {
        assert_eq!(fit_word("lucky number", 94), fit_word("lucky number", 94));
    }

    fn wrap_at(text: &str, font_size: u32, max_width: f32) -> Vec<String> {
        super::wrap(text, font_size, max_width)
    }
}
