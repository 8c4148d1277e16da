// ABOUTME: Static advance-width table for text measurement.
// ABOUTME: Widths are in em units; multiply by font size for pixels.

/// Per-character advance widths for the UI font, in em units.
/// Index = `(char as usize) - 32`, covering ASCII 0x20..=0x7E.
#[rustfmt::skip]
static ADVANCE_WIDTHS: [f32; 95] = [
    // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
    0.25, 0.30, 0.38, 0.56, 0.56, 0.89, 0.67, 0.22, 0.33, 0.33, 0.39, 0.59, 0.28, 0.33, 0.28, 0.31,
    // 0     1     2     3     4     5     6     7     8     9
    0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56,
    // :     ;     <     =     >     ?     @
    0.28, 0.28, 0.59, 0.59, 0.59, 0.50, 1.02,
    // A     B     C     D     E     F     G     H     I     J     K     L     M
    0.67, 0.61, 0.61, 0.67, 0.56, 0.50, 0.67, 0.67, 0.25, 0.39, 0.61, 0.53, 0.78,
    // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
    0.67, 0.72, 0.56, 0.72, 0.61, 0.50, 0.56, 0.67, 0.67, 0.89, 0.61, 0.61, 0.56,
    // [     \     ]     ^     _     `
    0.28, 0.31, 0.28, 0.47, 0.56, 0.34,
    // a     b     c     d     e     f     g     h     i     j     k     l     m
    0.56, 0.56, 0.50, 0.56, 0.56, 0.31, 0.56, 0.56, 0.22, 0.22, 0.53, 0.22, 0.83,
    // n     o     p     q     r     s     t     u     v     w     x     y     z
    0.56, 0.56, 0.56, 0.56, 0.33, 0.44, 0.39, 0.56, 0.50, 0.72, 0.50, 0.50, 0.44,
    // {     |     }     ~
    0.33, 0.26, 0.33, 0.59,
];

/// Fallback width for codepoints outside the table.
const AVERAGE_CHAR_WIDTH: f32 = 0.52;

/// Line height as a multiple of the font size.
const LINE_HEIGHT_EM: f32 = 1.2;

/// Width of a string in em units.
pub fn em_width(text: &str) -> f32 {
    text.chars()
        .map(|c| {
            let code = c as usize;
            if (32..=126).contains(&code) {
                ADVANCE_WIDTHS[code - 32]
            } else {
                AVERAGE_CHAR_WIDTH
            }
        })
        .sum()
}

/// Rendered width of a string at the given font size, in pixels.
pub fn text_width(text: &str, font_size: u32) -> f32 {
    em_width(text) * font_size as f32
}

/// Vertical space one line occupies at the given font size, in pixels.
pub fn line_height(font_size: u32) -> f32 {
    font_size as f32 * LINE_HEIGHT_EM
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_has_zero_width() {
        assert_eq!(em_width(""), 0.0);
    }

    #[test]
    fn space_width_matches_table() {
        assert!((em_width(" ") - 0.25).abs() < 1e-4);
    }

    #[test]
    fn ascii_widths_sum() {
        // "Rust" = R(0.61) + u(0.56) + s(0.44) + t(0.39) = 2.00
        assert!((em_width("Rust") - 2.00).abs() < 1e-3);
    }

    #[test]
    fn non_ascii_falls_back_to_average() {
        assert!((em_width("é") - AVERAGE_CHAR_WIDTH).abs() < 1e-4);
    }

    #[test]
    fn width_scales_linearly_with_font_size() {
        let at_12 = text_width("Bingo", 12);
        let at_24 = text_width("Bingo", 24);
        assert!((at_24 - at_12 * 2.0).abs() < 1e-3);
    }

    #[test]
    fn line_height_exceeds_font_size() {
        assert!(line_height(24) > 24.0);
        assert!((line_height(10) - 12.0).abs() < 1e-4);
    }
}
