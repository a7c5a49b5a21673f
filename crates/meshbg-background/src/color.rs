//! Color utility functions for the particle field.

use ratatui::style::Color;

/// Composite `fg` at `alpha` over `bg`.
///
/// Terminals have no alpha channel, so translucent strokes are flattened
/// against the surface fill. Only RGB colors can be mixed; any other
/// combination falls back to `fg` when it is at least half opaque and to
/// `bg` otherwise.
pub fn blend(fg: Color, bg: Color, alpha: f64) -> Color {
    let alpha = alpha.clamp(0.0, 1.0);
    match (fg, bg) {
        (Color::Rgb(fr, fg_, fb), Color::Rgb(br, bg_, bb)) => Color::Rgb(
            mix_channel(fr, br, alpha),
            mix_channel(fg_, bg_, alpha),
            mix_channel(fb, bb, alpha),
        ),
        _ if alpha >= 0.5 => fg,
        _ => bg,
    }
}

fn mix_channel(fg: u8, bg: u8, alpha: f64) -> u8 {
    let mixed = bg as f64 + (fg as f64 - bg as f64) * alpha;
    mixed.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_extremes() {
        let fg = Color::Rgb(200, 74, 0);
        let bg = Color::Rgb(10, 10, 10);
        assert_eq!(blend(fg, bg, 1.0), fg);
        assert_eq!(blend(fg, bg, 0.0), bg);
        assert_eq!(blend(fg, bg, 7.0), fg);
    }

    #[test]
    fn test_blend_partial() {
        let fg = Color::Rgb(200, 74, 0);
        let bg = Color::Rgb(10, 10, 10);
        // 10 + 190 * 0.3 = 67, 10 + 64 * 0.3 = 29.2, 10 - 10 * 0.3 = 7
        assert_eq!(blend(fg, bg, 0.3), Color::Rgb(67, 29, 7));
    }

    #[test]
    fn test_blend_named_colors() {
        assert_eq!(blend(Color::Red, Color::Black, 0.8), Color::Red);
        assert_eq!(blend(Color::Red, Color::Black, 0.2), Color::Black);
    }
}
