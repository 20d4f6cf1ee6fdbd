use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::ui::theme::ThemeColors;

/// Linear RGB blend from `from` to `to` in `steps` stops.
pub fn blend(from: &str, to: &str, steps: usize) -> Vec<Color> {
    let (Color::Rgb(r0, g0, b0), Color::Rgb(r1, g1, b1)) =
        (ThemeColors::parse_color(from), ThemeColors::parse_color(to))
    else {
        return vec![Color::White];
    };
    if steps < 2 {
        return vec![Color::Rgb(r0, g0, b0)];
    }

    let lerp = |a: u8, b: u8, t: f64| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    (0..steps)
        .map(|i| {
            let t = i as f64 / (steps - 1) as f64;
            Color::Rgb(lerp(r0, r1, t), lerp(g0, g1, t), lerp(b0, b1, t))
        })
        .collect()
}

/// Color each character with the next stop, cycling through the palette.
/// The color index keeps counting across line breaks.
pub fn rainbow_lines(text: &str, palette: &[Color]) -> Vec<Line<'static>> {
    if palette.is_empty() {
        return text.lines().map(|l| Line::from(l.to_string())).collect();
    }
    let mut idx = 0;
    text.lines()
        .map(|line| {
            let spans: Vec<Span<'static>> = line
                .chars()
                .map(|ch| {
                    let style = Style::default().fg(palette[idx % palette.len()]);
                    idx += 1;
                    Span::styled(ch.to_string(), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_hits_both_endpoints() {
        let stops = blend("#000000", "#ff8000", 5);
        assert_eq!(stops.len(), 5);
        assert_eq!(stops[0], Color::Rgb(0, 0, 0));
        assert_eq!(stops[4], Color::Rgb(255, 128, 0));
    }

    #[test]
    fn rainbow_cycles_across_lines() {
        let palette = [Color::Red, Color::Blue];
        let lines = rainbow_lines("ab\nc", &palette);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].spans[0].style.fg, Some(Color::Red));
        assert_eq!(lines[0].spans[1].style.fg, Some(Color::Blue));
    }
}
