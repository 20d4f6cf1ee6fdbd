use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Widget};

use crate::ui::theme::Theme;

/// Within-level progress toward the next level-up.
pub struct LevelBar<'a> {
    pub level: u32,
    pub ratio: f64,
    pub theme: &'a Theme,
}

impl<'a> LevelBar<'a> {
    pub fn new(level: u32, ratio: f64, theme: &'a Theme) -> Self {
        Self {
            level,
            ratio: ratio.clamp(0.0, 1.0),
            theme,
        }
    }
}

impl Widget for LevelBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(format!(" Level {} ", self.level))
            .border_style(Style::default().fg(colors.border()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let filled_width = (self.ratio * inner.width as f64).round() as u16;
        let label = format!("{:.0}%", self.ratio * 100.0);

        for x in inner.x..inner.x + inner.width {
            let style = if x < inner.x + filled_width {
                Style::default().fg(colors.bg()).bg(colors.bar_filled())
            } else {
                Style::default().fg(colors.fg()).bg(colors.bar_empty())
            };
            buf[(x, inner.y)].set_style(style);
        }

        let label_x = inner.x + (inner.width.saturating_sub(label.len() as u16)) / 2;
        buf.set_string(label_x, inner.y, &label, Style::default().fg(colors.fg()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_bar_shows_hundred_percent() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 22, 3);
        let mut buf = Buffer::empty(area);
        LevelBar::new(2, 1.0, &theme).render(area, &mut buf);

        let row: String = (0..area.width).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert!(row.contains("100%"));
        let filled = theme.colors.bar_filled();
        assert!((1..21).all(|x| buf[(x, 1)].bg == filled));
    }

    #[test]
    fn ratio_is_clamped() {
        let theme = Theme::default();
        assert_eq!(LevelBar::new(1, 3.0, &theme).ratio, 1.0);
        assert_eq!(LevelBar::new(1, -1.0, &theme).ratio, 0.0);
    }
}
