use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget, Wrap};

use crate::ui::gradient::{blend, rainbow_lines};
use crate::ui::layout::centered_box;
use crate::ui::theme::Theme;

/// Rounded box with gradient text, used for the splash, level-up and
/// goodbye screens.
pub struct FunMessage<'a> {
    message: String,
    theme: &'a Theme,
}

impl<'a> FunMessage<'a> {
    pub fn new(message: impl Into<String>, theme: &'a Theme) -> Self {
        Self {
            message: message.into(),
            theme,
        }
    }
}

impl Widget for FunMessage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let grad = &self.theme.gradients;
        let palette = blend(&grad.splash[0], &grad.splash[1], grad.steps);

        let text_lines = self.message.lines().count() as u16;
        let boxed = centered_box(54, text_lines + 4, area);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(colors.border()))
            .padding(Padding::vertical(1));

        Paragraph::new(rainbow_lines(&self.message, &palette))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(boxed, buf);
    }
}
