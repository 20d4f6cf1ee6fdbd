use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::session::summary::SessionSummary;
use crate::ui::components::fun_message::FunMessage;
use crate::ui::theme::Theme;

/// Goodbye screen: gradient farewell on top, session numbers below.
pub struct SummaryPanel<'a> {
    summary: &'a SessionSummary,
    theme: &'a Theme,
}

impl<'a> SummaryPanel<'a> {
    pub fn new(summary: &'a SessionSummary, theme: &'a Theme) -> Self {
        Self { summary, theme }
    }
}

impl Widget for SummaryPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let s = self.summary;

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Min(4)])
            .split(area);

        FunMessage::new(format!("Thanks for playing, {}!", s.player), self.theme)
            .render(layout[0], buf);

        let acc_color = if s.accuracy >= 90.0 {
            colors.success()
        } else {
            colors.error()
        };
        let mut lines = vec![
            Line::from(vec![
                Span::styled("  Right: ", Style::default().fg(colors.fg())),
                Span::styled(
                    s.total_right.to_string(),
                    Style::default().fg(colors.success()).add_modifier(Modifier::BOLD),
                ),
                Span::styled("   Wrong: ", Style::default().fg(colors.fg())),
                Span::styled(s.total_wrong.to_string(), Style::default().fg(colors.error())),
                Span::styled("   Accuracy: ", Style::default().fg(colors.fg())),
                Span::styled(format!("{:.1}%", s.accuracy), Style::default().fg(acc_color)),
                Span::styled(format!("   Level {}", s.level), Style::default().fg(colors.accent())),
            ]),
            Line::from(""),
        ];
        for m in &s.most_missed {
            lines.push(Line::from(Span::styled(
                format!("  {} = {}  (missed {}x)", m.question, m.answer, m.wrong),
                Style::default().fg(colors.dim()),
            )));
        }

        Paragraph::new(lines)
            .block(Block::default())
            .render(layout[1], buf);
    }
}
