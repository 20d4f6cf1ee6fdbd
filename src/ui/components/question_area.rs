use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Widget};

use crate::ui::line_input::LineInput;
use crate::ui::theme::Theme;

pub struct QuestionArea<'a> {
    question: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> QuestionArea<'a> {
    pub fn new(question: Option<&'a str>, theme: &'a Theme) -> Self {
        Self { question, theme }
    }
}

impl Widget for QuestionArea<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let text = match self.question {
            Some(q) => format!("Question: {q} = ?"),
            None => String::new(),
        };
        Paragraph::new(Line::from(Span::styled(
            text,
            Style::default()
                .fg(colors.question())
                .add_modifier(Modifier::BOLD),
        )))
        .block(Block::default().padding(Padding::uniform(1)))
        .render(area, buf);
    }
}

/// The answer prompt with a block cursor.
pub struct AnswerBox<'a> {
    input: &'a LineInput,
    theme: &'a Theme,
}

impl<'a> AnswerBox<'a> {
    pub fn new(input: &'a LineInput, theme: &'a Theme) -> Self {
        Self { input, theme }
    }
}

impl Widget for AnswerBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let cursor_style = Style::default().fg(colors.bg()).bg(colors.fg());

        let mut spans = vec![Span::styled("> ", Style::default().fg(colors.accent()))];
        if self.input.value().is_empty() {
            spans.push(Span::styled(" ", cursor_style));
            spans.push(Span::styled(
                self.input.placeholder.clone(),
                Style::default().fg(colors.dim()),
            ));
        } else {
            let (before, at, after) = self.input.render_parts();
            spans.push(Span::styled(before.to_string(), Style::default().fg(colors.fg())));
            spans.push(Span::styled(
                at.map(String::from).unwrap_or_else(|| " ".to_string()),
                cursor_style,
            ));
            spans.push(Span::styled(after.to_string(), Style::default().fg(colors.fg())));
        }

        let block = Block::bordered().border_style(Style::default().fg(colors.border()));
        Paragraph::new(Line::from(spans)).block(block).render(area, buf);
    }
}
