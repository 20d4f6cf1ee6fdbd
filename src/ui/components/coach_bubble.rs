use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget};

use crate::session::state::Feedback;
use crate::ui::gradient::{blend, rainbow_lines};
use crate::ui::mascot::Mascot;
use crate::ui::theme::Theme;

/// Last feedback, spoken by the current coach.
pub struct CoachBubble<'a> {
    feedback: Option<&'a Feedback>,
    coach: &'a str,
    mascot: &'a dyn Mascot,
    theme: &'a Theme,
}

impl<'a> CoachBubble<'a> {
    pub fn new(
        feedback: Option<&'a Feedback>,
        coach: &'a str,
        mascot: &'a dyn Mascot,
        theme: &'a Theme,
    ) -> Self {
        Self {
            feedback,
            coach,
            mascot,
            theme,
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let grad = &self.theme.gradients;
        match self.feedback {
            None => Vec::new(),
            Some(fb @ Feedback::Invalid { .. }) => vec![Line::styled(
                fb.message(),
                Style::default().fg(self.theme.colors.feedback()),
            )],
            Some(fb) => {
                let stops = if fb.is_right() { &grad.right } else { &grad.wrong };
                let palette = blend(&stops[0], &stops[1], grad.steps);
                let text = self.mascot.decorate(self.coach, &fb.message());
                rainbow_lines(&text, &palette)
            }
        }
    }
}

impl Widget for CoachBubble<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines()).render(area, buf);
    }
}
