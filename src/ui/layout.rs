use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct PlayLayout {
    pub header: Rect,
    pub question: Rect,
    pub input: Rect,
    pub progress: Rect,
    pub feedback: Rect,
    pub footer: Rect,
}

impl PlayLayout {
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(4),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            header: rows[0],
            question: rows[1],
            input: rows[2],
            progress: rows[3],
            feedback: rows[4],
            footer: rows[5],
        }
    }
}

/// Fixed-size box centered in `area`, shrunk to fit when the terminal is small.
pub fn centered_box(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let left = area.x.saturating_add((area.width - w) / 2);
    let top = area.y.saturating_add((area.height - h) / 2);
    Rect::new(left, top, w, h)
}
