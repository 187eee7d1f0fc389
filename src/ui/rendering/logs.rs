//! Log panel rendering.

use ratatui::{
    Frame,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::app::App;

impl App {
    pub(in crate::ui) fn draw_logs(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        // Inside the borders
        let height = area.height.saturating_sub(2) as usize;

        let lines: Vec<Line> = self.logs.tail(height).into_iter().map(Line::from).collect();

        f.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Log")),
            area,
        );
    }
}
