use ratatui::{
    Frame,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::app::App;

impl App {
    pub(in crate::ui) fn draw_help(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let undo_hint = match self.tracker.pending_undo() {
            Some(action) => format!("u: Undo {}", action),
            None => "u: Undo".to_string(),
        };

        let help_text = format!(
            "←/→ Period | {} | Ctrl+R Reset | Ctrl+S Save | Ctrl+N New | Ctrl+E Export | Ctrl+Q Quit",
            undo_hint
        );

        f.render_widget(
            Paragraph::new(help_text)
                .style(Style::default().fg(Color::Gray))
                .block(Block::default().borders(Borders::ALL).title("Keys")),
            area,
        );
    }
}
