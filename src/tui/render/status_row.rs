use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the status row: a transient notice when one is active, key hints
/// otherwise.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(notice) = &app.notice {
        let paragraph = Paragraph::new(format!(" {notice}"))
            .style(Style::default().fg(app.theme.yellow).bg(app.theme.background));
        frame.render_widget(paragraph, area);
        return;
    }

    if !app.show_key_hints {
        return;
    }
    let hints = match app.mode {
        Mode::Navigate => " i add \u{00B7} Enter open \u{00B7} d delete \u{00B7} Esc back \u{00B7} q quit",
        Mode::Input => " Enter add \u{00B7} Esc done",
    };
    let paragraph =
        Paragraph::new(hints).style(Style::default().fg(app.theme.dim).bg(app.theme.background));
    frame.render_widget(paragraph, area);
}
