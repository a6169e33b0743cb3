use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode::display_width;

/// Render the input line. In Input mode the terminal cursor is placed at
/// the edit position; in Navigate mode the line is dimmed.
pub fn render_input_row(frame: &mut Frame, app: &App, area: Rect) {
    let screen = app.screen();
    let editing = app.mode == Mode::Input;

    let prompt_style = if editing {
        Style::default()
            .fg(app.theme.highlight)
            .bg(app.theme.background)
    } else {
        Style::default().fg(app.theme.dim).bg(app.theme.background)
    };
    let text_style = if editing {
        Style::default()
            .fg(app.theme.text_bright)
            .bg(app.theme.background)
    } else {
        Style::default().fg(app.theme.dim).bg(app.theme.background)
    };

    let content = if screen.input.is_empty() && !editing {
        Span::styled(
            "press i to add an item".to_string(),
            Style::default().fg(app.theme.dim).bg(app.theme.background),
        )
    } else {
        Span::styled(screen.input.clone(), text_style)
    };

    let line = Line::from(vec![Span::styled(" > ", prompt_style), content]);
    let paragraph = Paragraph::new(line).style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);

    if editing {
        let col = 3 + display_width(&screen.input[..screen.input_cursor]);
        let x = area.x + (col as u16).min(area.width.saturating_sub(1));
        frame.set_cursor_position(Position::new(x, area.y));
    }
}
