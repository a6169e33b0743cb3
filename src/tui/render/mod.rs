pub mod input_row;
pub mod list_view;
pub mod status_row;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use super::app::App;

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: breadcrumb | input row | item list | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // breadcrumb
            Constraint::Length(1), // input row
            Constraint::Min(1),    // item list
            Constraint::Length(1), // status row
        ])
        .split(area);

    render_breadcrumb(frame, app, chunks[0]);
    input_row::render_input_row(frame, app, chunks[1]);
    list_view::render_list_view(frame, app, chunks[2]);
    status_row::render_status_row(frame, app, chunks[3]);
}

/// Render the screen-stack path, active list last and brightest
fn render_breadcrumb(frame: &mut Frame, app: &App, area: Rect) {
    let last = app.stack.len() - 1;
    let mut spans: Vec<Span> = vec![Span::styled(" ", Style::default().bg(app.theme.background))];
    for (i, screen) in app.stack.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(
                " \u{25B8} ",
                Style::default().fg(app.theme.dim).bg(app.theme.background),
            ));
        }
        let style = if i == last {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.background)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.dim).bg(app.theme.background)
        };
        spans.push(Span::styled(screen.list.name.clone(), style));
    }
    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}
