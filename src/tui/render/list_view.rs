use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode::{display_width, truncate_to_width};

/// Render the active screen's items.
///
/// Rows are built from the screen's live item vec on every draw, so any
/// mutation is visible on the next frame with no cached copy in between.
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = app.theme.clone();
    let screen = app.screen_mut();

    if screen.list.is_empty() {
        let empty = Paragraph::new(" List is empty")
            .style(Style::default().fg(theme.dim).bg(theme.background));
        frame.render_widget(empty, area);
        return;
    }

    // Keep the cursor row visible
    let visible_height = area.height as usize;
    if visible_height > 0 {
        if screen.cursor < screen.scroll {
            screen.scroll = screen.cursor;
        } else if screen.cursor >= screen.scroll + visible_height {
            screen.scroll = screen.cursor + 1 - visible_height;
        }
    }

    let width = area.width as usize;
    let cursor = screen.cursor;
    let lines: Vec<Line> = screen
        .list
        .items
        .iter()
        .enumerate()
        .skip(screen.scroll)
        .take(visible_height)
        .map(|(i, item)| {
            let is_cursor = i == cursor;
            let bg = if is_cursor {
                theme.highlight
            } else {
                theme.background
            };
            let style = if is_cursor {
                Style::default()
                    .fg(theme.text_bright)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text).bg(bg)
            };
            let text = truncate_to_width(item, width.saturating_sub(2));
            let mut spans = vec![
                Span::styled(" ", Style::default().bg(bg)),
                Span::styled(text.clone(), style),
            ];
            if is_cursor {
                let used = 1 + display_width(&text);
                if used < width {
                    spans.push(Span::styled(
                        " ".repeat(width - used),
                        Style::default().bg(bg),
                    ));
                }
            }
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines).style(Style::default().bg(theme.background));
    frame.render_widget(paragraph, area);
}
