use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders};

pub(super) fn render_view_chrome(
    frame: &mut ratatui::Frame,
    title: &str,
    note: &str,
    area: Rect,
) -> Rect {
    let header = Line::from(vec![
        Span::styled(title.to_string(), Style::default().fg(Color::Yellow)),
        Span::raw("  "),
        Span::styled(note.to_string(), Style::default().fg(Color::Gray)),
    ]);

    let outer = Block::default().borders(Borders::ALL).title(header);
    let inner = outer.inner(area);
    frame.render_widget(outer, area);
    inner
}

/// Text field contents; the char under the cursor is drawn reversed when
/// the field has focus.
pub(super) fn input_spans(value: &str, cursor: Option<usize>) -> Vec<Span<'static>> {
    let Some(cursor) = cursor else {
        return vec![Span::raw(value.to_string())];
    };

    let before: String = value.chars().take(cursor).collect();
    let at = value.chars().nth(cursor);
    let after: String = value.chars().skip(cursor + 1).collect();
    let cursor_style = Style::default().add_modifier(Modifier::REVERSED);

    vec![
        Span::raw(before),
        Span::styled(at.unwrap_or(' ').to_string(), cursor_style),
        Span::raw(after),
    ]
}
