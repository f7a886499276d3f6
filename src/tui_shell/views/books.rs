use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{List, ListItem, ListState};

use crate::model::{Book, Field, UpdateDraft};

use super::super::{input_spans, render_view_chrome};

/// The book list, with the inline update form under the selected book.
#[derive(Debug)]
pub(in crate::tui_shell) struct BooksView<'a> {
    pub(in crate::tui_shell) books: &'a [Book],
    pub(in crate::tui_shell) cursor: usize,
    pub(in crate::tui_shell) selected_key: Option<&'a str>,
    pub(in crate::tui_shell) draft: &'a UpdateDraft,

    // Focused field and its text cursor while the update form has focus.
    pub(in crate::tui_shell) edit_focus: Option<(Field, usize)>,

    pub(in crate::tui_shell) note: String,
    pub(in crate::tui_shell) empty_note: &'a str,
}

impl BooksView<'_> {
    fn title(&self) -> String {
        format!("Books ({})", self.books.len())
    }

    fn edit_lines(&self) -> Vec<Line<'static>> {
        let label_style = Style::default().fg(Color::Cyan);
        let mut out = Vec::new();
        for field in [Field::Title, Field::Author] {
            let cursor = match self.edit_focus {
                Some((f, c)) if f == field => Some(c),
                _ => None,
            };
            let mut spans = vec![Span::styled(
                format!("    {:<7} ", format!("{}:", field.label())),
                label_style,
            )];
            spans.extend(input_spans(self.draft.get(field), cursor));
            out.push(Line::from(spans));
        }
        out.push(Line::from(Span::styled(
            "    Enter: update book  Esc: cancel",
            Style::default().fg(Color::Gray),
        )));
        out
    }

    pub(in crate::tui_shell) fn render(&self, frame: &mut ratatui::Frame, area: Rect) {
        let inner = render_view_chrome(frame, &self.title(), &self.note, area);

        let mut rows = Vec::new();
        for book in self.books {
            let mut lines = vec![Line::from(book.display_line())];
            if self.selected_key == Some(book.key.as_str()) {
                lines.extend(self.edit_lines());
            }
            rows.push(ListItem::new(Text::from(lines)));
        }

        let mut state = ListState::default();
        if self.books.is_empty() {
            rows.push(ListItem::new(self.empty_note.to_string()));
        } else {
            state.select(Some(self.cursor.min(self.books.len() - 1)));
        }

        let list = List::new(rows)
            .highlight_style(Style::default().add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");
        frame.render_stateful_widget(list, inner, &mut state);
    }
}
