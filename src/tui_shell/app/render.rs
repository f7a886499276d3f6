use super::*;

pub(super) fn draw(frame: &mut ratatui::Frame, app: &App) {
    let add_visible = app.store.add_form() == AddForm::Visible;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(if add_visible { 4 } else { 0 }),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "myBooks",
            Style::default().fg(Color::Black).bg(Color::White),
        ),
        Span::raw("  "),
        Span::raw(format!("subject={}", app.subject)),
        Span::raw("  "),
        Span::styled(
            app.load_state.label(),
            Style::default().fg(app.load_state.color()),
        ),
    ]))
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    if add_visible {
        draw_add_form(frame, app, chunks[1]);
    }

    let empty_note = match app.load_state {
        LoadState::Pending => "(loading catalog...)",
        LoadState::Failed => "(no books; catalog load failed)",
        _ => "(no books)",
    };
    BooksView {
        books: app.store.books(),
        cursor: app.cursor,
        selected_key: app.store.selected_key(),
        draft: app.store.update_draft(),
        edit_focus: (app.focus == Focus::EditForm).then_some((app.form.field, app.form.input.cursor)),
        note: app
            .loaded_at
            .as_deref()
            .map(|ts| format!("fetched {}", fmt_ts_ui(ts)))
            .unwrap_or_default(),
        empty_note,
    }
    .render(frame, chunks[2]);

    // Status / last result
    {
        let mut lines = Vec::new();
        if let Some(r) = &app.last_result {
            let style = match r.kind {
                EntryKind::Output => Style::default().fg(Color::White),
                EntryKind::Error => Style::default().fg(Color::Red),
            };
            for (i, l) in r.lines.iter().enumerate() {
                if i == 0 {
                    lines.push(Line::from(vec![
                        Span::styled(
                            format!("{} ", fmt_ts_ui(&r.ts)),
                            Style::default().fg(Color::Gray),
                        ),
                        Span::styled(l.as_str(), style),
                    ]));
                } else {
                    lines.push(Line::from(Span::styled(l.as_str(), style)));
                }
            }
        }
        if lines.is_empty() {
            lines.push(Line::from(""));
        }
        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .block(Block::default().borders(Borders::TOP).title("Last")),
            chunks[3],
        );
    }

    let hints = match app.focus {
        Focus::List => "a: add book  e/Enter: edit  d: delete  j/k: move  q: quit",
        Focus::AddForm => "Tab: next field  Enter: add book  Esc: cancel",
        Focus::EditForm => "Tab: next field  Ctrl-Up/Down: other book  Enter: update  Esc: cancel",
    };
    frame.render_widget(
        Paragraph::new(Span::styled(hints, Style::default().fg(Color::Gray))),
        chunks[4],
    );
}

fn draw_add_form(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect) {
    let draft = app.store.new_draft();
    let mut lines = Vec::new();
    for field in [Field::Title, Field::Author] {
        let cursor = (app.focus == Focus::AddForm && app.form.field == field)
            .then_some(app.form.input.cursor);
        let mut spans = vec![Span::styled(
            format!("{:<8}", format!("{}:", field.label())),
            Style::default().fg(Color::Cyan),
        )];
        spans.extend(input_spans(draft.get(field), cursor));
        lines.push(Line::from(spans));
    }
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Add Book")),
        area,
    );
}
