use super::*;

pub(super) fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_form(),
        KeyCode::Enter => app.submit_form(),

        KeyCode::Up
            if app.focus == Focus::EditForm && key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.edit_neighbor(false)
        }
        KeyCode::Down
            if app.focus == Focus::EditForm && key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.edit_neighbor(true)
        }

        // Two fields, so every direction toggles.
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => app.switch_form_field(),

        KeyCode::Left => app.form.input.move_left(),
        KeyCode::Right => app.form.input.move_right(),
        KeyCode::Home => app.form.input.move_home(),
        KeyCode::End => app.form.input.move_end(),

        KeyCode::Backspace => {
            app.form.input.backspace();
            app.sync_form_field();
        }
        KeyCode::Delete => {
            app.form.input.delete();
            app.sync_form_field();
        }

        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.form.input.clear();
            app.sync_form_field();
        }

        KeyCode::Char(c)
            if !key.modifiers.contains(KeyModifiers::CONTROL)
                && !key.modifiers.contains(KeyModifiers::ALT) =>
        {
            app.form.input.insert_char(c);
            app.sync_form_field();
        }

        _ => {}
    }
}

impl App {
    fn draft_value(&self, field: Field) -> &str {
        match self.focus {
            Focus::AddForm => self.store.new_draft().get(field),
            Focus::EditForm | Focus::List => self.store.update_draft().get(field),
        }
    }

    fn switch_form_field(&mut self) {
        let next = self.form.field.next();
        let value = self.draft_value(next).to_string();
        self.form.focus(next, &value);
    }

    /// Copies the edited text into the draft buffer for the focused field.
    fn sync_form_field(&mut self) {
        let value = self.form.input.buf.clone();
        match self.focus {
            Focus::AddForm => self.store.set_new_field(self.form.field, value),
            Focus::EditForm => self.store.set_update_field(self.form.field, value),
            Focus::List => {}
        }
    }

    fn submit_form(&mut self) {
        match self.focus {
            Focus::AddForm => {
                let key = self.store.submit_new();
                self.cursor = 0;
                let line = self.store.books().first().map(Book::display_line).unwrap_or_default();
                self.push_output(vec![format!("added {} [{}]", line, key)]);
            }
            Focus::EditForm => {
                let key = self.store.selected_key().map(str::to_string);
                self.store.submit_update();
                if let Some(book) = key.and_then(|k| self.store.books().iter().find(|b| b.key == k)) {
                    self.push_output(vec![format!("updated {}", book.display_line())]);
                }
            }
            Focus::List => return,
        }
        self.focus = Focus::List;
        self.form = FormInput::default();
    }

    fn cancel_form(&mut self) {
        match self.focus {
            Focus::AddForm => {
                if self.store.add_form() == AddForm::Visible {
                    self.store.toggle_add_form();
                }
            }
            Focus::EditForm => self.store.cancel_edit(),
            Focus::List => return,
        }
        self.focus = Focus::List;
        self.form = FormInput::default();
    }
}
