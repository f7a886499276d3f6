use super::*;

impl App {
    pub(super) fn start_load(&mut self, client: CatalogClient) {
        self.loader = Some(spawn_load(client));
        self.load_state = LoadState::Pending;
    }

    pub(super) fn poll_loader(&mut self) {
        let Some(loader) = self.loader.as_mut() else {
            return;
        };
        let Some(res) = loader.poll() else {
            return;
        };
        self.loader = None;
        self.finish_load(res);
    }

    pub(super) fn finish_load(&mut self, res: Result<Vec<Book>>) {
        self.loaded_at = Some(now_ts());
        match res {
            Ok(books) => match self.store.apply_catalog(books, self.late_load) {
                LoadOutcome::Applied { count } => {
                    self.load_state = LoadState::Loaded { count };
                    // Applying clears any selection, so an open update form is gone.
                    if self.focus == Focus::EditForm {
                        self.focus = Focus::List;
                        self.form = FormInput::default();
                    }
                    self.clamp_cursor();
                    self.push_output(vec![format!(
                        "loaded {} books from {}",
                        count, self.subject
                    )]);
                }
                LoadOutcome::Discarded { count } => {
                    self.load_state = LoadState::Discarded { count };
                    self.push_output(vec![format!(
                        "catalog returned {} books after local edits; kept the local list",
                        count
                    )]);
                }
            },
            Err(err) => {
                error!("{:#}", err);
                self.load_state = LoadState::Failed;
                self.push_error(format!("{:#}", err));
            }
        }
    }

    pub(super) fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub(super) fn move_down(&mut self) {
        let max = self.store.books().len().saturating_sub(1);
        self.cursor = (self.cursor + 1).min(max);
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.store.books().len().saturating_sub(1));
    }

    pub(super) fn toggle_add_form(&mut self) {
        match self.store.toggle_add_form() {
            AddForm::Visible => {
                self.focus = Focus::AddForm;
                self.form.focus(Field::Title, &self.store.new_draft().title);
            }
            AddForm::Hidden => {
                self.focus = Focus::List;
                self.form = FormInput::default();
            }
        }
    }

    pub(super) fn edit_highlighted(&mut self) {
        let Some(key) = self.store.books().get(self.cursor).map(|b| b.key.clone()) else {
            return;
        };
        if self.store.select_for_edit(&key) {
            self.focus = Focus::EditForm;
            self.form.focus(Field::Title, &self.store.update_draft().title);
        }
    }

    /// Moves the open update form to the previous or next book. Unsubmitted
    /// changes to the current one are dropped.
    pub(super) fn edit_neighbor(&mut self, down: bool) {
        let before = self.cursor;
        if down {
            self.move_down();
        } else {
            self.move_up();
        }
        if self.cursor != before {
            self.edit_highlighted();
        }
    }

    pub(super) fn delete_highlighted(&mut self) {
        let Some(book) = self.store.books().get(self.cursor).cloned() else {
            return;
        };
        self.store.delete(&book.key);
        self.clamp_cursor();
        self.push_output(vec![format!("deleted {}", book.display_line())]);
    }
}
