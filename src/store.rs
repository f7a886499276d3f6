//! In-memory book list plus the form/selection state that drives edits.
//!
//! `BookStore` is the single owner of the collection, both draft buffers,
//! the add-form visibility and the selected book. Every edit goes through
//! the pure functions in [`collection`] and replaces the list wholesale.

use tracing::{debug, info};

use crate::model::{Book, Field, NewBookDraft, UpdateDraft};

pub mod collection;
mod catalog_sync;
mod keygen;

pub use self::catalog_sync::LoadOutcome;
pub use self::collection::{book_from_draft, insert_book, remove_book, update_book};
pub use self::keygen::KeyGenerator;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AddForm {
    #[default]
    Hidden,
    Visible,
}

#[derive(Debug, Default)]
pub struct BookStore {
    books: Vec<Book>,
    new_draft: NewBookDraft,
    update_draft: UpdateDraft,
    selection: Option<String>,
    add_form: AddForm,

    // Set by the first submitted insert/update/delete.
    edited: bool,

    keys: KeyGenerator,
}

impl BookStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books,
            ..Self::default()
        }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn new_draft(&self) -> &NewBookDraft {
        &self.new_draft
    }

    pub fn update_draft(&self) -> &UpdateDraft {
        &self.update_draft
    }

    pub fn selected_key(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    pub fn add_form(&self) -> AddForm {
        self.add_form
    }

    pub fn is_edited(&self) -> bool {
        self.edited
    }

    /// Hidden -> Visible; Visible -> Hidden, discarding the new-book draft.
    pub fn toggle_add_form(&mut self) -> AddForm {
        self.add_form = match self.add_form {
            AddForm::Hidden => AddForm::Visible,
            AddForm::Visible => {
                self.new_draft = NewBookDraft::default();
                AddForm::Hidden
            }
        };
        self.add_form
    }

    pub fn set_new_field(&mut self, field: Field, value: String) {
        self.new_draft.set(field, value);
    }

    pub fn set_update_field(&mut self, field: Field, value: String) {
        self.update_draft.set(field, value);
    }

    pub fn submit_new(&mut self) -> String {
        let key = {
            let books = &self.books;
            self.keys.next(|k| books.iter().any(|b| b.key == k))
        };
        let book = book_from_draft(key.clone(), &self.new_draft);
        self.books = insert_book(&self.books, book);
        self.new_draft = NewBookDraft::default();
        self.add_form = AddForm::Hidden;
        self.edited = true;
        info!(key = %key, count = self.books.len(), "book added");
        key
    }

    /// Opens the inline edit form for `key`, replacing any prior selection.
    pub fn select_for_edit(&mut self, key: &str) -> bool {
        let Some(book) = self.books.iter().find(|b| b.key == key) else {
            debug!(key, "select for edit: no such book");
            return false;
        };
        self.update_draft = UpdateDraft::from_book(book);
        self.selection = Some(book.key.clone());
        true
    }

    pub fn submit_update(&mut self) {
        let Some(key) = self.selection.take() else {
            return;
        };
        self.books = update_book(&self.books, &self.update_draft);
        self.update_draft = UpdateDraft::default();
        self.edited = true;
        info!(key = %key, "book updated");
    }

    pub fn cancel_edit(&mut self) {
        self.selection = None;
        self.update_draft = UpdateDraft::default();
    }

    pub fn delete(&mut self, key: &str) {
        let before = self.books.len();
        self.books = remove_book(&self.books, key);
        if self.selection.as_deref() == Some(key) {
            self.cancel_edit();
        }
        let removed = before - self.books.len();
        if removed > 0 {
            self.edited = true;
        }
        info!(key, removed, "book deleted");
    }
}

#[cfg(test)]
#[path = "tests/store/store_tests.rs"]
mod tests;
