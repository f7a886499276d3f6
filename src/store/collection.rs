//! Pure edits over the book list. Old slice in, new list out.

use crate::model::{Author, Book, NewBookDraft, UpdateDraft};

pub fn book_from_draft(key: String, draft: &NewBookDraft) -> Book {
    Book {
        key,
        title: draft.title.clone(),
        authors: vec![Author {
            name: draft.author.clone(),
        }],
    }
}

pub fn insert_book(books: &[Book], book: Book) -> Vec<Book> {
    let mut out = Vec::with_capacity(books.len() + 1);
    out.push(book);
    out.extend_from_slice(books);
    out
}

/// Rewrites title and first author of the book keyed by `draft.key`.
/// Co-authors past the first are kept.
pub fn update_book(books: &[Book], draft: &UpdateDraft) -> Vec<Book> {
    books
        .iter()
        .map(|b| {
            if b.key != draft.key {
                return b.clone();
            }
            let mut b = b.clone();
            b.title = draft.title.clone();
            match b.authors.first_mut() {
                Some(first) => first.name = draft.author.clone(),
                None if !draft.author.is_empty() => b.authors.push(Author {
                    name: draft.author.clone(),
                }),
                None => {}
            }
            b
        })
        .collect()
}

pub fn remove_book(books: &[Book], key: &str) -> Vec<Book> {
    books.iter().filter(|b| b.key != key).cloned().collect()
}

#[cfg(test)]
#[path = "../tests/store/collection_tests.rs"]
mod tests;
