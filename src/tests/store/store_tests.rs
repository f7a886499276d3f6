use super::*;
use crate::config::LateLoadPolicy;
use crate::model::Author;

fn book(key: &str, title: &str, author: &str) -> Book {
    Book {
        key: key.to_string(),
        title: title.to_string(),
        authors: vec![Author {
            name: author.to_string(),
        }],
    }
}

fn loaded() -> BookStore {
    BookStore::with_books(vec![
        book("A", "Dune", "Frank Herbert"),
        book("B", "Hyperion", "Dan Simmons"),
    ])
}

#[test]
fn add_form_toggles_without_touching_books() {
    let mut store = loaded();
    assert_eq!(store.add_form(), AddForm::Hidden);
    assert_eq!(store.toggle_add_form(), AddForm::Visible);
    assert_eq!(store.toggle_add_form(), AddForm::Hidden);
    assert_eq!(store.books().len(), 2);
    assert!(!store.is_edited());
}

#[test]
fn cancelling_add_form_clears_draft() {
    let mut store = BookStore::new();
    store.toggle_add_form();
    store.set_new_field(Field::Title, "Half".to_string());
    store.toggle_add_form();
    assert_eq!(store.new_draft(), &NewBookDraft::default());
}

#[test]
fn submit_new_prepends_resets_and_hides() {
    let mut store = BookStore::new();
    store.toggle_add_form();
    store.set_new_field(Field::Title, "Dune".to_string());
    store.set_new_field(Field::Author, "Herbert".to_string());

    let key = store.submit_new();

    assert_eq!(store.books().len(), 1);
    assert_eq!(store.books()[0].key, key);
    assert_eq!(store.books()[0].title, "Dune");
    assert_eq!(store.books()[0].first_author(), Some("Herbert"));
    assert_eq!(store.new_draft(), &NewBookDraft::default());
    assert_eq!(store.add_form(), AddForm::Hidden);
    assert!(store.is_edited());
}

#[test]
fn submit_new_never_reuses_a_key() {
    let mut store = loaded();
    let a = store.submit_new();
    let b = store.submit_new();
    assert_ne!(a, b);
    assert!(a != "A" && a != "B" && b != "A" && b != "B");
    assert_eq!(store.books().len(), 4);
}

#[test]
fn select_populates_update_draft() {
    let mut store = loaded();
    assert!(store.select_for_edit("B"));
    assert_eq!(store.selected_key(), Some("B"));
    assert_eq!(
        store.update_draft(),
        &UpdateDraft {
            key: "B".to_string(),
            title: "Hyperion".to_string(),
            author: "Dan Simmons".to_string(),
        }
    );
}

#[test]
fn selecting_another_book_replaces_selection() {
    let mut store = loaded();
    store.select_for_edit("A");
    store.set_update_field(Field::Title, "edited".to_string());
    store.select_for_edit("B");
    assert_eq!(store.selected_key(), Some("B"));
    assert_eq!(store.update_draft().title, "Hyperion");
}

#[test]
fn select_unknown_key_changes_nothing() {
    let mut store = loaded();
    store.select_for_edit("A");
    assert!(!store.select_for_edit("zzz"));
    assert_eq!(store.selected_key(), Some("A"));
}

#[test]
fn submit_update_applies_and_clears_selection() {
    let mut store = loaded();
    store.select_for_edit("A");
    store.set_update_field(Field::Title, "Z".to_string());
    store.set_update_field(Field::Author, "W".to_string());
    store.submit_update();

    assert_eq!(store.books()[0], book("A", "Z", "W"));
    assert_eq!(store.books()[1], book("B", "Hyperion", "Dan Simmons"));
    assert_eq!(store.selected_key(), None);
    assert_eq!(store.update_draft(), &UpdateDraft::default());
}

#[test]
fn select_then_submit_unchanged_is_identity() {
    let mut store = loaded();
    let before = store.books().to_vec();
    store.select_for_edit("B");
    store.submit_update();
    assert_eq!(store.books(), &before[..]);
}

#[test]
fn submit_update_without_selection_is_a_no_op() {
    let mut store = loaded();
    store.set_update_field(Field::Title, "stray".to_string());
    store.submit_update();
    assert_eq!(store.books()[0].title, "Dune");
    assert!(!store.is_edited());
}

#[test]
fn cancel_edit_discards_draft() {
    let mut store = loaded();
    store.select_for_edit("A");
    store.set_update_field(Field::Title, "nope".to_string());
    store.cancel_edit();
    assert_eq!(store.selected_key(), None);
    assert_eq!(store.books()[0].title, "Dune");
}

#[test]
fn deleting_selected_book_clears_selection() {
    let mut store = loaded();
    store.select_for_edit("A");
    store.delete("A");
    assert_eq!(store.books().len(), 1);
    assert_eq!(store.selected_key(), None);
    assert_eq!(store.update_draft(), &UpdateDraft::default());
}

#[test]
fn deleting_other_book_keeps_selection() {
    let mut store = loaded();
    store.select_for_edit("A");
    store.delete("B");
    assert_eq!(store.selected_key(), Some("A"));
}

#[test]
fn catalog_applies_before_any_edit() {
    let mut store = BookStore::new();
    let out = store.apply_catalog(vec![book("A", "X", "Y")], LateLoadPolicy::Discard);
    assert_eq!(out, LoadOutcome::Applied { count: 1 });
    assert_eq!(store.books().len(), 1);
}

#[test]
fn late_catalog_is_discarded_after_local_edit() {
    let mut store = BookStore::new();
    store.set_new_field(Field::Title, "Mine".to_string());
    store.submit_new();

    let out = store.apply_catalog(
        vec![book("A", "X", "Y"), book("B", "X", "Y")],
        LateLoadPolicy::Discard,
    );
    assert_eq!(out, LoadOutcome::Discarded { count: 2 });
    assert_eq!(store.books().len(), 1);
    assert_eq!(store.books()[0].title, "Mine");
}

#[test]
fn late_catalog_overwrites_when_configured() {
    let mut store = BookStore::new();
    store.submit_new();
    let key = store.books()[0].key.clone();
    store.select_for_edit(&key);

    let out = store.apply_catalog(vec![book("A", "X", "Y")], LateLoadPolicy::Overwrite);
    assert_eq!(out, LoadOutcome::Applied { count: 1 });
    assert_eq!(store.books(), &[book("A", "X", "Y")][..]);
    assert_eq!(store.selected_key(), None);
}

#[test]
fn deleting_missing_key_does_not_count_as_an_edit() {
    let mut store = BookStore::new();
    store.delete("missing");
    assert!(!store.is_edited());

    let out = store.apply_catalog(vec![book("A", "X", "Y")], LateLoadPolicy::Discard);
    assert_eq!(out, LoadOutcome::Applied { count: 1 });
    assert_eq!(store.books().len(), 1);
}
