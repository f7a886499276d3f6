pub(super) mod books;

pub(in crate::tui_shell) use books::BooksView;
