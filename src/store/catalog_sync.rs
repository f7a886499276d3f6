use tracing::{info, warn};

use crate::config::LateLoadPolicy;
use crate::model::{Book, UpdateDraft};

use super::BookStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied { count: usize },
    Discarded { count: usize },
}

impl BookStore {
    /// Replaces the list with a catalog result, unless the user already
    /// edited locally and `policy` says to keep those edits.
    pub fn apply_catalog(&mut self, books: Vec<Book>, policy: LateLoadPolicy) -> LoadOutcome {
        let count = books.len();
        if self.edited && policy == LateLoadPolicy::Discard {
            warn!(count, "catalog result arrived after local edits; discarded");
            return LoadOutcome::Discarded { count };
        }

        if self.edited {
            warn!(count, "catalog result overwrites local edits");
        }
        self.books = books;
        // The update draft may point at a book that is gone now.
        self.selection = None;
        self.update_draft = UpdateDraft::default();
        info!(count, "catalog applied");
        LoadOutcome::Applied { count }
    }
}
