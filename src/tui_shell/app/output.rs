use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum EntryKind {
    Output,
    Error,
}

#[derive(Clone, Debug)]
pub(super) struct ScrollEntry {
    pub(super) ts: String,
    pub(super) kind: EntryKind,
    pub(super) lines: Vec<String>,
}

impl App {
    fn push_entry(&mut self, kind: EntryKind, lines: Vec<String>) {
        self.last_result = Some(ScrollEntry {
            ts: now_ts(),
            kind,
            lines,
        });
    }

    pub(super) fn push_output(&mut self, lines: Vec<String>) {
        self.push_entry(EntryKind::Output, lines);
    }

    pub(super) fn push_error(&mut self, msg: String) {
        self.push_entry(EntryKind::Error, vec![msg]);
    }
}
