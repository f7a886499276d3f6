/// Single-line text buffer. `cursor` counts chars, not bytes.
#[derive(Debug, Default)]
pub(super) struct Input {
    pub(super) buf: String,
    pub(super) cursor: usize,
}

impl Input {
    fn byte_at(&self, cursor: usize) -> usize {
        self.buf
            .char_indices()
            .nth(cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.buf.len())
    }

    fn char_len(&self) -> usize {
        self.buf.chars().count()
    }

    pub(super) fn clear(&mut self) {
        self.buf.clear();
        self.cursor = 0;
    }

    pub(super) fn insert_char(&mut self, c: char) {
        let at = self.byte_at(self.cursor);
        self.buf.insert(at, c);
        self.cursor += 1;
    }

    pub(super) fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_at(self.cursor);
        self.buf.remove(at);
    }

    pub(super) fn delete(&mut self) {
        if self.cursor >= self.char_len() {
            return;
        }
        let at = self.byte_at(self.cursor);
        self.buf.remove(at);
    }

    pub(super) fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub(super) fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_len());
    }

    pub(super) fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub(super) fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    pub(super) fn set(&mut self, s: String) {
        self.buf = s;
        self.cursor = self.char_len();
    }
}
