use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Focus {
    List,
    AddForm,
    EditForm,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum LoadState {
    Idle,
    Pending,
    Loaded { count: usize },
    Discarded { count: usize },
    Failed,
}

impl LoadState {
    pub(super) fn label(self) -> String {
        match self {
            LoadState::Idle => "not loaded".to_string(),
            LoadState::Pending => "loading...".to_string(),
            LoadState::Loaded { count } => format!("loaded {}", count),
            LoadState::Discarded { count } => format!("kept local edits ({} fetched)", count),
            LoadState::Failed => "load failed".to_string(),
        }
    }

    pub(super) fn color(self) -> Color {
        match self {
            LoadState::Idle | LoadState::Pending => Color::Gray,
            LoadState::Loaded { .. } => Color::Green,
            LoadState::Discarded { .. } => Color::Yellow,
            LoadState::Failed => Color::Red,
        }
    }
}

/// Which draft field has focus, plus the text being edited in it.
#[derive(Debug)]
pub(super) struct FormInput {
    pub(super) field: Field,
    pub(super) input: Input,
}

impl Default for FormInput {
    fn default() -> Self {
        Self {
            field: Field::Title,
            input: Input::default(),
        }
    }
}

impl FormInput {
    pub(super) fn focus(&mut self, field: Field, value: &str) {
        self.field = field;
        self.input.set(value.to_string());
    }
}
