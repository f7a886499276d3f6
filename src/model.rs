use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub key: String,
    pub title: String,

    #[serde(default)]
    pub authors: Vec<Author>,
}

impl Book {
    pub fn first_author(&self) -> Option<&str> {
        self.authors.first().map(|a| a.name.as_str())
    }

    /// `{title} by {first author}`, as shown in the list and by `list`.
    pub fn display_line(&self) -> String {
        match self.first_author() {
            Some(author) => format!("{} by {}", self.title, author),
            None => format!("{} (unknown author)", self.title),
        }
    }
}

/// Form field names shared by both draft buffers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Title,
    Author,
}

impl Field {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "title" => Some(Field::Title),
            "author" => Some(Field::Author),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::Author => "Author",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Field::Title => Field::Author,
            Field::Author => Field::Title,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewBookDraft {
    pub title: String,
    pub author: String,
}

impl NewBookDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Author => &self.author,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Title => self.title = value,
            Field::Author => self.author = value,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdateDraft {
    pub key: String,
    pub title: String,
    pub author: String,
}

impl UpdateDraft {
    pub fn from_book(book: &Book) -> Self {
        Self {
            key: book.key.clone(),
            title: book.title.clone(),
            author: book.first_author().unwrap_or_default().to_string(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Author => &self.author,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Title => self.title = value,
            Field::Author => self.author = value,
        }
    }
}
