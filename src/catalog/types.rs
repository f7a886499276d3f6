//! Payload types for the subjects endpoint.

use crate::model::Book;

/// `GET /subjects/{subject}.json`. Only `works` is read; the endpoint also
/// returns counts and facets, which are ignored.
#[derive(Debug, serde::Deserialize)]
pub struct SubjectResponse {
    pub works: Vec<Book>,
}

#[cfg(test)]
#[path = "../tests/catalog/types_tests.rs"]
mod tests;
