//! Pagination envelope used by list endpoints.

use serde::{Deserialize, Serialize};

/// `{count, next, previous, results}` as returned by paginated lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

/// A list body that may or may not be paginated.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListBody<T> {
    Paged(Page<T>),
    Bare(Vec<T>),
}

impl<T> ListBody<T> {
    pub fn into_items(self) -> Vec<T> {
        self.into_parts().0
    }

    /// Items plus the URL of the next page, if the body is paginated.
    pub fn into_parts(self) -> (Vec<T>, Option<String>) {
        match self {
            Self::Paged(page) => (page.results, page.next),
            Self::Bare(items) => (items, None),
        }
    }
}
