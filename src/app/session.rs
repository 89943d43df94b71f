//! Query, page and selection: the user-driven half of the app state.

use crate::app::query::SearchKey;
use crate::app::tmdb::MovieSummary;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchSession {
    query: String,
    page: u32,
    selected: Option<MovieSummary>,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
            selected: None,
        }
    }
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn selected(&self) -> Option<&MovieSummary> {
        self.selected.as_ref()
    }

    /// Starts a new search. Whitespace-only input is rejected and leaves the
    /// session untouched; anything else always lands on page 1.
    pub fn submit(&mut self, raw: &str) -> bool {
        let query = raw.trim();
        if query.is_empty() {
            return false;
        }

        self.query = query.to_string();
        self.page = 1;
        self.selected = None;
        true
    }

    /// Moves to `page` if there is an active search with a known page count
    /// that contains it.
    pub fn go_to_page(&mut self, page: u32, total_pages: u32) -> bool {
        if self.query.is_empty() || total_pages == 0 || page == 0 || page > total_pages {
            return false;
        }
        self.page = page;
        true
    }

    pub fn select(&mut self, movie: MovieSummary) {
        self.selected = Some(movie);
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    /// The request key for the current state; `None` while no search is active.
    pub fn key(&self) -> Option<SearchKey> {
        (!self.query.is_empty()).then(|| SearchKey::new(self.query.clone(), self.page))
    }
}
