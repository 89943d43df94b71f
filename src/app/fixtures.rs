//! Test-only builders and a scripted `MovieSearch`.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use image::DynamicImage;
use reqwest::StatusCode;

use crate::app::error::FetchError;
use crate::app::tmdb::{MovieSearch, MovieSummary, SearchResultPage};

pub fn movie(id: u64, title: &str) -> MovieSummary {
    MovieSummary {
        id,
        title: title.to_string(),
        original_title: Some(title.to_string()),
        original_language: Some("en".to_string()),
        overview: Some(format!("Overview of {title}.")),
        poster_path: None,
        backdrop_path: None,
        release_date: Some("2010-07-15".to_string()),
        vote_average: 7.5,
        vote_count: 1200,
        popularity: 42.0,
        adult: false,
    }
}

pub fn result_page(page: u32, titles: &[&str], total_pages: u32) -> SearchResultPage {
    SearchResultPage {
        page,
        results: titles
            .iter()
            .enumerate()
            .map(|(i, title)| movie(u64::from(page) * 100 + i as u64, title))
            .collect(),
        total_pages,
        total_results: titles.len() as u32,
    }
}

/// Answers searches from a script keyed by `(query, page)` and records every
/// call. Unscripted searches fail with a 500.
#[derive(Default)]
pub struct FakeSearch {
    script: Mutex<HashMap<(String, u32), VecDeque<Result<SearchResultPage, StatusCode>>>>,
    calls: Mutex<Vec<(String, u32)>>,
}

impl FakeSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, query: &str, page: u32, response: Result<SearchResultPage, StatusCode>) -> Self {
        self.script
            .lock()
            .expect("script lock")
            .entry((query.to_string(), page))
            .or_default()
            .push_back(response);
        self
    }

    pub fn calls(&self) -> Vec<(String, u32)> {
        self.calls.lock().expect("calls lock").clone()
    }
}

impl MovieSearch for FakeSearch {
    fn search_movies(&self, query: &str, page: u32) -> Result<SearchResultPage, FetchError> {
        self.calls
            .lock()
            .expect("calls lock")
            .push((query.to_string(), page));

        let scripted = self
            .script
            .lock()
            .expect("script lock")
            .get_mut(&(query.to_string(), page))
            .and_then(VecDeque::pop_front);

        match scripted {
            Some(Ok(page)) => Ok(page),
            Some(Err(status)) => Err(FetchError::Status(status)),
            None => Err(FetchError::Status(StatusCode::INTERNAL_SERVER_ERROR)),
        }
    }

    fn fetch_poster(&self, _poster_path: &str) -> Result<DynamicImage, FetchError> {
        Ok(DynamicImage::new_rgb8(4, 6))
    }
}
