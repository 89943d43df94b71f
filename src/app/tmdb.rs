use image::DynamicImage;
use ratatui_image::{picker::Picker, protocol::StatefulProtocol};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::app::config::Config;
use crate::app::error::FetchError;

/// Poster width requested from the image CDN.
pub const POSTER_SIZE: &str = "w500";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub original_language: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u32,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub adult: bool,
}

impl MovieSummary {
    /// The year part of `release_date`, if the API sent one.
    pub fn year(&self) -> Option<&str> {
        self.release_date
            .as_deref()
            .and_then(|date| date.get(..4))
            .filter(|year| year.chars().all(|c| c.is_ascii_digit()))
    }
}

/// One page of `/search/movie` results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultPage {
    pub page: u32,
    pub results: Vec<MovieSummary>,
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

/// Everything the app needs from the movie API. Worker threads hold this
/// behind an `Arc`, tests swap in a fake.
pub trait MovieSearch: Send + Sync {
    fn search_movies(&self, query: &str, page: u32) -> Result<SearchResultPage, FetchError>;

    fn fetch_poster(&self, poster_path: &str) -> Result<DynamicImage, FetchError>;
}

pub struct TmdbClient {
    http: reqwest::blocking::Client,
    config: Config,
}

impl TmdbClient {
    pub fn new(config: Config) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            config,
        }
    }
}

impl MovieSearch for TmdbClient {
    fn search_movies(&self, query: &str, page: u32) -> Result<SearchResultPage, FetchError> {
        let url = search_url(&self.config.base_url, query, page, &self.config.language);
        debug!(%query, page, "GET /search/movie");

        let response = self
            .http
            .get(&url)
            .header(AUTHORIZATION, format!("Bearer {}", self.config.api_token))
            .header(ACCEPT, "application/json")
            .send()?;

        let status = response.status();
        let body = response.text()?;
        parse_search_response(status, &body)
    }

    fn fetch_poster(&self, poster_path: &str) -> Result<DynamicImage, FetchError> {
        let url = poster_url(&self.config.image_base_url, poster_path);
        let response = self.http.get(&url).send()?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let bytes = response.bytes()?;
        Ok(image::load_from_memory(&bytes)?)
    }
}

pub fn search_url(base_url: &str, query: &str, page: u32, language: &str) -> String {
    format!(
        "{}/search/movie?query={}&include_adult=false&language={}&page={}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(query),
        urlencoding::encode(language),
        page
    )
}

pub fn poster_url(image_base_url: &str, poster_path: &str) -> String {
    format!(
        "{}/{}/{}",
        image_base_url.trim_end_matches('/'),
        POSTER_SIZE,
        poster_path.trim_start_matches('/')
    )
}

/// Maps a raw HTTP response onto a result page. Anything outside 2xx is an
/// error even if the body happens to be valid JSON.
pub fn parse_search_response(
    status: reqwest::StatusCode,
    body: &str,
) -> Result<SearchResultPage, FetchError> {
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }
    Ok(serde_json::from_str(body)?)
}

/// Prepares a downloaded poster for rendering in the current terminal.
pub fn poster_protocol(picker: &Picker, image: DynamicImage) -> StatefulProtocol {
    picker.new_resize_protocol(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    const INCEPTION: &str = r#"{
        "page": 1,
        "results": [{
            "adult": false,
            "backdrop_path": "/s3TBrRGB1iav7gFOCNx3H31MoES.jpg",
            "genre_ids": [28, 878, 12],
            "id": 27205,
            "original_language": "en",
            "original_title": "Inception",
            "overview": "Cobb, a skilled thief who commits corporate espionage...",
            "popularity": 83.952,
            "poster_path": "/oYuLEt3zVCKq57qu2F8dT7NIa6f.jpg",
            "release_date": "2010-07-15",
            "title": "Inception",
            "video": false,
            "vote_average": 8.369,
            "vote_count": 36843
        }],
        "total_pages": 1,
        "total_results": 1
    }"#;

    #[test]
    fn search_url_encodes_query() {
        let url = search_url("https://api.themoviedb.org/3/", "the matrix & co", 3, "en-US");
        assert_eq!(
            url,
            "https://api.themoviedb.org/3/search/movie?query=the%20matrix%20%26%20co&include_adult=false&language=en-US&page=3"
        );
    }

    #[test]
    fn poster_url_joins_size_and_path() {
        assert_eq!(
            poster_url("https://image.tmdb.org/t/p", "/abc.jpg"),
            "https://image.tmdb.org/t/p/w500/abc.jpg"
        );
    }

    #[test]
    fn parses_search_page() {
        let page = parse_search_response(StatusCode::OK, INCEPTION).expect("valid page");
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.results.len(), 1);

        let movie = &page.results[0];
        assert_eq!(movie.id, 27205);
        assert_eq!(movie.title, "Inception");
        assert_eq!(movie.year(), Some("2010"));
        assert_eq!(movie.poster_path.as_deref(), Some("/oYuLEt3zVCKq57qu2F8dT7NIa6f.jpg"));
    }

    #[test]
    fn sparse_movie_records_still_decode() {
        let body = r#"{"page":1,"results":[{"id":7,"title":"Untitled","release_date":""}],"total_pages":1}"#;
        let page = parse_search_response(StatusCode::OK, body).expect("valid page");
        let movie = &page.results[0];
        assert_eq!(movie.overview, None);
        assert_eq!(movie.year(), None);
        assert_eq!(page.total_results, 0);
    }

    #[test]
    fn non_success_status_is_an_error() {
        let err = parse_search_response(StatusCode::UNAUTHORIZED, INCEPTION).unwrap_err();
        assert!(matches!(err, FetchError::Status(StatusCode::UNAUTHORIZED)));
    }

    #[test]
    fn malformed_body_is_an_error() {
        let err = parse_search_response(StatusCode::OK, "<html>oops</html>").unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));

        let err = parse_search_response(StatusCode::OK, r#"{"page":1}"#).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
