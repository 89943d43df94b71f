//! Error types shared by the fetch client and the configuration loader.

use std::path::PathBuf;

use thiserror::Error;

/// A failed round trip to the movie API.
///
/// The UI never shows these details; they end up in the log and the grid is
/// replaced by a generic error view.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response (DNS, TLS, connection reset...).
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("API request failed with status: {0}")]
    Status(reqwest::StatusCode),

    /// The body was not the JSON we expected.
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The poster bytes could not be decoded as an image.
    #[error("failed to decode poster: {0}")]
    Image(#[from] image::ImageError),
}

/// Startup configuration problems. All of these abort before the terminal is
/// switched into raw mode.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no API token configured; set TMDB_TOKEN or add \"api_token\" to {}", .0.display())]
    MissingToken(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
