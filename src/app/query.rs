//! Request bookkeeping for movie searches.
//!
//! [`SearchQueries`] binds the current `(query, page)` key to at most one
//! outstanding request. Results are cached per key and tagged with the epoch
//! of the request that produced them. The displayed page is always derived
//! from the current key:
//!
//! - a cached key is shown immediately and never refetched,
//! - while a new key loads, the previously shown page stays on screen,
//! - a response for a key the user already moved away from is cached but
//!   never displayed,
//! - a failure for the current key replaces the stale page with an error.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::app::error::FetchError;
use crate::app::tmdb::SearchResultPage;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchKey {
    pub query: String,
    pub page: u32,
}

impl SearchKey {
    pub fn new(query: String, page: u32) -> Self {
        Self { query, page }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStatus {
    Idle,
    Loading,
    Success,
    Error,
}

/// Handed to the worker that performs a request and returned with its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub key: SearchKey,
    pub epoch: u64,
}

/// What [`SearchQueries::resolve`] did with a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Stored and now on screen.
    Displayed,
    /// Stored for later; the user has moved on to another key.
    Cached,
    /// The current key failed.
    Failed,
    /// Superseded ticket or a failure nobody is looking at.
    Discarded,
}

#[derive(Debug, Clone)]
struct CachedPage {
    epoch: u64,
    page: Arc<SearchResultPage>,
}

#[derive(Debug, Default)]
pub struct SearchQueries {
    cache: HashMap<SearchKey, CachedPage>,
    in_flight: HashMap<SearchKey, u64>,
    current: Option<SearchKey>,
    shown: Option<CachedPage>,
    failed: Option<SearchKey>,
    last_epoch: u64,
    notified: HashSet<u64>,
}

impl SearchQueries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `key` the current key. Returns a ticket when a request has to go
    /// out; `None` means the key is idle, cached or already being fetched.
    pub fn focus(&mut self, key: Option<SearchKey>) -> Option<FetchTicket> {
        self.current = key.clone();

        let Some(key) = key else {
            self.shown = None;
            return None;
        };

        if let Some(cached) = self.cache.get(&key) {
            self.shown = Some(cached.clone());
            return None;
        }

        if self.in_flight.contains_key(&key) {
            return None;
        }

        if self.failed.as_ref() == Some(&key) {
            self.failed = None;
        }

        self.last_epoch += 1;
        self.in_flight.insert(key.clone(), self.last_epoch);
        Some(FetchTicket {
            key,
            epoch: self.last_epoch,
        })
    }

    pub fn resolve(
        &mut self,
        ticket: FetchTicket,
        outcome: Result<SearchResultPage, FetchError>,
    ) -> Resolution {
        if self.in_flight.get(&ticket.key) != Some(&ticket.epoch) {
            debug!(query = %ticket.key.query, page = ticket.key.page, epoch = ticket.epoch, "dropping superseded response");
            return Resolution::Discarded;
        }
        self.in_flight.remove(&ticket.key);

        let is_current = self.current.as_ref() == Some(&ticket.key);

        match outcome {
            Ok(page) => {
                let entry = CachedPage {
                    epoch: ticket.epoch,
                    page: Arc::new(page),
                };
                self.cache.insert(ticket.key, entry.clone());
                if is_current {
                    self.shown = Some(entry);
                    Resolution::Displayed
                } else {
                    Resolution::Cached
                }
            }
            Err(err) if is_current => {
                warn!(query = %ticket.key.query, page = ticket.key.page, error = %err, "movie search failed");
                self.failed = Some(ticket.key);
                self.shown = None;
                Resolution::Failed
            }
            Err(err) => {
                debug!(query = %ticket.key.query, page = ticket.key.page, error = %err, "ignoring failure for superseded search");
                Resolution::Discarded
            }
        }
    }

    pub fn status(&self) -> RequestStatus {
        match &self.current {
            None => RequestStatus::Idle,
            Some(key) if self.cache.contains_key(key) => RequestStatus::Success,
            Some(key) if self.failed.as_ref() == Some(key) => RequestStatus::Error,
            Some(_) => RequestStatus::Loading,
        }
    }

    /// The page to render: the current key's page, or the previous one while
    /// the current key is still loading.
    pub fn displayed(&self) -> Option<&SearchResultPage> {
        match self.status() {
            RequestStatus::Idle | RequestStatus::Error => None,
            RequestStatus::Loading | RequestStatus::Success => {
                self.shown.as_ref().map(|cached| cached.page.as_ref())
            }
        }
    }

    /// True while a stale page is on screen waiting for its replacement.
    pub fn is_revalidating(&self) -> bool {
        self.status() == RequestStatus::Loading && self.shown.is_some()
    }

    /// Fires once for every distinct successful response that came back empty.
    /// Calling it again for the same response, or after switching back to a
    /// cached empty page, returns `false`.
    pub fn take_empty_notice(&mut self) -> bool {
        if self.status() != RequestStatus::Success {
            return false;
        }
        match &self.shown {
            Some(cached) if cached.page.results.is_empty() => self.notified.insert(cached.epoch),
            _ => false,
        }
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }
}
