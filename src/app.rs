pub mod config;
pub mod error;
pub mod query;
pub mod session;
pub mod tmdb;
pub mod toast;

#[cfg(test)]
pub mod fixtures;

use std::sync::{Arc, mpsc};
use std::thread;

use chrono::Local;
use image::DynamicImage;
use ratatui::layout::{Position, Rect};
use ratatui_image::{picker::Picker, protocol::StatefulProtocol};
use throbber_widgets_tui::ThrobberState;
use tracing::{debug, info, warn};

use crate::app::error::FetchError;
use crate::app::query::{FetchTicket, RequestStatus, SearchQueries};
use crate::app::session::SearchSession;
use crate::app::tmdb::{MovieSearch, MovieSummary, SearchResultPage, poster_protocol};
use crate::app::toast::Toasts;

pub const EMPTY_RESULTS_MESSAGE: &str = "No movies found for your request.";

/// The search endpoint refuses pages beyond this, whatever `total_pages` says.
pub const MAX_PAGES: u32 = 500;

/// Results coming back from worker threads.
pub enum FetchMessage {
    Search {
        ticket: FetchTicket,
        result: Result<SearchResultPage, FetchError>,
    },
    Poster {
        movie_id: u64,
        result: Result<DynamicImage, FetchError>,
    },
}

pub struct PosterState {
    pub movie_id: u64,
    pub loading: bool,
    pub protocol: Option<StatefulProtocol>,
}

pub struct App {
    pub session: SearchSession,
    pub queries: SearchQueries,
    pub toasts: Toasts,
    pub searching: bool,
    pub search_term: String,
    pub grid_cursor: usize,
    /// Columns of the last rendered grid; drives up/down movement.
    pub grid_columns: usize,
    /// Screen rects of the last rendered tiles, for mouse hits.
    pub tile_hitboxes: Vec<(usize, Rect)>,
    pub modal_area: Option<Rect>,
    pub poster: Option<PosterState>,
    pub throbber_state: ThrobberState,
    pub receiver: mpsc::Receiver<FetchMessage>,
    sender: mpsc::Sender<FetchMessage>,
    client: Arc<dyn MovieSearch>,
    picker: Picker,
}

impl App {
    pub fn new(client: Arc<dyn MovieSearch>, picker: Picker) -> Self {
        let (sender, receiver) = mpsc::channel();

        Self {
            session: SearchSession::new(),
            queries: SearchQueries::new(),
            toasts: Toasts::new(),
            searching: true,
            search_term: String::new(),
            grid_cursor: 0,
            grid_columns: 1,
            tile_hitboxes: Vec::new(),
            modal_area: None,
            poster: None,
            throbber_state: ThrobberState::default(),
            receiver,
            sender,
            client,
            picker,
        }
    }

    pub fn status(&self) -> RequestStatus {
        self.queries.status()
    }

    pub fn results(&self) -> &[MovieSummary] {
        self.queries
            .displayed()
            .map(|page| page.results.as_slice())
            .unwrap_or_default()
    }

    /// Page count usable for navigation, capped at what the API serves.
    pub fn total_pages(&self) -> u32 {
        self.queries
            .displayed()
            .map_or(0, |page| page.total_pages.min(MAX_PAGES))
    }

    pub fn start_search_input(&mut self) {
        self.searching = true;
        self.search_term = self.session.query().to_string();
    }

    pub fn cancel_search_input(&mut self) {
        self.searching = false;
        self.search_term.clear();
    }

    /// Submits the draft. Blank drafts keep the input open and change nothing.
    pub fn submit_search(&mut self) -> bool {
        if !self.session.submit(&self.search_term) {
            debug!("ignoring blank search");
            return false;
        }

        info!(query = self.session.query(), "search submitted");
        self.searching = false;
        self.search_term.clear();
        self.grid_cursor = 0;
        self.poster = None;
        self.modal_area = None;
        self.sync_query();
        true
    }

    /// True while a results page is on screen, fresh or kept from the
    /// previous key while the next one loads.
    pub fn has_results_page(&self) -> bool {
        self.queries.displayed().is_some()
    }

    /// Moves to `page` against the page on screen. Ignored before the first
    /// search succeeds and while the error view is up.
    pub fn go_to_page(&mut self, page: u32) -> bool {
        if !self.has_results_page() {
            return false;
        }
        if !self.session.go_to_page(page, self.total_pages()) {
            return false;
        }

        debug!(page, "page changed");
        self.grid_cursor = 0;
        self.sync_query();
        true
    }

    pub fn next_page(&mut self) {
        let next = self.session.page() + 1;
        if self.has_results_page() && next > self.total_pages() {
            self.toasts.info("Already on the last page.");
            return;
        }
        self.go_to_page(next);
    }

    pub fn previous_page(&mut self) {
        if let Some(previous) = self.session.page().checked_sub(1) {
            self.go_to_page(previous);
        }
    }

    pub fn first_page(&mut self) {
        self.go_to_page(1);
    }

    pub fn last_page(&mut self) {
        let last = self.total_pages();
        self.go_to_page(last);
    }

    pub fn next_tile(&mut self) {
        let count = self.results().len();
        if count == 0 {
            return;
        }
        self.grid_cursor = (self.grid_cursor + 1) % count;
    }

    pub fn previous_tile(&mut self) {
        let count = self.results().len();
        if count == 0 {
            return;
        }
        if self.grid_cursor == 0 {
            self.grid_cursor = count - 1;
        } else {
            self.grid_cursor -= 1;
        }
    }

    pub fn tile_down(&mut self) {
        let below = self.grid_cursor + self.grid_columns.max(1);
        if below < self.results().len() {
            self.grid_cursor = below;
        }
    }

    pub fn tile_up(&mut self) {
        if let Some(above) = self.grid_cursor.checked_sub(self.grid_columns.max(1)) {
            self.grid_cursor = above;
        }
    }

    /// Opens the detail modal for the tile under the cursor.
    pub fn open_selected(&mut self) {
        if let Some(movie) = self.results().get(self.grid_cursor).cloned() {
            self.select_movie(movie);
        }
    }

    pub fn select_movie(&mut self, movie: MovieSummary) {
        debug!(movie_id = movie.id, title = %movie.title, "movie selected");
        self.poster = None;

        if let Some(path) = movie.poster_path.clone() {
            self.poster = Some(PosterState {
                movie_id: movie.id,
                loading: true,
                protocol: None,
            });
            self.dispatch_poster(movie.id, path);
        }

        self.session.select(movie);
    }

    pub fn close_modal(&mut self) {
        self.session.close();
        self.poster = None;
        self.modal_area = None;
    }

    /// Left click at a screen cell: outside an open modal closes it, on a tile
    /// opens that movie.
    pub fn click(&mut self, column: u16, row: u16) {
        let position = Position::new(column, row);

        if self.session.selected().is_some() {
            let inside = self
                .modal_area
                .is_some_and(|area| area.contains(position));
            if !inside {
                self.close_modal();
            }
            return;
        }

        let hit = self
            .tile_hitboxes
            .iter()
            .find(|(_, area)| area.contains(position))
            .map(|(index, _)| *index);
        if let Some(index) = hit {
            self.grid_cursor = index;
            self.open_selected();
        }
    }

    /// Issues a request for the current key if the cache can't answer it.
    fn sync_query(&mut self) {
        if let Some(ticket) = self.queries.focus(self.session.key()) {
            self.dispatch_search(ticket);
        }
    }

    fn dispatch_search(&self, ticket: FetchTicket) {
        debug!(
            query = %ticket.key.query,
            page = ticket.key.page,
            epoch = ticket.epoch,
            in_flight = self.queries.in_flight(),
            "dispatching search"
        );
        let client = Arc::clone(&self.client);
        let sender = self.sender.clone();

        thread::spawn(move || {
            let result = client.search_movies(&ticket.key.query, ticket.key.page);
            let _ = sender.send(FetchMessage::Search { ticket, result });
        });
    }

    fn dispatch_poster(&self, movie_id: u64, poster_path: String) {
        let client = Arc::clone(&self.client);
        let sender = self.sender.clone();

        thread::spawn(move || {
            let result = client.fetch_poster(&poster_path);
            let _ = sender.send(FetchMessage::Poster { movie_id, result });
        });
    }

    pub fn handle_message(&mut self, message: FetchMessage) {
        match message {
            FetchMessage::Search { ticket, result } => {
                let resolution = self.queries.resolve(ticket, result);
                debug!(?resolution, "search resolved");
            }
            FetchMessage::Poster { movie_id, result } => {
                let Some(poster) = self.poster.as_mut().filter(|p| p.movie_id == movie_id) else {
                    debug!(movie_id, "dropping poster for a closed modal");
                    return;
                };
                poster.loading = false;
                match result {
                    Ok(image) => poster.protocol = Some(poster_protocol(&self.picker, image)),
                    Err(err) => warn!(movie_id, error = %err, "poster download failed"),
                }
            }
        }
    }

    /// Applies every result that arrived since the last frame.
    pub fn drain_messages(&mut self) {
        while let Ok(message) = self.receiver.try_recv() {
            self.handle_message(message);
        }
    }

    /// Per-frame housekeeping: expire toasts, raise the empty-result notice,
    /// advance the spinner, and keep the cursor inside the grid.
    pub fn tick(&mut self) {
        self.toasts.prune(Local::now());

        if self.queries.take_empty_notice() {
            info!(query = self.session.query(), "search returned no results");
            self.toasts.error(EMPTY_RESULTS_MESSAGE);
        }

        let poster_loading = self.poster.as_ref().is_some_and(|p| p.loading);
        if self.status() == RequestStatus::Loading || poster_loading {
            self.throbber_state.calc_next();
        }

        let count = self.results().len();
        if self.grid_cursor >= count {
            self.grid_cursor = count.saturating_sub(1);
        }
    }
}
