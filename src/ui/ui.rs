use crate::app::App;
use crate::app::query::RequestStatus;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use super::error::render_error;
use super::footer::render_footer;
use super::header::render_header;
use super::loading::render_loading;
use super::main_content::render_main_content;
use super::movie_detail::render_movie_detail;
use super::pagination::render_pagination;
use super::splash::render_splash;
use super::toast::render_toasts;

/// Main UI rendering function that orchestrates all UI components
pub fn ui(frame: &mut Frame, app: &mut App) {
    let status = app.status();
    // Stays up while a stale page is shown so the grid does not jump
    let show_pagination = app.has_results_page() && app.total_pages() > 1;

    let mut constraints = vec![Constraint::Length(3)]; // Search input
    if show_pagination {
        constraints.push(Constraint::Length(3)); // Page selector
    }
    constraints.push(Constraint::Min(1)); // Content
    constraints.push(Constraint::Length(3)); // Footer

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());

    let content = chunks[chunks.len() - 2];
    let footer = chunks[chunks.len() - 1];

    render_header(frame, app, chunks[0]);
    if show_pagination {
        render_pagination(frame, app, chunks[1]);
    }

    app.tile_hitboxes.clear();
    match status {
        RequestStatus::Idle => render_splash(frame, content),
        RequestStatus::Error => render_error(frame, content),
        RequestStatus::Loading if !app.queries.is_revalidating() => {
            render_loading(frame, app, content)
        }
        RequestStatus::Loading | RequestStatus::Success => {
            render_main_content(frame, app, content)
        }
    }

    render_footer(frame, app, footer);
    render_toasts(frame, app, content);

    if app.session.selected().is_some() {
        render_movie_detail(frame, app, frame.area());
    } else {
        app.modal_area = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::EMPTY_RESULTS_MESSAGE;
    use crate::app::fixtures::{FakeSearch, result_page};
    use ratatui::{Terminal, backend::TestBackend};
    use ratatui_image::picker::Picker;
    use reqwest::StatusCode;
    use std::sync::Arc;
    use std::time::Duration;

    fn app_with(fake: FakeSearch) -> App {
        App::new(Arc::new(fake), Picker::halfblocks())
    }

    fn settle(app: &mut App) {
        let message = app
            .receiver
            .recv_timeout(Duration::from_secs(5))
            .expect("worker reply");
        app.handle_message(message);
        app.tick();
    }

    fn search(app: &mut App, query: &str) {
        app.start_search_input();
        app.search_term = query.to_string();
        app.submit_search();
    }

    fn draw(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("terminal");
        terminal.draw(|frame| ui(frame, app)).expect("draw");
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn idle_screen_prompts_for_a_search() {
        let mut app = app_with(FakeSearch::new());
        app.cancel_search_input();
        let screen = draw(&mut app);
        assert!(screen.contains("Type a title and press Enter"));
        assert!(screen.contains("(/) search"));
    }

    #[test]
    fn single_page_result_shows_one_tile_without_pagination() {
        let mut app = app_with(
            FakeSearch::new().respond("inception", 1, Ok(result_page(1, &["Inception"], 1))),
        );
        search(&mut app, "inception");
        settle(&mut app);

        let screen = draw(&mut app);
        assert!(screen.contains("Inception"));
        assert!(!screen.contains("Page 1 of"));
        assert_eq!(app.tile_hitboxes.len(), 1);
    }

    #[test]
    fn multi_page_result_shows_pagination() {
        let mut app = app_with(
            FakeSearch::new().respond("star", 1, Ok(result_page(1, &["Star Wars", "Stardust"], 7))),
        );
        search(&mut app, "star");
        settle(&mut app);

        let screen = draw(&mut app);
        assert!(screen.contains("Page 1 of 7"));
        assert!(screen.contains("Stardust"));
        assert_eq!(app.tile_hitboxes.len(), 2);
    }

    #[test]
    fn empty_result_shows_empty_grid_and_toast() {
        let mut app = app_with(
            FakeSearch::new().respond("zzzzznotamovie", 1, Ok(result_page(1, &[], 0))),
        );
        search(&mut app, "zzzzznotamovie");
        settle(&mut app);

        let screen = draw(&mut app);
        assert!(screen.contains(EMPTY_RESULTS_MESSAGE));
        assert!(!screen.contains("Page 1 of"));
        assert!(app.tile_hitboxes.is_empty());
    }

    #[test]
    fn transport_fault_shows_only_the_error_view() {
        let mut app = app_with(
            FakeSearch::new().respond("heat", 1, Err(StatusCode::BAD_GATEWAY)),
        );
        search(&mut app, "heat");
        settle(&mut app);

        let screen = draw(&mut app);
        assert!(screen.contains("Something went wrong"));
        assert!(!screen.contains("Loading movies"));
        assert!(app.tile_hitboxes.is_empty());
    }

    #[test]
    fn loading_screen_while_first_request_is_pending() {
        let mut app = app_with(FakeSearch::new());
        search(&mut app, "pending");

        let screen = draw(&mut app);
        assert!(screen.contains("Loading movies"));
    }

    #[test]
    fn page_selector_stays_while_the_next_page_loads() {
        let mut app = app_with(
            FakeSearch::new()
                .respond("star", 1, Ok(result_page(1, &["Star Wars", "Stardust"], 7)))
                .respond("star", 2, Ok(result_page(2, &["Star Trek"], 7)))
                .respond("star", 3, Ok(result_page(3, &["Starman"], 7))),
        );
        search(&mut app, "star");
        settle(&mut app);
        assert!(draw(&mut app).contains("Page 1 of 7"));
        let first_tiles = app.tile_hitboxes.clone();

        assert!(app.go_to_page(2));
        let screen = draw(&mut app);
        assert_eq!(app.status(), RequestStatus::Loading);
        assert!(screen.contains("Page 2 of 7"));
        assert!(screen.contains("Stardust"), "stale grid stays");
        assert!(screen.contains("Loading page 2"));
        assert!(!screen.contains("Loading movies"));
        assert_eq!(app.tile_hitboxes, first_tiles, "grid keeps its place");

        assert!(app.go_to_page(3), "selector accepts another move");
        assert!(draw(&mut app).contains("Page 3 of 7"));

        settle(&mut app);
        settle(&mut app);
        let screen = draw(&mut app);
        assert!(screen.contains("Starman"));
        assert!(!screen.contains("Loading page"));
    }

    #[test]
    fn modal_records_its_area_for_backdrop_clicks() {
        let mut app = app_with(
            FakeSearch::new().respond("up", 1, Ok(result_page(1, &["Up"], 1))),
        );
        search(&mut app, "up");
        settle(&mut app);
        app.open_selected();

        let screen = draw(&mut app);
        assert!(screen.contains("Overview of Up."));
        let area = app.modal_area.expect("modal drawn");
        assert!(area.width < 100 && area.height < 30);

        app.close_modal();
        draw(&mut app);
        assert!(app.modal_area.is_none());
    }
}
