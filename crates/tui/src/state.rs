// crates/tui/src/state.rs
//! Application state and its transition function
//!
//! [`update`] is the only place state changes. It never performs I/O; work
//! that has to happen outside (timers, fetches) is returned as [`Command`]s
//! for the runtime to execute. Results come back in as [`Msg`]s.

use crate::search::SearchController;
use crate::theme::ThemeType;
use marquee_config::catalog_config::DEFAULT_IMAGE_BASE_URL;
use marquee_core::{
    MovieDetail, MovieId, MovieSummary, PageState, SearchPage, SearchRequest, TrendingEntry,
};

/// Message shown in place of the list when a search fails
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch movies. Please try again later.";

/// Available views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Search box, trending strip, result list and page bar
    #[default]
    Home,
    /// Full record of one movie
    Detail(MovieId),
}

/// Which home panel receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Search,
    List,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::Search => Focus::List,
            Focus::List => Focus::Search,
        }
    }
}

/// Inputs to [`update`]
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Load the trending list and the popular listing
    Init,
    Input(char),
    Backspace,
    ClearQuery,
    /// A debounce timer for this generation ran out
    DebounceElapsed(u64),
    SearchLoaded {
        request: SearchRequest,
        page: SearchPage,
    },
    TrendingLoaded(Vec<TrendingEntry>),
    SelectPage(u32),
    NextPage,
    PreviousPage,
    SelectNext,
    SelectPrevious,
    ToggleFocus,
    OpenSelected,
    OpenMovie(MovieId),
    DetailLoaded {
        id: MovieId,
        detail: MovieDetail,
    },
    Back,
    CycleTheme,
    Quit,
}

/// Side effects requested by [`update`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start a debounce timer carrying this generation
    ScheduleDebounce(u64),
    Search(SearchRequest),
    FetchDetail(MovieId),
    LoadTrending,
}

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current view
    pub view: View,
    pub focus: Focus,
    pub search: SearchController,
    pub page: PageState,
    pub movies: Vec<MovieSummary>,
    pub trending: Vec<TrendingEntry>,
    /// A search is in flight
    pub is_loading: bool,
    pub error_message: Option<String>,
    /// Index into `movies`
    pub selected: usize,
    /// Record shown by the detail view once loaded
    pub detail: Option<MovieDetail>,
    pub detail_loading: bool,
    /// The search whose response is awaited or shown
    pub active_request: Option<SearchRequest>,
    pub theme: ThemeType,
    /// Prefix for poster paths
    pub image_base_url: String,
    pub status_message: Option<String>,
    pub should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            view: View::Home,
            focus: Focus::Search,
            search: SearchController::new(),
            page: PageState::default(),
            movies: Vec::new(),
            trending: Vec::new(),
            is_loading: false,
            error_message: None,
            selected: 0,
            detail: None,
            detail_loading: false,
            active_request: None,
            theme: ThemeType::default(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            status_message: None,
            should_quit: false,
        }
    }
}

impl AppState {
    /// Creates a new app state
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(mut self, theme: ThemeType) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_image_base_url(mut self, image_base_url: impl Into<String>) -> Self {
        self.image_base_url = image_base_url.into();
        self
    }

    /// Sets status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Movie under the selection cursor
    pub fn selected_movie(&self) -> Option<&MovieSummary> {
        self.movies.get(self.selected)
    }

    /// Marks `request` as the expected one and asks for it
    ///
    /// A different query makes the page count unknown until it answers, so
    /// no page beyond the first can be selected in the meantime.
    fn start_search(&mut self, request: SearchRequest, commands: &mut Vec<Command>) {
        let new_listing = self
            .active_request
            .as_ref()
            .map_or(true, |active| active.query != request.query);
        if new_listing {
            self.page.set_total(0);
        }

        self.is_loading = true;
        self.error_message = None;
        self.page.set_current(request.page);
        self.active_request = Some(request.clone());
        commands.push(Command::Search(request));
    }

    /// Resets to page 1 and restarts the debounce timer after an edit
    fn after_edit(&mut self, generation: u64, commands: &mut Vec<Command>) {
        self.page.reset();
        self.status_message = None;
        commands.push(Command::ScheduleDebounce(generation));
    }

    fn select_page(&mut self, page: u32, commands: &mut Vec<Command>) {
        if page == 0 || page > self.page.total_pages() {
            return;
        }

        let request = SearchRequest::new(self.search.committed(), page);
        if self.active_request.as_ref() == Some(&request) && self.error_message.is_none() {
            return;
        }
        self.start_search(request, commands);
    }
}

/// Applies one message, returning the new state and the commands to run
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Command>) {
    let mut commands = Vec::new();

    match msg {
        Msg::Init => {
            commands.push(Command::LoadTrending);
            state.start_search(SearchRequest::new("", 1), &mut commands);
        }

        Msg::Input(c) if state.view == View::Home => {
            let generation = state.search.push_char(c);
            state.after_edit(generation, &mut commands);
        }
        Msg::Backspace if state.view == View::Home => {
            if let Some(generation) = state.search.pop_char() {
                state.after_edit(generation, &mut commands);
            }
        }
        Msg::ClearQuery if state.view == View::Home => {
            if let Some(generation) = state.search.clear() {
                state.after_edit(generation, &mut commands);
            }
        }

        Msg::DebounceElapsed(generation) => {
            if let Some(query) = state.search.on_timer(generation) {
                let request = SearchRequest::new(query, 1);
                let unchanged = state.active_request.as_ref() == Some(&request)
                    && state.error_message.is_none();
                if !unchanged {
                    state.start_search(request, &mut commands);
                }
            }
        }

        Msg::SearchLoaded { request, page } => {
            if state.active_request.as_ref() != Some(&request) {
                log::debug!(
                    "Discarding stale results for '{}' page {}",
                    request.query,
                    request.page
                );
            } else {
                state.is_loading = false;
                match page.error {
                    Some(failure) => {
                        log::debug!("Search failed: {}", failure);
                        state.error_message = Some(FETCH_ERROR_MESSAGE.to_string());
                    }
                    None => {
                        state.movies = page.results;
                        state.page.set_total(page.total_pages);
                        let total = state.page.total_pages();
                        if total > 0 && state.page.current_page() > total {
                            state.page.set_current(total);
                        }
                        state.selected = 0;
                    }
                }
            }
        }

        Msg::TrendingLoaded(entries) => {
            state.trending = entries;
        }

        Msg::SelectPage(page) if state.view == View::Home => {
            state.select_page(page, &mut commands);
        }
        Msg::NextPage if state.view == View::Home => {
            if let Some(page) = state.page.next() {
                state.select_page(page, &mut commands);
            }
        }
        Msg::PreviousPage if state.view == View::Home => {
            if let Some(page) = state.page.previous() {
                state.select_page(page, &mut commands);
            }
        }

        Msg::SelectNext => {
            if state.selected + 1 < state.movies.len() {
                state.selected += 1;
            }
        }
        Msg::SelectPrevious => {
            state.selected = state.selected.saturating_sub(1);
        }
        Msg::ToggleFocus => {
            state.focus = state.focus.toggle();
        }

        Msg::OpenSelected if state.view == View::Home => {
            if let Some(id) = state.selected_movie().map(|movie| movie.id) {
                return update(state, Msg::OpenMovie(id));
            }
        }
        Msg::OpenMovie(id) => {
            state.view = View::Detail(id);
            state.detail = None;
            state.detail_loading = true;
            commands.push(Command::FetchDetail(id));
        }
        Msg::DetailLoaded { id, detail } => {
            if state.view == View::Detail(id) {
                state.detail_loading = false;
                state.detail = Some(detail);
            } else {
                log::debug!("Discarding details for movie {} no longer shown", id);
            }
        }
        Msg::Back => {
            state.view = View::Home;
            state.detail = None;
            state.detail_loading = false;
        }

        Msg::CycleTheme => {
            state.theme = state.theme.next();
            let status = format!("Theme: {}", state.theme.name());
            state.set_status(status);
        }
        Msg::Quit => {
            state.should_quit = true;
        }

        // Home-only input while the detail view is open
        Msg::Input(_)
        | Msg::Backspace
        | Msg::ClearQuery
        | Msg::SelectPage(_)
        | Msg::NextPage
        | Msg::PreviousPage
        | Msg::OpenSelected => {}
    }

    (state, commands)
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::FetchFailure;

    fn movies(ids: &[u64]) -> Vec<MovieSummary> {
        ids.iter()
            .map(|id| MovieSummary::new(MovieId(*id), format!("Movie {}", id)))
            .collect()
    }

    fn loaded(request: SearchRequest, ids: &[u64], total: u32) -> Msg {
        Msg::SearchLoaded {
            request,
            page: SearchPage::new(movies(ids), total),
        }
    }

    fn type_text(mut state: AppState, text: &str) -> (AppState, Vec<Command>) {
        let mut commands = Vec::new();
        for c in text.chars() {
            let (next, mut cmds) = update(state, Msg::Input(c));
            state = next;
            commands.append(&mut cmds);
        }
        (state, commands)
    }

    #[test]
    fn test_init_loads_trending_and_popular() {
        let (state, commands) = update(AppState::new(), Msg::Init);
        assert!(state.is_loading);
        assert_eq!(
            commands,
            vec![
                Command::LoadTrending,
                Command::Search(SearchRequest::new("", 1))
            ]
        );
    }

    #[test]
    fn test_typing_resets_page_and_schedules_debounce() {
        let mut state = AppState::new();
        state.page = PageState::new(4, 20);

        let (state, commands) = type_text(state, "ab");
        assert_eq!(state.page.current_page(), 1);
        assert_eq!(
            commands,
            vec![Command::ScheduleDebounce(1), Command::ScheduleDebounce(2)]
        );
        assert!(!state.is_loading);
    }

    #[test]
    fn test_only_current_generation_fetches() {
        let (state, _) = type_text(AppState::new(), "dune");

        let (state, commands) = update(state, Msg::DebounceElapsed(2));
        assert!(commands.is_empty());

        let (state, commands) = update(state, Msg::DebounceElapsed(4));
        assert_eq!(commands, vec![Command::Search(SearchRequest::new("dune", 1))]);
        assert!(state.is_loading);
    }

    #[test]
    fn test_results_applied() {
        let (state, _) = update(AppState::new(), Msg::Init);
        let (state, _) = update(state, loaded(SearchRequest::new("", 1), &[1, 2, 3], 900));

        assert!(!state.is_loading);
        assert_eq!(state.movies.len(), 3);
        assert_eq!(state.page.total_pages(), 500);
        assert_eq!(state.error_message, None);
    }

    #[test]
    fn test_stale_response_discarded() {
        let (state, _) = type_text(AppState::new(), "a");
        let (state, _) = update(state, Msg::DebounceElapsed(1));
        let (state, _) = type_text(state, "b");
        let (state, _) = update(state, Msg::DebounceElapsed(2));

        // "ab" is now expected; a late answer for "a" must not land
        let (state, _) = update(state, loaded(SearchRequest::new("a", 1), &[1], 1));
        assert!(state.movies.is_empty());
        assert!(state.is_loading);

        let (state, _) = update(state, loaded(SearchRequest::new("ab", 1), &[2, 3], 1));
        assert_eq!(state.movies.len(), 2);
        assert!(!state.is_loading);
    }

    #[test]
    fn test_failure_shows_generic_message() {
        let (state, _) = update(AppState::new(), Msg::Init);
        let (state, _) = update(
            state,
            Msg::SearchLoaded {
                request: SearchRequest::new("", 1),
                page: SearchPage::failed(FetchFailure::HttpStatus(500)),
            },
        );
        assert_eq!(state.error_message.as_deref(), Some(FETCH_ERROR_MESSAGE));
        assert!(!state.is_loading);
    }

    #[test]
    fn test_page_selection_keeps_query() {
        let (state, _) = type_text(AppState::new(), "alien");
        let (state, _) = update(state, Msg::DebounceElapsed(5));
        let (state, _) = update(state, loaded(SearchRequest::new("alien", 1), &[1], 12));

        let (state, commands) = update(state, Msg::SelectPage(3));
        assert_eq!(state.search.query(), "alien");
        assert_eq!(state.page.current_page(), 3);
        assert_eq!(commands, vec![Command::Search(SearchRequest::new("alien", 3))]);
    }

    #[test]
    fn test_page_selection_out_of_range_ignored() {
        let (state, _) = update(AppState::new(), Msg::Init);
        let (state, _) = update(state, loaded(SearchRequest::new("", 1), &[1], 4));

        let (state, commands) = update(state, Msg::SelectPage(9));
        assert!(commands.is_empty());
        let (_, commands) = update(state, Msg::SelectPage(0));
        assert!(commands.is_empty());
    }

    #[test]
    fn test_paging_waits_for_new_query_total() {
        let (state, _) = update(AppState::new(), Msg::Init);
        let (state, _) = update(state, loaded(SearchRequest::new("", 1), &[1], 10));
        let (state, _) = type_text(state, "z");
        let (state, _) = update(state, Msg::DebounceElapsed(1));

        // The old listing had ten pages; the new one is not known yet
        let (state, commands) = update(state, Msg::NextPage);
        assert!(commands.is_empty());
        let (state, commands) = update(state, Msg::SelectPage(4));
        assert!(commands.is_empty());

        let (state, _) = update(state, loaded(SearchRequest::new("z", 1), &[2], 1));
        assert_eq!(state.page.current_page(), 1);
        assert_eq!(state.page.total_pages(), 1);
        assert_eq!(state.movies[0].id, MovieId(2));
    }

    #[test]
    fn test_current_page_clamped_to_new_total() {
        let mut state = AppState::new();
        state.page = PageState::new(3, 10);
        state.active_request = Some(SearchRequest::new("heat", 3));
        state.is_loading = true;

        let (state, _) = update(state, loaded(SearchRequest::new("heat", 3), &[5], 2));
        assert_eq!(state.page.current_page(), 2);
        assert_eq!(state.page.total_pages(), 2);
    }

    #[test]
    fn test_next_and_previous_page() {
        let (state, _) = update(AppState::new(), Msg::Init);
        let (state, _) = update(state, loaded(SearchRequest::new("", 1), &[1], 2));

        let (state, commands) = update(state, Msg::NextPage);
        assert_eq!(commands, vec![Command::Search(SearchRequest::new("", 2))]);
        let (state, _) = update(state, loaded(SearchRequest::new("", 2), &[2], 2));

        let (state, commands) = update(state, Msg::NextPage);
        assert!(commands.is_empty());
        let (_, commands) = update(state, Msg::PreviousPage);
        assert_eq!(commands, vec![Command::Search(SearchRequest::new("", 1))]);
    }

    #[test]
    fn test_open_and_close_detail() {
        let (state, _) = update(AppState::new(), Msg::Init);
        let (state, _) = update(state, loaded(SearchRequest::new("", 1), &[7, 8], 1));
        let (state, _) = update(state, Msg::SelectNext);

        let (state, commands) = update(state, Msg::OpenSelected);
        assert_eq!(state.view, View::Detail(MovieId(8)));
        assert_eq!(commands, vec![Command::FetchDetail(MovieId(8))]);

        let (state, _) = update(state, Msg::Back);
        assert_eq!(state.view, View::Home);
        assert_eq!(state.movies.len(), 2);
    }

    #[test]
    fn test_detail_for_other_movie_discarded() {
        let (state, _) = update(AppState::new(), Msg::OpenMovie(MovieId(1)));
        let (state, _) = update(state, Msg::OpenMovie(MovieId(2)));

        let detail = MovieDetail {
            id: MovieId(1),
            title: Some("Old".to_string()),
            ..MovieDetail::default()
        };
        let (state, _) = update(
            state,
            Msg::DetailLoaded {
                id: MovieId(1),
                detail,
            },
        );
        assert!(state.detail.is_none());
        assert!(state.detail_loading);
    }

    #[test]
    fn test_typing_ignored_in_detail_view() {
        let (state, _) = update(AppState::new(), Msg::OpenMovie(MovieId(1)));
        let (state, commands) = update(state, Msg::Input('x'));
        assert_eq!(state.search.query(), "");
        assert!(commands.is_empty());
    }

    #[test]
    fn test_selection_is_clamped() {
        let (state, _) = update(AppState::new(), Msg::Init);
        let (mut state, _) = update(state, loaded(SearchRequest::new("", 1), &[1, 2], 1));
        for _ in 0..5 {
            state = update(state, Msg::SelectNext).0;
        }
        assert_eq!(state.selected, 1);
        for _ in 0..5 {
            state = update(state, Msg::SelectPrevious).0;
        }
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_cycle_theme_and_quit() {
        let (state, _) = update(AppState::new(), Msg::CycleTheme);
        assert_eq!(state.theme, ThemeType::Light);
        assert_eq!(state.status_message.as_deref(), Some("Theme: Light"));

        let (state, _) = update(state, Msg::Quit);
        assert!(state.should_quit);
    }
}
