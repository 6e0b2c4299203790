// crates/tui/src/view.rs
//! Display models projected from [`AppState`]
//!
//! Everything here is a pure function of state: all "N/A" fallbacks,
//! number formatting and list joining happen before any drawing.

use crate::pagination::{page_window, PageSlot};
use crate::state::{AppState, View};
use marquee_core::display;
use marquee_core::{MovieDetail, MovieId, MovieSummary, Trailer, TrendingEntry};

/// Caption shown when a movie has no trailer
pub const TRAILER_UNAVAILABLE: &str = "Trailer not available";

/// What the main list area shows
#[derive(Debug, Clone, PartialEq)]
pub enum ListBody {
    Loading,
    Error(String),
    /// Possibly empty
    Results(Vec<MovieCard>),
}

/// One result in the list
#[derive(Debug, Clone, PartialEq)]
pub struct MovieCard {
    pub id: MovieId,
    pub title: String,
    pub rating: String,
    pub language: String,
    pub year: String,
    pub poster: String,
}

impl MovieCard {
    pub fn from_summary(movie: &MovieSummary, image_base_url: &str) -> Self {
        Self {
            id: movie.id,
            title: display::text(Some(movie.title.as_str())),
            rating: display::rating(movie.vote_average),
            language: display::text(Some(movie.original_language.as_str())),
            year: display::release_year(movie.release_date.as_deref()),
            poster: display::poster_or_placeholder(image_base_url, movie.poster_path.as_deref()),
        }
    }

    /// "Title • 7.5 • en • 2010"
    pub fn line(&self) -> String {
        [
            self.title.as_str(),
            self.rating.as_str(),
            self.language.as_str(),
            self.year.as_str(),
        ]
        .join(display::LIST_SEPARATOR)
    }
}

/// One entry of the trending strip, numbered from 1
#[derive(Debug, Clone, PartialEq)]
pub struct TrendingCard {
    pub rank: usize,
    pub title: String,
    pub poster: String,
}

impl TrendingCard {
    fn new(rank: usize, entry: &TrendingEntry) -> Self {
        Self {
            rank,
            title: display::text(Some(entry.title.as_str())),
            poster: entry
                .poster_url
                .clone()
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| display::PLACEHOLDER_POSTER.to_string()),
        }
    }
}

/// Everything the home view draws
#[derive(Debug, Clone, PartialEq)]
pub struct HomeView {
    pub query: String,
    pub list: ListBody,
    /// Empty means the trending section is hidden
    pub trending: Vec<TrendingCard>,
    pub pages: Vec<PageSlot>,
    pub current_page: u32,
    pub total_pages: u32,
    pub selected: Option<usize>,
}

/// Builds the home view model
///
/// List precedence is loading, then error, then results.
pub fn home_view(state: &AppState) -> HomeView {
    let list = if state.is_loading {
        ListBody::Loading
    } else if let Some(message) = &state.error_message {
        ListBody::Error(message.clone())
    } else {
        ListBody::Results(
            state
                .movies
                .iter()
                .map(|movie| MovieCard::from_summary(movie, &state.image_base_url))
                .collect(),
        )
    };

    let selected = match &list {
        ListBody::Results(cards) if !cards.is_empty() => {
            Some(state.selected.min(cards.len() - 1))
        }
        _ => None,
    };

    HomeView {
        query: state.search.query().to_string(),
        list,
        trending: state
            .trending
            .iter()
            .enumerate()
            .map(|(i, entry)| TrendingCard::new(i + 1, entry))
            .collect(),
        pages: page_window(state.page.current_page(), state.page.total_pages()),
        current_page: state.page.current_page(),
        total_pages: state.page.total_pages(),
        selected,
    }
}

/// Everything the detail view draws
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub title: String,
    pub tagline: String,
    pub overview: String,
    pub rating: String,
    pub release_date: String,
    pub year: String,
    pub status: String,
    pub language: String,
    pub runtime: String,
    pub genres: String,
    pub countries: String,
    pub languages: String,
    pub companies: String,
    pub budget: String,
    pub revenue: String,
    pub poster: String,
    /// Embed URL, or the "not available" caption
    pub trailer: String,
    pub has_trailer: bool,
}

/// Builds the detail view model for a fetched record
pub fn detail_view(detail: &MovieDetail, image_base_url: &str) -> DetailView {
    DetailView {
        title: display::text(detail.title.as_deref()),
        tagline: display::text(detail.tagline.as_deref()),
        overview: display::text(detail.overview.as_deref()),
        rating: display::rating(detail.vote_average),
        release_date: display::text(detail.release_date.as_deref()),
        year: display::release_year(detail.release_date.as_deref()),
        status: display::text(detail.status.as_deref()),
        language: display::text(detail.original_language.as_deref()),
        runtime: display::runtime(detail.runtime),
        genres: display::genres(&detail.genres),
        countries: display::countries(&detail.production_countries),
        languages: display::languages(&detail.spoken_languages),
        companies: display::companies(&detail.production_companies),
        budget: display::money(detail.budget),
        revenue: display::money(detail.revenue),
        poster: display::poster_or_placeholder(image_base_url, detail.poster_path.as_deref()),
        trailer: trailer_caption(&detail.trailer),
        has_trailer: detail.trailer.is_available(),
    }
}

/// Embed URL for an available trailer, the fallback caption otherwise
pub fn trailer_caption(trailer: &Trailer) -> String {
    trailer
        .embed_url()
        .unwrap_or_else(|| TRAILER_UNAVAILABLE.to_string())
}

/// What the detail area shows
#[derive(Debug, Clone, PartialEq)]
pub enum DetailBody {
    Loading,
    Ready(Box<DetailView>),
}

/// Builds the detail area model, `None` when the home view is active
pub fn detail_body(state: &AppState) -> Option<DetailBody> {
    match state.view {
        View::Home => None,
        View::Detail(_) => Some(match (&state.detail, state.detail_loading) {
            (Some(detail), false) => {
                DetailBody::Ready(Box::new(detail_view(detail, &state.image_base_url)))
            }
            _ => DetailBody::Loading,
        }),
    }
}
