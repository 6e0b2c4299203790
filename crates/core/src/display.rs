//! Display formatting with a uniform "N/A" fallback
//!
//! Every optional field shown to the user goes through [`format_or_default`]
//! so the rules for what counts as "missing" live in one place: `None`,
//! blank strings, zero numbers and empty lists all render as [`NOT_AVAILABLE`].

use crate::types::{Genre, MovieSummary, ProductionCompany, ProductionCountry, SpokenLanguage};

/// Placeholder shown for any absent value
pub const NOT_AVAILABLE: &str = "N/A";

/// Separator used when joining list-valued fields
pub const LIST_SEPARATOR: &str = " • ";

/// Local image shown when a movie has no poster
pub const PLACEHOLDER_POSTER: &str = "no-movie.png";

/// Whether a value carries something worth displaying
pub trait Presence {
    fn is_present(&self) -> bool;
}

impl Presence for str {
    fn is_present(&self) -> bool {
        !self.trim().is_empty()
    }
}

impl Presence for String {
    fn is_present(&self) -> bool {
        self.as_str().is_present()
    }
}

impl<T: Presence + ?Sized> Presence for &T {
    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

impl<T> Presence for [T] {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Presence for Vec<T> {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

macro_rules! nonzero_presence {
    ($($ty:ty),*) => {
        $(impl Presence for $ty {
            fn is_present(&self) -> bool {
                *self != 0
            }
        })*
    };
}

nonzero_presence!(u32, u64, i64);

impl Presence for f64 {
    fn is_present(&self) -> bool {
        self.is_finite() && *self != 0.0
    }
}

/// Formats a value with `render`, or returns "N/A" when it is absent
pub fn format_or_default<T, F>(value: Option<T>, render: F) -> String
where
    T: Presence,
    F: FnOnce(T) -> String,
{
    match value {
        Some(v) if v.is_present() => render(v),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Plain text field
pub fn text(value: Option<&str>) -> String {
    format_or_default(value, |v| v.trim().to_string())
}

/// Average vote with one decimal, e.g. "7.3"
pub fn rating(vote_average: Option<f64>) -> String {
    format_or_default(vote_average, |v| format!("{:.1}", v))
}

/// Year component of a `YYYY-MM-DD` release date
pub fn release_year(release_date: Option<&str>) -> String {
    format_or_default(release_date, |date| {
        date.split('-').next().unwrap_or(date).to_string()
    })
}

/// Runtime in minutes as "2h 28m"
pub fn runtime(minutes: Option<u32>) -> String {
    format_or_default(minutes, |m| format!("{}h {}m", m / 60, m % 60))
}

/// Money amount as "$160,000,000"
pub fn money(amount: Option<u64>) -> String {
    format_or_default(amount, |a| format!("${}", group_thousands(a)))
}

/// Joins list entries with " • ", skipping blank entries
pub fn joined<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parts: Vec<String> = items
        .into_iter()
        .filter(|s| s.as_ref().is_present())
        .map(|s| s.as_ref().trim().to_string())
        .collect();
    format_or_default(Some(parts), |p| p.join(LIST_SEPARATOR))
}

pub fn genres(genres: &[Genre]) -> String {
    joined(genres.iter().map(|g| g.name.as_deref().unwrap_or(NOT_AVAILABLE)))
}

/// Production countries by ISO 3166-1 code
pub fn countries(countries: &[ProductionCountry]) -> String {
    joined(countries.iter().map(|c| c.iso_3166_1.as_str()))
}

/// Spoken languages by English name
pub fn languages(languages: &[SpokenLanguage]) -> String {
    joined(languages.iter().map(|l| l.english_name.as_str()))
}

pub fn companies(companies: &[ProductionCompany]) -> String {
    joined(companies.iter().map(|c| c.name.as_str()))
}

/// Full poster URL for a catalog poster path, or the local placeholder
pub fn poster_or_placeholder(image_base_url: &str, poster_path: Option<&str>) -> String {
    match poster_path {
        Some(path) if path.is_present() => poster_url(image_base_url, path),
        _ => PLACEHOLDER_POSTER.to_string(),
    }
}

/// Joins an image base URL and a poster path without doubling slashes
pub fn poster_url(image_base_url: &str, poster_path: &str) -> String {
    format!(
        "{}/{}",
        image_base_url.trim_end_matches('/'),
        poster_path.trim_start_matches('/')
    )
}

/// One-line card text: "Title • 7.5 • en • 2010"
pub fn summary_line(movie: &MovieSummary) -> String {
    [
        text(Some(movie.title.as_str())),
        rating(movie.vote_average),
        text(Some(movie.original_language.as_str())),
        release_year(movie.release_date.as_deref()),
    ]
    .join(LIST_SEPARATOR)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
