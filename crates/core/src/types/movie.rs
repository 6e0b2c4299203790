//! Movie domain models

use serde::{Deserialize, Serialize};
use std::fmt;

/// Base URL used to embed a trailer hosted on YouTube
pub const YOUTUBE_EMBED_BASE: &str = "https://www.youtube.com/embed";

/// Catalog identifier of a movie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub u64);

impl MovieId {
    /// Creates a new movie identifier
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw numeric identifier
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for MovieId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(Self)
    }
}

/// One entry of a search or discover result page
///
/// Field names follow the catalog's wire format so a result can be
/// deserialized directly from a `results` array element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: MovieId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub original_language: String,
}

impl MovieSummary {
    /// Creates a summary with only the required fields set
    pub fn new(id: MovieId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            poster_path: None,
            vote_average: None,
            release_date: None,
            original_language: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionCompany {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionCountry {
    /// ISO 3166-1 country code, e.g. "US"
    pub iso_3166_1: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpokenLanguage {
    #[serde(default)]
    pub english_name: String,
    #[serde(default)]
    pub iso_639_1: String,
}

/// A video attached to a movie (trailer, teaser, featurette, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub key: String,
    #[serde(default)]
    pub site: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub name: String,
}

impl Video {
    /// Returns true for trailers hosted on YouTube
    pub fn is_youtube_trailer(&self) -> bool {
        self.kind == "Trailer" && self.site.eq_ignore_ascii_case("YouTube") && !self.key.is_empty()
    }
}

/// Trailer resolved for a movie
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Trailer {
    /// A real trailer exists under this video key
    Available { key: String },
    /// No trailer-typed video was found
    #[default]
    NotAvailable,
}

impl Trailer {
    /// Picks the first YouTube trailer out of a movie's videos
    pub fn from_videos<'a, I>(videos: I) -> Self
    where
        I: IntoIterator<Item = &'a Video>,
    {
        videos
            .into_iter()
            .find(|video| video.is_youtube_trailer())
            .map(|video| Trailer::Available {
                key: video.key.clone(),
            })
            .unwrap_or(Trailer::NotAvailable)
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Trailer::Available { .. })
    }

    /// Embeddable player URL, if a trailer exists
    pub fn embed_url(&self) -> Option<String> {
        match self {
            Trailer::Available { key } => Some(format!("{}/{}", YOUTUBE_EMBED_BASE, key)),
            Trailer::NotAvailable => None,
        }
    }
}

/// Full details of a single movie
///
/// `MovieDetail::default()` is the empty record returned when a fetch fails.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MovieDetail {
    pub id: MovieId,
    pub title: Option<String>,
    pub poster_path: Option<String>,
    pub vote_average: Option<f64>,
    pub release_date: Option<String>,
    pub original_language: Option<String>,
    pub status: Option<String>,
    pub genres: Vec<Genre>,
    pub overview: Option<String>,
    /// Runtime in minutes
    pub runtime: Option<u32>,
    pub budget: Option<u64>,
    pub revenue: Option<u64>,
    pub tagline: Option<String>,
    pub production_companies: Vec<ProductionCompany>,
    pub production_countries: Vec<ProductionCountry>,
    pub spoken_languages: Vec<SpokenLanguage>,
    pub trailer: Trailer,
}

impl MovieDetail {
    /// Returns true for the empty record produced by a failed fetch
    pub fn is_empty(&self) -> bool {
        self.id.0 == 0 && self.title.is_none()
    }

    /// Projects the detail record onto the summary shape
    pub fn summary(&self) -> MovieSummary {
        MovieSummary {
            id: self.id,
            title: self.title.clone().unwrap_or_default(),
            poster_path: self.poster_path.clone(),
            vote_average: self.vote_average,
            release_date: self.release_date.clone(),
            original_language: self.original_language.clone().unwrap_or_default(),
        }
    }
}
