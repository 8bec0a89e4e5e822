//! Film record variants.
//!
//! Every variant carries a title and implements [`FilmRecord`], which
//! covers rendering and condition evaluation. [`Film`] is the closed set of
//! variants stored by a [`Catalog`](crate::Catalog).

use crate::condition::{Condition, Field};
use crate::error::{ConditionError, FilmError};
use crate::kind::{AnimationType, FilmKind};

/// Behavior shared by all film records.
pub trait FilmRecord {
    fn title(&self) -> &str;

    fn kind(&self) -> FilmKind;

    /// One-line description, e.g. `Game film: Matrix, director: Wachowski`.
    fn describe(&self) -> String;

    /// Evaluate a parsed condition against this record.
    ///
    /// Returns `Ok(false)` when the field or operator does not apply to
    /// this variant. Returns an error only when the value cannot be
    /// interpreted for a field this variant does have (a non-numeric
    /// episode count, an unknown animation type).
    fn evaluate(&self, condition: &Condition) -> Result<bool, ConditionError>;

    /// Evaluate a condition string. Anything that cannot be parsed or
    /// interpreted is simply not a match.
    fn matches_condition(&self, condition: &str) -> bool {
        match Condition::parse(condition) {
            Ok(condition) => self.evaluate(&condition).unwrap_or(false),
            Err(e) => {
                log::debug!("Condition '{}' does not apply: {}", condition, e);
                false
            }
        }
    }
}

fn require_text(value: String, err: FilmError) -> Result<String, FilmError> {
    if value.trim().is_empty() {
        Err(err)
    } else {
        Ok(value)
    }
}

// ── Game ────────────────────────────────────────────────────────────────────

/// A film adapted from (or about) a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameFilm {
    title: String,
    director: String,
}

impl GameFilm {
    pub fn new(title: impl Into<String>, director: impl Into<String>) -> Result<Self, FilmError> {
        Ok(Self {
            title: require_text(title.into(), FilmError::EmptyTitle)?,
            director: require_text(director.into(), FilmError::EmptyDirector)?,
        })
    }

    pub fn director(&self) -> &str {
        &self.director
    }
}

impl FilmRecord for GameFilm {
    fn title(&self) -> &str {
        &self.title
    }

    fn kind(&self) -> FilmKind {
        FilmKind::Game
    }

    fn describe(&self) -> String {
        format!(
            "{} film: {}, director: {}",
            self.kind().display_name(),
            self.title,
            self.director
        )
    }

    fn evaluate(&self, condition: &Condition) -> Result<bool, ConditionError> {
        Ok(match condition.field {
            Field::Title => condition.matches_text(&self.title),
            Field::Director => condition.matches_text(&self.director),
            Field::Type => condition.matches_kind(self.kind()),
            Field::Episodes | Field::AnimationType => false,
        })
    }
}

// ── Cartoon ─────────────────────────────────────────────────────────────────

/// An animated film.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartoonFilm {
    title: String,
    animation: AnimationType,
}

impl CartoonFilm {
    pub fn new(title: impl Into<String>, animation: AnimationType) -> Result<Self, FilmError> {
        Ok(Self {
            title: require_text(title.into(), FilmError::EmptyTitle)?,
            animation,
        })
    }

    pub fn animation(&self) -> AnimationType {
        self.animation
    }
}

impl FilmRecord for CartoonFilm {
    fn title(&self) -> &str {
        &self.title
    }

    fn kind(&self) -> FilmKind {
        FilmKind::Cartoon
    }

    fn describe(&self) -> String {
        format!(
            "{} film: {}, animation type: {}",
            self.kind().display_name(),
            self.title,
            self.animation
        )
    }

    fn evaluate(&self, condition: &Condition) -> Result<bool, ConditionError> {
        match condition.field {
            Field::Title => Ok(condition.matches_text(&self.title)),
            Field::Type => Ok(condition.matches_kind(self.kind())),
            Field::AnimationType => {
                let expected = AnimationType::from_keyword(&condition.value)
                    .ok_or_else(|| ConditionError::unknown_animation_type(condition.value.as_str()))?;
                Ok(condition
                    .op
                    .compare_eq(self.animation, expected)
                    .unwrap_or(false))
            }
            Field::Director | Field::Episodes => Ok(false),
        }
    }
}

// ── Series ──────────────────────────────────────────────────────────────────

/// A multi-episode series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesFilm {
    title: String,
    director: String,
    episodes: i64,
}

impl SeriesFilm {
    pub fn new(
        title: impl Into<String>,
        director: impl Into<String>,
        episodes: i64,
    ) -> Result<Self, FilmError> {
        let title = require_text(title.into(), FilmError::EmptyTitle)?;
        let director = require_text(director.into(), FilmError::EmptyDirector)?;
        if episodes <= 0 {
            return Err(FilmError::NonPositiveEpisodes(episodes));
        }
        Ok(Self {
            title,
            director,
            episodes,
        })
    }

    pub fn director(&self) -> &str {
        &self.director
    }

    pub fn episodes(&self) -> i64 {
        self.episodes
    }
}

impl FilmRecord for SeriesFilm {
    fn title(&self) -> &str {
        &self.title
    }

    fn kind(&self) -> FilmKind {
        FilmKind::Series
    }

    fn describe(&self) -> String {
        format!(
            "{} film: {}, director: {}, episodes: {}",
            self.kind().display_name(),
            self.title,
            self.director,
            self.episodes
        )
    }

    fn evaluate(&self, condition: &Condition) -> Result<bool, ConditionError> {
        match condition.field {
            Field::Title => Ok(condition.matches_text(&self.title)),
            Field::Director => Ok(condition.matches_text(&self.director)),
            Field::Type => Ok(condition.matches_kind(self.kind())),
            Field::Episodes => {
                let expected = condition.integer_value()?;
                Ok(condition
                    .op
                    .compare_ord(self.episodes, expected)
                    .unwrap_or(false))
            }
            Field::AnimationType => Ok(false),
        }
    }
}

// ── Film ────────────────────────────────────────────────────────────────────

/// Any catalog record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Film {
    Game(GameFilm),
    Cartoon(CartoonFilm),
    Series(SeriesFilm),
}

impl Film {
    pub fn game(title: impl Into<String>, director: impl Into<String>) -> Result<Self, FilmError> {
        GameFilm::new(title, director).map(Self::Game)
    }

    pub fn cartoon(title: impl Into<String>, animation: AnimationType) -> Result<Self, FilmError> {
        CartoonFilm::new(title, animation).map(Self::Cartoon)
    }

    pub fn series(
        title: impl Into<String>,
        director: impl Into<String>,
        episodes: i64,
    ) -> Result<Self, FilmError> {
        SeriesFilm::new(title, director, episodes).map(Self::Series)
    }

    fn record(&self) -> &dyn FilmRecord {
        match self {
            Self::Game(f) => f,
            Self::Cartoon(f) => f,
            Self::Series(f) => f,
        }
    }
}

impl FilmRecord for Film {
    fn title(&self) -> &str {
        self.record().title()
    }

    fn kind(&self) -> FilmKind {
        self.record().kind()
    }

    fn describe(&self) -> String {
        self.record().describe()
    }

    fn evaluate(&self, condition: &Condition) -> Result<bool, ConditionError> {
        self.record().evaluate(condition)
    }
}

impl From<GameFilm> for Film {
    fn from(film: GameFilm) -> Self {
        Self::Game(film)
    }
}

impl From<CartoonFilm> for Film {
    fn from(film: CartoonFilm) -> Self {
        Self::Cartoon(film)
    }
}

impl From<SeriesFilm> for Film {
    fn from(film: SeriesFilm) -> Self {
        Self::Series(film)
    }
}

impl std::fmt::Display for Film {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}

#[cfg(test)]
#[path = "tests/film_tests.rs"]
mod tests;
