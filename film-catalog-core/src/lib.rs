//! Film records, the condition language, and the catalog that filters them.

pub mod catalog;
pub mod condition;
pub mod error;
pub mod film;
pub mod kind;
pub mod validate;

pub use catalog::{Catalog, EvaluationFailure, RemovalReport};
pub use condition::{Condition, Field, Operator};
pub use error::{CatalogError, ConditionError, FilmError, ValidationError};
pub use film::{CartoonFilm, Film, FilmRecord, GameFilm, SeriesFilm};
pub use kind::{AnimationType, FilmKind, FilmKindParseError};
pub use validate::{parse_episode_count, validate_creation_request};
