//! Ordered, owning collection of film records.

use crate::condition::Condition;
use crate::error::{CatalogError, ConditionError, ValidationError};
use crate::film::{Film, FilmRecord};
use crate::validate::validate_creation_request;

/// A record whose condition evaluation failed during a removal pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationFailure {
    /// 1-based position of the record before the pass.
    pub position: usize,
    pub title: String,
    pub error: ConditionError,
}

/// Outcome of [`Catalog::remove_matching`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemovalReport {
    pub removed: usize,
    /// Records kept because the condition could not be evaluated for them.
    pub failures: Vec<EvaluationFailure>,
    /// Set when the condition itself could not be parsed; nothing was removed.
    pub rejected: Option<ConditionError>,
}

/// The film catalog.
///
/// Records keep their insertion order. Duplicate titles are allowed.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    films: Vec<Film>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. Returns the new size.
    ///
    /// `None` is rejected and leaves the catalog untouched.
    pub fn add(&mut self, film: Option<Film>) -> Result<usize, CatalogError> {
        let film = film.ok_or(CatalogError::MissingRecord)?;
        log::debug!("Adding {}", film.describe());
        self.films.push(film);
        Ok(self.films.len())
    }

    /// Remove every record matching `condition`.
    ///
    /// Survivors keep their relative order. A record for which the
    /// condition cannot be evaluated is kept and listed in
    /// [`RemovalReport::failures`].
    pub fn remove_matching(&mut self, condition: &str) -> Result<RemovalReport, CatalogError> {
        if condition.trim().is_empty() {
            return Err(CatalogError::EmptyCondition);
        }

        if self.films.is_empty() {
            log::debug!("No films to remove - container is empty");
            return Ok(RemovalReport::default());
        }

        match Condition::parse(condition) {
            Ok(parsed) => Ok(self.remove_where(&parsed)),
            Err(e) => {
                log::warn!("Condition '{}' matches nothing: {}", condition.trim(), e);
                Ok(RemovalReport {
                    rejected: Some(e),
                    ..RemovalReport::default()
                })
            }
        }
    }

    /// Remove every record matching an already-parsed condition.
    pub fn remove_where(&mut self, condition: &Condition) -> RemovalReport {
        let before = self.films.len();
        let mut failures = Vec::new();
        let mut position = 0;

        self.films.retain(|film| {
            position += 1;
            match film.evaluate(condition) {
                Ok(matched) => {
                    if matched {
                        log::debug!("Removing {}", film.describe());
                    }
                    !matched
                }
                Err(error) => {
                    log::warn!(
                        "Could not evaluate '{}' for '{}': {}",
                        condition,
                        film.title(),
                        error
                    );
                    failures.push(EvaluationFailure {
                        position,
                        title: film.title().to_string(),
                        error,
                    });
                    true
                }
            }
        });

        RemovalReport {
            removed: before - self.films.len(),
            failures,
            rejected: None,
        }
    }

    /// Render the catalog as text lines: a header and one numbered line per
    /// record, or a single notice when the catalog is empty.
    pub fn print_all(&self) -> Vec<String> {
        if self.films.is_empty() {
            return vec!["Container is empty".to_string()];
        }

        let mut lines = Vec::with_capacity(self.films.len() + 1);
        lines.push(format!("Films in container ({} total):", self.films.len()));
        for (i, film) in self.films.iter().enumerate() {
            lines.push(format!("{}. {}", i + 1, film.describe()));
        }
        lines
    }

    pub fn len(&self) -> usize {
        self.films.len()
    }

    pub fn is_empty(&self) -> bool {
        self.films.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Film> {
        self.films.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Film> {
        self.films.iter()
    }

    /// See [`validate_creation_request`].
    pub fn validate_creation_request<S: AsRef<str>>(
        kind: &str,
        params: &[S],
    ) -> Result<(), ValidationError> {
        validate_creation_request(kind, params)
    }
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
