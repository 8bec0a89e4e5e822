use thiserror::Error;

/// Errors raised when a film record cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilmError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Director cannot be empty")]
    EmptyDirector,

    #[error("Episode count must be positive, got {0}")]
    NonPositiveEpisodes(i64),
}

/// Errors from parsing or interpreting a condition string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConditionError {
    /// The condition was empty or only whitespace
    #[error("Empty condition")]
    Empty,

    /// The condition does not have the `field operator value` shape
    #[error("Malformed condition: '{0}'")]
    Malformed(String),

    #[error("Unknown field: '{0}'")]
    UnknownField(String),

    #[error("Unknown operator: '{0}'")]
    UnknownOperator(String),

    /// The value of a numeric comparison is not an integer
    #[error("Invalid number: '{0}'")]
    InvalidNumber(String),

    #[error("Invalid animation type: '{0}'. Use: drawn, puppet, plasticine")]
    UnknownAnimationType(String),
}

impl ConditionError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }

    pub fn unknown_field(msg: impl Into<String>) -> Self {
        Self::UnknownField(msg.into())
    }

    pub fn unknown_operator(msg: impl Into<String>) -> Self {
        Self::UnknownOperator(msg.into())
    }

    pub fn invalid_number(msg: impl Into<String>) -> Self {
        Self::InvalidNumber(msg.into())
    }

    pub fn unknown_animation_type(msg: impl Into<String>) -> Self {
        Self::UnknownAnimationType(msg.into())
    }
}

/// Errors reported by [`Catalog`](crate::Catalog) operations.
///
/// None of these modify the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Cannot add null film")]
    MissingRecord,

    #[error("Empty condition provided")]
    EmptyCondition,
}

/// Diagnostics from the pre-flight check of a record-creation request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{kind} film requires {expected}")]
    MissingParams {
        kind: &'static str,
        expected: &'static str,
    },

    #[error("Invalid animation type '{0}'. Use: drawn, puppet, or plasticine")]
    InvalidAnimationType(String),

    #[error("Invalid episode count '{0}'. Must be a number")]
    InvalidEpisodeCount(String),

    #[error("Episode count must be positive")]
    NonPositiveEpisodes,

    #[error("Unknown film type '{0}'. Use: cartoon, game, or series")]
    UnknownKind(String),
}
