//! The per-record predicate language.
//!
//! A condition has the shape `field operator value`:
//!
//! ```text
//! title contains Matrix
//! director == David Benioff
//! episodes >= 10
//! ```
//!
//! `field` and `operator` are the first two whitespace-delimited tokens.
//! `value` is everything after the operator with the outer whitespace
//! trimmed, so it may contain spaces of its own.
//!
//! Parsing only checks the shape and that the field and operator are
//! known words. Whether a field/operator pair makes sense for a given
//! record, and how the value is interpreted, is decided by each record
//! variant in [`FilmRecord::evaluate`](crate::FilmRecord::evaluate).

use nom::{
    IResult,
    Parser,
    bytes::complete::take_till1,
    character::complete::multispace1,
    combinator::{map, rest},
};

use crate::error::ConditionError;
use crate::kind::FilmKind;

/// Attribute named on the left-hand side of a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Type,
    Director,
    Episodes,
    AnimationType,
}

const ALL_FIELDS: &[Field] = &[
    Field::Title,
    Field::Type,
    Field::Director,
    Field::Episodes,
    Field::AnimationType,
];

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Type => "type",
            Self::Director => "director",
            Self::Episodes => "episodes",
            Self::AnimationType => "animation_type",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        ALL_FIELDS.iter().copied().find(|f| f.as_str() == name)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Comparison operator of a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Eq,       // ==
    Ne,       // !=
    Contains, // contains
    Gt,       // >
    Lt,       // <
    Ge,       // >=
    Le,       // <=
}

const ALL_OPERATORS: &[Operator] = &[
    Operator::Eq,
    Operator::Ne,
    Operator::Contains,
    Operator::Gt,
    Operator::Lt,
    Operator::Ge,
    Operator::Le,
];

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Contains => "contains",
            Self::Gt => ">",
            Self::Lt => "<",
            Self::Ge => ">=",
            Self::Le => "<=",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        ALL_OPERATORS.iter().copied().find(|op| op.as_str() == symbol)
    }

    /// String comparison. `None` when the operator has no string meaning.
    pub fn compare_text(&self, actual: &str, expected: &str) -> Option<bool> {
        match self {
            Self::Eq => Some(actual == expected),
            Self::Ne => Some(actual != expected),
            Self::Contains => Some(actual.contains(expected)),
            _ => None,
        }
    }

    /// Equality-only comparison, used for enumerations.
    pub fn compare_eq<T: PartialEq>(&self, actual: T, expected: T) -> Option<bool> {
        match self {
            Self::Eq => Some(actual == expected),
            Self::Ne => Some(actual != expected),
            _ => None,
        }
    }

    /// Ordered comparison, used for numbers.
    pub fn compare_ord<T: Ord>(&self, actual: T, expected: T) -> Option<bool> {
        match self {
            Self::Eq => Some(actual == expected),
            Self::Ne => Some(actual != expected),
            Self::Gt => Some(actual > expected),
            Self::Lt => Some(actual < expected),
            Self::Ge => Some(actual >= expected),
            Self::Le => Some(actual <= expected),
            Self::Contains => None,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A parsed `field operator value` predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub field: Field,
    pub op: Operator,
    /// Raw value text; interpretation depends on the field.
    pub value: String,
}

impl Condition {
    /// Parse a condition string.
    ///
    /// # Examples
    ///
    /// ```
    /// use film_catalog_core::condition::{Condition, Field, Operator};
    ///
    /// let c = Condition::parse("director == David  Benioff ").unwrap();
    /// assert_eq!(c.field, Field::Director);
    /// assert_eq!(c.op, Operator::Eq);
    /// assert_eq!(c.value, "David  Benioff");
    /// ```
    pub fn parse(input: &str) -> Result<Self, ConditionError> {
        let trimmed = input.trim_start();
        if trimmed.trim_end().is_empty() {
            return Err(ConditionError::Empty);
        }

        let (field, op, value) = match raw_condition(trimmed) {
            Ok((_, parts)) => parts,
            Err(_) => return Err(ConditionError::malformed(input.trim())),
        };

        let field = Field::from_name(field).ok_or_else(|| ConditionError::unknown_field(field))?;
        let op = Operator::from_symbol(op).ok_or_else(|| ConditionError::unknown_operator(op))?;

        Ok(Self {
            field,
            op,
            value: value.trim().to_string(),
        })
    }

    /// Compare a string attribute against the value.
    pub fn matches_text(&self, actual: &str) -> bool {
        self.op.compare_text(actual, &self.value).unwrap_or(false)
    }

    /// `type == <kind>` check. Only `==` is meaningful for `type`.
    pub fn matches_kind(&self, kind: FilmKind) -> bool {
        self.op == Operator::Eq && self.value == kind.as_str()
    }

    /// Interpret the value as an integer.
    pub fn integer_value(&self) -> Result<i64, ConditionError> {
        self.value
            .parse()
            .map_err(|_| ConditionError::invalid_number(self.value.as_str()))
    }
}

impl std::str::FromStr for Condition {
    type Err = ConditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.field, self.op, self.value)
    }
}

// ── Grammar ─────────────────────────────────────────────────────────────────

fn token(input: &str) -> IResult<&str, &str> {
    take_till1(char::is_whitespace).parse(input)
}

/// `token SP token rest`, without interpreting the tokens.
fn raw_condition(input: &str) -> IResult<&str, (&str, &str, &str)> {
    map((token, multispace1, token, rest), |(field, _, op, value)| {
        (field, op, value)
    })
    .parse(input)
}
