use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use film_catalog_lib::{Condition, Field, FilmKind};

use crate::error::CliError;

/// Film kinds that have the given field.
fn kinds_with_field(field: Field) -> &'static [FilmKind] {
    match field {
        Field::Title | Field::Type => FilmKind::all(),
        Field::Director => &[FilmKind::Game, FilmKind::Series],
        Field::Episodes => &[FilmKind::Series],
        Field::AnimationType => &[FilmKind::Cartoon],
    }
}

/// Parse a condition and describe it.
pub(crate) fn run_check(words: &[String]) -> Result<(), CliError> {
    let text = words.join(" ");
    let condition = Condition::parse(&text)?;

    let kinds: Vec<&str> = kinds_with_field(condition.field)
        .iter()
        .map(FilmKind::as_str)
        .collect();

    log::info!(
        "{}",
        "Condition".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!(
        "  Field:    {} (applies to: {})",
        condition.field.if_supports_color(Stdout, |t| t.cyan()),
        kinds.join(", "),
    );
    log::info!(
        "  Operator: {}",
        condition.op.if_supports_color(Stdout, |t| t.cyan()),
    );
    log::info!("  Value:    '{}'", condition.value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_condition_is_accepted() {
        let words: Vec<String> = ["episodes", ">=", "10"].iter().map(|s| s.to_string()).collect();
        assert!(run_check(&words).is_ok());
    }

    #[test]
    fn invalid_condition_is_an_error() {
        let words = vec!["rating".to_string(), ">".to_string(), "5".to_string()];
        assert!(matches!(run_check(&words), Err(CliError::Condition(_))));
    }

    #[test]
    fn field_applicability() {
        assert_eq!(kinds_with_field(Field::Episodes), &[FilmKind::Series]);
        assert_eq!(kinds_with_field(Field::Title).len(), 3);
    }
}
