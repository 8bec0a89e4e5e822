//! Pre-flight checks for record-creation requests.
//!
//! A creation request is a film kind plus its positional parameters as
//! they came out of a script line: `[title, director]` for a game,
//! `[title, animation]` for a cartoon, `[title, director, episodes]` for a
//! series. These checks catch structural problems (arity, enumerations,
//! numbers) with a specific diagnostic before any constructor runs.

use crate::error::ValidationError;
use crate::kind::{AnimationType, FilmKind};

/// Check a creation request without building anything.
///
/// Empty titles or directors are not caught here; the record constructors
/// reject those.
pub fn validate_creation_request<S: AsRef<str>>(
    kind: &str,
    params: &[S],
) -> Result<(), ValidationError> {
    let kind: FilmKind = kind
        .parse()
        .map_err(|_| ValidationError::UnknownKind(kind.to_string()))?;

    match kind {
        FilmKind::Cartoon => {
            require_params(params, 2, "Cartoon", "title and animation type (drawn/puppet/plasticine)")?;
            let animation = params[1].as_ref();
            if AnimationType::from_keyword(animation).is_none() {
                return Err(ValidationError::InvalidAnimationType(animation.to_string()));
            }
        }
        FilmKind::Game => {
            require_params(params, 2, "Game", "title and director")?;
        }
        FilmKind::Series => {
            require_params(params, 3, "Series", "title, director, and episode count")?;
            parse_episode_count(params[2].as_ref())?;
        }
    }

    Ok(())
}

/// Parse an episode count as written in a script.
pub fn parse_episode_count(raw: &str) -> Result<i64, ValidationError> {
    let episodes: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidEpisodeCount(raw.to_string()))?;
    if episodes <= 0 {
        return Err(ValidationError::NonPositiveEpisodes);
    }
    Ok(episodes)
}

fn require_params<S>(
    params: &[S],
    count: usize,
    kind: &'static str,
    expected: &'static str,
) -> Result<(), ValidationError> {
    if params.len() < count {
        Err(ValidationError::MissingParams { kind, expected })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn valid_requests_pass() {
        assert!(validate_creation_request("game", &params(&["Matrix", "Wachowski"])).is_ok());
        assert!(validate_creation_request("cartoon", &params(&["Shrek", "drawn"])).is_ok());
        assert!(validate_creation_request("cartoon", &params(&["Coraline", "puppet"])).is_ok());
        assert!(
            validate_creation_request("series", &params(&["Lost", "Abrams", "121"])).is_ok()
        );
    }

    #[test]
    fn missing_params_name_the_kind() {
        let err = validate_creation_request("series", &params(&["Lost", "Abrams"])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Series film requires title, director, and episode count"
        );
        assert!(matches!(
            validate_creation_request("game", &params(&["Matrix"])),
            Err(ValidationError::MissingParams { kind: "Game", .. })
        ));
    }

    #[test]
    fn bad_animation_keyword() {
        assert_eq!(
            validate_creation_request("cartoon", &params(&["Shrek", "cgi"])),
            Err(ValidationError::InvalidAnimationType("cgi".into()))
        );
    }

    #[test]
    fn bad_episode_counts() {
        assert_eq!(
            validate_creation_request("series", &params(&["Lost", "Abrams", "many"])),
            Err(ValidationError::InvalidEpisodeCount("many".into()))
        );
        assert_eq!(
            validate_creation_request("series", &params(&["Lost", "Abrams", "0"])),
            Err(ValidationError::NonPositiveEpisodes)
        );
        assert_eq!(
            validate_creation_request("series", &params(&["Lost", "Abrams", "-3"])),
            Err(ValidationError::NonPositiveEpisodes)
        );
    }

    #[test]
    fn unknown_kind() {
        assert_eq!(
            validate_creation_request("documentary", &params(&["Earth"])),
            Err(ValidationError::UnknownKind("documentary".into()))
        );
    }
}
