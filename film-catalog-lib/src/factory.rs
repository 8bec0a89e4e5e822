//! Builds film records from `ADD` requests.
//!
//! The data part of a request depends on the kind:
//!
//! | kind      | data                          |
//! |-----------|-------------------------------|
//! | `game`    | director (whole text)         |
//! | `cartoon` | animation keyword (first word)|
//! | `series`  | `director\|episodes`          |

use film_catalog_core::{
    AnimationType, Film, FilmKind, ValidationError, parse_episode_count, validate_creation_request,
};

use crate::error::FactoryError;
use crate::script::AddRequest;

/// Split a request into the positional parameters checked by
/// [`validate_creation_request`].
pub fn creation_params(request: &AddRequest) -> Vec<String> {
    let mut params = vec![request.title.clone()];
    match request.kind.as_str() {
        "game" => params.push(request.data.clone()),
        "cartoon" => {
            let keyword = request.data.split_whitespace().next().unwrap_or_default();
            params.push(keyword.to_string());
        }
        "series" => {
            let (director, episodes) = request
                .data
                .split_once('|')
                .unwrap_or((request.data.as_str(), ""));
            params.push(director.trim().to_string());
            let episodes = episodes.split_whitespace().next().unwrap_or_default();
            params.push(episodes.to_string());
        }
        _ => {}
    }
    params
}

/// Validate a request and construct the film it describes.
pub fn build_film(request: &AddRequest) -> Result<Film, FactoryError> {
    let params = creation_params(request);
    validate_creation_request(&request.kind, &params)?;

    let kind: FilmKind = request
        .kind
        .parse()
        .map_err(|_| ValidationError::UnknownKind(request.kind.clone()))?;

    let film = match kind {
        FilmKind::Game => Film::game(&params[0], &params[1])?,
        FilmKind::Cartoon => {
            let animation = AnimationType::from_keyword(&params[1])
                .ok_or_else(|| ValidationError::InvalidAnimationType(params[1].clone()))?;
            Film::cartoon(&params[0], animation)?
        }
        FilmKind::Series => {
            let episodes = parse_episode_count(&params[2])?;
            Film::series(&params[0], &params[1], episodes)?
        }
    };

    Ok(film)
}
