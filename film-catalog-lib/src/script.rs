//! Parser for the line-oriented command script.
//!
//! ```text
//! # comment
//! ADD game "The Matrix"|Wachowski
//! ADD cartoon Shrek|drawn
//! ADD series Game of Thrones|David Benioff|73
//! REM episodes > 50
//! PRINT
//! ```
//!
//! Command words are case-sensitive. Everything after the command word is
//! handed on as raw text; the film kind and its data are interpreted by
//! [`crate::factory`], conditions by the catalog.

use crate::error::ScriptError;

/// An `ADD` request before any validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddRequest {
    /// Film kind as written (`game`, `cartoon`, `series`, or anything else).
    pub kind: String,
    /// Title with surrounding quotes removed.
    pub title: String,
    /// Everything after the first `|`, trimmed. Empty if there was no `|`.
    pub data: String,
}

/// One parsed script command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(AddRequest),
    Remove { condition: String },
    Print,
}

/// Parse one script line.
///
/// Returns `Ok(None)` for blank lines and lines starting with
/// `comment_prefix`.
pub fn parse_line(line: &str, comment_prefix: &str) -> Result<Option<Command>, ScriptError> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.is_empty() || (!comment_prefix.is_empty() && line.starts_with(comment_prefix)) {
        return Ok(None);
    }

    let trimmed = line.trim_start();
    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (trimmed, ""),
    };

    match word {
        "" => Ok(None),
        "ADD" => parse_add(rest).map(|r| Some(Command::Add(r))),
        "REM" => {
            let condition = rest.trim();
            if condition.is_empty() {
                Err(ScriptError::MissingCondition)
            } else {
                Ok(Some(Command::Remove {
                    condition: condition.to_string(),
                }))
            }
        }
        "PRINT" => Ok(Some(Command::Print)),
        other => Err(ScriptError::UnknownCommand(other.to_string())),
    }
}

fn parse_add(rest: &str) -> Result<AddRequest, ScriptError> {
    let rest = rest.trim_start();
    let (kind, rest) = match rest.split_once(char::is_whitespace) {
        Some((kind, rest)) => (kind, rest.trim_start()),
        None => (rest, ""),
    };
    if kind.is_empty() {
        return Err(ScriptError::MissingKind);
    }
    if rest.trim().is_empty() {
        return Err(ScriptError::MissingTitle);
    }

    let (title, data) = rest.split_once('|').unwrap_or((rest, ""));

    Ok(AddRequest {
        kind: kind.to_string(),
        title: unquote(title.trim()).to_string(),
        data: data.trim().to_string(),
    })
}

/// Strip one pair of surrounding double quotes.
fn unquote(s: &str) -> &str {
    s.strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(kind: &str, title: &str, data: &str) -> Command {
        Command::Add(AddRequest {
            kind: kind.into(),
            title: title.into(),
            data: data.into(),
        })
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        assert_eq!(parse_line("", "#"), Ok(None));
        assert_eq!(parse_line("# ADD game X|Y", "#"), Ok(None));
        assert_eq!(parse_line("   ", "#"), Ok(None));
        assert_eq!(parse_line("// note", "//"), Ok(None));
    }

    #[test]
    fn add_game() {
        assert_eq!(
            parse_line("ADD game Matrix|Wachowski", "#"),
            Ok(Some(add("game", "Matrix", "Wachowski")))
        );
    }

    #[test]
    fn add_strips_quotes_and_spaces() {
        assert_eq!(
            parse_line("ADD  game   \"The Matrix\" | Lana Wachowski ", "#"),
            Ok(Some(add("game", "The Matrix", "Lana Wachowski")))
        );
    }

    #[test]
    fn add_series_keeps_inner_separator() {
        assert_eq!(
            parse_line("ADD series Game of Thrones|David Benioff|73", "#"),
            Ok(Some(add("series", "Game of Thrones", "David Benioff|73")))
        );
    }

    #[test]
    fn add_without_separator_has_empty_data() {
        assert_eq!(
            parse_line("ADD game Matrix", "#"),
            Ok(Some(add("game", "Matrix", "")))
        );
    }

    #[test]
    fn add_errors() {
        assert_eq!(parse_line("ADD", "#"), Err(ScriptError::MissingKind));
        assert_eq!(parse_line("ADD game", "#"), Err(ScriptError::MissingTitle));
        assert_eq!(parse_line("ADD game   ", "#"), Err(ScriptError::MissingTitle));
    }

    #[test]
    fn remove_takes_rest_of_line() {
        assert_eq!(
            parse_line("REM   director == David Benioff  ", "#"),
            Ok(Some(Command::Remove {
                condition: "director == David Benioff".into()
            }))
        );
        assert_eq!(parse_line("REM", "#"), Err(ScriptError::MissingCondition));
    }

    #[test]
    fn print_and_unknown() {
        assert_eq!(parse_line("PRINT", "#"), Ok(Some(Command::Print)));
        assert_eq!(
            parse_line("DELETE all", "#"),
            Err(ScriptError::UnknownCommand("DELETE".into()))
        );
        assert_eq!(
            parse_line("print", "#"),
            Err(ScriptError::UnknownCommand("print".into()))
        );
    }
}
