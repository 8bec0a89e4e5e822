//! Executes a command script against a catalog.
//!
//! Each line is parsed, executed, and reported through a callback. A line
//! that fails is reported and skipped; only failing to read the script
//! itself stops a run.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use film_catalog_core::{Catalog, FilmRecord, RemovalReport};

use crate::error::{LineError, RunError};
use crate::factory::build_film;
use crate::script::{Command, parse_line};

/// Options controlling how a script is read.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Lines starting with this prefix are ignored.
    pub comment_prefix: String,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            comment_prefix: "#".to_string(),
        }
    }
}

/// What happened on one script line. `line` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptEvent {
    Added {
        line: usize,
        description: String,
        size: usize,
    },
    Removed {
        line: usize,
        report: RemovalReport,
    },
    Printed {
        line: usize,
        lines: Vec<String>,
    },
    Failed {
        line: usize,
        error: LineError,
    },
}

impl ScriptEvent {
    pub fn line(&self) -> usize {
        match self {
            Self::Added { line, .. }
            | Self::Removed { line, .. }
            | Self::Printed { line, .. }
            | Self::Failed { line, .. } => *line,
        }
    }
}

/// Totals for a finished run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines read, including blanks and comments
    pub lines: usize,
    /// Commands executed successfully
    pub commands: usize,
    /// Lines that failed
    pub errors: usize,
    /// Records added over the whole run
    pub added: usize,
    /// Records removed over the whole run
    pub removed: usize,
    /// Catalog size after the last line
    pub final_size: usize,
}

/// Open a script file and run it. See [`run_script`].
pub fn run_script_file(
    path: &Path,
    catalog: &mut Catalog,
    options: &RunOptions,
    on_event: &mut dyn FnMut(ScriptEvent),
) -> Result<RunSummary, RunError> {
    let file = File::open(path).map_err(|source| RunError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Running script {}", path.display());
    run_script(BufReader::new(file), catalog, options, on_event)
}

/// Run every line of `reader` against `catalog`.
///
/// Lines are decoded lossily, so a line that is not valid UTF-8 still runs
/// with replacement characters in place of the bad bytes.
pub fn run_script<R: BufRead>(
    mut reader: R,
    catalog: &mut Catalog,
    options: &RunOptions,
    on_event: &mut dyn FnMut(ScriptEvent),
) -> Result<RunSummary, RunError> {
    let mut summary = RunSummary::default();
    let mut buf = Vec::new();
    let mut line = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line += 1;
        summary.lines = line;

        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        let text = String::from_utf8_lossy(&buf);
        if let Cow::Owned(_) = text {
            log::warn!("Line {} is not valid UTF-8; invalid bytes replaced", line);
        }

        let command = match parse_line(&text, &options.comment_prefix) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                summary.errors += 1;
                on_event(ScriptEvent::Failed {
                    line,
                    error: e.into(),
                });
                continue;
            }
        };

        match execute(command, catalog, line) {
            Ok(event) => {
                summary.commands += 1;
                match &event {
                    ScriptEvent::Added { .. } => summary.added += 1,
                    ScriptEvent::Removed { report, .. } => summary.removed += report.removed,
                    _ => {}
                }
                on_event(event);
            }
            Err(error) => {
                log::debug!("Line {} failed: {}", line, error);
                summary.errors += 1;
                on_event(ScriptEvent::Failed { line, error });
            }
        }
    }

    summary.final_size = catalog.len();
    Ok(summary)
}

/// Execute a single command. `line` is only used to label the event.
pub fn execute(
    command: Command,
    catalog: &mut Catalog,
    line: usize,
) -> Result<ScriptEvent, LineError> {
    match command {
        Command::Add(request) => {
            let film = build_film(&request)?;
            let description = film.describe();
            let size = catalog.add(Some(film))?;
            Ok(ScriptEvent::Added {
                line,
                description,
                size,
            })
        }
        Command::Remove { condition } => {
            let report = catalog.remove_matching(&condition)?;
            Ok(ScriptEvent::Removed { line, report })
        }
        Command::Print => Ok(ScriptEvent::Printed {
            line,
            lines: catalog.print_all(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FactoryError, ScriptError};
    use film_catalog_core::ValidationError;

    fn run(script: &str) -> (Catalog, RunSummary, Vec<ScriptEvent>) {
        let mut catalog = Catalog::new();
        let mut events = Vec::new();
        let summary = run_script(
            script.as_bytes(),
            &mut catalog,
            &RunOptions::default(),
            &mut |e| events.push(e),
        )
        .unwrap();
        (catalog, summary, events)
    }

    #[test]
    fn runs_a_mixed_script() {
        let (catalog, summary, events) = run("\
# sample
ADD game Matrix|Wachowski
ADD game Inception|Nolan

ADD cartoon Shrek|drawn
REM type == game
PRINT
");
        assert_eq!(catalog.len(), 1);
        assert_eq!(summary.lines, 7);
        assert_eq!(summary.commands, 5);
        assert_eq!(summary.errors, 0);
        assert_eq!(summary.added, 3);
        assert_eq!(summary.removed, 2);
        assert_eq!(summary.final_size, 1);

        let printed = events.last().unwrap();
        assert_eq!(
            printed,
            &ScriptEvent::Printed {
                line: 7,
                lines: vec![
                    "Films in container (1 total):".to_string(),
                    "1. Cartoon film: Shrek, animation type: drawn".to_string(),
                ],
            }
        );
    }

    #[test]
    fn errors_do_not_stop_the_run() {
        let (catalog, summary, events) = run("\
ADD series Lost|Abrams|zero
FROB everything
ADD game Matrix|Wachowski
");
        assert_eq!(catalog.len(), 1);
        assert_eq!(summary.errors, 2);
        assert_eq!(summary.commands, 1);

        assert_eq!(
            events[0],
            ScriptEvent::Failed {
                line: 1,
                error: LineError::Factory(FactoryError::Validation(
                    ValidationError::InvalidEpisodeCount("zero".into())
                )),
            }
        );
        assert_eq!(
            events[1],
            ScriptEvent::Failed {
                line: 2,
                error: LineError::Script(ScriptError::UnknownCommand("FROB".into())),
            }
        );
        assert_eq!(events[2].line(), 3);
    }

    #[test]
    fn remove_reports_counts() {
        let (_, _, events) = run("\
ADD series Game of Thrones|David Benioff|73
REM episodes == abc
REM episodes > 50
");
        match &events[1] {
            ScriptEvent::Removed { report, .. } => {
                assert_eq!(report.removed, 0);
                assert_eq!(report.failures.len(), 1);
            }
            other => panic!("unexpected event {:?}", other),
        }
        match &events[2] {
            ScriptEvent::Removed { report, .. } => assert_eq!(report.removed, 1),
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn print_on_empty_catalog() {
        let (_, _, events) = run("PRINT\n");
        assert_eq!(
            events,
            vec![ScriptEvent::Printed {
                line: 1,
                lines: vec!["Container is empty".to_string()],
            }]
        );
    }

    #[test]
    fn invalid_utf8_line_does_not_stop_the_run() {
        let mut catalog = Catalog::new();
        let mut events = Vec::new();
        let script: &[u8] =
            b"ADD game Matrix|Wachowski\nADD game Am\xe9lie|Jeunet\r\nADD game Inception|Nolan\nPRINT\n";
        let summary = run_script(
            script,
            &mut catalog,
            &RunOptions::default(),
            &mut |e| events.push(e),
        )
        .unwrap();

        assert_eq!(summary.lines, 4);
        assert_eq!(summary.errors, 0);
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get(1).unwrap().title(), "Am\u{FFFD}lie");
        assert_eq!(catalog.get(2).unwrap().title(), "Inception");
        assert_eq!(events.len(), 4);
        assert!(matches!(events[3], ScriptEvent::Printed { line: 4, .. }));
    }

    #[test]
    fn last_line_without_newline_runs() {
        let (catalog, summary, _) = run("ADD game Matrix|Wachowski\nADD game Inception|Nolan");
        assert_eq!(summary.lines, 2);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn custom_comment_prefix() {
        let mut catalog = Catalog::new();
        let options = RunOptions {
            comment_prefix: ";".to_string(),
        };
        let summary = run_script(
            "; ADD game X|Y\n# ADD game X|Y\n".as_bytes(),
            &mut catalog,
            &options,
            &mut |_| {},
        )
        .unwrap();
        assert_eq!(summary.errors, 1);
        assert_eq!(catalog.len(), 0);
    }
}
