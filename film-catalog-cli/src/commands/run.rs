use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use film_catalog_lib::{Catalog, RemovalReport, ScriptEvent, Settings, run_script_file};

use crate::error::CliError;

/// Run a command script against a fresh catalog.
pub(crate) fn run_script(script: Option<PathBuf>, settings: &Settings) -> Result<(), CliError> {
    let path = match film_catalog_lib::resolve_script_path(script, settings) {
        Some(path) => path,
        None => prompt_for_filename(&mut io::stdin().lock(), &mut io::stdout())?,
    };

    let mut catalog = Catalog::new();
    let summary = run_script_file(
        &path,
        &mut catalog,
        &settings.run_options(),
        &mut report_event,
    )?;

    log::debug!(
        "{} lines, {} commands, {} errors, {} added, {} removed",
        summary.lines,
        summary.commands,
        summary.errors,
        summary.added,
        summary.removed,
    );
    log::info!("{}", finished_message(summary.final_size));
    Ok(())
}

fn finished_message(size: usize) -> String {
    format!("Finished processing file. Total films in container: {}", size)
}

fn prompt_for_filename(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<PathBuf, CliError> {
    write!(output, "Enter filename: ")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim();
    if answer.is_empty() {
        return Err(CliError::EmptyFilename);
    }
    Ok(PathBuf::from(answer))
}

fn report_event(event: ScriptEvent) {
    match event {
        ScriptEvent::Added { description, .. } => {
            log::info!(
                "{} {}",
                "Film added successfully:".if_supports_color(Stdout, |t| t.green()),
                description,
            );
        }
        ScriptEvent::Removed { line, report } => report_removal(line, &report),
        ScriptEvent::Printed { lines, .. } => {
            for text in lines {
                log::info!("{}", text);
            }
        }
        ScriptEvent::Failed { line, error } => {
            log::warn!(
                "{} Error at line {}: {}",
                "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                line,
                error,
            );
        }
    }
}

fn report_removal(line: usize, report: &RemovalReport) {
    if let Some(e) = &report.rejected {
        log::warn!(
            "{} Condition at line {} matches nothing: {}",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            line,
            e,
        );
    }
    for failure in &report.failures {
        log::warn!(
            "{} Kept #{} '{}': {}",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            failure.position,
            failure.title,
            failure.error,
        );
    }
    log::info!("{}", removal_message(report));
}

fn removal_message(report: &RemovalReport) -> String {
    format!("Successfully removed {} film(s)", report.removed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_reads_a_trimmed_filename() {
        let mut input = "  films.txt \n".as_bytes();
        let mut output = Vec::new();
        let path = prompt_for_filename(&mut input, &mut output).unwrap();
        assert_eq!(path, PathBuf::from("films.txt"));
        assert_eq!(output, b"Enter filename: ");
    }

    #[test]
    fn prompt_rejects_an_empty_answer() {
        let mut output = Vec::new();
        let err = prompt_for_filename(&mut "   \n".as_bytes(), &mut output).unwrap_err();
        assert!(matches!(err, CliError::EmptyFilename));

        let err = prompt_for_filename(&mut "".as_bytes(), &mut output).unwrap_err();
        assert!(matches!(err, CliError::EmptyFilename));
    }

    #[test]
    fn summary_messages() {
        let report = RemovalReport {
            removed: 2,
            ..Default::default()
        };
        assert_eq!(removal_message(&report), "Successfully removed 2 film(s)");
        assert_eq!(
            finished_message(3),
            "Finished processing file. Total films in container: 3"
        );
    }
}
