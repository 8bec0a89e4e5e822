//! Logger setup.
//!
//! All user-facing output goes through the `log` macros. Normal output is
//! `info`, so `--quiet` (level `warn`) hides it and `--verbose` (level
//! `debug`) adds timestamps and library diagnostics. `RUST_LOG` overrides
//! the level chosen here.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use log::LevelFilter;

use crate::error::CliError;

/// Writes to stdout and, optionally, to a log file with ANSI codes removed.
pub(crate) struct TeeWriter<W: Write> {
    console: W,
    file: Option<File>,
}

impl<W: Write> TeeWriter<W> {
    pub(crate) fn new(console: W, file: Option<File>) -> Self {
        Self { console, file }
    }
}

impl<W: Write> Write for TeeWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.console.write_all(buf)?;
        if let Some(file) = self.file.as_mut() {
            file.write_all(&strip_ansi_escapes::strip(buf))?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.console.flush()?;
        if let Some(file) = self.file.as_mut() {
            file.flush()?;
        }
        Ok(())
    }
}

/// Pick the level filter from flags, falling back to the settings value.
pub(crate) fn level_filter(quiet: bool, verbose: bool, configured: Option<&str>) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        configured
            .and_then(|s| s.parse().ok())
            .unwrap_or(LevelFilter::Info)
    }
}

pub(crate) fn init(
    quiet: bool,
    verbose: bool,
    logfile: Option<&Path>,
    configured_level: Option<&str>,
) -> Result<(), CliError> {
    let file = logfile.map(File::create).transpose()?;

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_filter(quiet, verbose, configured_level))
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(TeeWriter::new(
            io::stdout(),
            file,
        ))));

    if verbose {
        builder.format(|buf, record| {
            writeln!(
                buf,
                "[{} {:<5} {}] {}",
                buf.timestamp_millis(),
                record.level(),
                record.target(),
                record.args()
            )
        });
    } else {
        builder.format(|buf, record| match record.level() {
            log::Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(buf, "{}: {}", level, record.args()),
        });
    }

    builder
        .try_init()
        .map_err(|e| CliError::logging(e.to_string()))
}
