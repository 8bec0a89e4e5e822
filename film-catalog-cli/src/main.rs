//! film-catalog CLI
//!
//! Runs line-oriented command scripts against an in-memory film catalog.

mod cli_types;
mod commands;
mod error;
mod logging;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use film_catalog_lib::Settings;

use cli_types::{Cli, Commands, ConfigAction};
use error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        if log::log_enabled!(log::Level::Error) {
            log::error!("{}", e);
        } else {
            eprintln!(
                "{} {}",
                "Fatal error:".if_supports_color(Stderr, |t| t.red()),
                e
            );
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    // Must precede logger setup: `log.level` feeds the default filter.
    let settings = Settings::load()?;
    logging::init(
        cli.quiet,
        cli.verbose,
        cli.logfile.as_deref(),
        settings.log.level.as_deref(),
    )?;

    match cli.command {
        Commands::Run { script } => commands::run::run_script(script, &settings),
        Commands::Check { condition } => commands::check::run_check(&condition),
        Commands::Config { action } => {
            match action {
                ConfigAction::Show => commands::config::run_config_show(&settings),
                ConfigAction::Path => commands::config::run_config_path(),
            }
            Ok(())
        }
    }
}
