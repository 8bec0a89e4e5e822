use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use film_catalog_lib::{Settings, settings_path};

/// Show the settings file location and the values in effect.
pub(crate) fn run_config_show(settings: &Settings) {
    let path = settings_path();

    log::info!(
        "{}",
        "Film Catalog Settings".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found, using defaults)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!("");

    let default_path = settings
        .script
        .default_path
        .as_ref()
        .map(|p| p.display().to_string());
    let fields: [(&str, Option<String>); 3] = [
        ("script.default_path", default_path),
        (
            "script.comment_prefix",
            Some(format!("\"{}\"", settings.script.comment_prefix)),
        ),
        ("log.level", settings.log.level.clone()),
    ];

    for (name, value) in fields {
        match value {
            Some(v) => log::info!(
                "  {} {}",
                format!("{}:", name).if_supports_color(Stdout, |t| t.cyan()),
                v,
            ),
            None => log::info!(
                "  {} {}",
                format!("{}:", name).if_supports_color(Stdout, |t| t.cyan()),
                "not set".if_supports_color(Stdout, |t| t.dimmed()),
            ),
        }
    }
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    log::info!("{}", settings_path().display());
}
