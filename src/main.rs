use anyhow::{anyhow, Result};
use clap::{App as Cli, Arg};
use health_tui::{logger, state::Screen, ui::Theme, App, Config};
use log::LevelFilter;

fn main() -> Result<()> {
    let themes = Theme::available_themes();
    let theme_names: Vec<&str> = themes.iter().map(String::as_str).collect();
    let matches = Cli::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Directory holding config.yml")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("screen")
                .short("s")
                .long("screen")
                .value_name("SCREEN")
                .help("Screen to start on, e.g. WaterTracking")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("theme")
                .short("t")
                .long("theme")
                .value_name("NAME")
                .help("Color theme to use")
                .possible_values(&theme_names)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Lowest level shown in the log pane")
                .default_value("info")
                .takes_value(true),
        )
        .get_matches();

    let level = matches
        .value_of("log-level")
        .and_then(logger::parse_level)
        .unwrap_or(LevelFilter::Info);
    logger::init(level)?;

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    if let Some(name) = matches.value_of("screen") {
        let screen = name
            .parse::<Screen>()
            .map_err(|e| anyhow!("{} (expected one of: {})", e, screen_names()))?;
        config.override_start_screen(screen);
    }
    if let Some(name) = matches.value_of("theme") {
        config.theme_name = name.to_string();
    }

    App::start(config)
}

fn screen_names() -> String {
    Screen::ALL
        .iter()
        .map(|screen| screen.name())
        .collect::<Vec<_>>()
        .join(", ")
}
