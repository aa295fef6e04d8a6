use anyhow::Context;
use dioxus::prelude::*;
use feedback_spots_config::Config;
use feedback_spots_dioxus::{Fixture, settings};
use feedback_spots_dioxus::ui::App;
use feedback_spots_engine::DatetimeDisplay;
use std::env;
use std::path::PathBuf;
use std::process;
use std::sync::OnceLock;

const DEMO_FIXTURE: &str = include_str!("../fixtures/demo.json");

/// Everything the root component needs, resolved once before launch
#[derive(Debug, Clone)]
struct Settings {
    fixture: Fixture,
    current_user: Option<String>,
    display: DatetimeDisplay,
}

static SETTINGS: OnceLock<Settings> = OnceLock::new();

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("feedback-spots starting up!");

    let args: Vec<String> = env::args().collect();
    let cli_fixture = match args.len() {
        1 => None,
        2 => Some(PathBuf::from(&args[1])),
        _ => {
            let program_name = args
                .first()
                .cloned()
                .unwrap_or_else(|| "feedback-spots".to_string());
            eprintln!("Usage: {program_name} [fixture.json]");
            process::exit(1);
        }
    };

    let settings = match resolve_settings(cli_fixture) {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("Startup failed: {e:#}");
            eprintln!("Error: {e:#}");
            eprintln!(
                "Check the fixture path or the config file at {}",
                Config::config_path().display()
            );
            process::exit(1);
        }
    };

    log::info!(
        "Showing {} spot(s) over {} container(s)",
        settings.fixture.spots.len(),
        settings.fixture.containers.containers().count()
    );
    let _ = SETTINGS.set(settings);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config())
        .launch(app_root);
}

fn resolve_settings(cli_fixture: Option<PathBuf>) -> anyhow::Result<Settings> {
    let config_path = Config::config_path();
    log::info!("Config path: {}", config_path.display());

    let config = match Config::load()? {
        Some(config) => config,
        None => {
            log::info!("No config file found, using defaults");
            Config::default()
        }
    };

    let fixture = match cli_fixture.or(config.fixture_path.clone()) {
        Some(path) => {
            log::info!("Loading fixture from {}", path.display());
            Fixture::load_from_path(&path)?
        }
        None => {
            log::info!("No fixture given, using the built-in demo page");
            Fixture::from_json(DEMO_FIXTURE)?
        }
    };

    let display = settings::datetime_display(&config.display)
        .with_context(|| format!("Bad [display] section in {}", config_path.display()))?;

    Ok(Settings {
        fixture,
        current_user: config.current_user,
        display,
    })
}

fn app_root() -> Element {
    let Some(settings) = SETTINGS.get() else {
        return rsx! {
            div { "feedback-spots was launched without settings" }
        };
    };

    rsx! {
        App {
            fixture: settings.fixture.clone(),
            current_user: settings.current_user.clone(),
            display: settings.display.clone(),
        }
    }
}

fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("feedback-spots")
        .with_always_on_top(false);

    Config::default().with_window(window)
}
