use dioxus::prelude::*;
use std::process;

mod locales;
mod ui;

use intropage_config::Config;
use ui::App;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("intropage starting up");

    // Resolve and validate the data directory before handing control
    // to the UI; a broken config file is a startup error.
    let config = match Config::load_or_default() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: failed to load config file: {e}");
            eprintln!("Fix or remove {}", Config::config_path().display());
            process::exit(1);
        }
    };
    log::info!("Using data directory {}", config.data_dir.display());

    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config())
        .launch(app_root);
}

fn app_root() -> Element {
    // Re-resolve the data dir with the same logic as main; main has
    // already rejected a broken config file.
    let data_dir = Config::load_or_default()
        .map(|config| config.data_dir)
        .unwrap_or_else(|_| Config::default_data_dir());

    rsx! {
        App { data_dir }
    }
}

fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("intropage")
        .with_always_on_top(false);

    Config::default().with_window(window)
}
