mod app;
mod config;
mod domain;
mod infra;
mod platform;
mod ui;
mod usecase;


use tracing::info;

use crate::config::AppConfig;

fn main() {
    dioxus::logger::initialize_default();
    let config = AppConfig::default();
    info!("starting {}", config.window_title);
    launch(&config);
}

#[cfg(feature = "desktop")]
fn launch(config: &AppConfig) {
    let webview_data_dir = match platform::desktop::default_webview_data_dir() {
        Ok(dir) => Some(dir),
        Err(err) => {
            tracing::warn!("using default webview data directory: {err:#}");
            None
        }
    };

    let mut cfg = dioxus::desktop::Config::new().with_window(
        dioxus::desktop::WindowBuilder::new().with_title(config.window_title.as_str()),
    );
    if let Some(dir) = webview_data_dir {
        cfg = cfg.with_data_directory(dir);
    }

    dioxus::LaunchBuilder::desktop().with_cfg(cfg).launch(app::App);
}

#[cfg(not(feature = "desktop"))]
fn launch(_config: &AppConfig) {
    dioxus::launch(app::App);
}
