// SPDX-License-Identifier: MPL-2.0
use photo_viewer::app::{self, Flags};
use photo_viewer::ui::theming::ThemeMode;
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("photo_viewer=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    let config_dir: Option<String> = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        tracing::warn!(error = %err, "ignoring invalid --config-dir");
        None
    });
    let theme: Option<ThemeMode> = args.opt_value_from_str("--theme").unwrap_or_else(|err| {
        tracing::warn!(error = %err, "ignoring invalid --theme");
        None
    });
    let path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting photo viewer");

    app::run(Flags {
        path,
        config_dir,
        theme,
    })
}
