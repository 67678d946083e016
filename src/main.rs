use tracing_subscriber::EnvFilter;
use wad_peek::app::WadPeekApp;
use wad_peek::constant;
use wad_peek::ui;

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let options = ui::viewport::build_viewport();

    eframe::run_native(
        constant::DEFAULT_WINDOW_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(WadPeekApp::new(cc)))),
    )
}
