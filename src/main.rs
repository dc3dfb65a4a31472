mod app;
mod data;
mod playback;
mod ui;
mod utils;

use anyhow::Result;

fn main() -> Result<()> {
    env_logger::init();

    let config = data::config::Config::load_or_default()?;
    let theme = ui::theme::Theme::load(&config.theme);

    let mut app = app::state::AppState::new(config, theme);
    app::event_loop::run(&mut app)
}
