use calendr_core::CalendarConfig;
use std::io;

// Flux architecture modules
mod actions;
mod app;
mod dispatcher;
mod effects;
mod keyboard;
mod logger;
mod stores;
mod ui;

mod tui;

pub use app::App;
pub use stores::PickOutcome;

/// Run the interactive picker until the user quits, returning what was picked
pub async fn tui_main(config: CalendarConfig) -> io::Result<PickOutcome> {
    let log_buffer = logger::init_memory_logger();

    // Install color-eyre for better error messages BEFORE terminal init.
    // The binary may already have installed it.
    if let Err(e) = color_eyre::install() {
        log::debug!("color-eyre not installed by the TUI: {}", e);
    }
    let options = tui::TerminalOptions::for_calendar(&config);
    let mut terminal = tui::init(&options)?;
    let (mut app, action_receiver) = App::new(config, log_buffer);

    let result = app.run(&mut terminal, action_receiver).await;

    // Always restore terminal
    let _ = tui::restore(options.mouse_capture);

    if let Err(e) = result {
        eprintln!("Application error: {:?}", e);
        return Err(e);
    }

    Ok(app.outcome())
}
