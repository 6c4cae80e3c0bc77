use calendr_core::CalendarConfig;
use std::io::{self, Stdout, stdout};
use std::panic;

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{DisableMouseCapture, EnableMouseCapture},
        execute,
        terminal::{
            EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode,
            enable_raw_mode,
        },
    },
};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// How the picker takes over the terminal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalOptions {
    /// Capture clicks and pointer motion for day, header and picker cells
    pub mouse_capture: bool,
    pub title: String,
}

impl TerminalOptions {
    /// A fully disabled calendar has nothing to click or hover, so the
    /// terminal keeps its own mouse handling (text selection, scrollback).
    pub fn for_calendar(config: &CalendarConfig) -> Self {
        Self {
            mouse_capture: !config.disabled,
            title: format!("calendr: {} ({})", config.name, mode_label(config)),
        }
    }
}

fn mode_label(config: &CalendarConfig) -> &'static str {
    match config.mode {
        calendr_core::SelectionMode::Single => "date",
        calendr_core::SelectionMode::Range => "range",
    }
}

/// Enter the alternate screen in raw mode. The panic hook restores the
/// terminal with the same options before the panic is reported.
pub fn init(options: &TerminalOptions) -> io::Result<Tui> {
    let original_hook = panic::take_hook();
    let mouse_capture = options.mouse_capture;
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore(mouse_capture);
        original_hook(panic_info);
    }));

    execute!(stdout(), EnterAlternateScreen, SetTitle(&options.title))?;
    if options.mouse_capture {
        execute!(stdout(), EnableMouseCapture)?;
    }
    enable_raw_mode()?;
    log::debug!("Terminal initialised with {:?}", options);
    Terminal::new(CrosstermBackend::new(stdout()))
}

pub fn restore(mouse_capture: bool) -> io::Result<()> {
    if mouse_capture {
        execute!(stdout(), DisableMouseCapture)?;
    }
    execute!(stdout(), LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}
