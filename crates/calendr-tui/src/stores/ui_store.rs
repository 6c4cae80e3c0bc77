/// UIStore manages UI-specific state (overlays, exit flag)
use crate::actions::Action;
use std::sync::{Arc, RwLock};

#[derive(Debug, Clone, Default)]
pub struct UIState {
    /// Whether help overlay is visible
    pub show_help: bool,

    /// Whether the application log overlay is visible
    pub show_logs: bool,

    /// Last known terminal width in columns
    pub terminal_width: Option<usize>,

    /// Whether the application should exit
    pub should_exit: bool,
}

#[derive(Clone)]
pub struct UIStore {
    state: Arc<RwLock<UIState>>,
}

impl UIStore {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(UIState::default())),
        }
    }

    /// Get a read-only snapshot of the current state
    pub fn get_state(&self) -> UIState {
        self.state.read().unwrap().clone()
    }

    /// Reducer: handle an action and update state accordingly
    pub fn reduce(&self, action: &Action) {
        let mut state = self.state.write().unwrap();

        match action {
            Action::ToggleHelp => {
                state.show_help = !state.show_help;
                state.show_logs = false;
            }
            Action::ToggleLogs => {
                state.show_logs = !state.show_logs;
                state.show_help = false;
            }
            Action::Resized(width) => {
                state.terminal_width = *width;
            }
            Action::Quit => {
                state.should_exit = true;
            }
            _ => {
                // Ignore actions not relevant to this store
            }
        }
    }

    pub fn should_exit(&self) -> bool {
        self.state.read().unwrap().should_exit
    }
}
