/// AppLogsStore mirrors the in-memory log buffer for the log overlay
use crate::actions::Action;
use crate::logger::LogBuffer;
use std::sync::{Arc, RwLock};

#[derive(Debug, Clone, Default)]
pub struct AppLogsState {
    /// Formatted log lines
    pub logs: Vec<String>,

    /// Lines scrolled up from the most recent entry
    pub scroll_offset: usize,
}

#[derive(Clone)]
pub struct AppLogsStore {
    state: Arc<RwLock<AppLogsState>>,
    log_buffer: LogBuffer,
}

impl AppLogsStore {
    pub fn new(log_buffer: LogBuffer) -> Self {
        Self {
            state: Arc::new(RwLock::new(AppLogsState::default())),
            log_buffer,
        }
    }

    pub fn get_state(&self) -> AppLogsState {
        self.state.read().unwrap().clone()
    }

    /// Refresh logs from the buffer whenever the overlay may be looking
    pub fn reduce(&self, action: &Action) {
        match action {
            Action::ToggleLogs => self.scroll_to_bottom(),
            _ => {}
        }
        self.refresh_logs();
    }

    fn refresh_logs(&self) {
        let logs = self.log_buffer.get_logs();
        let mut state = self.state.write().unwrap();
        state.logs = logs;
    }

    pub fn scroll_down(&self, amount: usize) {
        let mut state = self.state.write().unwrap();
        state.scroll_offset = state.scroll_offset.saturating_sub(amount);
    }

    pub fn scroll_up(&self, amount: usize) {
        let mut state = self.state.write().unwrap();
        let max = state.logs.len();
        state.scroll_offset = state.scroll_offset.saturating_add(amount).min(max);
    }

    pub fn scroll_to_bottom(&self) {
        self.state.write().unwrap().scroll_offset = 0;
    }
}
