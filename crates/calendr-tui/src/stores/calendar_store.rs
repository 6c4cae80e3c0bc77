/// CalendarStore owns the calendar engine and turns actions into engine calls
use crate::actions::Action;
use calendr_core::locale::Locale;
use calendr_core::models::PickerState;
use calendr_core::{
    CalendarConfig, CalendarEngine, CalendarIntent, MemoryFormSink, PaneView, SelectionMode,
};
use chrono::NaiveDate;
use log::{info, warn};
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::{Arc, RwLock};

const MAX_INTENT_LOG: usize = 50;

struct CalendarState {
    engine: CalendarEngine,
    form: MemoryFormSink,
    name: String,
    intent_log: VecDeque<String>,
    pointer_day: Option<NaiveDate>,
}

/// Read-only view of everything the UI draws
#[derive(Debug, Clone)]
pub struct CalendarSnapshot {
    pub panes: Vec<PaneView>,
    pub weekday_labels: Vec<&'static str>,
    pub locale: &'static Locale,
    pub mode: SelectionMode,
    pub value: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub announcement: Option<String>,
    pub announcement_generation: u64,
    pub picker: PickerState,
    pub focused_date: Option<NaiveDate>,
    pub pointer_day: Option<NaiveDate>,
    pub is_dual: bool,
    pub keyboard_enabled: bool,
    pub intent_log: Vec<String>,
}

/// What the picker session ended with
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickOutcome {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// last value written to the form field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_value: Option<String>,
}

#[derive(Clone)]
pub struct CalendarStore {
    state: Arc<RwLock<CalendarState>>,
}

impl CalendarStore {
    pub fn new(config: CalendarConfig) -> Self {
        Self::from_engine(config.name.clone(), CalendarEngine::new(config))
    }

    pub fn from_engine(name: String, mut engine: CalendarEngine) -> Self {
        let form = MemoryFormSink::new();
        engine.set_form_sink(Box::new(form.clone()));
        Self {
            state: Arc::new(RwLock::new(CalendarState {
                engine,
                form,
                name,
                intent_log: VecDeque::with_capacity(MAX_INTENT_LOG),
                pointer_day: None,
            })),
        }
    }

    /// Get a read-only snapshot of the current state
    pub fn get_state(&self) -> CalendarSnapshot {
        let state = self.state.read().unwrap();
        let engine = &state.engine;
        CalendarSnapshot {
            panes: engine.pane_views(),
            weekday_labels: engine.weekday_labels(),
            locale: engine.locale(),
            mode: engine.mode(),
            value: engine.value(),
            start_date: engine.start_date(),
            end_date: engine.end_date(),
            announcement: engine.announcement().map(str::to_string),
            announcement_generation: engine.announcement_generation(),
            picker: engine.picker_state(),
            focused_date: engine.focused_date(),
            pointer_day: state.pointer_day,
            is_dual: engine.is_dual(),
            keyboard_enabled: engine.keyboard_enabled(),
            intent_log: state.intent_log.iter().cloned().collect(),
        }
    }

    pub fn announcement_generation(&self) -> u64 {
        self.state.read().unwrap().engine.announcement_generation()
    }

    pub fn has_announcement(&self) -> bool {
        self.state.read().unwrap().engine.announcement().is_some()
    }

    pub fn outcome(&self) -> PickOutcome {
        let state = self.state.read().unwrap();
        PickOutcome {
            name: state.name.clone(),
            value: state.engine.value(),
            start_date: state.engine.start_date(),
            end_date: state.engine.end_date(),
            form_value: state.form.get(&state.name),
        }
    }

    /// Reducer: handle an action and update state accordingly
    pub fn reduce(&self, action: &Action) {
        let mut state = self.state.write().unwrap();

        match action {
            Action::Key(press) => {
                state.engine.handle_key(*press);
            }
            Action::ClickDay(date) => {
                state.engine.click_day(*date);
            }
            Action::PointerMoved(day) => {
                if *day != state.pointer_day {
                    if let Some(previous) = state.pointer_day.take() {
                        state.engine.leave_day(previous);
                    }
                    if let Some(current) = day {
                        state.engine.hover_day(*current);
                    }
                    state.pointer_day = *day;
                }
            }
            Action::Header(intent) => {
                state.engine.apply_header_intent(intent.clone());
            }
            Action::PickMonth(month0) => {
                state.engine.select_month(*month0);
            }
            Action::PickYear(year) => {
                if let Err(e) = state.engine.select_year(*year) {
                    warn!("Year not selectable: {}", e);
                }
            }
            Action::WidthObserved(width) => {
                state.engine.observe_width(*width);
            }
            Action::ClearAnnouncement(generation) => {
                state.engine.clear_announcement(*generation);
            }
            Action::Reset => {
                state.engine.reset();
            }
            _ => {
                // Ignore actions not relevant to this store
            }
        }

        for intent in state.engine.drain_intents() {
            record_intent(&mut state.intent_log, &intent);
        }
    }
}

fn record_intent(log: &mut VecDeque<String>, intent: &CalendarIntent) {
    let line = match serde_json::to_string(intent) {
        Ok(json) => json,
        Err(e) => {
            warn!("Could not serialise intent {:?}: {}", intent, e);
            return;
        }
    };
    info!("intent {}", line);
    if log.len() >= MAX_INTENT_LOG {
        log.pop_front();
    }
    log.push_back(line);
}
