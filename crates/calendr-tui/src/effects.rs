/// Effects module handles timed side effects.
/// Effects are triggered by Actions and dispatch new Actions with results
use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::stores::CalendarStore;
use calendr_core::get_calendr_setting;
use calendr_core::layout::{ResizeCoalescer, SizeObserver};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task;

/// Width source backed by the latest resize event
#[derive(Clone)]
pub struct TerminalWidth {
    rx: watch::Receiver<Option<usize>>,
}

impl SizeObserver for TerminalWidth {
    fn available_width(&self) -> Option<usize> {
        *self.rx.borrow()
    }
}

pub struct Effects {
    dispatcher: Dispatcher,
    calendar_store: Option<CalendarStore>,
    coalescer: Arc<Mutex<ResizeCoalescer>>,
    width_tx: watch::Sender<Option<usize>>,
    width: TerminalWidth,
    frame: Duration,
    announce_clear: Duration,
    /// last announcement generation a clear timer was started for
    scheduled_generation: u64,
}

impl Effects {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self::with_timings(
            dispatcher,
            Duration::from_millis(get_calendr_setting!(CALENDR_FRAME_MS, usize) as u64),
            Duration::from_millis(get_calendr_setting!(CALENDR_ANNOUNCE_CLEAR_MS, usize) as u64),
        )
    }

    pub fn with_timings(dispatcher: Dispatcher, frame: Duration, announce_clear: Duration) -> Self {
        let (width_tx, rx) = watch::channel(None);
        Self {
            dispatcher,
            calendar_store: None,
            coalescer: Arc::new(Mutex::new(ResizeCoalescer::new())),
            width_tx,
            width: TerminalWidth { rx },
            frame,
            announce_clear,
            scheduled_generation: 0,
        }
    }

    pub fn set_calendar_store(&mut self, store: CalendarStore) {
        self.scheduled_generation = store.announcement_generation();
        self.calendar_store = Some(store);
    }

    /// Handle an action and execute any necessary side effects.
    /// Runs after the stores have reduced the action.
    pub fn handle(&mut self, action: &Action) {
        if let Action::Resized(width) = action {
            self.schedule_width_observation(*width);
        }
        self.schedule_announcement_clear();
    }

    /// Record the width and evaluate it once on the next frame, however
    /// many resize events arrive before then
    fn schedule_width_observation(&self, width: Option<usize>) {
        self.width_tx.send_replace(width);
        if !self.coalescer.lock().unwrap().notify() {
            return;
        }
        let dispatcher = self.dispatcher.clone();
        let coalescer = self.coalescer.clone();
        let observer = self.width.clone();
        let frame = self.frame;

        task::spawn(async move {
            tokio::time::sleep(frame).await;
            let width = coalescer.lock().unwrap().fire(&observer);
            log::debug!("Frame width observation: {:?}", width);
            dispatcher.width_observed(width);
        });
    }

    /// Start a clear timer for a fresh announcement. A newer announcement
    /// bumps the generation, so an older timer's clear becomes a no-op.
    fn schedule_announcement_clear(&mut self) {
        let Some(store) = self.calendar_store.as_ref() else {
            return;
        };
        let generation = store.announcement_generation();
        if generation == self.scheduled_generation || !store.has_announcement() {
            return;
        }
        self.scheduled_generation = generation;
        let dispatcher = self.dispatcher.clone();
        let delay = self.announce_clear;

        task::spawn(async move {
            tokio::time::sleep(delay).await;
            dispatcher.clear_announcement(generation);
        });
    }
}
