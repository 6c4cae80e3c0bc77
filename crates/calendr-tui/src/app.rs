/// Main application struct and event loop
use crate::actions::Action;
use crate::dispatcher::{ActionReceiver, Dispatcher};
use crate::effects::Effects;
use crate::keyboard;
use crate::logger::LogBuffer;
use crate::stores::{AppLogsStore, CalendarStore, PickOutcome, UIStore};
use crate::ui::render_layout;
use calendr_core::CalendarConfig;
use calendr_core::get_calendr_setting;
use ratatui::crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::Rect;
use std::io;
use std::time::Duration;

/// The main application structure following flux architecture
pub struct App {
    dispatcher: Dispatcher,
    calendar_store: CalendarStore,
    ui_store: UIStore,
    app_logs_store: AppLogsStore,
    effects: Effects,
    /// Area of the last drawn frame, used for mouse hit-testing
    screen: Rect,
}

impl App {
    pub fn new(config: CalendarConfig, log_buffer: LogBuffer) -> (Self, ActionReceiver) {
        let (dispatcher, action_receiver) = Dispatcher::channel();

        let calendar_store = CalendarStore::new(config);
        let ui_store = UIStore::new();
        let app_logs_store = AppLogsStore::new(log_buffer);
        let mut effects = Effects::new(dispatcher.clone());
        effects.set_calendar_store(calendar_store.clone());

        (
            Self {
                dispatcher,
                calendar_store,
                ui_store,
                app_logs_store,
                effects,
                screen: Rect::default(),
            },
            action_receiver,
        )
    }

    pub fn outcome(&self) -> PickOutcome {
        self.calendar_store.outcome()
    }

    /// Main event loop
    pub async fn run(
        &mut self,
        terminal: &mut crate::tui::Tui,
        mut action_receiver: ActionReceiver,
    ) -> io::Result<()> {
        log::info!("calendr TUI started");
        let poll_interval =
            Duration::from_millis(get_calendr_setting!(CALENDR_FRAME_MS, usize) as u64);

        // first width observation
        let size = terminal.size()?;
        self.dispatcher.resized(Some(size.width as usize));

        loop {
            let mut screen = self.screen;
            terminal.draw(|frame| {
                screen = frame.area();
                render_layout(
                    frame,
                    &self.calendar_store,
                    &self.ui_store,
                    &self.app_logs_store,
                );
            })?;
            self.screen = screen;

            if self.ui_store.should_exit() {
                break;
            }

            tokio::select! {
                // Poll for keyboard, mouse and resize events
                _ = tokio::time::sleep(poll_interval) => {
                    if event::poll(Duration::from_millis(0))? {
                        if let Some(action) = self.map_event(event::read()?) {
                            self.dispatcher.dispatch(action);
                        }
                    }
                }

                // Process actions from the dispatcher
                Some(action) = action_receiver.recv() => {
                    self.handle_action(&action);
                    for action in action_receiver.drain_ready() {
                        self.handle_action(&action);
                    }
                }
            }
        }

        Ok(())
    }

    fn map_event(&self, event: Event) -> Option<Action> {
        match event {
            // Only process key press events (not release)
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                keyboard::handle_key_event(
                    key_event,
                    &self.ui_store,
                    &self.calendar_store,
                    &self.app_logs_store,
                )
            }
            Event::Mouse(mouse_event)
                if matches!(
                    mouse_event.kind,
                    MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Moved
                ) =>
            {
                keyboard::handle_mouse_event(
                    mouse_event,
                    self.screen,
                    &self.ui_store,
                    &self.calendar_store,
                )
            }
            Event::Resize(width, _) => Some(Action::Resized(Some(width as usize))),
            _ => None,
        }
    }

    /// Handle an action by routing it to stores and effects
    fn handle_action(&mut self, action: &Action) {
        log::debug!("Handling action: {:?}", action);

        self.calendar_store.reduce(action);
        self.ui_store.reduce(action);
        self.app_logs_store.reduce(action);

        self.effects.handle(action);
    }
}
