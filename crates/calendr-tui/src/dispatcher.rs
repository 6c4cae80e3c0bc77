/// Action channel between input handling, effect timers and the app loop.
/// Timers can fire after the loop has exited; their actions are dropped quietly.
use crate::actions::Action;
use tokio::sync::mpsc;

#[derive(Clone)]
pub struct Dispatcher {
    tx: mpsc::UnboundedSender<Action>,
}

impl Dispatcher {
    /// A connected dispatcher and receiver
    pub fn channel() -> (Self, ActionReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, ActionReceiver { rx })
    }

    pub fn dispatch(&self, action: Action) {
        log::trace!("Dispatching {:?}", action);
        if let Err(mpsc::error::SendError(action)) = self.tx.send(action) {
            if action.is_system() {
                log::debug!("App loop closed, dropping {:?}", action);
            } else {
                log::error!("Failed to dispatch action {:?}: app loop closed", action);
            }
        }
    }

    /// Raw terminal width change, coalesced by the effects
    pub fn resized(&self, width: Option<usize>) {
        self.dispatch(Action::Resized(width));
    }

    /// The one width evaluation for a frame
    pub fn width_observed(&self, width: Option<usize>) {
        self.dispatch(Action::WidthObserved(width));
    }

    /// Clear timer for the announcement of `generation` elapsed
    pub fn clear_announcement(&self, generation: u64) {
        self.dispatch(Action::ClearAnnouncement(generation));
    }
}

pub struct ActionReceiver {
    rx: mpsc::UnboundedReceiver<Action>,
}

impl ActionReceiver {
    pub async fn recv(&mut self) -> Option<Action> {
        self.rx.recv().await
    }

    /// Everything already queued, so a burst is reduced before one redraw
    pub fn drain_ready(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Ok(action) = self.rx.try_recv() {
            actions.push(action);
        }
        actions
    }
}
