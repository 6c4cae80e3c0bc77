/// Core Action types for the flux architecture.
/// All state mutations flow through Actions dispatched to the Dispatcher.
use calendr_core::KeyPress;
use calendr_core::header::HeaderIntent;
use chrono::NaiveDate;

/// Represents all possible user intents and system events in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // ===== UI Actions (user-initiated) =====
    /// Navigation key for the calendar (grid or open picker)
    Key(KeyPress),

    /// User clicked a day cell
    ClickDay(NaiveDate),

    /// Pointer moved; carries the day under it, if any
    PointerMoved(Option<NaiveDate>),

    /// Prev/next or month/year label activated in a pane header
    Header(HeaderIntent),

    /// Month cell clicked in the month picker (0-based)
    PickMonth(u32),

    /// Year cell clicked in the year picker
    PickYear(i32),

    /// Clear selection, focus and overlay
    Reset,

    /// User toggled the help overlay
    ToggleHelp,

    /// User toggled the application log overlay
    ToggleLogs,

    // ===== System/Effect Actions (emitted by Effects) =====
    /// Terminal was resized, width in columns if known
    Resized(Option<usize>),

    /// Coalesced width observation, at most one per frame
    WidthObserved(Option<usize>),

    /// Announcement timer elapsed for the given generation
    ClearAnnouncement(u64),

    /// Application should exit
    Quit,
}

impl Action {
    /// Emitted by effects rather than by the user
    pub fn is_system(&self) -> bool {
        matches!(
            self,
            Self::Resized(_) | Self::WidthObserved(_) | Self::ClearAnnouncement(_)
        )
    }
}
