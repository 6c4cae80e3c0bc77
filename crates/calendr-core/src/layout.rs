/// Pane-count policy for range calendars and the width observation plumbing behind it
use crate::get_calendr_setting;
use crate::models::{RangeCalendars, SelectionMode};

/// Source of the available width for the widget. Returns `None` when no
/// resizable container can be observed, in which case the "auto" policy
/// never switches to two panes.
pub trait SizeObserver {
    fn available_width(&self) -> Option<usize>;
}

/// Fixed width source, used when the host already knows its width
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedWidth(pub Option<usize>);

impl SizeObserver for FixedWidth {
    fn available_width(&self) -> Option<usize> {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneLayoutPolicy {
    setting: RangeCalendars,
    threshold: usize,
    observed_width: Option<usize>,
}

impl PaneLayoutPolicy {
    /// Threshold comes from `CALENDR_DUAL_PANE_MIN_WIDTH`
    pub fn new(setting: RangeCalendars) -> Self {
        Self::with_threshold(setting, get_calendr_setting!(CALENDR_DUAL_PANE_MIN_WIDTH, usize))
    }

    pub fn with_threshold(setting: RangeCalendars, threshold: usize) -> Self {
        Self {
            setting,
            threshold,
            observed_width: None,
        }
    }

    pub fn setting(&self) -> RangeCalendars {
        self.setting
    }

    pub fn set_setting(&mut self, setting: RangeCalendars) {
        self.setting = setting;
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn observed_width(&self) -> Option<usize> {
        self.observed_width
    }

    pub fn observe_width(&mut self, width: Option<usize>) {
        self.observed_width = width;
    }

    /// Whether two panes should be shown for `mode`
    pub fn is_dual(&self, mode: SelectionMode) -> bool {
        if mode != SelectionMode::Range {
            return false;
        }
        match self.setting {
            RangeCalendars::One => false,
            RangeCalendars::Two => true,
            RangeCalendars::Auto => self
                .observed_width
                .map(|width| width >= self.threshold)
                .unwrap_or(false),
        }
    }
}

/// Coalesces a burst of resize notifications into one evaluation per frame.
/// `notify` says whether a frame has to be scheduled; `fire` runs at the
/// frame and reads whatever width is current at that moment.
#[derive(Debug, Default)]
pub struct ResizeCoalescer {
    scheduled: bool,
}

impl ResizeCoalescer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the caller must schedule a frame callback
    pub fn notify(&mut self) -> bool {
        if self.scheduled {
            false
        } else {
            self.scheduled = true;
            true
        }
    }

    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    pub fn fire(&mut self, observer: &dyn SizeObserver) -> Option<usize> {
        self.scheduled = false;
        observer.available_width()
    }
}
