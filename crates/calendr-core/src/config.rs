/// This config file lists out all the default values for the main CALENDR env configs.
/// All can be overridden by an ENV var of the same name. These should only be primitive types
///

/// minimum available width (terminal columns) at which the "auto" range layout shows two panes
pub static CALENDR_DUAL_PANE_MIN_WIDTH: usize = 60;

/// how long an accessibility announcement stays visible before it is cleared
pub static CALENDR_ANNOUNCE_CLEAR_MS: usize = 1500;

/// length of one render frame. Width observations are coalesced to one evaluation per frame
pub static CALENDR_FRAME_MS: usize = 16;

/// lowest year the year picker will commit
pub static CALENDR_MIN_YEAR: usize = 1000;

/// highest year the year picker will commit
pub static CALENDR_MAX_YEAR: usize = 9999;

/// locale used when the host does not supply one
pub static CALENDR_DEFAULT_LOCALE: &'static str = "en";
