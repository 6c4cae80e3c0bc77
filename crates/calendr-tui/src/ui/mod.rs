/// UI module - panes, overlays and the geometry they share with mouse handling
pub mod geometry;
pub mod layout;
pub mod logs_panel;
pub mod pane;

pub use layout::render_layout;
pub use logs_panel::LogsPanel;
pub use pane::PaneWidget;
