//! Core data types for panels, windows and subscriptions.
mod panel;
mod rect;
mod subscription;
mod window;
mod window_type;

pub use panel::{level_class, Panel, SOLID_CLASS, TRANSPARENT_CLASS};
pub use rect::{window_near_panel, Rect, PANEL_PROXIMITY_MARGIN};
pub use subscription::{Signal, SignalSource, SubscriptionId, SubscriptionRegistry};
pub use window::{Handle, MockHandle, Window, WindowHandle};
pub use window_type::WindowType;

/// Index of a physical monitor as reported by the compositor.
pub type MonitorId = usize;
