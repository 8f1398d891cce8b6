use crate::models::{Handle, WindowHandle};

/// Events delivered by the compositor platform's single queue. Each one
/// maps to exactly one handler call; no reordering is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformEvent<H: Handle> {
    WindowActorAdded(WindowHandle<H>),
    WindowActorRemoved(WindowHandle<H>),
    AllocationChanged(WindowHandle<H>),
    VisibilityChanged(WindowHandle<H>),
    WorkspaceSwitched,
    OverviewShowing,
    OverviewHiding,
    SessionModeUpdated,
    /// Raw preference key name; unrecognized keys are ignored.
    SettingChanged(String),
}
