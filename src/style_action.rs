use crate::models::MonitorId;

/// A change the render layer needs to make to a panel's style markers.
/// Queued on [`crate::State`] by the handlers and drained by the event
/// loop into [`crate::Platform::execute_action`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleAction {
    AddClass { monitor: MonitorId, class: String },
    RemoveClass { monitor: MonitorId, class: String },
}
