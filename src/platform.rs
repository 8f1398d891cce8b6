//! Compositor-side collaborator boundary.
use std::future::Future;
use std::pin::Pin;

use crate::models::{
    Handle, MonitorId, Rect, Signal, SignalSource, SubscriptionId, Window, WindowHandle,
};
use crate::platform_event::PlatformEvent;
use crate::style_action::StyleAction;

#[cfg(test)]
mod mock_platform;
#[cfg(test)]
pub use mock_platform::MockPlatform;

/// Everything the engine needs from the windowing platform: signal
/// connections, geometry queries and the event stream. All inputs are
/// trusted; none of these calls perform I/O that can fail.
pub trait Platform<H: Handle> {
    /// Register interest in `signal` on `source`. The returned id must be
    /// passed back to [`disconnect`](Platform::disconnect) exactly once.
    fn connect(&mut self, source: SignalSource<H>, signal: Signal) -> SubscriptionId;
    fn disconnect(&mut self, source: &SignalSource<H>, id: SubscriptionId);

    /// Window actors currently on screen, for bootstrap registration.
    fn window_actors(&self) -> Vec<WindowHandle<H>>;
    /// The active workspace's window list with decision-relevant
    /// attributes.
    fn active_workspace_windows(&self) -> Vec<Window<H>>;

    fn monitors(&self) -> Vec<MonitorId>;
    /// `None` while no primary monitor is known, e.g. during display
    /// reconfiguration.
    fn primary_monitor(&self) -> Option<MonitorId>;
    /// Screen rectangle of the bar on `monitor`, already positioned by
    /// the shell. `None` when the monitor hosts no bar.
    fn panel_rect(&self, monitor: MonitorId) -> Option<Rect>;
    fn scale_factor(&self) -> f32;

    fn overview_visible(&self) -> bool;
    /// Whether the session mode manages any windows at all.
    fn session_has_windows(&self) -> bool;
    fn is_wayland(&self) -> bool;
    fn shell_major_version(&self) -> u32;

    /// Apply one style-marker mutation on the render layer.
    fn execute_action(&mut self, action: StyleAction);

    fn wait_readable(&self) -> Pin<Box<dyn Future<Output = ()>>>;
    fn get_next_events(&mut self) -> Vec<PlatformEvent<H>>;
}
