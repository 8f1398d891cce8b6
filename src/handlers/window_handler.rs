use crate::errors::{GlassbarError, Result};
use crate::manager::Manager;
use crate::models::{Handle, Signal, SignalSource, WindowHandle};
use crate::platform::Platform;
use crate::settings::SettingsStore;

impl<H: Handle, S: SettingsStore, P: Platform<H>> Manager<H, S, P> {
    /// Start tracking a window actor: connect its allocation and
    /// visibility notifications and take ownership of the ids. Callers
    /// must not double-register; the platform fires actor-added once per
    /// actor lifecycle.
    pub fn window_added_handler(&mut self, handle: WindowHandle<H>) {
        let source = SignalSource::WindowActor(handle);
        let ids = vec![
            self.platform.connect(source, Signal::AllocationChanged),
            self.platform.connect(source, Signal::VisibilityChanged),
        ];
        tracing::debug!(?handle, "tracking window actor");
        self.state.subscriptions.record(source, ids);
    }

    /// Stop tracking a window actor, releasing its subscriptions exactly
    /// once, then recompute. Removing an actor that was never registered
    /// is a precondition violation.
    pub fn window_removed_handler(&mut self, handle: WindowHandle<H>) -> Result<()> {
        let source = SignalSource::WindowActor(handle);
        let ids = self
            .state
            .subscriptions
            .release(&source)
            .ok_or(GlassbarError::UnknownWindow)?;
        for id in ids {
            self.platform.disconnect(&source, id);
        }
        tracing::debug!(?handle, "untracked window actor");
        self.update_transparency()
    }
}
