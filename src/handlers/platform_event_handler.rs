use std::time::Instant;

use crate::errors::Result;
use crate::manager::Manager;
use crate::models::Handle;
use crate::platform::Platform;
use crate::platform_event::PlatformEvent;
use crate::settings::SettingsStore;

impl<H: Handle, S: SettingsStore, P: Platform<H>> Manager<H, S, P> {
    /// Route one platform event to its handler. Events are processed in
    /// queue order, each to completion before the next.
    pub fn platform_event_handler(
        &mut self,
        event: PlatformEvent<H>,
        now: Instant,
    ) -> Result<()> {
        match event {
            PlatformEvent::WindowActorAdded(handle) => {
                self.window_added_handler(handle);
                Ok(())
            }
            PlatformEvent::WindowActorRemoved(handle) => self.window_removed_handler(handle),
            PlatformEvent::AllocationChanged(_)
            | PlatformEvent::VisibilityChanged(_)
            | PlatformEvent::WorkspaceSwitched
            | PlatformEvent::OverviewShowing
            | PlatformEvent::OverviewHiding
            | PlatformEvent::SessionModeUpdated => self.update_transparency(),
            PlatformEvent::SettingChanged(key) => {
                self.setting_changed_handler(&key, now);
                Ok(())
            }
        }
    }
}
