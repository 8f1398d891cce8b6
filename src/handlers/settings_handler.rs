use std::time::Instant;

use crate::errors::Result;
use crate::manager::Manager;
use crate::models::Handle;
use crate::platform::Platform;
use crate::settings::{DarkFullScreen, SettingKey, SettingsStore, TRANSPARENCY};
use crate::utils::debounce::SETTLE_DELAY;

impl<H: Handle, S: SettingsStore, P: Platform<H>> Manager<H, S, P> {
    /// React to a preference-store change notification. Nothing happens
    /// immediately: the refresh is deferred by the settle delay, and
    /// rapid repeats for the same key collapse into the last one.
    pub fn setting_changed_handler(&mut self, key: &str, now: Instant) {
        match SettingKey::from_name(key) {
            Some(SettingKey::Transparency) => {
                // The outgoing level rides along so its marker can be
                // stripped once the change settles.
                let outgoing = self.state.transparency;
                self.state
                    .transparency_debounce
                    .begin(now + SETTLE_DELAY, outgoing);
            }
            Some(SettingKey::DarkFullScreen) => {
                if self.state.dark_full_screen.is_supported() {
                    self.state
                        .dark_full_screen_debounce
                        .begin(now + SETTLE_DELAY, ());
                }
            }
            None => {}
        }
    }

    /// Run every debounce cell whose deadline has passed: refresh the
    /// cached value from the store, drop stale level markers and
    /// recompute once.
    pub fn fire_due_debounces(&mut self, now: Instant) -> Result<()> {
        if let Some(outgoing_level) = self.state.transparency_debounce.fire_due(now) {
            self.state.transparency = self.settings.get_int(TRANSPARENCY);
            tracing::debug!(
                from = outgoing_level,
                to = self.state.transparency,
                "transparency level settled"
            );
            self.state.clear_level_markers(outgoing_level);
            self.update_transparency()?;
        }
        if self.state.dark_full_screen_debounce.fire_due(now).is_some() {
            self.state.dark_full_screen =
                DarkFullScreen::resolve(self.platform.shell_major_version(), &self.settings);
            self.state.clear_level_markers(self.state.transparency);
            self.update_transparency()?;
        }
        Ok(())
    }
}
