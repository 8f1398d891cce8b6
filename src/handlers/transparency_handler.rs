use std::collections::HashMap;

use crate::errors::{GlassbarError, Result};
use crate::manager::Manager;
use crate::models::{window_near_panel, Handle, MonitorId, Panel, Rect};
use crate::platform::Platform;
use crate::settings::SettingsStore;
use crate::state::State;

impl<H: Handle, S: SettingsStore, P: Platform<H>> Manager<H, S, P> {
    /// The central decision procedure: recompute every panel's style from
    /// the current platform state. Invoked by every trigger.
    pub fn update_transparency(&mut self) -> Result<()> {
        if !self.active {
            return Err(GlassbarError::NotActive);
        }
        self.sync_panels();

        if !self.state.dark_full_screen.enabled() {
            self.state.apply_all(true);
            return Ok(());
        }
        if self.platform.overview_visible() || !self.platform.session_has_windows() {
            self.state.apply_all(true);
            return Ok(());
        }
        // Mid display reconfiguration; the next trigger will catch up.
        if self.platform.primary_monitor().is_none() {
            return Ok(());
        }

        let on_wayland = self.platform.is_wayland();
        let scale = self.platform.scale_factor();
        let mut frames: HashMap<MonitorId, Vec<Rect>> = HashMap::new();
        for window in self.platform.active_workspace_windows() {
            if window.is_tracked(on_wayland) {
                frames.entry(window.monitor).or_default().push(window.frame);
            }
        }

        let State {
            panels,
            actions,
            transparency,
            ..
        } = &mut self.state;
        for panel in panels.iter_mut() {
            let Some(rect) = self.platform.panel_rect(panel.monitor) else {
                continue;
            };
            match frames.get(&panel.monitor) {
                Some(nearby) => {
                    let near = window_near_panel(rect, nearby, scale);
                    tracing::debug!(monitor = panel.monitor, near, "panel style decision");
                    panel.apply(!near, *transparency, actions);
                }
                // No windows on this monitor, nothing can crowd the bar.
                None => panel.apply(true, *transparency, actions),
            }
        }
        Ok(())
    }

    /// Align the panel collection with the monitors currently exposing a
    /// bar. Surviving panels keep their marker state; monitors without a
    /// bar are skipped silently.
    fn sync_panels(&mut self) {
        let live: Vec<MonitorId> = self
            .platform
            .monitors()
            .into_iter()
            .filter(|&monitor| self.platform.panel_rect(monitor).is_some())
            .collect();
        self.state.panels.retain(|panel| live.contains(&panel.monitor));
        for monitor in live {
            if !self.state.panels.iter().any(|panel| panel.monitor == monitor) {
                self.state.panels.push(Panel::new(monitor));
            }
        }
        self.state.panels.sort_by_key(|panel| panel.monitor);
    }
}
