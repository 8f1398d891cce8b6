//! Lifecycle owner: wires the collaborators together and guarantees
//! symmetric release of every subscription.
use crate::errors::Result;
use crate::models::{Handle, Signal, SignalSource};
use crate::platform::Platform;
use crate::settings::{DarkFullScreen, SettingsStore, TRANSPARENCY};
use crate::state::State;

/// Maintains the engine state together with the preference store and the
/// compositor platform it observes.
#[derive(Debug)]
pub struct Manager<H: Handle, S, P> {
    pub state: State<H>,
    pub settings: S,
    pub platform: P,
    pub(crate) active: bool,
}

impl<H: Handle, S: SettingsStore, P: Platform<H>> Manager<H, S, P> {
    pub fn new(settings: S, platform: P) -> Self {
        Self {
            state: State::new(),
            settings,
            platform,
            active: false,
        }
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Idempotent setup: cache the settings, connect every signal, pick
    /// up windows that already exist and run one initial recompute.
    pub fn activate(&mut self) -> Result<()> {
        if self.active {
            return Ok(());
        }
        self.state.transparency = self.settings.get_int(TRANSPARENCY);
        self.state.dark_full_screen =
            DarkFullScreen::resolve(self.platform.shell_major_version(), &self.settings);
        self.active = true;

        let ids = vec![self
            .platform
            .connect(SignalSource::Settings, Signal::SettingChanged)];
        self.state.subscriptions.record(SignalSource::Settings, ids);

        let ids = vec![
            self.platform
                .connect(SignalSource::Overview, Signal::OverviewShowing),
            self.platform
                .connect(SignalSource::Overview, Signal::OverviewHiding),
        ];
        self.state.subscriptions.record(SignalSource::Overview, ids);

        let ids = vec![self
            .platform
            .connect(SignalSource::SessionMode, Signal::SessionModeUpdated)];
        self.state
            .subscriptions
            .record(SignalSource::SessionMode, ids);

        // Windows that predate activation would be missed by the
        // actor-added signal alone.
        for handle in self.platform.window_actors() {
            self.window_added_handler(handle);
        }

        let ids = vec![
            self.platform
                .connect(SignalSource::WindowGroup, Signal::ActorAdded),
            self.platform
                .connect(SignalSource::WindowGroup, Signal::ActorRemoved),
        ];
        self.state
            .subscriptions
            .record(SignalSource::WindowGroup, ids);

        let ids = vec![self
            .platform
            .connect(SignalSource::WindowManager, Signal::WorkspaceSwitched)];
        self.state
            .subscriptions
            .record(SignalSource::WindowManager, ids);

        tracing::info!(
            subscriptions = self.state.subscriptions.total(),
            "transparency engine activated"
        );
        self.update_transparency()
    }

    /// Release every subscription created during activation or window
    /// registration, restore the solid baseline on all panels and drop
    /// the cached settings. No callback can mutate state afterwards.
    pub fn deactivate(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        for (source, ids) in self.state.subscriptions.drain() {
            for id in ids {
                self.platform.disconnect(&source, id);
            }
        }
        self.state.transparency_debounce.cancel();
        self.state.dark_full_screen_debounce.cancel();
        self.state.apply_all(false);
        self.flush_actions();
        self.active = false;
        tracing::info!("transparency engine deactivated");
        Ok(())
    }

    /// Push any queued style mutations to the render layer.
    pub fn flush_actions(&mut self) {
        while let Some(action) = self.state.actions.pop_front() {
            self.platform.execute_action(action);
        }
    }
}

#[cfg(test)]
impl Manager<crate::models::MockHandle, crate::settings::TestSettings, crate::platform::MockPlatform> {
    pub fn new_test() -> Self {
        Self::new(
            crate::settings::TestSettings::default(),
            crate::platform::MockPlatform::default(),
        )
    }
}
