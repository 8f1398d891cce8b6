//! Preference-store boundary and the cached setting values.

pub const TRANSPARENCY: &str = "transparency";
pub const DARK_FULL_SCREEN: &str = "dark-full-screen";

/// First shell major version whose schema carries the dark-full-screen
/// preference.
pub const DARK_FULL_SCREEN_MIN_VERSION: u32 = 40;

/// Read access to the externally owned preference store. Change
/// notifications arrive through the platform event queue as
/// [`crate::PlatformEvent::SettingChanged`].
pub trait SettingsStore {
    fn get_int(&self, key: &str) -> i32;
    fn get_boolean(&self, key: &str) -> bool;
}

/// The preference keys this engine reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    Transparency,
    DarkFullScreen,
}

impl SettingKey {
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            TRANSPARENCY => Some(Self::Transparency),
            DARK_FULL_SCREEN => Some(Self::DarkFullScreen),
            _ => None,
        }
    }
}

/// Version-gated capability, resolved once at activation. Shells older
/// than [`DARK_FULL_SCREEN_MIN_VERSION`] have no such preference; there
/// the behavior is pinned to enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DarkFullScreen {
    Supported(bool),
    #[default]
    Unsupported,
}

impl DarkFullScreen {
    #[must_use]
    pub fn resolve(shell_major: u32, settings: &impl SettingsStore) -> Self {
        if shell_major >= DARK_FULL_SCREEN_MIN_VERSION {
            Self::Supported(settings.get_boolean(DARK_FULL_SCREEN))
        } else {
            Self::Unsupported
        }
    }

    /// Whether near windows should darken the bar at all. When disabled
    /// the bar stays transparent regardless of geometry.
    #[must_use]
    pub const fn enabled(self) -> bool {
        match self {
            Self::Supported(value) => value,
            Self::Unsupported => true,
        }
    }

    #[must_use]
    pub const fn is_supported(self) -> bool {
        matches!(self, Self::Supported(_))
    }
}

#[cfg(test)]
pub struct TestSettings {
    pub transparency: i32,
    pub dark_full_screen: bool,
    pub int_reads: std::cell::Cell<usize>,
}

#[cfg(test)]
impl Default for TestSettings {
    fn default() -> Self {
        Self {
            transparency: 40,
            dark_full_screen: true,
            int_reads: std::cell::Cell::new(0),
        }
    }
}

#[cfg(test)]
impl SettingsStore for TestSettings {
    fn get_int(&self, key: &str) -> i32 {
        assert_eq!(key, TRANSPARENCY);
        self.int_reads.set(self.int_reads.get() + 1);
        self.transparency
    }

    fn get_boolean(&self, key: &str) -> bool {
        assert_eq!(key, DARK_FULL_SCREEN);
        self.dark_full_screen
    }
}
