//! Ownership of platform signal connections.
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{Handle, WindowHandle};

/// Opaque identifier returned by [`crate::Platform::connect`]. Must be
/// handed back to `disconnect` exactly once.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// The entity a signal connection was made on.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(bound = "")]
pub enum SignalSource<H: Handle> {
    Overview,
    SessionMode,
    WindowGroup,
    WindowManager,
    Settings,
    WindowActor(WindowHandle<H>),
}

/// Per-source signal names a connection can be made for.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    OverviewShowing,
    OverviewHiding,
    SessionModeUpdated,
    ActorAdded,
    ActorRemoved,
    WorkspaceSwitched,
    AllocationChanged,
    VisibilityChanged,
    SettingChanged,
}

/// Owning map from a source to its live connection ids. Every id stored
/// here was handed out by the platform and has not yet been released.
#[derive(Debug, Default)]
pub struct SubscriptionRegistry<H: Handle> {
    entries: HashMap<SignalSource<H>, Vec<SubscriptionId>>,
}

impl<H: Handle> SubscriptionRegistry<H> {
    pub fn record(&mut self, source: SignalSource<H>, ids: Vec<SubscriptionId>) {
        self.entries.entry(source).or_default().extend(ids);
    }

    /// Take ownership of all ids held for `source`, or `None` if the
    /// source was never recorded.
    pub fn release(&mut self, source: &SignalSource<H>) -> Option<Vec<SubscriptionId>> {
        self.entries.remove(source)
    }

    #[must_use]
    pub fn contains(&self, source: &SignalSource<H>) -> bool {
        self.entries.contains_key(source)
    }

    /// Empty the registry, yielding every held id for release.
    pub fn drain(&mut self) -> Vec<(SignalSource<H>, Vec<SubscriptionId>)> {
        self.entries.drain().collect()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
