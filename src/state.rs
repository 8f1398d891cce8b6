//! Live state of the decision engine, valid only while active.
use std::collections::VecDeque;
use std::time::Instant;

use crate::models::{Handle, Panel, SubscriptionRegistry};
use crate::settings::DarkFullScreen;
use crate::style_action::StyleAction;
use crate::utils::debounce::Debounce;

/// Everything the engine owns between activation and deactivation: the
/// per-monitor panels, the subscription registry, the cached settings and
/// the per-key debounce cells. Mutated only from event callbacks on the
/// single event-loop thread.
#[derive(Debug)]
pub struct State<H: Handle> {
    pub panels: Vec<Panel>,
    pub subscriptions: SubscriptionRegistry<H>,
    /// Cached `transparency` level, refreshed on settled change
    /// notifications.
    pub transparency: i32,
    pub dark_full_screen: DarkFullScreen,
    /// Snapshot of the outgoing level rides along so the orphaned
    /// level-specific marker can be stripped once the change settles.
    pub transparency_debounce: Debounce<i32>,
    pub dark_full_screen_debounce: Debounce<()>,
    /// Style mutations awaiting the render layer.
    pub actions: VecDeque<StyleAction>,
}

impl<H: Handle> State<H> {
    pub(crate) fn new() -> Self {
        Self {
            panels: Vec::new(),
            subscriptions: SubscriptionRegistry::default(),
            transparency: 0,
            dark_full_screen: DarkFullScreen::default(),
            transparency_debounce: Debounce::default(),
            dark_full_screen_debounce: Debounce::default(),
            actions: VecDeque::new(),
        }
    }

    /// Apply one target style to every known panel.
    pub fn apply_all(&mut self, transparent: bool) {
        let Self {
            panels,
            actions,
            transparency,
            ..
        } = self;
        for panel in panels {
            panel.apply(transparent, *transparency, actions);
        }
    }

    /// Strip the level-specific marker for `level` from every panel.
    pub fn clear_level_markers(&mut self, level: i32) {
        let Self {
            panels, actions, ..
        } = self;
        for panel in panels {
            panel.clear_level(level, actions);
        }
    }

    /// Earliest pending debounce deadline, if any timer is in flight.
    #[must_use]
    pub fn next_debounce_deadline(&self) -> Option<Instant> {
        [
            self.transparency_debounce.deadline(),
            self.dark_full_screen_debounce.deadline(),
        ]
        .into_iter()
        .flatten()
        .min()
    }
}
