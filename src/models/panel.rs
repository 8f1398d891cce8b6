//! A monitor's top bar and its discrete style markers.
use std::collections::{BTreeSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::models::MonitorId;
use crate::style_action::StyleAction;

pub const SOLID_CLASS: &str = "transparent-top-bar--solid";
pub const TRANSPARENT_CLASS: &str = "transparent-top-bar--transparent";

/// Marker carrying the concrete transparency level, e.g.
/// `transparent-top-bar--transparent-40`.
#[must_use]
pub fn level_class(level: i32) -> String {
    format!("{TRANSPARENT_CLASS}-{level}")
}

/// The top bar hosted on one monitor. The class set mirrors what the
/// render layer currently shows; every mutation that changes the set is
/// also queued as a [`StyleAction`] for the render layer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub monitor: MonitorId,
    classes: BTreeSet<String>,
}

impl Panel {
    #[must_use]
    pub fn new(monitor: MonitorId) -> Self {
        Self {
            monitor,
            classes: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    #[must_use]
    pub const fn classes(&self) -> &BTreeSet<String> {
        &self.classes
    }

    fn add_class(&mut self, class: String, actions: &mut VecDeque<StyleAction>) {
        if self.classes.insert(class.clone()) {
            actions.push_back(StyleAction::AddClass {
                monitor: self.monitor,
                class,
            });
        }
    }

    fn remove_class(&mut self, class: &str, actions: &mut VecDeque<StyleAction>) {
        if self.classes.remove(class) {
            actions.push_back(StyleAction::RemoveClass {
                monitor: self.monitor,
                class: class.to_string(),
            });
        }
    }

    /// Switch the panel to one of the two discrete states. Markers of the
    /// outgoing state are removed before the target markers are added, so
    /// the panel never holds both `solid` and `transparent` past the
    /// instant of transition. Re-applying the current state is a no-op.
    pub fn apply(&mut self, transparent: bool, level: i32, actions: &mut VecDeque<StyleAction>) {
        if transparent {
            self.remove_class(SOLID_CLASS, actions);
            self.add_class(TRANSPARENT_CLASS.to_string(), actions);
            self.add_class(level_class(level), actions);
        } else {
            self.remove_class(TRANSPARENT_CLASS, actions);
            self.remove_class(&level_class(level), actions);
            self.add_class(SOLID_CLASS.to_string(), actions);
        }
    }

    /// Strip the level-specific marker for `level`, leaving other markers
    /// untouched. Used when the configured level changes under the panel.
    pub fn clear_level(&mut self, level: i32, actions: &mut VecDeque<StyleAction>) {
        self.remove_class(&level_class(level), actions);
    }
}
