//! Window information.
#![allow(clippy::module_name_repetitions)]

use std::fmt::Debug;
use std::hash::Hash;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::models::{MonitorId, Rect, WindowType};

/// A trait which backend specific window-actor handles need to implement.
pub trait Handle:
    Serialize
    + DeserializeOwned
    + Debug
    + Clone
    + Copy
    + PartialEq
    + Eq
    + Hash
    + Default
    + Send
    + 'static
{
}

/// A backend-agnostic handle to a window used to identify it.
///
/// # Serde
///
/// Using generics here with serde derive macros causes some weird
/// behaviour with the compiler, so as suggested by [this `serde`
/// issue][serde-issue], just adding `#[serde(bound = "")]` everywhere the
/// generic is declared fixes the bug.
///
/// [serde-issue]: https://github.com/serde-rs/serde/issues/1296
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle<H>(#[serde(bound = "")] pub H)
where
    H: Handle;

/// Handle for testing purposes.
pub type MockHandle = i32;
impl Handle for MockHandle {}

/// The attributes of an on-screen window that the transparency decision
/// looks at.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Window<H: Handle> {
    #[serde(bound = "")]
    pub handle: WindowHandle<H>,
    pub frame: Rect,
    pub monitor: MonitorId,
    pub r#type: WindowType,
    pub hidden: bool,
    pub shown_on_workspace: bool,
    pub skip_taskbar: bool,
}

impl<H: Handle> Window<H> {
    #[must_use]
    pub fn new(handle: WindowHandle<H>, frame: Rect, monitor: MonitorId) -> Self {
        Self {
            handle,
            frame,
            monitor,
            r#type: WindowType::Normal,
            hidden: false,
            shown_on_workspace: true,
            skip_taskbar: false,
        }
    }

    /// Whether this window participates in panel proximity decisions.
    /// The skip-taskbar flag only carries meaning on Wayland compositors.
    #[must_use]
    pub fn is_tracked(&self, on_wayland: bool) -> bool {
        self.shown_on_workspace
            && !self.hidden
            && self.r#type != WindowType::Desktop
            && (!on_wayland || !self.skip_taskbar)
    }
}
