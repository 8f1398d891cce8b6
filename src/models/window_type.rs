use serde::{Deserialize, Serialize};

/// Compositor-reported window kind. Only `Desktop` changes the
/// transparency decision; the rest preserve the platform vocabulary.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowType {
    Desktop,
    Dock,
    Toolbar,
    Menu,
    Utility,
    Splash,
    Dialog,
    Normal,
}
