//! Decides, per monitor, whether the top bar should draw transparent or
//! solid based on the windows crowding it, and keeps that decision fresh
//! across window, workspace, session and preference changes.
#![warn(clippy::pedantic)]
// Globally allowed because they otherwise make a lot of noise around
// screen-space integer math.
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
pub mod errors;
mod event_loop;
mod handlers;
mod manager;
pub mod models;
pub mod platform;
mod platform_event;
pub mod settings;
pub mod state;
mod style_action;
pub mod utils;

pub use manager::Manager;
pub use models::{Panel, Rect, Window, WindowHandle, WindowType};
pub use platform::Platform;
pub use platform_event::PlatformEvent;
pub use settings::{DarkFullScreen, SettingsStore};
pub use state::State;
pub use style_action::StyleAction;
