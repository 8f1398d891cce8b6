mod platform_event_handler;
mod settings_handler;
mod transparency_handler;
mod window_handler;
