use std::time::Instant;

use tokio::time::sleep_until;

use crate::errors::Result;
use crate::manager::Manager;
use crate::models::Handle;
use crate::platform::Platform;
use crate::platform_event::PlatformEvent;
use crate::settings::SettingsStore;

impl<H: Handle, S: SettingsStore, P: Platform<H>> Manager<H, S, P> {
    /// Drive the engine from the platform's event queue: activate, then
    /// alternate between waiting for platform events and the earliest
    /// debounce deadline. Events are buffered and handled in delivery
    /// order, each to completion. Returns only when a precondition
    /// violation surfaces.
    pub async fn event_loop(mut self) -> Result<()> {
        self.activate()?;
        let mut event_buffer: Vec<PlatformEvent<H>> = vec![];
        loop {
            self.flush_actions();

            let deadline = self
                .state
                .next_debounce_deadline()
                .map(tokio::time::Instant::from_std);
            tokio::select! {
                () = self.platform.wait_readable(), if event_buffer.is_empty() => {
                    event_buffer.append(&mut self.platform.get_next_events());
                    continue;
                }
                () = sleep_until(deadline.unwrap_or_else(tokio::time::Instant::now)),
                    if event_buffer.is_empty() && deadline.is_some() =>
                {
                    self.fire_due_debounces(Instant::now())?;
                }
                else => {
                    for event in event_buffer.drain(..) {
                        self.platform_event_handler(event, Instant::now())?;
                    }
                }
            }
        }
    }
}
