use std::collections::{BTreeSet, HashMap};
use std::future::Future;
use std::pin::Pin;

use super::Platform;
use crate::models::{
    MockHandle, MonitorId, Rect, Signal, SignalSource, SubscriptionId, Window, WindowHandle,
};
use crate::platform_event::PlatformEvent;
use crate::style_action::StyleAction;

/// In-memory platform for tests: hands out connection ids, answers the
/// geometry queries from plain fields and applies style actions to
/// per-monitor class sets.
#[derive(Debug)]
pub struct MockPlatform {
    next_id: u64,
    pub connections: HashMap<SignalSource<MockHandle>, Vec<(Signal, SubscriptionId)>>,
    pub actors: Vec<WindowHandle<MockHandle>>,
    pub windows: Vec<Window<MockHandle>>,
    pub monitors: Vec<MonitorId>,
    pub primary: Option<MonitorId>,
    pub panels: HashMap<MonitorId, Rect>,
    pub classes: HashMap<MonitorId, BTreeSet<String>>,
    pub scale: f32,
    pub overview: bool,
    pub has_windows: bool,
    pub wayland: bool,
    pub shell_version: u32,
    pub queued: Vec<PlatformEvent<MockHandle>>,
}

impl Default for MockPlatform {
    fn default() -> Self {
        Self {
            next_id: 0,
            connections: HashMap::new(),
            actors: Vec::new(),
            windows: Vec::new(),
            monitors: vec![0],
            primary: Some(0),
            panels: HashMap::from([(0, Rect::new(0, 0, 1920, 32))]),
            classes: HashMap::new(),
            scale: 1.0,
            overview: false,
            has_windows: true,
            wayland: false,
            shell_version: 45,
            queued: Vec::new(),
        }
    }
}

impl MockPlatform {
    pub fn connection_count(&self) -> usize {
        self.connections.values().map(Vec::len).sum()
    }

    pub fn classes_on(&self, monitor: MonitorId) -> BTreeSet<String> {
        self.classes.get(&monitor).cloned().unwrap_or_default()
    }
}

impl Platform<MockHandle> for MockPlatform {
    fn connect(&mut self, source: SignalSource<MockHandle>, signal: Signal) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.connections.entry(source).or_default().push((signal, id));
        id
    }

    fn disconnect(&mut self, source: &SignalSource<MockHandle>, id: SubscriptionId) {
        let held = self
            .connections
            .get_mut(source)
            .expect("disconnect on a source with no connections");
        let index = held
            .iter()
            .position(|(_, held_id)| *held_id == id)
            .expect("disconnect with an id that was never handed out");
        held.remove(index);
        if held.is_empty() {
            self.connections.remove(source);
        }
    }

    fn window_actors(&self) -> Vec<WindowHandle<MockHandle>> {
        self.actors.clone()
    }

    fn active_workspace_windows(&self) -> Vec<Window<MockHandle>> {
        self.windows.clone()
    }

    fn monitors(&self) -> Vec<MonitorId> {
        self.monitors.clone()
    }

    fn primary_monitor(&self) -> Option<MonitorId> {
        self.primary
    }

    fn panel_rect(&self, monitor: MonitorId) -> Option<Rect> {
        self.panels.get(&monitor).copied()
    }

    fn scale_factor(&self) -> f32 {
        self.scale
    }

    fn overview_visible(&self) -> bool {
        self.overview
    }

    fn session_has_windows(&self) -> bool {
        self.has_windows
    }

    fn is_wayland(&self) -> bool {
        self.wayland
    }

    fn shell_major_version(&self) -> u32 {
        self.shell_version
    }

    fn execute_action(&mut self, action: StyleAction) {
        match action {
            StyleAction::AddClass { monitor, class } => {
                self.classes.entry(monitor).or_default().insert(class);
            }
            StyleAction::RemoveClass { monitor, class } => {
                self.classes.entry(monitor).or_default().remove(&class);
            }
        }
    }

    fn wait_readable(&self) -> Pin<Box<dyn Future<Output = ()>>> {
        unimplemented!()
    }

    fn get_next_events(&mut self) -> Vec<PlatformEvent<MockHandle>> {
        std::mem::take(&mut self.queued)
    }
}
