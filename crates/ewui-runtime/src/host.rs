//! Boundary between the interpreter and whatever displays the interface.

use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

use crate::component::{AudioSource, Component};
use crate::media::Transport;
use crate::tree::NodeId;

// ── Message ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warning,
}

/// Text the host shows to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub level: Level,
    pub text: String,
}

impl Message {
    pub fn info(text: impl Into<String>) -> Self {
        Self { level: Level::Info, text: text.into() }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self { level: Level::Warning, text: text.into() }
    }
}

// ── Host ──────────────────────────────────────────────────────────────────

/// Services the interpreter needs from the surrounding GUI layer.
///
/// Everything except [`show_message`](Host::show_message) has a no-op
/// default so a headless host only implements what it cares about. All
/// calls are made from the thread that owns the session.
pub trait Host {
    /// A window statement (or the synthesized default) created a new root.
    fn create_root_surface(&mut self, _root: NodeId, _window: &Component) {}

    /// `node` was attached to `container`, after any existing children.
    fn add_visual(&mut self, _container: NodeId, _node: NodeId, _component: &Component) {}

    /// Start delivering `Event::Tick` for `timer` every `interval`.
    fn schedule(&mut self, _timer: &str, _interval: Duration) {}

    /// Stop delivering ticks for `timer`.
    fn cancel(&mut self, _timer: &str) {}

    /// Fire-and-forget transport call. Failures come back later as
    /// `Event::MediaError`.
    fn transport(&mut self, _media: &str, _source: &AudioSource, _op: Transport) {}

    /// Whether a local file (icon, audio) exists.
    fn path_exists(&self, path: &str) -> bool {
        Path::new(path).exists()
    }

    fn show_message(&mut self, message: Message);
}

// ── RecordingHost ─────────────────────────────────────────────────────────

/// Headless host that records every call. Used by tests and by tooling that
/// wants to inspect what a document would do.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub surfaces: Vec<NodeId>,
    pub visuals: Vec<(NodeId, NodeId)>,
    /// Currently scheduled timers.
    pub scheduled: HashSet<String>,
    pub transports: Vec<(String, Transport)>,
    pub messages: Vec<Message>,
    /// Paths reported as existing by `path_exists`.
    pub existing_paths: HashSet<String>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.existing_paths.insert(path.into());
        self
    }

    pub fn warnings(&self) -> Vec<&str> {
        self.texts(Level::Warning)
    }

    pub fn infos(&self) -> Vec<&str> {
        self.texts(Level::Info)
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    fn texts(&self, level: Level) -> Vec<&str> {
        self.messages.iter().filter(|m| m.level == level).map(|m| m.text.as_str()).collect()
    }
}

impl Host for RecordingHost {
    fn create_root_surface(&mut self, root: NodeId, _window: &Component) {
        self.surfaces.push(root);
    }

    fn add_visual(&mut self, container: NodeId, node: NodeId, _component: &Component) {
        self.visuals.push((container, node));
    }

    fn schedule(&mut self, timer: &str, _interval: Duration) {
        self.scheduled.insert(timer.to_string());
    }

    fn cancel(&mut self, timer: &str) {
        self.scheduled.remove(timer);
    }

    fn transport(&mut self, media: &str, _source: &AudioSource, op: Transport) {
        self.transports.push((media.to_string(), op));
    }

    fn path_exists(&self, path: &str) -> bool {
        self.existing_paths.contains(path)
    }

    fn show_message(&mut self, message: Message) {
        self.messages.push(message);
    }
}
