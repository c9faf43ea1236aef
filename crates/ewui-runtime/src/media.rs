use std::collections::HashMap;

use crate::component::AudioSource;

/// Transport command sent to a media handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Play,
    Pause,
    Stop,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

impl PlaybackState {
    /// State after `op`. Pausing a stopped player keeps it stopped.
    pub fn after(self, op: Transport) -> Self {
        match (self, op) {
            (_, Transport::Play)                      => PlaybackState::Playing,
            (PlaybackState::Stopped, Transport::Pause) => PlaybackState::Stopped,
            (_, Transport::Pause)                     => PlaybackState::Paused,
            (_, Transport::Stop)                      => PlaybackState::Stopped,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaEntry {
    pub source: AudioSource,
    /// Last state requested through a transport call. Playback itself is
    /// fire-and-forget, so this is what was asked for, not what the host did.
    pub state: PlaybackState,
}

/// Media handles keyed by audio id.
#[derive(Debug, Clone, Default)]
pub struct MediaTable {
    players: HashMap<String, MediaEntry>,
}

impl MediaTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, source: AudioSource) {
        self.players.insert(id.into(), MediaEntry { source, state: PlaybackState::Stopped });
    }

    pub fn get(&self, id: &str) -> Option<&MediaEntry> {
        self.players.get(id)
    }

    /// Record `op` and return the entry, or `None` for an unknown id.
    pub fn apply(&mut self, id: &str, op: Transport) -> Option<&MediaEntry> {
        let entry = self.players.get_mut(id)?;
        entry.state = entry.state.after(op);
        Some(&*entry)
    }

    /// Entries ordered by id.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MediaEntry)> {
        let mut entries: Vec<_> = self.players.iter().map(|(id, e)| (id.as_str(), e)).collect();
        entries.sort_by_key(|(id, _)| *id);
        entries.into_iter()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
