use std::time::Duration;

/// A periodic callback declared by a `timer` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerEntry {
    pub id: String,
    pub interval: Duration,
    /// Raw action text, run on every tick.
    pub action: String,
    pub running: bool,
    /// Ticks delivered while running.
    pub ticks: u64,
}

impl TimerEntry {
    pub fn new(id: impl Into<String>, interval: Duration, action: impl Into<String>) -> Self {
        Self { id: id.into(), interval, action: action.into(), running: false, ticks: 0 }
    }
}

/// Timers in declaration order.
///
/// Order matters: a progress update that reaches its maximum stops the first
/// timer bound to the same action text.
#[derive(Debug, Clone, Default)]
pub struct TimerTable {
    entries: Vec<TimerEntry>,
}

impl TimerTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Redeclaring an id replaces the entry in place.
    pub fn insert(&mut self, entry: TimerEntry) {
        match self.entries.iter_mut().find(|e| e.id == entry.id) {
            Some(slot) => *slot = entry,
            None => self.entries.push(entry),
        }
    }

    pub fn get(&self, id: &str) -> Option<&TimerEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut TimerEntry> {
        self.entries.iter_mut().find(|e| e.id == id)
    }

    /// First timer whose action text is exactly `action`.
    pub fn find_by_action_mut(&mut self, action: &str) -> Option<&mut TimerEntry> {
        self.entries.iter_mut().find(|e| e.action == action)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TimerEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, action: &str) -> TimerEntry {
        TimerEntry::new(id, Duration::from_millis(10), action)
    }

    #[test]
    fn redeclare_keeps_position() {
        let mut t = TimerTable::new();
        t.insert(entry("a", "x"));
        t.insert(entry("b", "y"));
        t.insert(entry("a", "z"));
        let ids: Vec<_> = t.iter().map(|e| (e.id.as_str(), e.action.as_str())).collect();
        assert_eq!(ids, vec![("a", "z"), ("b", "y")]);
    }

    #[test]
    fn find_by_action_returns_first() {
        let mut t = TimerTable::new();
        t.insert(entry("a", "same"));
        t.insert(entry("b", "same"));
        assert_eq!(t.find_by_action_mut("same").map(|e| e.id.clone()), Some("a".to_string()));
        assert!(t.find_by_action_mut("other").is_none());
    }
}
