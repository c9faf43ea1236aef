use crate::tree::NodeId;

/// Events the host delivers to a running session.
///
/// Events are handled one at a time, each to completion, through
/// `&mut Session`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A button was clicked. Buttons are addressed by node so a button whose
    /// id was later reused keeps working.
    Click(NodeId),
    /// A scheduled timer fired.
    Tick { timer: String },
    /// Asynchronous playback failure reported by the host's media backend.
    MediaError { id: String, code: i32 },
}

/// Where an action was triggered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin<'a> {
    Click,
    Tick { timer: &'a str },
}
