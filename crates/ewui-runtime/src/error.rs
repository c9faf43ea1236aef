use thiserror::Error;

/// A non-fatal failure while running an action or handling an event.
///
/// The session shows every `ActionError` to the user as a warning and goes
/// back to idle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("malformed action `{0}`")]
    Malformed(String),

    #[error("unknown action `{0}`")]
    UnknownVerb(String),

    #[error("audio id does not exist: {0}")]
    NoSuchAudio(String),

    #[error("timer id does not exist: {0}")]
    NoSuchTimer(String),

    #[error("component id does not exist: {0}")]
    NoSuchComponent(String),

    #[error("`{id}` is a {found}; {verb} needs a {expected}")]
    WrongKind { id: String, verb: &'static str, expected: &'static str, found: &'static str },

    #[error("{verb} needs `value=<integer>`, got {got:?}")]
    InvalidValue { verb: &'static str, got: Option<String> },

    #[error("update_progress can only run from a timer")]
    TimerOnly,

    #[error("{kind} `{id}` has no value to display")]
    NotQueryable { id: String, kind: &'static str },

    #[error("audio playback error (ID: {id}), code: {code}")]
    Media { id: String, code: i32 },

    #[error("events are not accepted while the document is still being built")]
    NotRunning,
}

/// A rejected host-side edit of a component value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("component id does not exist: {0}")]
    NoSuchComponent(String),

    #[error("`{id}` is a {found} and cannot be edited this way")]
    WrongKind { id: String, found: &'static str },

    #[error("`{0}` is read-only")]
    ReadOnly(String),

    #[error("`{id}` only accepts integers, got {text:?}")]
    NotANumber { id: String, text: String },

    #[error("`{id}` has {len} options, index {index} is out of range")]
    IndexOutOfRange { id: String, index: usize, len: usize },
}
