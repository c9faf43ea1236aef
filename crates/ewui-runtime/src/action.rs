use std::str::FromStr;

use crate::error::ActionError;

// ── Verb ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    PlayAudio,
    PauseAudio,
    StopAudio,
    StartTimer,
    StopTimer,
    SetProgress,
    /// Relative progress change; only valid from a timer tick.
    UpdateProgress,
    /// Show a component's current value.
    Display,
}

impl Verb {
    const TABLE: &'static [(&'static str, Verb)] = &[
        ("play_audio", Verb::PlayAudio),
        ("pause_audio", Verb::PauseAudio),
        ("stop_audio", Verb::StopAudio),
        ("start_timer", Verb::StartTimer),
        ("stop_timer", Verb::StopTimer),
        ("set_progress", Verb::SetProgress),
        ("update_progress", Verb::UpdateProgress),
        ("显示", Verb::Display),
    ];

    pub fn from_keyword(word: &str) -> Option<Self> {
        Self::TABLE.iter().find(|(k, _)| *k == word).map(|(_, v)| *v)
    }

    pub fn keyword(self) -> &'static str {
        Self::TABLE
            .iter()
            .find(|(_, v)| *v == self)
            .map(|(k, _)| *k)
            .unwrap_or_else(|| unreachable!("every Verb has a keyword"))
    }
}

// ── Action ────────────────────────────────────────────────────────────────

/// `verb=target[,key=value]*`, parsed when the action runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub verb: Verb,
    pub target: String,
    pub args: Vec<(String, String)>,
}

impl Action {
    pub fn arg(&self, key: &str) -> Option<&str> {
        self.args.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// `value=` as a signed integer (`+3`, `-1`, `40`).
    pub fn int_arg(&self, key: &str) -> Result<i64, ActionError> {
        let raw = self.arg(key);
        raw.and_then(|v| v.parse::<i64>().ok()).ok_or_else(|| ActionError::InvalidValue {
            verb: self.verb.keyword(),
            got: raw.map(str::to_string),
        })
    }
}

impl FromStr for Action {
    type Err = ActionError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let malformed = || ActionError::Malformed(text.to_string());
        let mut parts = text.split(',');

        let head = parts.next().unwrap_or_default();
        let (verb, target) = head.split_once('=').ok_or_else(malformed)?;
        let verb = verb.trim();
        let target = target.trim();
        let verb = Verb::from_keyword(verb).ok_or_else(|| ActionError::UnknownVerb(verb.to_string()))?;
        if target.is_empty() {
            return Err(malformed());
        }

        let args = parts
            .map(|p| {
                p.split_once('=')
                    .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
                    .ok_or_else(malformed)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Action { verb, target: target.to_string(), args })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_verb() {
        let a: Action = "play_audio=a1".parse().unwrap();
        assert_eq!(a, Action { verb: Verb::PlayAudio, target: "a1".into(), args: vec![] });
    }

    #[test]
    fn display_keyword() {
        let a: Action = "显示 = e1".parse().unwrap();
        assert_eq!((a.verb, a.target.as_str()), (Verb::Display, "e1"));
    }

    #[test]
    fn signed_value_argument() {
        let a: Action = "update_progress=p1, value=+1".parse().unwrap();
        assert_eq!(a.int_arg("value"), Ok(1));
        let a: Action = "set_progress=p1,value=-4".parse().unwrap();
        assert_eq!(a.int_arg("value"), Ok(-4));
    }

    #[test]
    fn missing_or_bad_value() {
        let a: Action = "set_progress=p1".parse().unwrap();
        assert_eq!(a.int_arg("value"), Err(ActionError::InvalidValue { verb: "set_progress", got: None }));
        let a: Action = "set_progress=p1,value=lots".parse().unwrap();
        assert!(matches!(a.int_arg("value"), Err(ActionError::InvalidValue { got: Some(_), .. })));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!("explode=x".parse::<Action>(), Err(ActionError::UnknownVerb("explode".into())));
        assert!(matches!("play_audio".parse::<Action>(), Err(ActionError::Malformed(_))));
        assert!(matches!("play_audio=".parse::<Action>(), Err(ActionError::Malformed(_))));
        assert!(matches!("set_progress=p,oops".parse::<Action>(), Err(ActionError::Malformed(_))));
    }

    #[test]
    fn keywords_round_trip() {
        for (word, verb) in Verb::TABLE {
            assert_eq!(verb.keyword(), *word);
        }
    }
}
