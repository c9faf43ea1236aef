//! Action execution.
//!
//! Actions are stored as raw text on buttons and timers and parsed each time
//! they run, so a malformed action only fails when triggered.

use crate::action::{Action, Verb};
use crate::component::{Component, ComponentKind, Range, RuntimeValue};
use crate::config::SessionConfig;
use crate::error::ActionError;
use crate::event::Origin;
use crate::host::{Host, Message};
use crate::media::Transport;
use crate::session::Session;

pub(crate) struct Interpreter<'a> {
    session: &'a mut Session,
    host:    &'a mut dyn Host,
}

impl<'a> Interpreter<'a> {
    pub(crate) fn new(session: &'a mut Session, host: &'a mut dyn Host) -> Self {
        Self { session, host }
    }

    pub(crate) fn run(&mut self, text: &str, origin: Origin<'_>) -> Result<(), ActionError> {
        let action: Action = text.parse()?;
        log::debug!("running `{text}` from {origin:?}");

        match action.verb {
            Verb::PlayAudio => self.transport(&action.target, Transport::Play),
            Verb::PauseAudio => self.transport(&action.target, Transport::Pause),
            Verb::StopAudio => self.transport(&action.target, Transport::Stop),
            Verb::StartTimer => self.start_timer(&action.target),
            Verb::StopTimer => self.stop_timer(&action.target),
            Verb::SetProgress => {
                let value = action.int_arg("value")?;
                self.progress(&action, |r| r.set(value)).map(|_| ())
            }
            Verb::UpdateProgress => {
                if origin == Origin::Click {
                    return Err(ActionError::TimerOnly);
                }
                let delta = action.int_arg("value")?;
                if self.progress(&action, |r| r.add(delta))? {
                    self.stop_bound_timer(text);
                }
                Ok(())
            }
            Verb::Display => {
                let shown = self.display(&action.target)?;
                self.host.show_message(Message::info(shown));
                Ok(())
            }
        }
    }

    fn transport(&mut self, id: &str, op: Transport) -> Result<(), ActionError> {
        let entry = self
            .session
            .media
            .apply(id, op)
            .ok_or_else(|| ActionError::NoSuchAudio(id.to_string()))?;
        log::debug!("audio `{id}`: {op:?} → {:?}", entry.state);
        self.host.transport(id, &entry.source, op);
        Ok(())
    }

    fn start_timer(&mut self, id: &str) -> Result<(), ActionError> {
        let timer = self
            .session
            .timers
            .get_mut(id)
            .ok_or_else(|| ActionError::NoSuchTimer(id.to_string()))?;
        timer.running = true;
        self.host.schedule(id, timer.interval);
        self.host.show_message(Message::info(format!("timer started (ID: {id})")));
        Ok(())
    }

    fn stop_timer(&mut self, id: &str) -> Result<(), ActionError> {
        let timer = self
            .session
            .timers
            .get_mut(id)
            .ok_or_else(|| ActionError::NoSuchTimer(id.to_string()))?;
        timer.running = false;
        self.host.cancel(id);
        self.host.show_message(Message::info(format!("timer stopped (ID: {id})")));
        Ok(())
    }

    /// Apply `update` to the target progress bar. Returns whether it is now
    /// at its maximum.
    fn progress(&mut self, action: &Action, update: impl FnOnce(&mut Range)) -> Result<bool, ActionError> {
        let id = action.target.as_str();
        let component = self
            .session
            .component_mut(id)
            .ok_or_else(|| ActionError::NoSuchComponent(id.to_string()))?;
        let found = component.kind;
        let range = match (found, component.value.as_range_mut()) {
            (ComponentKind::Progress, Some(range)) => range,
            _ => {
                return Err(ActionError::WrongKind {
                    id: id.to_string(),
                    verb: action.verb.keyword(),
                    expected: ComponentKind::Progress.name(),
                    found: found.name(),
                });
            }
        };
        update(range);
        log::debug!("progress `{id}` at {}/{}", range.value, range.max);
        Ok(range.at_max())
    }

    /// Stop the first timer whose action is exactly `text`.
    fn stop_bound_timer(&mut self, text: &str) {
        let Some(timer) = self.session.timers.find_by_action_mut(text) else {
            return;
        };
        if timer.running {
            timer.running = false;
            self.host.cancel(&timer.id);
            log::info!("timer `{}` stopped: progress reached its maximum", timer.id);
        }
    }

    fn display(&self, id: &str) -> Result<String, ActionError> {
        let component = self
            .session
            .component(id)
            .ok_or_else(|| ActionError::NoSuchComponent(id.to_string()))?;
        render(component, &self.session.config).ok_or_else(|| ActionError::NotQueryable {
            id:   id.to_string(),
            kind: component.kind.name(),
        })
    }
}

/// Human-readable form of a component's value; `None` for kinds without one.
fn render(component: &Component, config: &SessionConfig) -> Option<String> {
    match (component.kind, &component.value) {
        (ComponentKind::Entry, RuntimeValue::Text(text)) => Some(text.clone()),
        (ComponentKind::TextArea, RuntimeValue::Text(text)) => Some(truncate(text, config.truncate_at)),
        (ComponentKind::Combo, RuntimeValue::Choice { options, selected }) => {
            Some(selected.and_then(|i| options.get(i)).cloned().unwrap_or_default())
        }
        (ComponentKind::CheckboxGroup | ComponentKind::RadioGroup, value) => {
            value.checked_labels().map(|labels| labels.join(config.list_separator.as_str()))
        }
        (ComponentKind::Slider, RuntimeValue::Range(range)) => Some(range.value.to_string()),
        (ComponentKind::Progress, RuntimeValue::Range(range)) => Some(format!("{}%", range.value)),
        (ComponentKind::Calendar, RuntimeValue::Date(date)) => Some(date.format("%Y-%m-%d").to_string()),
        _ => None,
    }
}

/// Keep the first `max` characters, appending `...` if anything was cut.
pub(crate) fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdef", 3), "abc...");
        assert_eq!(truncate("汉字测试", 2), "汉字...");
        assert_eq!(truncate("exact", 5), "exact");
    }
}
