//! Host-side edits: the user typing, picking, ticking, and sliding.
//!
//! These change runtime values only. Readonly and number-only entries are
//! enforced here since there is no widget in between to do it.

use chrono::NaiveDate;

use crate::component::{Component, ComponentKind, RuntimeValue};
use crate::error::EditError;
use crate::session::Session;

impl Session {
    /// Replace the text of an entry or text area.
    pub fn set_text(&mut self, id: &str, text: impl Into<String>) -> Result<(), EditError> {
        let text = text.into();
        let component = self.editable(id, &[ComponentKind::Entry, ComponentKind::TextArea])?;
        if component.prop_flag("readonly") {
            return Err(EditError::ReadOnly(id.to_string()));
        }
        let number_only = component.prop_str("type") == Some("number");
        if number_only && !text.is_empty() && text.parse::<i64>().is_err() {
            return Err(EditError::NotANumber { id: id.to_string(), text });
        }
        log::debug!("`{id}` text set ({} chars)", text.chars().count());
        component.value = RuntimeValue::Text(text);
        Ok(())
    }

    /// Select option `index` of a combo, or check option `index` of a radio
    /// group and uncheck the rest.
    pub fn select_option(&mut self, id: &str, index: usize) -> Result<(), EditError> {
        let component = self.editable(id, &[ComponentKind::Combo, ComponentKind::RadioGroup])?;
        match &mut component.value {
            RuntimeValue::Choice { options, selected } => {
                check_index(id, index, options.len())?;
                *selected = Some(index);
            }
            RuntimeValue::Toggles(toggles) => {
                check_index(id, index, toggles.len())?;
                for (i, toggle) in toggles.iter_mut().enumerate() {
                    toggle.checked = i == index;
                }
            }
            _ => return Err(wrong_kind(id, ComponentKind::Combo)),
        }
        log::debug!("`{id}` option {index} selected");
        Ok(())
    }

    /// Check or uncheck option `index` of a checkbox group.
    pub fn set_checked(&mut self, id: &str, index: usize, checked: bool) -> Result<(), EditError> {
        let component = self.editable(id, &[ComponentKind::CheckboxGroup])?;
        let RuntimeValue::Toggles(toggles) = &mut component.value else {
            return Err(wrong_kind(id, ComponentKind::CheckboxGroup));
        };
        check_index(id, index, toggles.len())?;
        toggles[index].checked = checked;
        log::debug!("`{id}` option {index} checked={checked}");
        Ok(())
    }

    /// Move a slider. Out-of-range values are clamped.
    pub fn set_value(&mut self, id: &str, value: i64) -> Result<(), EditError> {
        let component = self.editable(id, &[ComponentKind::Slider])?;
        let range = component
            .value
            .as_range_mut()
            .ok_or_else(|| wrong_kind(id, ComponentKind::Slider))?;
        range.set(value);
        log::debug!("`{id}` slid to {}", range.value);
        Ok(())
    }

    pub fn select_date(&mut self, id: &str, date: NaiveDate) -> Result<(), EditError> {
        let component = self.editable(id, &[ComponentKind::Calendar])?;
        component.value = RuntimeValue::Date(date);
        log::debug!("`{id}` date set to {date}");
        Ok(())
    }

    fn editable(&mut self, id: &str, kinds: &[ComponentKind]) -> Result<&mut Component, EditError> {
        let component = self
            .component_mut(id)
            .ok_or_else(|| EditError::NoSuchComponent(id.to_string()))?;
        if !kinds.contains(&component.kind) {
            return Err(wrong_kind(id, component.kind));
        }
        Ok(component)
    }
}

fn wrong_kind(id: &str, found: ComponentKind) -> EditError {
    EditError::WrongKind { id: id.to_string(), found: found.name() }
}

fn check_index(id: &str, index: usize, len: usize) -> Result<(), EditError> {
    if index < len {
        Ok(())
    } else {
        Err(EditError::IndexOutOfRange { id: id.to_string(), index, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::RecordingHost;

    fn session(src: &str) -> Session {
        let mut host = RecordingHost::new();
        let mut session = Session::new();
        session.parse_and_run(src, &mut host);
        session
    }

    #[test]
    fn readonly_entry_rejects_text() {
        let mut s = session(r#"entry=hint="x",id=e1,readonly=true"#);
        assert_eq!(s.set_text("e1", "hi"), Err(EditError::ReadOnly("e1".into())));
        assert_eq!(s.value("e1"), Some(&RuntimeValue::Text(String::new())));
    }

    #[test]
    fn number_entry_accepts_only_integers() {
        let mut s = session(r#"entry=hint="n",id=n1,type=number"#);
        assert!(s.set_text("n1", "-42").is_ok());
        assert!(matches!(s.set_text("n1", "4.2"), Err(EditError::NotANumber { .. })));
        assert_eq!(s.value("n1"), Some(&RuntimeValue::Text("-42".into())));
    }

    #[test]
    fn radio_selection_is_exclusive() {
        let mut s = session(r#"radiogroup=label="r",id=r1,options=["a","b","c"]"#);
        s.select_option("r1", 2).unwrap();
        let checked = s.value("r1").and_then(RuntimeValue::checked_labels);
        assert_eq!(checked, Some(vec!["c"]));
        assert!(matches!(s.select_option("r1", 3), Err(EditError::IndexOutOfRange { len: 3, .. })));
    }

    #[test]
    fn checkbox_edits_are_independent() {
        let mut s = session(r#"checkbox=label="c",id=c1,options=["a","b","c"]"#);
        s.set_checked("c1", 0, true).unwrap();
        s.set_checked("c1", 2, true).unwrap();
        s.set_checked("c1", 0, false).unwrap();
        assert_eq!(s.value("c1").and_then(RuntimeValue::checked_labels), Some(vec!["c"]));
    }

    #[test]
    fn slider_clamps() {
        let mut s = session(r#"slider=label="s",id=s1,min=0,max=10,value=5"#);
        s.set_value("s1", 99).unwrap();
        assert_eq!(s.value("s1").and_then(RuntimeValue::as_range).map(|r| r.value), Some(10));
    }

    #[test]
    fn edits_check_the_kind() {
        let mut s = session(r#"label=text="l",id=l1"#);
        assert_eq!(
            s.set_text("l1", "x"),
            Err(EditError::WrongKind { id: "l1".into(), found: "label" })
        );
        assert_eq!(s.set_value("nope", 1), Err(EditError::NoSuchComponent("nope".into())));
    }
}
