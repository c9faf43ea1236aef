use std::collections::BTreeMap;

use chrono::NaiveDate;

pub use ewui_markup::{AudioSource, InputType};

// ── ComponentKind ─────────────────────────────────────────────────────────

/// Closed set of runtime component kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Window,
    Label,
    Entry,
    Combo,
    CheckboxGroup,
    RadioGroup,
    Button,
    Audio,
    Slider,
    TextArea,
    Separator,
    Progress,
    Calendar,
    GroupBox,
    Timer,
}

impl ComponentKind {
    pub fn name(self) -> &'static str {
        match self {
            ComponentKind::Window        => "window",
            ComponentKind::Label         => "label",
            ComponentKind::Entry         => "entry",
            ComponentKind::Combo         => "combo",
            ComponentKind::CheckboxGroup => "checkbox group",
            ComponentKind::RadioGroup    => "radio group",
            ComponentKind::Button        => "button",
            ComponentKind::Audio         => "audio player",
            ComponentKind::Slider        => "slider",
            ComponentKind::TextArea      => "text area",
            ComponentKind::Separator     => "separator",
            ComponentKind::Progress      => "progress bar",
            ComponentKind::Calendar      => "calendar",
            ComponentKind::GroupBox      => "group box",
            ComponentKind::Timer         => "timer",
        }
    }

    /// Whether the component occupies a slot in a container.
    pub fn is_visual(self) -> bool {
        !matches!(self, ComponentKind::Audio | ComponentKind::Timer)
    }

    /// Whether other components can attach under this one.
    pub fn is_container(self) -> bool {
        matches!(self, ComponentKind::Window | ComponentKind::GroupBox)
    }
}

// ── Property ──────────────────────────────────────────────────────────────

/// Static configuration copied from the statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Property {
    Str(String),
    Int(i64),
    Bool(bool),
    List(Vec<String>),
}

impl From<String> for Property { fn from(v: String) -> Self { Property::Str(v) } }
impl From<&str> for Property { fn from(v: &str) -> Self { Property::Str(v.to_string()) } }
impl From<i64> for Property { fn from(v: i64) -> Self { Property::Int(v) } }
impl From<u32> for Property { fn from(v: u32) -> Self { Property::Int(v.into()) } }
impl From<bool> for Property { fn from(v: bool) -> Self { Property::Bool(v) } }
impl From<Vec<String>> for Property { fn from(v: Vec<String>) -> Self { Property::List(v) } }

// ── RuntimeValue ──────────────────────────────────────────────────────────

/// One member of a checkbox or radio group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toggle {
    pub label: String,
    pub checked: bool,
}

/// Integer value kept inside `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub min: i64,
    pub max: i64,
    pub value: i64,
}

impl Range {
    /// A `max` below `min` collapses to `min`; `value` is clamped.
    pub fn new(min: i64, max: i64, value: i64) -> Self {
        let max = max.max(min);
        Self { min, max, value: value.clamp(min, max) }
    }

    pub fn set(&mut self, value: i64) {
        self.value = value.clamp(self.min, self.max);
    }

    pub fn add(&mut self, delta: i64) {
        self.set(self.value.saturating_add(delta));
    }

    pub fn at_max(&self) -> bool {
        self.value >= self.max
    }

}

/// Queryable state whose shape is fixed by the component kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeValue {
    /// Label, Button, Separator, Window, GroupBox, Audio, Timer.
    None,
    /// Entry, TextArea.
    Text(String),
    /// Combo: option list and the selected index.
    Choice { options: Vec<String>, selected: Option<usize> },
    /// Checkbox group, RadioGroup.
    Toggles(Vec<Toggle>),
    /// Slider, Progress.
    Range(Range),
    /// Calendar.
    Date(NaiveDate),
}

impl RuntimeValue {
    pub fn toggles(labels: &[String], first_checked: bool) -> Self {
        RuntimeValue::Toggles(
            labels
                .iter()
                .enumerate()
                .map(|(i, label)| Toggle { label: label.clone(), checked: first_checked && i == 0 })
                .collect(),
        )
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            RuntimeValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_range(&self) -> Option<&Range> {
        match self {
            RuntimeValue::Range(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_range_mut(&mut self) -> Option<&mut Range> {
        match self {
            RuntimeValue::Range(r) => Some(r),
            _ => None,
        }
    }

    /// Labels of checked toggles, in order.
    pub fn checked_labels(&self) -> Option<Vec<&str>> {
        match self {
            RuntimeValue::Toggles(t) => {
                Some(t.iter().filter(|t| t.checked).map(|t| t.label.as_str()).collect())
            }
            _ => None,
        }
    }
}

// ── Component ─────────────────────────────────────────────────────────────

/// A runtime node built from one statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    /// Registry identifier. Windows have none.
    pub id: Option<String>,
    pub kind: ComponentKind,
    pub properties: BTreeMap<String, Property>,
    pub value: RuntimeValue,
}

impl Component {
    pub fn new(kind: ComponentKind, id: Option<String>) -> Self {
        Self { id, kind, properties: BTreeMap::new(), value: RuntimeValue::None }
    }

    pub fn with(mut self, key: &str, value: impl Into<Property>) -> Self {
        self.properties.insert(key.to_string(), value.into());
        self
    }

    pub fn with_value(mut self, value: RuntimeValue) -> Self {
        self.value = value;
        self
    }

    pub fn prop(&self, key: &str) -> Option<&Property> {
        self.properties.get(key)
    }

    pub fn prop_str(&self, key: &str) -> Option<&str> {
        match self.prop(key)? {
            Property::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn prop_int(&self, key: &str) -> Option<i64> {
        match self.prop(key)? {
            Property::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Absent flags read as `false`.
    pub fn prop_flag(&self, key: &str) -> bool {
        matches!(self.prop(key), Some(Property::Bool(true)))
    }

    pub fn id_or_empty(&self) -> &str {
        self.id.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_clamps_on_construction_and_update() {
        let mut r = Range::new(0, 10, 42);
        assert_eq!(r.value, 10);
        r.add(-100);
        assert_eq!(r.value, 0);
        r.set(5);
        assert_eq!(r.value, 5);
    }

    #[test]
    fn inverted_range_collapses() {
        let r = Range::new(5, 1, 3);
        assert_eq!((r.min, r.max, r.value), (5, 5, 5));
        assert!(r.at_max());
    }

    #[test]
    fn add_saturates_at_extreme_bounds() {
        let mut r = Range::new(i64::MIN, i64::MAX, i64::MAX - 1);
        r.add(i64::MAX);
        assert_eq!(r.value, i64::MAX);
        r.add(i64::MIN);
        r.add(i64::MIN);
        assert_eq!(r.value, i64::MIN);
    }

    #[test]
    fn radio_toggles_check_first() {
        let v = RuntimeValue::toggles(&["a".into(), "b".into()], true);
        assert_eq!(v.checked_labels(), Some(vec!["a"]));
        let v = RuntimeValue::toggles(&["a".into(), "b".into()], false);
        assert_eq!(v.checked_labels(), Some(vec![]));
    }

    #[test]
    fn flags_default_false() {
        let c = Component::new(ComponentKind::Entry, Some("e".into())).with("readonly", true);
        assert!(c.prop_flag("readonly"));
        assert!(!c.prop_flag("missing"));
    }
}
