use crate::grammar::Tag;

// ── AttrValue ─────────────────────────────────────────────────────────────

/// A scanned attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    Str(String),
    Int(i64),
    Bool(bool),
    Ident(String),
    Keyword(&'static str),
    List(Vec<String>),
}

// ── Attributes ────────────────────────────────────────────────────────────

/// Attributes of one matched line, in source order, keyed by the key
/// actually written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(&'static str, AttrValue)>);

impl Attributes {
    pub(crate) fn push(&mut self, key: &'static str, value: AttrValue) {
        self.0.push((key, value));
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.0.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &AttrValue)> {
        self.0.iter().map(|(k, v)| (*k, v))
    }

    /// `Str` or `Ident` value as an owned string.
    pub fn string(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            AttrValue::Str(s) | AttrValue::Ident(s) => Some(s.clone()),
            _ => None,
        }
    }

    pub fn int(&self, key: &str) -> Option<i64> {
        match self.get(key)? {
            AttrValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Integer narrowed to `T`; `None` when absent or out of range.
    pub fn int_as<T: TryFrom<i64>>(&self, key: &str) -> Option<T> {
        T::try_from(self.int(key)?).ok()
    }

    /// Absent booleans read as `false`.
    pub fn flag(&self, key: &str) -> bool {
        matches!(self.get(key), Some(AttrValue::Bool(true)))
    }

    pub fn keyword(&self, key: &str) -> Option<&'static str> {
        match self.get(key)? {
            AttrValue::Keyword(w) => Some(w),
            _ => None,
        }
    }

    pub fn list(&self, key: &str) -> Option<Vec<String>> {
        match self.get(key)? {
            AttrValue::List(items) => Some(items.clone()),
            _ => None,
        }
    }
}

// ── Statement payload types ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioSource {
    /// `url="..."`: network stream.
    Url(String),
    /// `os="..."`: local file path.
    File(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputType {
    #[default]
    Text,
    /// Only integers are accepted.
    Number,
}

// ── Statement ─────────────────────────────────────────────────────────────

/// One recognized line of markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Window { title: String, width: u32, height: u32, icon: Option<String> },
    Label { text: String, id: String },
    Entry { hint: String, id: String, readonly: bool, input: InputType },
    Combo { label: String, id: String, options: Vec<String> },
    Checkbox { label: String, id: String, options: Vec<String> },
    Button { text: String, id: String, click: String },
    Audio { source: AudioSource, id: String },
    Slider { label: String, id: String, min: i64, max: i64, value: i64 },
    TextArea { label: String, id: String, rows: u32, readonly: bool },
    Separator { text: String, id: String },
    Progress { label: String, id: String, min: i64, max: i64, value: i64 },
    Calendar { label: String, id: String },
    RadioGroup { label: String, id: String, options: Vec<String> },
    GroupBox { title: String, id: String },
    Timer { id: String, interval_ms: u64, action: String },
}

impl Statement {
    /// Assemble a typed statement from matched attributes.
    ///
    /// `None` when a value does not fit its field (e.g. a negative width).
    pub fn from_attrs(tag: Tag, a: &Attributes) -> Option<Self> {
        Some(match tag {
            Tag::Window => Statement::Window {
                title:  a.string("title")?,
                width:  a.int_as("width")?,
                height: a.int_as("height")?,
                icon:   a.string("icon"),
            },
            Tag::Label => Statement::Label { text: a.string("text")?, id: a.string("id")? },
            Tag::Entry => Statement::Entry {
                hint:     a.string("hint")?,
                id:       a.string("id")?,
                readonly: a.flag("readonly"),
                input:    match a.keyword("type") {
                    Some("number") => InputType::Number,
                    _ => InputType::Text,
                },
            },
            Tag::Combo => Statement::Combo {
                label:   a.string("label")?,
                id:      a.string("id")?,
                options: a.list("options")?,
            },
            Tag::Checkbox => Statement::Checkbox {
                label:   a.string("label")?,
                id:      a.string("id")?,
                options: a.list("options")?,
            },
            Tag::Button => Statement::Button {
                text:  a.string("text")?,
                id:    a.string("id")?,
                click: a.string("click")?,
            },
            Tag::Audio => Statement::Audio {
                source: a.string("url")
                    .map(AudioSource::Url)
                    .or_else(|| a.string("os").map(AudioSource::File))?,
                id: a.string("id")?,
            },
            Tag::Slider => Statement::Slider {
                label: a.string("label")?,
                id:    a.string("id")?,
                min:   a.int("min")?,
                max:   a.int("max")?,
                value: a.int("value")?,
            },
            Tag::TextArea => Statement::TextArea {
                label:    a.string("label")?,
                id:       a.string("id")?,
                rows:     a.int_as("rows")?,
                readonly: a.flag("readonly"),
            },
            Tag::Separator => Statement::Separator { text: a.string("text")?, id: a.string("id")? },
            Tag::Progress => Statement::Progress {
                label: a.string("label")?,
                id:    a.string("id")?,
                min:   a.int("min")?,
                max:   a.int("max")?,
                value: a.int("value")?,
            },
            Tag::Calendar => Statement::Calendar { label: a.string("label")?, id: a.string("id")? },
            Tag::RadioGroup => Statement::RadioGroup {
                label:   a.string("label")?,
                id:      a.string("id")?,
                options: a.list("options")?,
            },
            Tag::GroupBox => Statement::GroupBox { title: a.string("title")?, id: a.string("id")? },
            Tag::Timer => Statement::Timer {
                id:          a.string("id")?,
                interval_ms: a.int_as("interval")?,
                action:      a.string("action")?,
            },
        })
    }

    pub fn tag(&self) -> Tag {
        match self {
            Statement::Window { .. }     => Tag::Window,
            Statement::Label { .. }      => Tag::Label,
            Statement::Entry { .. }      => Tag::Entry,
            Statement::Combo { .. }      => Tag::Combo,
            Statement::Checkbox { .. }   => Tag::Checkbox,
            Statement::Button { .. }     => Tag::Button,
            Statement::Audio { .. }      => Tag::Audio,
            Statement::Slider { .. }     => Tag::Slider,
            Statement::TextArea { .. }   => Tag::TextArea,
            Statement::Separator { .. }  => Tag::Separator,
            Statement::Progress { .. }   => Tag::Progress,
            Statement::Calendar { .. }   => Tag::Calendar,
            Statement::RadioGroup { .. } => Tag::RadioGroup,
            Statement::GroupBox { .. }   => Tag::GroupBox,
            Statement::Timer { .. }      => Tag::Timer,
        }
    }

    /// Registry identifier; every statement except `window` has one.
    pub fn id(&self) -> Option<&str> {
        match self {
            Statement::Window { .. } => None,
            Statement::Label { id, .. }
            | Statement::Entry { id, .. }
            | Statement::Combo { id, .. }
            | Statement::Checkbox { id, .. }
            | Statement::Button { id, .. }
            | Statement::Audio { id, .. }
            | Statement::Slider { id, .. }
            | Statement::TextArea { id, .. }
            | Statement::Separator { id, .. }
            | Statement::Progress { id, .. }
            | Statement::Calendar { id, .. }
            | Statement::RadioGroup { id, .. }
            | Statement::GroupBox { id, .. }
            | Statement::Timer { id, .. } => Some(id),
        }
    }
}

// ── Document ──────────────────────────────────────────────────────────────

/// A statement together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    /// 1-based source line.
    pub line: usize,
    pub statement: Statement,
    /// Text after the last recognized attribute. The matcher is anchored
    /// only at the start of the line, so this is ignored, not rejected.
    pub trailing: Option<String>,
}

/// The result of matching a whole source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// Recognized statements in source order.
    pub statements: Vec<ParsedLine>,
    /// Lines that produced no statement.
    pub skipped: Vec<crate::error::MatchError>,
}
