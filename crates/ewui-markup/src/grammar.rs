//! Static grammar table: every statement tag the matcher knows, and the
//! ordered attributes each tag accepts.
//!
//! Adding a tag is a table change plus a [`Statement`](crate::ast::Statement)
//! variant; the matcher itself is generic.

// ── Tag ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Window,
    Label,
    Entry,
    Combo,
    Checkbox,
    Button,
    Audio,
    Slider,
    TextArea,
    Separator,
    Progress,
    Calendar,
    RadioGroup,
    GroupBox,
    Timer,
}

impl Tag {
    /// The keyword that opens a statement of this kind (`label=...`).
    pub fn keyword(self) -> &'static str {
        grammar_for(self).keyword
    }
}

// ── Attribute kinds ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrKind {
    /// Non-empty double-quoted string.
    Str,
    /// Double-quoted string that may be empty.
    StrOrEmpty,
    /// Base-10 integer.
    Int,
    /// `true` or `false`.
    Bool,
    /// Bare identifier.
    Ident,
    /// One of a fixed set of bare words.
    Keyword(&'static [&'static str]),
    /// `[a, "b", c]`.
    List,
}

impl AttrKind {
    pub fn describe(self) -> &'static str {
        match self {
            AttrKind::Str        => "a non-empty quoted string",
            AttrKind::StrOrEmpty => "a quoted string",
            AttrKind::Int        => "an integer",
            AttrKind::Bool       => "true or false",
            AttrKind::Ident      => "an identifier",
            AttrKind::Keyword(_) => "a keyword",
            AttrKind::List       => "a [..] list",
        }
    }
}

// ── Attribute spec ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct AttrSpec {
    /// Accepted keys. More than one key means "exactly one of these";
    /// the key actually written is kept in the parsed attributes.
    pub keys:     &'static [&'static str],
    pub kind:     AttrKind,
    pub required: bool,
    pub doc:      &'static str,
}

const fn req(keys: &'static [&'static str], kind: AttrKind, doc: &'static str) -> AttrSpec {
    AttrSpec { keys, kind, required: true, doc }
}

const fn opt(keys: &'static [&'static str], kind: AttrKind, doc: &'static str) -> AttrSpec {
    AttrSpec { keys, kind, required: false, doc }
}

// ── Tag grammar ───────────────────────────────────────────────────────────

pub struct TagGrammar {
    pub tag:     Tag,
    pub keyword: &'static str,
    pub doc:     &'static str,
    /// Attributes in the order they must appear.
    pub attrs:   &'static [AttrSpec],
}

const ID: AttrSpec = req(&["id"], AttrKind::Ident, "Registry identifier.");
const CAPTION: AttrSpec = req(&["label"], AttrKind::Str, "Caption shown next to the control.");
const OPTIONS: AttrSpec = req(&["options"], AttrKind::List, "Option labels, in display order.");

/// Every statement grammar, in match priority order.
pub static GRAMMAR: &[TagGrammar] = &[
    TagGrammar {
        tag: Tag::Window,
        keyword: "window",
        doc: "Creates the root surface. A later window replaces the earlier one.",
        attrs: &[
            req(&["title"], AttrKind::Str, "Window title."),
            req(&["width"], AttrKind::Int, "Initial width in pixels."),
            req(&["height"], AttrKind::Int, "Initial height in pixels."),
            opt(&["icon"], AttrKind::Str, "Path to an icon file."),
        ],
    },
    TagGrammar {
        tag: Tag::Label,
        keyword: "label",
        doc: "Static text.",
        attrs: &[req(&["text"], AttrKind::Str, "Displayed text."), ID],
    },
    TagGrammar {
        tag: Tag::Entry,
        keyword: "entry",
        doc: "Single-line text input.",
        attrs: &[
            req(&["hint"], AttrKind::Str, "Caption shown next to the input."),
            ID,
            opt(&["readonly"], AttrKind::Bool, "Reject host edits."),
            opt(&["type"], AttrKind::Keyword(&["number", "text"]), "Accepted input."),
        ],
    },
    TagGrammar {
        tag: Tag::Combo,
        keyword: "combo",
        doc: "Drop-down selection; the first option starts selected.",
        attrs: &[CAPTION, ID, OPTIONS],
    },
    TagGrammar {
        tag: Tag::Checkbox,
        keyword: "checkbox",
        doc: "Group of independent check boxes.",
        attrs: &[CAPTION, ID, OPTIONS],
    },
    TagGrammar {
        tag: Tag::Button,
        keyword: "button",
        doc: "Push button bound to an action.",
        attrs: &[
            req(&["text"], AttrKind::Str, "Button caption."),
            ID,
            req(&["click"], AttrKind::Str, "Action run on click."),
        ],
    },
    TagGrammar {
        tag: Tag::Audio,
        keyword: "audio",
        doc: "Media player with no visual presence.",
        attrs: &[
            req(&["url", "os"], AttrKind::Str, "`url=` for a network source, `os=` for a local file."),
            ID,
        ],
    },
    TagGrammar {
        tag: Tag::Slider,
        keyword: "slider",
        doc: "Integer slider.",
        attrs: &[
            CAPTION,
            ID,
            req(&["min"], AttrKind::Int, "Lower bound."),
            req(&["max"], AttrKind::Int, "Upper bound."),
            req(&["value"], AttrKind::Int, "Initial value."),
        ],
    },
    TagGrammar {
        tag: Tag::TextArea,
        keyword: "textarea",
        doc: "Multi-line text input.",
        attrs: &[
            CAPTION,
            ID,
            req(&["rows"], AttrKind::Int, "Visible rows."),
            opt(&["readonly"], AttrKind::Bool, "Reject host edits."),
        ],
    },
    TagGrammar {
        tag: Tag::Separator,
        keyword: "separator",
        doc: "Horizontal rule, optionally captioned.",
        attrs: &[req(&["text"], AttrKind::StrOrEmpty, "Caption; may be empty."), ID],
    },
    TagGrammar {
        tag: Tag::Progress,
        keyword: "progress",
        doc: "Progress bar.",
        attrs: &[
            CAPTION,
            ID,
            req(&["min"], AttrKind::Int, "Lower bound."),
            req(&["max"], AttrKind::Int, "Upper bound."),
            req(&["value"], AttrKind::Int, "Initial value."),
        ],
    },
    TagGrammar {
        tag: Tag::Calendar,
        keyword: "calendar",
        doc: "Single-date picker.",
        attrs: &[CAPTION, ID],
    },
    TagGrammar {
        tag: Tag::RadioGroup,
        keyword: "radiogroup",
        doc: "Mutually exclusive options; the first starts checked.",
        attrs: &[CAPTION, ID, OPTIONS],
    },
    TagGrammar {
        tag: Tag::GroupBox,
        keyword: "groupbox",
        doc: "Titled container. Every later component attaches inside it.",
        attrs: &[req(&["title"], AttrKind::Str, "Group title."), ID],
    },
    TagGrammar {
        tag: Tag::Timer,
        keyword: "timer",
        doc: "Periodic callback with no visual presence.",
        attrs: &[
            ID,
            req(&["interval"], AttrKind::Int, "Period in milliseconds."),
            req(&["action"], AttrKind::Str, "Action run on every tick."),
        ],
    },
];

/// Grammar entry for `tag`.
pub fn grammar_for(tag: Tag) -> &'static TagGrammar {
    GRAMMAR
        .iter()
        .find(|g| g.tag == tag)
        .unwrap_or_else(|| unreachable!("every Tag has a grammar entry"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tag_has_one_entry() {
        let tags = [
            Tag::Window, Tag::Label, Tag::Entry, Tag::Combo, Tag::Checkbox,
            Tag::Button, Tag::Audio, Tag::Slider, Tag::TextArea, Tag::Separator,
            Tag::Progress, Tag::Calendar, Tag::RadioGroup, Tag::GroupBox, Tag::Timer,
        ];
        assert_eq!(GRAMMAR.len(), tags.len());
        for tag in tags {
            assert_eq!(GRAMMAR.iter().filter(|g| g.tag == tag).count(), 1, "{tag:?}");
        }
    }

    #[test]
    fn no_keyword_is_a_prefix_of_another() {
        for a in GRAMMAR {
            for b in GRAMMAR {
                if a.tag != b.tag {
                    assert!(!b.keyword.starts_with(a.keyword), "{} / {}", a.keyword, b.keyword);
                }
            }
        }
    }

    #[test]
    fn first_attribute_is_always_required() {
        for g in GRAMMAR {
            assert!(g.attrs.first().is_some_and(|a| a.required), "{}", g.keyword);
        }
    }
}
