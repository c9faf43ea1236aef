//! Statement → component construction.
//!
//! The builder owns no state of its own; it borrows the session and the host
//! for the duration of one `Session::build` call.

use std::time::Duration;

use ewui_markup::{AudioSource, InputType, ParsedLine, Statement};

use crate::component::{Component, ComponentKind, Range, RuntimeValue};
use crate::host::{Host, Message};
use crate::session::{Diagnostic, Session};
use crate::timer::TimerEntry;
use crate::tree::NodeId;

pub(crate) struct Builder<'a> {
    session: &'a mut Session,
    host:    &'a mut dyn Host,
    /// Source line of the statement being applied; 0 for synthesized nodes.
    line:    usize,
}

impl<'a> Builder<'a> {
    pub(crate) fn new(session: &'a mut Session, host: &'a mut dyn Host) -> Self {
        Self { session, host, line: 0 }
    }

    pub(crate) fn apply(&mut self, parsed: ParsedLine) {
        self.line = parsed.line;
        if let Some(text) = parsed.trailing {
            log::debug!("line {}: ignoring trailing text {text:?}", self.line);
            self.session.diagnostics.push(Diagnostic::TrailingText { line: self.line, text });
        }

        match parsed.statement {
            Statement::Window { title, width, height, icon } => {
                self.window(title, width, height, icon);
            }
            Statement::Label { text, id } => {
                self.attach(Component::new(ComponentKind::Label, Some(id)).with("text", text));
            }
            Statement::Entry { hint, id, readonly, input } => {
                let input = match input {
                    InputType::Text => "text",
                    InputType::Number => "number",
                };
                self.attach(
                    Component::new(ComponentKind::Entry, Some(id))
                        .with("hint", hint)
                        .with("readonly", readonly)
                        .with("type", input)
                        .with_value(RuntimeValue::Text(String::new())),
                );
            }
            Statement::Combo { label, id, options } => {
                let selected = (!options.is_empty()).then_some(0);
                self.attach(
                    Component::new(ComponentKind::Combo, Some(id))
                        .with("label", label)
                        .with("options", options.clone())
                        .with_value(RuntimeValue::Choice { options, selected }),
                );
            }
            Statement::Checkbox { label, id, options } => {
                self.attach(
                    Component::new(ComponentKind::CheckboxGroup, Some(id))
                        .with("label", label)
                        .with_value(RuntimeValue::toggles(&options, false))
                        .with("options", options),
                );
            }
            Statement::RadioGroup { label, id, options } => {
                self.attach(
                    Component::new(ComponentKind::RadioGroup, Some(id))
                        .with("label", label)
                        .with_value(RuntimeValue::toggles(&options, true))
                        .with("options", options),
                );
            }
            Statement::Button { text, id, click } => {
                self.attach(
                    Component::new(ComponentKind::Button, Some(id))
                        .with("text", text)
                        .with("click", click),
                );
            }
            Statement::Audio { source, id } => self.audio(source, id),
            Statement::Slider { label, id, min, max, value } => {
                self.attach(ranged(ComponentKind::Slider, label, id, min, max, value));
            }
            Statement::Progress { label, id, min, max, value } => {
                self.attach(ranged(ComponentKind::Progress, label, id, min, max, value));
            }
            Statement::TextArea { label, id, rows, readonly } => {
                self.attach(
                    Component::new(ComponentKind::TextArea, Some(id))
                        .with("label", label)
                        .with("rows", rows)
                        .with("readonly", readonly)
                        .with_value(RuntimeValue::Text(String::new())),
                );
            }
            Statement::Separator { text, id } => {
                self.attach(Component::new(ComponentKind::Separator, Some(id)).with("text", text));
            }
            Statement::Calendar { label, id } => {
                let today = self.session.config.today();
                self.attach(
                    Component::new(ComponentKind::Calendar, Some(id))
                        .with("label", label)
                        .with_value(RuntimeValue::Date(today)),
                );
            }
            Statement::GroupBox { title, id } => {
                let group = self.attach(
                    Component::new(ComponentKind::GroupBox, Some(id)).with("title", title),
                );
                self.session.scope.push(group);
            }
            Statement::Timer { id, interval_ms, action } => self.timer(id, interval_ms, action),
        }
    }

    /// The container new visuals attach to, synthesizing the default window
    /// if nothing has been opened yet.
    pub(crate) fn ensure_window(&mut self) -> NodeId {
        if let Some(top) = self.session.scope.top() {
            return top;
        }
        log::debug!("no window declared before line {}; using the default window", self.line);
        let config = &self.session.config;
        let (title, width, height) =
            (config.default_title.clone(), config.default_width, config.default_height);
        self.window(title, width, height, None)
    }

    fn window(&mut self, title: String, width: u32, height: u32, icon: Option<String>) -> NodeId {
        let mut window = Component::new(ComponentKind::Window, None)
            .with("title", title)
            .with("width", width)
            .with("height", height);
        if let Some(icon) = icon {
            if !self.host.path_exists(&icon) {
                self.warn(format!("icon file does not exist: {icon}"));
            }
            window = window.with("icon", icon);
        }

        let root = self.session.tree.insert(window, None);
        if let Some(previous) = self.session.root.replace(root) {
            log::debug!(
                "line {}: new window replaces #{} as root; open groups keep receiving components",
                self.line,
                previous.index()
            );
        }
        self.session.scope.replace_root(root);
        if let Some(component) = self.session.tree.component(root) {
            self.host.create_root_surface(root, component);
        }
        log::debug!("line {}: window #{} ({width}x{height})", self.line, root.index());
        root
    }

    /// Insert a visual component under the current scope.
    fn attach(&mut self, component: Component) -> NodeId {
        let container = self.ensure_window();
        let node = self.session.tree.insert(component, Some(container));
        if let Some(component) = self.session.tree.component(node) {
            log::debug!(
                "line {}: {} `{}` under #{}",
                self.line,
                component.kind.name(),
                component.id_or_empty(),
                container.index()
            );
            self.host.add_visual(container, node, component);
        }
        self.register(node);
        node
    }

    /// Insert a non-visual component. It joins the registry but never a
    /// container, and does not require a window.
    fn detached(&mut self, component: Component) -> NodeId {
        let node = self.session.tree.insert(component, None);
        self.register(node);
        node
    }

    fn register(&mut self, node: NodeId) {
        let Some(id) = self.session.tree.component(node).and_then(|c| c.id.clone()) else {
            return;
        };
        if let Some(previous) = self.session.registry.insert(id.clone(), node) {
            log::debug!(
                "line {}: id `{id}` redefined; #{} stays in the tree but is no longer addressable",
                self.line,
                previous.index()
            );
            self.session.diagnostics.push(Diagnostic::Overwritten { line: self.line, id, previous });
        }
    }

    fn audio(&mut self, source: AudioSource, id: String) {
        let (key, location) = match &source {
            AudioSource::Url(url) => ("url", url.clone()),
            AudioSource::File(path) => {
                if !self.host.path_exists(path) {
                    self.warn(format!("local audio file does not exist: {path}"));
                    return;
                }
                ("os", path.clone())
            }
        };

        self.session.media.insert(id.clone(), source);
        self.detached(Component::new(ComponentKind::Audio, Some(id.clone())).with(key, location));
        self.host.show_message(Message::info(format!("audio player created (ID: {id})")));
    }

    fn timer(&mut self, id: String, interval_ms: u64, action: String) {
        if self.session.timers.get(&id).is_some_and(|t| t.running) {
            self.host.cancel(&id);
        }
        self.session
            .timers
            .insert(TimerEntry::new(id.clone(), Duration::from_millis(interval_ms), action.clone()));
        self.detached(
            Component::new(ComponentKind::Timer, Some(id.clone()))
                .with("interval", i64::try_from(interval_ms).unwrap_or(i64::MAX))
                .with("action", action),
        );
        self.host.show_message(Message::info(format!(
            "timer created (ID: {id}, interval: {interval_ms}ms)"
        )));
    }

    fn warn(&mut self, message: String) {
        log::warn!("line {}: {message}", self.line);
        self.host.show_message(Message::warning(message.clone()));
        self.session.diagnostics.push(Diagnostic::Warning { line: self.line, message });
    }
}

fn ranged(kind: ComponentKind, label: String, id: String, min: i64, max: i64, value: i64) -> Component {
    let range = Range::new(min, max, value);
    Component::new(kind, Some(id))
        .with("label", label)
        .with("min", min)
        .with("max", max)
        .with_value(RuntimeValue::Range(range))
}
