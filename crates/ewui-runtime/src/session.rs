use ewui_markup::{Document, MatchError, parse_str};

use crate::builder::Builder;
use crate::component::{Component, ComponentKind, RuntimeValue};
use crate::config::SessionConfig;
use crate::error::ActionError;
use crate::event::{Event, Origin};
use crate::host::{Host, Message};
use crate::interpreter::Interpreter;
use crate::media::MediaTable;
use crate::registry::Registry;
use crate::scope::ScopeStack;
use crate::timer::TimerTable;
use crate::tree::{NodeId, Tree};

// ── Phase ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    /// Consuming statements; events are rejected.
    #[default]
    Building,
    /// Document complete; events are accepted, statements are rejected.
    Running,
}

// ── Diagnostic ────────────────────────────────────────────────────────────

/// Something noteworthy that happened while building. None of these stop
/// the build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The line produced no statement.
    Skipped(MatchError),
    /// The line matched, but text after the last attribute was ignored.
    TrailingText { line: usize, text: String },
    /// An id was registered again; `previous` is still in the tree.
    Overwritten { line: usize, id: String, previous: NodeId },
    /// A missing resource or similar problem that was also shown to the user.
    Warning { line: usize, message: String },
}

impl Diagnostic {
    pub fn line(&self) -> usize {
        match self {
            Diagnostic::Skipped(e) => e.line,
            Diagnostic::TrailingText { line, .. }
            | Diagnostic::Overwritten { line, .. }
            | Diagnostic::Warning { line, .. } => *line,
        }
    }
}

// ── Session ───────────────────────────────────────────────────────────────

/// One interpreter run: the document tree, registry, scope stack, and
/// timer/media tables, built once and then driven by host events.
///
/// ```rust
/// use ewui_runtime::{RecordingHost, Session};
///
/// let mut host = RecordingHost::new();
/// let mut session = Session::new();
/// session.parse_and_run(r#"
///     entry=hint="Name",id=e1;
///     button=text="Show",id=b1,click="显示=e1";
/// "#, &mut host);
///
/// session.set_text("e1", "hi").unwrap();
/// session.click(&mut host, "b1").unwrap();
/// assert_eq!(host.last_message().unwrap().text, "hi");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub(crate) config:      SessionConfig,
    pub(crate) phase:       Phase,
    pub(crate) tree:        Tree,
    pub(crate) root:        Option<NodeId>,
    pub(crate) scope:       ScopeStack,
    pub(crate) registry:    Registry,
    pub(crate) timers:      TimerTable,
    pub(crate) media:       MediaTable,
    pub(crate) diagnostics: Vec<Diagnostic>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SessionConfig) -> Self {
        Self { config, ..Self::default() }
    }

    // ── Building ──────────────────────────────────────────────────────────

    /// Parse `src`, build it, and switch to [`Phase::Running`].
    pub fn parse_and_run(&mut self, src: &str, host: &mut dyn Host) {
        self.build(parse_str(src), host);
        self.finish(host);
    }

    /// Consume a parsed document into components.
    ///
    /// May be called several times before [`finish`](Self::finish); each
    /// call continues in the current scope.
    pub fn build(&mut self, doc: Document, host: &mut dyn Host) {
        if self.phase == Phase::Running {
            log::warn!("document ignored: session is already running");
            host.show_message(Message::warning("document ignored: session is already running"));
            return;
        }

        for skipped in doc.skipped {
            log::trace!("{skipped}");
            self.diagnostics.push(Diagnostic::Skipped(skipped));
        }

        let mut builder = Builder::new(self, host);
        for parsed in doc.statements {
            builder.apply(parsed);
        }

        self.diagnostics.sort_by_key(Diagnostic::line);
    }

    /// End the building phase. A document without any window still gets the
    /// default one.
    pub fn finish(&mut self, host: &mut dyn Host) {
        if self.phase == Phase::Running {
            return;
        }
        if self.root.is_none() {
            Builder::new(self, host).ensure_window();
        }
        self.phase = Phase::Running;
        log::info!(
            "document built: {} components, {} ids, {} timers, {} audio players, {} skipped lines",
            self.tree.len(),
            self.registry.len(),
            self.timers.len(),
            self.media.len(),
            self.diagnostics.iter().filter(|d| matches!(d, Diagnostic::Skipped(_))).count(),
        );
    }

    // ── Running ───────────────────────────────────────────────────────────

    /// Handle one host event to completion.
    ///
    /// Failures are shown to the user as warnings and also returned; the
    /// session stays usable either way.
    pub fn dispatch(&mut self, host: &mut dyn Host, event: Event) -> Result<(), ActionError> {
        let result = self.handle(host, event);
        Self::report(host, result)
    }

    /// Click the button currently registered as `id`.
    pub fn click(&mut self, host: &mut dyn Host, id: &str) -> Result<(), ActionError> {
        match self.registry.get(id) {
            Some(node) => self.dispatch(host, Event::Click(node)),
            None => Self::report(host, Err(ActionError::NoSuchComponent(id.to_string()))),
        }
    }

    /// Deliver one tick of `timer`.
    pub fn tick(&mut self, host: &mut dyn Host, timer: &str) -> Result<(), ActionError> {
        self.dispatch(host, Event::Tick { timer: timer.to_string() })
    }

    fn handle(&mut self, host: &mut dyn Host, event: Event) -> Result<(), ActionError> {
        if self.phase != Phase::Running {
            return Err(ActionError::NotRunning);
        }
        match event {
            Event::Click(node) => {
                let button = self
                    .tree
                    .component(node)
                    .ok_or_else(|| ActionError::NoSuchComponent(format!("#{}", node.index())))?;
                if button.kind != ComponentKind::Button {
                    return Err(ActionError::WrongKind {
                        id:       button.id_or_empty().to_string(),
                        verb:     "click",
                        expected: ComponentKind::Button.name(),
                        found:    button.kind.name(),
                    });
                }
                let action = button.prop_str("click").unwrap_or_default().to_string();
                Interpreter::new(self, host).run(&action, Origin::Click)
            }
            Event::Tick { timer } => {
                let entry = self
                    .timers
                    .get_mut(&timer)
                    .ok_or_else(|| ActionError::NoSuchTimer(timer.clone()))?;
                if !entry.running {
                    log::debug!("tick for stopped timer `{timer}` ignored");
                    return Ok(());
                }
                entry.ticks += 1;
                let action = entry.action.clone();
                Interpreter::new(self, host).run(&action, Origin::Tick { timer: &timer })
            }
            Event::MediaError { id, code } => Err(ActionError::Media { id, code }),
        }
    }

    fn report(host: &mut dyn Host, result: Result<(), ActionError>) -> Result<(), ActionError> {
        if let Err(e) = &result {
            log::warn!("{e}");
            host.show_message(Message::warning(e.to_string()));
        }
        result
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Every component ever built, including replaced windows, overwritten
    /// ids, and detached audio/timer nodes.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// The current root surface.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn scope(&self) -> &ScopeStack {
        &self.scope
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn timers(&self) -> &TimerTable {
        &self.timers
    }

    pub fn media(&self) -> &MediaTable {
        &self.media
    }

    /// Build diagnostics ordered by source line.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn node(&self, id: &str) -> Option<NodeId> {
        self.registry.get(id)
    }

    pub fn component(&self, id: &str) -> Option<&Component> {
        self.tree.component(self.registry.get(id)?)
    }

    pub(crate) fn component_mut(&mut self, id: &str) -> Option<&mut Component> {
        let node = self.registry.get(id)?;
        self.tree.component_mut(node)
    }

    pub fn value(&self, id: &str) -> Option<&RuntimeValue> {
        self.component(id).map(|c| &c.value)
    }
}
