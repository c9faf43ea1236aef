//! Plain-text rendering of a session for `--dump` and `--diagnostics`.

use std::fmt::Write;

use ewui_runtime::{Component, Diagnostic, RuntimeValue, Session};

/// Indented component tree under the current root, then the detached
/// timer and audio tables.
pub fn tree(session: &Session) -> String {
    let mut out = String::new();
    if let Some(root) = session.root() {
        for (depth, node) in session.tree().walk(root) {
            if let Some(component) = session.tree().component(node) {
                let _ = writeln!(out, "{}{}", "  ".repeat(depth), line(component));
            }
        }
    }
    for timer in session.timers().iter() {
        let state = if timer.running { "running" } else { "stopped" };
        let _ = writeln!(
            out,
            "timer {} every {}ms, {state}, {} ticks: {}",
            timer.id,
            timer.interval.as_millis(),
            timer.ticks,
            timer.action
        );
    }
    for (id, entry) in session.media().iter() {
        let _ = writeln!(out, "audio {id}: {:?}", entry.state);
    }
    out
}

fn line(component: &Component) -> String {
    let mut text = component.kind.name().to_string();
    if let Some(id) = &component.id {
        text.push_str(&format!(" `{id}`"));
    }
    for key in ["title", "text", "label", "hint"] {
        if let Some(caption) = component.prop_str(key) {
            text.push_str(&format!(" {caption:?}"));
            break;
        }
    }
    match &component.value {
        RuntimeValue::None => {}
        RuntimeValue::Text(value) => text.push_str(&format!(" = {value:?}")),
        RuntimeValue::Choice { options, selected } => {
            let current = selected.and_then(|i| options.get(i)).map(String::as_str).unwrap_or("-");
            text.push_str(&format!(" = {current:?} of {options:?}"));
        }
        RuntimeValue::Toggles(toggles) => {
            let marks: Vec<_> = toggles
                .iter()
                .map(|t| format!("[{}] {}", if t.checked { "x" } else { " " }, t.label))
                .collect();
            text.push_str(&format!(" = {}", marks.join(" ")));
        }
        RuntimeValue::Range(range) => {
            text.push_str(&format!(" = {} in {}..={}", range.value, range.min, range.max));
        }
        RuntimeValue::Date(date) => text.push_str(&format!(" = {}", date.format("%Y-%m-%d"))),
    }
    text
}

pub fn diagnostic(diagnostic: &Diagnostic) -> String {
    match diagnostic {
        Diagnostic::Skipped(e) => e.to_string(),
        Diagnostic::TrailingText { line, text } => format!("line {line}: ignored trailing text {text:?}"),
        Diagnostic::Overwritten { line, id, .. } => format!("line {line}: id `{id}` redefined"),
        Diagnostic::Warning { line, message } => format!("line {line}: {message}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ewui_runtime::RecordingHost;

    #[test]
    fn tree_is_indented_by_depth() {
        let mut host = RecordingHost::new();
        let mut session = Session::new();
        session.parse_and_run(
            r#"
            window=title="W",width=10,height=10;
            groupbox=title="G",id=g;
            slider=label="S",id=s,min=0,max=5,value=2;
            "#,
            &mut host,
        );
        let dump = tree(&session);
        let lines: Vec<_> = dump.lines().collect();
        assert_eq!(lines[0], r#"window "W""#);
        assert_eq!(lines[1], r#"  group box `g` "G""#);
        assert_eq!(lines[2], r#"    slider `s` "S" = 2 in 0..=5"#);
    }

    #[test]
    fn bundled_demo_builds_cleanly() {
        let mut host = RecordingHost::new();
        let mut session = Session::new();
        session.parse_and_run(include_str!("../ui/demo.eui"), &mut host);
        assert!(session.diagnostics().is_empty(), "{:?}", session.diagnostics());
        assert!(session.node("go").is_some());
    }
}
