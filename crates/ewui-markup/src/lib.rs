//! Line matcher, grammar table, and statement AST for the **EWUI markup
//! language** (`.eui`).
//!
//! This crate has no dependencies so it can be consumed by
//! editors and linters without pulling in the runtime.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`ast`] | `Statement`, `Attributes`, `AttrValue`, `Document` |
//! | [`error`] | `MatchError` |
//! | [`grammar`] | `Tag`, `GRAMMAR` table, `AttrSpec` |
//! | [`lexer`] | line splitting and the attribute `Cursor` |
//! | [`parser`] | `parse_str` / `parse_line` entry points |
//!
//! # Quick start
//!
//! ```rust
//! use ewui_markup::{parse_str, Statement};
//!
//! let src = r#"
//!     window=title="Demo",width=400,height=300;
//!     label=text="Hello",id=l1;
//!     this line is ignored;
//! "#;
//!
//! let doc = parse_str(src);
//! assert_eq!(doc.statements.len(), 2);
//! assert_eq!(doc.skipped.len(), 1);
//! assert!(matches!(doc.statements[1].statement, Statement::Label { .. }));
//! ```

pub mod ast;
pub mod error;
pub mod grammar;
pub mod lexer;
pub mod parser;

pub use ast::{AudioSource, Document, InputType, ParsedLine, Statement};
pub use error::MatchError;
pub use grammar::Tag;
pub use parser::{parse_line, parse_str};

#[cfg(test)]
mod parse_tests {
    use super::*;

    fn one(src: &str) -> Statement {
        parse_line(1, src).unwrap().expect("statement").statement
    }
    fn skip(src: &str) -> MatchError {
        parse_line(1, src).unwrap_err()
    }

    #[test] fn window_with_icon() {
        assert_eq!(one(r#"window=title="T",width=400,height=300,icon="app.ico";"#), Statement::Window {
            title: "T".into(), width: 400, height: 300, icon: Some("app.ico".into()),
        });
    }
    #[test] fn window_without_icon() {
        assert!(matches!(one(r#"window = title="T" , width=1 ,height=2"#), Statement::Window { icon: None, .. }));
    }
    #[test] fn label() {
        assert_eq!(one(r#"label=text="Hello",id=l1;"#), Statement::Label { text: "Hello".into(), id: "l1".into() });
    }
    #[test] fn entry_defaults() {
        assert_eq!(one(r#"entry=hint="Name",id=e1"#), Statement::Entry {
            hint: "Name".into(), id: "e1".into(), readonly: false, input: InputType::Text,
        });
    }
    #[test] fn entry_all_options() {
        assert_eq!(one(r#"entry=hint="Age",id=e2,readonly=true,type=number;"#), Statement::Entry {
            hint: "Age".into(), id: "e2".into(), readonly: true, input: InputType::Number,
        });
    }
    #[test] fn entry_type_without_readonly() {
        assert!(matches!(one(r#"entry=hint="Age",id=e2,type=number"#),
            Statement::Entry { readonly: false, input: InputType::Number, .. }));
    }
    #[test] fn combo_options() {
        assert_eq!(one(r#"combo=label="Pick",id=c1,options=["A","B","C"];"#), Statement::Combo {
            label: "Pick".into(), id: "c1".into(), options: vec!["A".into(), "B".into(), "C".into()],
        });
    }
    #[test] fn audio_url_and_file() {
        assert!(matches!(one(r#"audio=url="http://x/a.mp3",id=a1"#),
            Statement::Audio { source: AudioSource::Url(_), .. }));
        assert!(matches!(one(r#"audio=os="a.mp3",id=a2"#),
            Statement::Audio { source: AudioSource::File(_), .. }));
    }
    #[test] fn separator_may_be_empty() {
        assert_eq!(one(r#"separator=text="",id=s"#), Statement::Separator { text: String::new(), id: "s".into() });
    }
    #[test] fn label_may_not_be_empty() { skip(r#"label=text="",id=l"#); }
    #[test] fn timer() {
        assert_eq!(one(r#"timer=id=t1,interval=1000,action="update_progress=p1,value=+1";"#), Statement::Timer {
            id: "t1".into(), interval_ms: 1000, action: "update_progress=p1,value=+1".into(),
        });
    }
    #[test] fn chinese_action_keyword() {
        assert!(matches!(one(r#"button=text="Go",id=b1,click="显示=e1";"#),
            Statement::Button { ref click, .. } if click == "显示=e1"));
    }
    #[test] fn negative_slider_range() {
        assert!(matches!(one(r#"slider=label="T",id=s,min=-10,max=10,value=0"#),
            Statement::Slider { min: -10, .. }));
    }

    #[test] fn blank_lines_produce_nothing() {
        assert_eq!(parse_line(1, "   ;  "), Ok(None));
    }
    #[test] fn unknown_tag() {
        let e = skip("frobnicate=1");
        assert_eq!(e.message, "unrecognized statement");
    }
    #[test] fn missing_required_attribute() {
        let e = skip(r#"slider=label="V",id=s1,min=0,max=100"#);
        assert!(e.message.contains("`value=`"), "{}", e.message);
    }
    #[test] fn non_integer_fails_the_statement() { skip(r#"progress=label="P",id=p,min=0,max=x,value=0"#); }
    #[test] fn attributes_out_of_order() { skip(r#"label=id=l1,text="x""#); }
    #[test] fn tag_is_case_sensitive() { skip(r#"Label=text="x",id=l1"#); }
    #[test] fn negative_width_is_out_of_range() {
        let e = skip(r#"window=title="T",width=-1,height=2"#);
        assert!(e.message.contains("out of range"));
    }

    #[test] fn trailing_comment_is_reported_not_rejected() {
        let parsed = parse_line(3, r#"window=title="T",width=500,height=300;# note"#).unwrap().unwrap();
        assert_eq!(parsed.line, 3);
        assert_eq!(parsed.trailing.as_deref(), Some(";# note"));
    }
    #[test] fn malformed_optional_becomes_trailing() {
        let parsed = parse_line(1, r#"entry=hint="N",id=e1,readonly=maybe"#).unwrap().unwrap();
        assert!(matches!(parsed.statement, Statement::Entry { readonly: false, .. }));
        assert_eq!(parsed.trailing.as_deref(), Some(",readonly=maybe"));
    }

    #[test] fn document_keeps_line_numbers() {
        let doc = parse_str("label=text=\"a\",id=a;\n\nnope\nlabel=text=\"b\",id=b;\n");
        let lines: Vec<_> = doc.statements.iter().map(|p| p.line).collect();
        assert_eq!(lines, vec![1, 4]);
        assert_eq!(doc.skipped[0].line, 3);
    }
}
