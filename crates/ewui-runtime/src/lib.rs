//! EWUI runtime: builds a component tree from parsed markup and runs the
//! actions bound to buttons and timers.
//!
//! # Quick start
//!
//! ```rust
//! use ewui_runtime::prelude::*;
//!
//! let mut host = RecordingHost::new();
//! let mut session = Session::new();
//! session.parse_and_run(r#"
//!     window=title="Demo",width=320,height=200;
//!     progress=label="Load",id=p1,min=0,max=3,value=2;
//!     timer=id=t1,interval=100,action="update_progress=p1,value=+1";
//!     button=text="Go",id=go,click="start_timer=t1";
//! "#, &mut host);
//!
//! session.click(&mut host, "go").unwrap();
//! session.tick(&mut host, "t1").unwrap();
//! assert!(!session.timers().get("t1").unwrap().running);
//! ```
//!
//! # Driving a session from a GUI
//!
//! Implement [`Host`] to create real widgets in
//! [`add_visual`](Host::add_visual), schedule real timers in
//! [`schedule`](Host::schedule), and forward user interaction back with
//! [`Session::dispatch`] and the edit methods such as
//! [`Session::set_text`]. Everything runs on the thread that owns the
//! session.

pub mod action;
pub mod component;
pub mod config;
pub mod error;
pub mod event;
pub mod host;
pub mod logging;
pub mod media;
pub mod registry;
pub mod scope;
pub mod session;
pub mod timer;
pub mod tree;

mod builder;
mod edit;
mod interpreter;

pub use component::{Component, ComponentKind, Property, Range, RuntimeValue, Toggle};
pub use config::SessionConfig;
pub use error::{ActionError, EditError};
pub use event::Event;
pub use host::{Host, Level, Message, RecordingHost};
pub use logging::{LoggingConfig, init_logging};
pub use session::{Diagnostic, Phase, Session};
pub use tree::{NodeId, Tree};

/// Everything a host implementation needs.
pub mod prelude {
    pub use crate::component::{AudioSource, Component, ComponentKind, RuntimeValue};
    pub use crate::config::SessionConfig;
    pub use crate::error::{ActionError, EditError};
    pub use crate::event::Event;
    pub use crate::host::{Host, Level, Message, RecordingHost};
    pub use crate::media::{PlaybackState, Transport};
    pub use crate::session::{Diagnostic, Phase, Session};
    pub use crate::tree::NodeId;
}
