//! Terminal host: messages go to stdout, everything else to the log.

use std::time::Duration;

use ewui_runtime::component::AudioSource;
use ewui_runtime::media::Transport;
use ewui_runtime::{Component, Host, Level, Message, NodeId};

#[derive(Debug, Default)]
pub struct ConsoleHost {
    /// Messages shown so far, for the exit summary.
    pub shown: usize,
    pub warnings: usize,
}

impl Host for ConsoleHost {
    fn create_root_surface(&mut self, root: NodeId, window: &Component) {
        log::info!(
            "window #{}: {:?} {}x{}",
            root.index(),
            window.prop_str("title").unwrap_or_default(),
            window.prop_int("width").unwrap_or_default(),
            window.prop_int("height").unwrap_or_default(),
        );
    }

    fn add_visual(&mut self, container: NodeId, node: NodeId, component: &Component) {
        log::trace!("#{} -> #{} ({})", container.index(), node.index(), component.kind.name());
    }

    fn schedule(&mut self, timer: &str, interval: Duration) {
        log::info!("timer `{timer}` scheduled every {}ms", interval.as_millis());
    }

    fn cancel(&mut self, timer: &str) {
        log::info!("timer `{timer}` cancelled");
    }

    fn transport(&mut self, media: &str, source: &AudioSource, op: Transport) {
        let location = match source {
            AudioSource::Url(url) => url,
            AudioSource::File(path) => path,
        };
        log::info!("audio `{media}`: {op:?} {location}");
    }

    fn show_message(&mut self, message: Message) {
        self.shown += 1;
        match message.level {
            Level::Info => println!("[info] {}", message.text),
            Level::Warning => {
                self.warnings += 1;
                println!("[warning] {}", message.text);
            }
        }
    }
}
