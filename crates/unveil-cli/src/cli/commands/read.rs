//! Default command: the interactive reader.

use anyhow::{Context, Result};
use unveil_core::config::Config;
use unveil_core::source::TextSource;
use unveil_core::{Direction, ViewOptions, logging};
use unveil_tui::Session;

use crate::cli::ViewArgs;

impl ViewArgs {
    /// Turns on the flags given on the command line.
    fn apply(&self, mut view: ViewOptions) -> ViewOptions {
        if self.rtl {
            view.direction = Direction::Rtl;
        }
        view.markup |= self.markup;
        view.focus_dim |= self.focus;
        view.fullscreen |= self.fullscreen;
        view
    }
}

pub fn run(file: Option<&str>, view_args: &ViewArgs) -> Result<()> {
    let config = Config::load().context("load config")?;
    let _log_guard = logging::init(&config).context("init logging")?;

    let (text, source_label) = match file.map(TextSource::from_arg) {
        Some(source) => (Some(source.read()?), Some(source.to_string())),
        None => (None, None),
    };

    unveil_tui::run_reader(Session {
        text,
        source_label,
        view: view_args.apply(config.view_options()),
        settle_delay: config.settle_delay(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let args = ViewArgs {
            rtl: true,
            focus: true,
            ..ViewArgs::default()
        };
        let config_view = ViewOptions {
            markup: true,
            ..ViewOptions::default()
        };
        let view = args.apply(config_view);
        assert_eq!(view.direction, Direction::Rtl);
        assert!(view.markup);
        assert!(view.focus_dim);
        assert!(!view.fullscreen);
    }
}
