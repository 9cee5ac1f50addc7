use std::io::IsTerminal;

use colored::{Color, Colorize};

use crate::config::Config;

/// Console styling resolved once per run and passed to the renderers.
#[derive(Debug, Clone)]
pub struct ReportStyle {
    pub use_color: bool,
    pub plain_mode: bool,
    pub color_section: Color,
    pub color_result_fg: Color,
    pub color_result_bg: Color,
}

impl ReportStyle {
    /// Colors only on a terminal, with `NO_COLOR` unset and color allowed by config and flags.
    pub fn detect(config: &Config, no_color_flag: bool) -> Self {
        let stdout_tty = std::io::stdout().is_terminal();
        let no_color_env = std::env::var_os("NO_COLOR").is_some();
        let plain_mode = config.accessibility.plain_output;
        let use_color =
            stdout_tty && config.ui_color_enabled && !plain_mode && !no_color_env && !no_color_flag;
        Self {
            use_color,
            plain_mode,
            ..Self::plain()
        }
    }

    /// Uncolored output; used for tests and redirected output.
    pub fn plain() -> Self {
        Self {
            use_color: false,
            plain_mode: true,
            color_section: Color::Green,
            color_result_fg: Color::White,
            color_result_bg: Color::Blue,
        }
    }

    pub fn apply_section_style(&self, text: &str) -> String {
        if self.use_color {
            text.color(self.color_section).bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn apply_result_style(&self, text: &str) -> String {
        if self.use_color {
            text.color(self.color_result_fg)
                .on_color(self.color_result_bg)
                .bold()
                .to_string()
        } else {
            text.to_string()
        }
    }
}
