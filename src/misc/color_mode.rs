use clap::ValueEnum;
use std::io::{IsTerminal, stdout};

/// Controls when colored output is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Use colors if the output is a terminal, otherwise don't use colors
    Auto,

    /// Always use colors
    Always,

    /// Never use colors
    Never,
}

impl ColorMode {
    /// Resolve the mode against the current stdout.
    #[must_use]
    pub fn enabled(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => stdout().is_terminal(),
        }
    }
}
