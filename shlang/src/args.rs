//! the args for running shlang

use clap::{value_parser, ArgAction};
use log::LevelFilter;
use shlang::Emit;
use std::path::PathBuf;

/// The args struct
#[derive(Debug, clap::Parser)]
#[clap(author, version, about = "Tokenizes and parses shlang source code")]
pub struct Args {
    /// Source file to read, or `-` for stdin
    #[clap(value_name = "source file", value_hint = clap::ValueHint::FilePath)]
    pub file: Option<PathBuf>,
    /// What to print
    #[clap(long, value_enum, default_value_t = Emit::Ast)]
    pub emit: Emit,
    #[clap(short = 'v', value_parser = value_parser!(u8).range(0..=2), action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,
    #[clap(short = 'q', value_parser = value_parser!(u8).range(0..=2), action = ArgAction::Count, conflicts_with = "verbose")]
    quiet: u8,
}

impl Args {
    /// Gets the logging level based on whether `-v[v]` or `-q[q]` has been used.
    pub fn log_level_filter(&self) -> LevelFilter {
        match self.verbose as i8 - self.quiet as i8 {
            i8::MIN..=-2 => LevelFilter::Off,
            -1 => LevelFilter::Error,
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// The file to read, `None` meaning stdin.
    pub fn input(&self) -> Option<&PathBuf> {
        self.file.as_ref().filter(|path| path.as_os_str() != "-")
    }
}
