use clap::Parser;
use eyre::WrapErr;
use log::{debug, trace};
use shlang::{render, report};
use shlang_source::Source;
use std::io::{self, Read, Write};
use std::process::ExitCode;

mod args;

use args::Args;

fn main() -> eyre::Result<ExitCode> {
    color_eyre::install()?;
    let args = Args::parse();
    env_logger::builder()
        .filter_level(args.log_level_filter())
        .parse_default_env()
        .init();
    trace!("starting shlang with args {args:?}");

    let (name, content) = match args.input() {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .wrap_err_with(|| format!("could not read {}", path.display()))?;
            (path.display().to_string(), content)
        }
        None => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .wrap_err("could not read stdin")?;
            ("<stdin>".to_string(), content)
        }
    };
    debug!("read {} bytes from {}", content.len(), name);

    let source = Source::named(&name, &content);
    match render(&source, args.emit) {
        Ok(output) => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            debug!("failed: {error:?}");
            eprintln!("{}", report(&source, &error));
            Ok(ExitCode::FAILURE)
        }
    }
}
