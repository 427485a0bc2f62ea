//! Front end driver: turns source text into tokens or a rendered AST.

use shlang_parser::{parse, print_program, tokenize, Error};
use shlang_source::Source;

/// What to print for a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Emit {
    /// One token per line.
    Tokens,
    /// Indented AST, one node per line.
    #[default]
    Ast,
    /// Rust debug rendering of the AST.
    Debug,
}

/// Renders `source` as requested by `emit`.
pub fn render(source: &Source<'_>, emit: Emit) -> Result<String, Error> {
    log::debug!("rendering {} as {:?}", source.name, emit);
    let output: String = match emit {
        Emit::Tokens => tokenize(source.content)?
            .iter()
            .map(|token| format!("{}\n", token))
            .collect(),
        Emit::Ast => print_program(&parse(source)?),
        Emit::Debug => format!("{:#?}\n", parse(source)?),
    };
    Ok(output)
}

/// Formats `error` as a diagnostic for `source`.
/// Errors with a known position get `name:line:column` and the offending line.
pub fn report(source: &Source<'_>, error: &Error) -> String {
    let Some(position) = error.position() else {
        return format!("{}: error: {}", source.name, error);
    };

    let location = source.location(position);
    let mut output = format!("{}:{}: error: {}", source.name, location, error);
    if let Some(line) = source.line(location.line) {
        // tabs are kept so the caret lines up with the offending character
        let padding: String = line
            .chars()
            .take(location.column - 1)
            .map(|ch| if ch == '\t' { '\t' } else { ' ' })
            .collect();
        output.push_str(&format!("\n  | {}\n  | {}^", line, padding));
    }
    output
}
