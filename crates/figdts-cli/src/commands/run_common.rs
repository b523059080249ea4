//! Shared logic for generate and check commands.

use std::path::Path;

use figdts_compiler::{Compilation, Config, compile_json};

use super::error::CliError;
use super::loader::load_input;

/// Load and compile `input`.
pub fn compile_input(input: &Path, config: &Config) -> Result<Compilation, CliError> {
    let json = load_input(input)?;
    Ok(compile_json(&json, config)?)
}

/// Whether the compilation should fail the command.
pub fn fails(compilation: &Compilation, strict: bool) -> bool {
    let diagnostics = compilation.diagnostics();
    if strict {
        diagnostics.has_errors() || diagnostics.has_warnings()
    } else {
        !compilation.is_valid()
    }
}

/// Print diagnostics to stderr, if any.
pub fn report(compilation: &Compilation, color: bool) {
    let diagnostics = compilation.diagnostics();
    if !diagnostics.is_empty() {
        eprint!("{}", diagnostics.render_colored(color));
    }
}
