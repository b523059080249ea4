use std::path::PathBuf;

use figdts_compiler::Config;

use super::error::{CliError, exit_with};
use super::run_common::{compile_input, fails, report};

pub struct CheckArgs {
    pub input: PathBuf,
    pub known_types: Vec<String>,
    pub strict: bool,
    pub color: bool,
}

/// Silent on success (like cargo check). `Ok(false)` means the command fails.
pub fn execute(args: &CheckArgs) -> Result<bool, CliError> {
    let config = args
        .known_types
        .iter()
        .fold(Config::new(), |config, name| config.known_type(name));

    let compilation = compile_input(&args.input, &config)?;

    report(&compilation, args.color);
    Ok(!fails(&compilation, args.strict))
}

pub fn run(args: CheckArgs) {
    match execute(&args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => exit_with(e),
    }
}
