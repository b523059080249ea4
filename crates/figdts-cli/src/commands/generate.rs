use std::path::PathBuf;

use figdts_compiler::Config;

use super::error::{CliError, exit_with};
use super::loader::write_output;
use super::run_common::{compile_input, fails, report};

pub struct GenerateArgs {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub indent: usize,
    pub known_types: Vec<String>,
    pub strict: bool,
    pub color: bool,
}

impl GenerateArgs {
    /// Declarations follow the stdout color choice only when they go to stdout.
    pub fn config(&self) -> Config {
        let config = self
            .known_types
            .iter()
            .fold(Config::new().indent(self.indent), |config, name| {
                config.known_type(name)
            });
        config.colored(self.color && self.output.is_none())
    }
}

/// Writes the declarations whenever the input parses, so an error still
/// leaves reviewable output. `Ok(false)` means the command fails.
pub fn execute(args: &GenerateArgs) -> Result<bool, CliError> {
    let compilation = compile_input(&args.input, &args.config())?;

    report(&compilation, args.color);
    write_output(args.output.as_deref(), &compilation.render())?;
    Ok(!fails(&compilation, args.strict))
}

pub fn run(args: GenerateArgs) {
    match execute(&args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => exit_with(e),
    }
}
