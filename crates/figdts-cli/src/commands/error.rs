use std::io;
use std::path::PathBuf;

/// Failures that stop a command before or after compilation.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read '{}': {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error(transparent)]
    Parse(#[from] figdts_compiler::Error),

    #[error("failed to write '{}': {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Print `error: <message>` and exit 1.
pub fn exit_with(err: CliError) -> ! {
    eprintln!("error: {}", err);
    std::process::exit(1);
}
