use std::fs;
use std::io::{self, Read};
use std::path::Path;

use super::error::CliError;

/// Read the documentation JSON from a file, or stdin for `-`.
pub fn load_input(path: &Path) -> Result<String, CliError> {
    if path.as_os_str() == "-" {
        return load_stdin();
    }
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn load_stdin() -> Result<String, CliError> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(CliError::Stdin)?;
    Ok(buf)
}

/// Write declarations to a file, or stdout when no path is given.
pub fn write_output(path: Option<&Path>, output: &str) -> Result<(), CliError> {
    match path {
        Some(path) => fs::write(path, output).map_err(|source| CliError::Write {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut stdout = io::stdout().lock();
            io::Write::write_all(&mut stdout, output.as_bytes()).map_err(|source| {
                CliError::Write {
                    path: "<stdout>".into(),
                    source,
                }
            })
        }
    }
}
