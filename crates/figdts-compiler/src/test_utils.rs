//! Test utilities and snapshot macros.

use crate::{Compilation, Config, compile_json};

/// Compile with the default configuration; the input must parse.
pub fn compile_str(json: &str) -> Compilation {
    match compile_json(json, &Config::new()) {
        Ok(compilation) => compilation,
        Err(err) => panic!("test input must parse: {err}"),
    }
}

/// Rendered declarations, panicking with the diagnostics if there were errors.
pub fn expect_valid_dts(json: &str) -> String {
    let compilation = compile_str(json);
    if !compilation.is_valid() {
        panic!(
            "expected valid compilation, got:\n{}",
            compilation.diagnostics().render()
        );
    }
    compilation.render()
}

/// Rendered diagnostics, panicking if there were none.
pub fn expect_diagnostics(json: &str) -> String {
    let compilation = compile_str(json);
    if compilation.diagnostics().is_empty() {
        panic!("expected diagnostics, got none");
    }
    compilation.diagnostics().render()
}

/// Inline snapshot of the declarations for a JSON documentation export.
#[macro_export]
macro_rules! shot_dts {
    ($json:literal, @$snapshot:literal) => {{
        let json = indoc::indoc!($json);
        let output = $crate::test_utils::expect_valid_dts(json);
        insta::assert_snapshot!(output, @$snapshot);
    }};
}

/// Inline snapshot of the diagnostics for a JSON documentation export.
#[macro_export]
macro_rules! shot_diagnostics {
    ($json:literal, @$snapshot:literal) => {{
        let json = indoc::indoc!($json);
        let output = $crate::test_utils::expect_diagnostics(json);
        insta::assert_snapshot!(output, @$snapshot);
    }};
}
