//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("figdts")
        .about("TypeScript declarations from scripting API documentation")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(generate_command())
        .subcommand(check_command())
}

/// Compile documentation to a `.d.ts` file.
pub fn generate_command() -> Command {
    Command::new("generate")
        .about("Generate TypeScript declarations")
        .override_usage(
            "\
  figdts generate <INPUT>
  figdts generate <INPUT> -o <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  figdts generate docs.json                   # declarations to stdout
  figdts generate docs.json -o figura.d.ts    # write to file
  figdts generate - --indent 2 < docs.json    # from stdin
  figdts generate docs.json --known-type Foo  # accept an extra type name"#,
        )
        .arg(input_arg())
        .arg(output_file_arg())
        .arg(indent_arg())
        .arg(known_type_arg())
        .arg(strict_arg())
        .arg(color_arg())
}

/// Compile documentation and report diagnostics only.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate documentation without writing declarations")
        .override_usage("  figdts check <INPUT>")
        .after_help(
            r#"EXAMPLES:
  figdts check docs.json            # errors only
  figdts check docs.json --strict   # warnings fail too"#,
        )
        .arg(input_arg())
        .arg(known_type_arg())
        .arg(strict_arg())
        .arg(color_arg())
}
