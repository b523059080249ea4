//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Documentation JSON (positional, `-` for stdin).
pub fn input_arg() -> Arg {
    Arg::new("input")
        .value_name("INPUT")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Documentation JSON file, or - for stdin")
}

/// Output file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write declarations to file instead of stdout")
}

/// Indentation width (--indent).
pub fn indent_arg() -> Arg {
    Arg::new("indent")
        .long("indent")
        .value_name("N")
        .default_value("4")
        .value_parser(value_parser!(usize))
        .help("Spaces per nesting level")
}

/// Extra accepted type name (--known-type, repeatable).
pub fn known_type_arg() -> Arg {
    Arg::new("known_type")
        .long("known-type")
        .value_name("NAME")
        .action(ArgAction::Append)
        .help("Accept a type name that is not a documented class")
}

/// Treat warnings as errors (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Treat warnings as errors")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}
