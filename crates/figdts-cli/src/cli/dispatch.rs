//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` mirror the command `*Args` but keep the unresolved `ColorChoice`;
//! the `Into<*Args>` impls resolve it against the terminal.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::generate::GenerateArgs;

pub struct GenerateParams {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub indent: usize,
    pub known_types: Vec<String>,
    pub strict: bool,
    pub color: ColorChoice,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: parse_input(m),
            output: m.get_one::<PathBuf>("output").cloned(),
            indent: m.get_one::<usize>("indent").copied().unwrap_or(4),
            known_types: parse_known_types(m),
            strict: m.get_flag("strict"),
            color: parse_color(m),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        Self {
            input: p.input,
            output: p.output,
            indent: p.indent,
            known_types: p.known_types,
            strict: p.strict,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub input: PathBuf,
    pub known_types: Vec<String>,
    pub strict: bool,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: parse_input(m),
            known_types: parse_known_types(m),
            strict: m.get_flag("strict"),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            input: p.input,
            known_types: p.known_types,
            strict: p.strict,
            color: p.color.should_colorize(),
        }
    }
}

/// `INPUT` is required, so clap has already rejected a missing one.
fn parse_input(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("input").cloned().unwrap_or_default()
}

fn parse_known_types(m: &ArgMatches) -> Vec<String> {
    m.get_many::<String>("known_type")
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
