mod cli;
mod commands;

use cli::{CheckParams, GenerateParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("generate", m)) => {
            let params = GenerateParams::from_matches(m);
            commands::generate::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
