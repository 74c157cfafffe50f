mod export;
mod summarize;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "varnotes";
    pub const BIN_NAME: &str = "varnotes";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("varnotes")
        .about("Tools for merging clinical variant annotations and exporting per-variant report tables.")
        .subcommand_required(true)
        .subcommand(export::cli::create_export_cli())
        .subcommand(summarize::cli::create_summarize_cli())
}

fn main() -> Result<()> {
    env_logger::init();

    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // EXPORT
        //
        Some((export::cli::EXPORT_CMD, matches)) => {
            export::handlers::run_export(matches)?;
        }

        //
        // SUMMARIZE
        //
        Some((summarize::cli::SUMMARIZE_CMD, matches)) => {
            summarize::handlers::run_summarize(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
