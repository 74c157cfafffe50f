use clap::{arg, Command};

pub const SUMMARIZE_CMD: &str = "summarize";

pub fn create_summarize_cli() -> Command {
    Command::new(SUMMARIZE_CMD)
        .author("varnotes")
        .about("Print merged per-variant summaries for a fetched annotation batch")
        .arg_required_else_help(true)
        .arg(arg!(-i <input> "Fetched annotation batch (JSON, optionally gzipped)").required(true))
}
