use clap::{arg, Command};

pub const EXPORT_CMD: &str = "export";

pub fn create_export_cli() -> Command {
    Command::new(EXPORT_CMD)
        .author("varnotes")
        .about("Merge a fetched annotation batch and write the CSV export")
        .arg_required_else_help(true)
        .arg(arg!(-i <input> "Fetched annotation batch (JSON, optionally gzipped)").required(true))
        .arg(arg!(-o <output> "Output csv path (overrides the report-name derived filename)"))
        .arg(arg!(-n <report_name> "Report name the download filename is derived from"))
        .arg(arg!(--gzip "Gzip the output file"))
}
