use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::ArgMatches;
use log::info;

use varnotes_annotate::report::annotate_batch;
use varnotes_core::models::AnnotationBatch;
use varnotes_export::{download_filename, CsvWrite};

const DEFAULT_REPORT_NAME: &str = "genome-report";

pub fn run_export(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .expect("A path to a fetched annotation batch is required.");

    let report_name = matches
        .get_one::<String>("report_name")
        .map(|s| s.as_str())
        .unwrap_or(DEFAULT_REPORT_NAME);

    let gzip = matches.get_flag("gzip");

    let output: PathBuf = match matches.get_one::<String>("output") {
        Some(path) => PathBuf::from(path),
        None => {
            let mut filename = download_filename(report_name);
            if gzip {
                filename.push_str(".gz");
            }
            PathBuf::from(filename)
        }
    };

    let batch = AnnotationBatch::try_from(Path::new(input))?;
    let reports = annotate_batch(&batch);

    if gzip {
        reports.write_csv_gz(&output)?;
    } else {
        reports.write_csv(&output)?;
    }

    info!(
        "Wrote {} report rows for {} variants to {:?}",
        reports.iter().map(|r| r.details.len()).sum::<usize>(),
        reports.len(),
        output
    );

    Ok(())
}
