use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::Result;
use clap::ArgMatches;

use varnotes_annotate::report::annotate_batch;
use varnotes_core::models::AnnotationBatch;

pub fn run_summarize(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .expect("A path to a fetched annotation batch is required.");

    let batch = AnnotationBatch::try_from(Path::new(input))?;
    let reports = annotate_batch(&batch);

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    for report in &reports {
        writeln!(writer, "{}", report.identity.variant_label)?;
        writeln!(writer, "  name:      {}", report.display_name())?;
        writeln!(writer, "  frequency: {}", report.frequency.frequency)?;
        if !report.identity.evidence_url.is_empty() {
            writeln!(writer, "  evidence:  {}", report.identity.evidence_url)?;
        }
        if !report.frequency.cross_ref_url.is_empty() {
            writeln!(writer, "  exac:      {}", report.frequency.cross_ref_url)?;
        }
        for detail in &report.details {
            writeln!(
                writer,
                "  [{}] {} | {} | {} | {}",
                detail.trait_label, detail.accession, detail.trait_name, detail.significance,
                detail.curation
            )?;
        }
    }

    writer.flush()?;

    Ok(())
}
