use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use flate2::write::GzEncoder;
use flate2::Compression;

use varnotes_annotate::report::VariantReport;

///
/// Serialize one variant report into its CSV rows: one row per detail
/// record, each repeating the group's identity and frequency fields.
///
/// Fields are wrapped in double quotes and comma-joined; rows are
/// newline-terminated. Embedded double quotes are NOT escaped; the
/// downstream consumers of this export expect that exact byte format.
///
pub fn group_csv(report: &VariantReport) -> String {
    let mut csv_content = String::new();

    let shared = [
        report.display_name(),
        report.identity.variant_label.clone(),
        report.identity.evidence_url.clone(),
        report.frequency.frequency.clone(),
        report.frequency.cross_ref_url.clone(),
    ];

    for detail in &report.details {
        let fields = shared.iter().map(|f| f.as_str()).chain([
            detail.trait_label.as_str(),
            detail.accession.as_str(),
            detail.trait_name.as_str(),
            detail.significance.as_str(),
            detail.curation.as_str(),
        ]);

        let quoted: Vec<String> = fields.map(|field| format!("\"{}\"", field)).collect();
        csv_content.push_str(&quoted.join(","));
        csv_content.push('\n');
    }

    csv_content
}

///
/// Serialize a whole batch of reports, group order following input
/// order.
///
pub fn batch_csv(reports: &[VariantReport]) -> String {
    reports.iter().map(group_csv).collect()
}

///
/// Get the download filename for a report, e.g. `"My genome.csv"`.
///
pub fn download_filename(report_name: &str) -> String {
    format!("{}.csv", report_name)
}

pub trait CsvWrite {
    ///
    /// Write data to disk as a csv file
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_csv<T: AsRef<Path>>(&self, path: T) -> std::io::Result<()>;

    ///
    /// Write data to disk as a csv.gz file
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_csv_gz<T: AsRef<Path>>(&self, path: T) -> std::io::Result<()>;
}

impl CsvWrite for [VariantReport] {
    fn write_csv<T: AsRef<Path>>(&self, path: T) -> std::io::Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = File::create(path)?;
        file.write_all(batch_csv(self).as_bytes())?;
        Ok(())
    }

    fn write_csv_gz<T: AsRef<Path>>(&self, path: T) -> std::io::Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = File::create(path)?;
        let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::best());
        encoder.write_all(batch_csv(self).as_bytes())?;

        encoder.finish()?;
        Ok(())
    }
}
