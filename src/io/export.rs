//! CSV export for the recorded metric history.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::model::MetricsSample;

/// Schema v1 column header for CSV metric export.
const HEADER: &str =
    "tick,generation_kw,consumption_kw,storage_kwh,grid_load_pct,efficiency_pct,carbon_saved_kg";

/// Exports the metric history to a CSV file at the given path.
///
/// Writes a header row followed by one data row per sample. Produces
/// deterministic output for identical inputs.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv<'a>(
    samples: impl IntoIterator<Item = &'a MetricsSample>,
    path: &Path,
) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(samples, buf)
}

/// Writes the metric history as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv<'a>(
    samples: impl IntoIterator<Item = &'a MetricsSample>,
    writer: impl Write,
) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(','))?;

    for s in samples {
        let m = &s.metrics;
        wtr.write_record(&[
            s.tick.to_string(),
            format!("{:.4}", m.generation_kw),
            format!("{:.4}", m.consumption_kw),
            format!("{:.4}", m.storage_kwh),
            format!("{:.4}", m.grid_load_pct),
            format!("{:.4}", m.efficiency_pct),
            format!("{:.4}", m.carbon_saved_kg),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
