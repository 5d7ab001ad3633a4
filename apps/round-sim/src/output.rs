//! Output writers for settled rounds.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use golf_core::RoundSettlement;
use serde::Serialize;

use crate::types::OutputFormat;

/// One settled round as written to the results file.
#[derive(Debug, Serialize)]
pub struct RoundRecord<'a> {
    pub round_id: u32,
    pub seed: Option<u64>,
    #[serde(flatten)]
    pub settlement: &'a RoundSettlement,
}

/// One netted transfer per CSV row.
#[derive(Debug, Serialize)]
struct TransferRow<'a> {
    round_id: u32,
    from: &'a str,
    to: &'a str,
    amount_sats: u64,
}

pub struct OutputWriter {
    format: OutputFormat,
    results_writer: BufWriter<File>,
    csv_writer: csv::Writer<BufWriter<File>>,
    results_path: PathBuf,
    csv_path: PathBuf,
    // JSON output is one array, so rounds are buffered until `finish`.
    buffered: Vec<serde_json::Value>,
}

fn create_truncated(path: &Path) -> std::io::Result<File> {
    OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
}

impl OutputWriter {
    pub fn new(output_dir: &str, format: &OutputFormat) -> Result<Self, Box<dyn std::error::Error>> {
        let dir = Path::new(output_dir);
        std::fs::create_dir_all(dir)?;

        let timestamp = time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Iso8601::DEFAULT)
            .unwrap_or_else(|_| "unknown".to_string())
            .replace(':', "-");

        let extension = match format {
            OutputFormat::Jsonl => "jsonl",
            OutputFormat::Json => "json",
        };
        let results_path = dir.join(format!("rounds_{timestamp}.{extension}"));
        let results_writer = BufWriter::new(create_truncated(&results_path)?);

        let csv_path = dir.join(format!("rounds_{timestamp}_transfers.csv"));
        let csv_writer = csv::Writer::from_writer(BufWriter::new(create_truncated(&csv_path)?));

        Ok(Self {
            format: format.clone(),
            results_writer,
            csv_writer,
            results_path,
            csv_path,
            buffered: Vec::new(),
        })
    }

    pub fn write_round(&mut self, record: &RoundRecord<'_>) -> Result<(), Box<dyn std::error::Error>> {
        match self.format {
            OutputFormat::Jsonl => {
                let json = serde_json::to_string(record)?;
                writeln!(self.results_writer, "{json}")?;
            }
            OutputFormat::Json => self.buffered.push(serde_json::to_value(record)?),
        }

        for transfer in &record.settlement.settlement.transfers {
            self.csv_writer.serialize(TransferRow {
                round_id: record.round_id,
                from: &transfer.from,
                to: &transfer.to,
                amount_sats: transfer.amount,
            })?;
        }
        self.csv_writer.flush()?;
        Ok(())
    }

    pub fn finish(mut self) -> Result<(), Box<dyn std::error::Error>> {
        if matches!(self.format, OutputFormat::Json) {
            serde_json::to_writer_pretty(&mut self.results_writer, &self.buffered)?;
            writeln!(self.results_writer)?;
        }
        self.results_writer.flush()?;
        self.csv_writer.flush()?;
        Ok(())
    }

    pub fn output_paths(&self) -> (&PathBuf, &PathBuf) {
        (&self.results_path, &self.csv_path)
    }
}
