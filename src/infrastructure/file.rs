use crate::domain::ports::{ExportArtifact, ReportExporter};
use crate::domain::report::TripReport;
use crate::error::{Result, TripError};
use crate::interfaces::csv::report_writer::ReportWriter;
use async_trait::async_trait;
use clap::ValueEnum;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Json,
    Csv,
    Text,
}

/// Writes a report to a file on disk in one of the supported formats.
#[derive(Debug, Clone)]
pub struct FileReportExporter {
    path: PathBuf,
    format: ReportFormat,
}

impl FileReportExporter {
    pub fn new<P: AsRef<Path>>(path: P, format: ReportFormat) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            format,
        }
    }

    pub fn render(&self, report: &TripReport) -> Result<Vec<u8>> {
        match self.format {
            ReportFormat::Json => Ok(serde_json::to_vec_pretty(report)?),
            ReportFormat::Text => Ok(report.to_string().into_bytes()),
            ReportFormat::Csv => {
                let mut writer = ReportWriter::new(Vec::new());
                writer.write_settlements(&report.settlements)?;
                writer
                    .into_inner()
                    .map_err(|e| TripError::ExportError(e.to_string()))
            }
        }
    }
}

#[async_trait]
impl ReportExporter for FileReportExporter {
    async fn export(&self, report: &TripReport) -> Result<ExportArtifact> {
        let bytes = self.render(report)?;
        tokio::fs::write(&self.path, &bytes).await?;
        Ok(ExportArtifact {
            location: self.path.display().to_string(),
            bytes: bytes.len(),
        })
    }
}
