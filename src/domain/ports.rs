use super::report::TripReport;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Where an exported report ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub location: String,
    pub bytes: usize,
}

/// Turns a rendered trip report into a downloadable artifact.
///
/// Implementations may fail; callers go through
/// [`crate::application::export::export_report`], which logs failures instead
/// of propagating them.
#[async_trait]
pub trait ReportExporter: Send + Sync {
    async fn export(&self, report: &TripReport) -> Result<ExportArtifact>;
}

pub type ReportExporterBox = Box<dyn ReportExporter>;
pub type SharedReportExporter = Arc<dyn ReportExporter>;
