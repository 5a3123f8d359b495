use crate::domain::ports::{ExportArtifact, ReportExporter, SharedReportExporter};
use crate::domain::report::TripReport;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Runs an export and swallows its failure.
///
/// The error is logged and `None` is returned; settlement computation never
/// sees it.
pub async fn export_report(
    exporter: &dyn ReportExporter,
    report: &TripReport,
) -> Option<ExportArtifact> {
    match exporter.export(report).await {
        Ok(artifact) => {
            info!(
                location = %artifact.location,
                bytes = artifact.bytes,
                "report exported"
            );
            Some(artifact)
        }
        Err(e) => {
            error!("Error exporting report: {}", e);
            None
        }
    }
}

/// Detaches an export onto the runtime. Dropping the handle does not cancel it.
pub fn spawn_export(
    exporter: SharedReportExporter,
    report: TripReport,
) -> JoinHandle<Option<ExportArtifact>> {
    tokio::spawn(async move { export_report(exporter.as_ref(), &report).await })
}
