use crate::domain::ports::{ExportArtifact, ReportExporter};
use crate::domain::report::TripReport;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Keeps every exported report in memory.
///
/// Clones share the same underlying list, so a test can hand one clone to the
/// code under test and inspect the other.
#[derive(Default, Clone)]
pub struct InMemoryReportExporter {
    reports: Arc<RwLock<Vec<TripReport>>>,
}

impl InMemoryReportExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn reports(&self) -> Vec<TripReport> {
        self.reports.read().await.clone()
    }
}

#[async_trait]
impl ReportExporter for InMemoryReportExporter {
    async fn export(&self, report: &TripReport) -> Result<ExportArtifact> {
        let mut reports = self.reports.write().await;
        reports.push(report.clone());
        Ok(ExportArtifact {
            location: format!("memory:{}", reports.len() - 1),
            bytes: 0,
        })
    }
}
