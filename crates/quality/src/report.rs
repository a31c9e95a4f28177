use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use fabplan_core::{DomainError, DomainResult, ReportId};

/// How bad a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Minor,
    Major,
    Critical,
}

/// One inspection report against a manufacturing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityReport {
    pub id: ReportId,
    /// Order reference the inspection was run against, e.g. "MO-1001".
    pub order_ref: String,
    pub inspector: String,
    pub severity: Severity,
    pub defect_count: u32,
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewReport {
    pub order_ref: String,
    pub inspector: String,
    pub severity: Severity,
    pub defect_count: u32,
    #[serde(default)]
    pub notes: String,
}

/// Aggregate view served by the metrics endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QualitySummary {
    pub total_reports: usize,
    pub total_defects: u64,
    pub minor: usize,
    pub major: usize,
    pub critical: usize,
}

/// In-memory report store, seeded with demo inspections.
#[derive(Debug, Default)]
pub struct ReportStore {
    inner: Mutex<Vec<QualityReport>>,
}

impl ReportStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        let store = Self::new();
        let rows = [
            ("MO-1001", Severity::Minor, 2, "surface scratches on 2 units"),
            ("MO-1002", Severity::Major, 5, "bore diameter out of tolerance"),
            ("MO-1001", Severity::Critical, 1, "cracked casting, batch held"),
        ];
        for (i, (order_ref, severity, defect_count, notes)) in rows.into_iter().enumerate() {
            let _ = store.create(NewReport {
                order_ref: order_ref.to_string(),
                inspector: format!("inspector-{}", i + 1),
                severity,
                defect_count,
                notes: notes.to_string(),
            });
        }
        store
    }

    pub fn list(&self) -> Vec<QualityReport> {
        self.inner.lock().unwrap().clone()
    }

    pub fn get(&self, id: ReportId) -> Option<QualityReport> {
        self.inner.lock().unwrap().iter().find(|r| r.id == id).cloned()
    }

    pub fn create(&self, new: NewReport) -> DomainResult<QualityReport> {
        if new.order_ref.trim().is_empty() {
            return Err(DomainError::validation("order_ref must not be empty"));
        }
        if new.inspector.trim().is_empty() {
            return Err(DomainError::validation("inspector must not be empty"));
        }

        let report = QualityReport {
            id: ReportId::new(),
            order_ref: new.order_ref,
            inspector: new.inspector,
            severity: new.severity,
            defect_count: new.defect_count,
            notes: new.notes,
            created_at: Utc::now(),
        };
        self.inner.lock().unwrap().push(report.clone());
        Ok(report)
    }

    pub fn delete(&self, id: ReportId) -> DomainResult<()> {
        let mut reports = self.inner.lock().unwrap();
        let before = reports.len();
        reports.retain(|r| r.id != id);
        if reports.len() == before {
            return Err(DomainError::NotFound);
        }
        Ok(())
    }

    /// Roll-up across all reports.
    pub fn summary(&self) -> QualitySummary {
        let reports = self.inner.lock().unwrap();
        let mut summary = QualitySummary {
            total_reports: reports.len(),
            total_defects: 0,
            minor: 0,
            major: 0,
            critical: 0,
        };
        for report in reports.iter() {
            summary.total_defects += u64::from(report.defect_count);
            match report.severity {
                Severity::Minor => summary.minor += 1,
                Severity::Major => summary.major += 1,
                Severity::Critical => summary.critical += 1,
            }
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_by_severity() {
        let store = ReportStore::seeded();
        let summary = store.summary();
        assert_eq!(summary.total_reports, 3);
        assert_eq!(summary.total_defects, 8);
        assert_eq!((summary.minor, summary.major, summary.critical), (1, 1, 1));
    }

    #[test]
    fn create_rejects_blank_inspector() {
        let store = ReportStore::new();
        let result = store.create(NewReport {
            order_ref: "MO-1001".to_string(),
            inspector: "".to_string(),
            severity: Severity::Minor,
            defect_count: 1,
            notes: String::new(),
        });
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn delete_then_get_is_gone() {
        let store = ReportStore::seeded();
        let report = store.list().remove(0);
        store.delete(report.id).unwrap();
        assert!(store.get(report.id).is_none());
        assert_eq!(store.delete(report.id), Err(DomainError::NotFound));
    }
}
