//! Quality reports: model, seeded in-memory store, aggregate metrics.

pub mod report;

pub use report::{NewReport, QualityReport, QualitySummary, ReportStore, Severity};
