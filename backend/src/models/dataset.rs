//! The immutable, process-wide launch dataset.

use std::sync::Arc;

use super::launch::LaunchRecord;

/// Shared read-only handle passed to the engine, binder and HTTP layer.
pub type SharedDataset = Arc<LaunchDataset>;

/// Ordered launch records plus a few facts derived once at load time.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchDataset {
    records: Vec<LaunchRecord>,
    /// Distinct sites in first-appearance order.
    sites: Vec<String>,
    checksum: Option<String>,
}

impl LaunchDataset {
    pub fn new(records: Vec<LaunchRecord>) -> Self {
        let mut sites: Vec<String> = Vec::new();
        for record in &records {
            if !sites.iter().any(|s| s == &record.site) {
                sites.push(record.site.clone());
            }
        }

        Self {
            records,
            sites,
            checksum: None,
        }
    }

    /// Attach the SHA-256 checksum of the source file.
    pub fn with_checksum(mut self, checksum: impl Into<String>) -> Self {
        self.checksum = Some(checksum.into());
        self
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    pub fn contains_site(&self, site: &str) -> bool {
        self.sites.iter().any(|s| s == site)
    }

    pub fn checksum(&self) -> Option<&str> {
        self.checksum.as_deref()
    }

    /// Smallest and largest payload mass, `None` for an empty dataset.
    pub fn payload_bounds(&self) -> Option<(f64, f64)> {
        let mut iter = self.records.iter().map(|r| r.payload_mass_kg);
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }

    pub fn success_count(&self) -> usize {
        self.records.iter().filter(|r| r.outcome.is_success()).count()
    }

    pub fn into_shared(self) -> SharedDataset {
        Arc::new(self)
    }
}
