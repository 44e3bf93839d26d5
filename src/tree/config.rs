//! Configuration shared by the tree walker and the analyzer

use crate::classify::Classifier;

use super::filter::ExclusionFilter;

/// Everything a scan needs: which entries to skip and how to classify the rest.
///
/// Both passes over a root must use the same `ScanConfig` so they agree on
/// which entries exist.
#[derive(Debug, Clone, Default)]
pub struct ScanConfig {
    pub filter: ExclusionFilter,
    pub classifier: Classifier,
}

impl ScanConfig {
    pub fn new(filter: ExclusionFilter, classifier: Classifier) -> Self {
        Self { filter, classifier }
    }
}
