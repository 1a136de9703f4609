// crates/domain/src/histogram.rs
use std::collections::HashMap;

use file_stats_shared_kernel::ExtensionLabel;

/// Occurrence counts per extension label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionHistogram {
    counts: HashMap<ExtensionLabel, usize>,
}

/// One row of the ranked histogram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistogramRow {
    pub label: ExtensionLabel,
    pub count: usize,
}

impl ExtensionHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, label: ExtensionLabel) {
        *self.counts.entry(label).or_insert(0) += 1;
    }

    pub fn count(&self, label: &ExtensionLabel) -> usize {
        self.counts.get(label).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all per-label counts; equals the number of recorded files.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Rows ordered by descending count. Equal counts sort by label so the
    /// ordering is stable across runs and platforms.
    pub fn ranked(&self) -> Vec<HistogramRow> {
        let mut rows: Vec<HistogramRow> = self
            .counts
            .iter()
            .map(|(label, &count)| HistogramRow { label: label.clone(), count })
            .collect();
        rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
        rows
    }
}
