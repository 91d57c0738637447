use serde::{Deserialize, Serialize};

use crate::model::BatchRecord;

/// A record together with its position inside its group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequencedRecord {
    /// 1-based position within the group, for display.
    pub sequence: usize,
    #[serde(flatten)]
    pub record: BatchRecord,
}

/// All records sharing one paper type, sorted by text batch, highest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchGroup {
    pub paper_type: String,
    pub paper_code: String,
    /// Catalog rank used to order groups.
    pub order: u32,
    pub records: Vec<SequencedRecord>,
}

impl BatchGroup {
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn total_quantity(&self) -> u64 {
        self.records.iter().map(|r| u64::from(r.record.quantity)).sum()
    }
}

/// Grouped, ordered and aggregated projection of one record stream.
///
/// Built fresh on every call to `grouping::group`; never updated in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupedView {
    pub groups: Vec<BatchGroup>,
    pub group_count: usize,
    pub record_count: usize,
    pub total_quantity: u64,
}

impl GroupedView {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Paper-type keys in display order.
    pub fn paper_types(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.paper_type.as_str()).collect()
    }

    pub fn get(&self, paper_type: &str) -> Option<&BatchGroup> {
        self.groups.iter().find(|g| g.paper_type == paper_type)
    }

    /// Every record in display order.
    pub fn records(&self) -> impl Iterator<Item = &BatchRecord> {
        self.groups
            .iter()
            .flat_map(|g| g.records.iter().map(|r| &r.record))
    }
}
