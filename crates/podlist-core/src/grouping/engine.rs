use std::cmp::Reverse;
use std::collections::HashMap;

use crate::catalog::PaperType;
use crate::grouping::outcome::{BatchGroup, GroupedView, SequencedRecord};
use crate::model::BatchRecord;

/// Group records by exact paper type and order them for review.
///
/// Groups are sorted by catalog rank; within a group, records are sorted by
/// numeric text batch, highest first. Both sorts are stable, so ties keep
/// the order in which they were first seen.
pub fn group(records: &[BatchRecord]) -> GroupedView {
    let mut groups: Vec<(String, Vec<BatchRecord>)> = Vec::new();
    let mut index_by_type: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let idx = *index_by_type
            .entry(record.paper_type.as_str())
            .or_insert_with(|| {
                groups.push((record.paper_type.clone(), Vec::new()));
                groups.len() - 1
            });
        groups[idx].1.push(record.clone());
    }

    groups.sort_by_key(|(paper_type, _)| PaperType::parse(paper_type).order());

    let groups: Vec<BatchGroup> = groups
        .into_iter()
        .map(|(paper_type, mut members)| {
            members.sort_by_key(|r| Reverse(r.batch_key()));
            let paper = PaperType::parse(&paper_type);
            BatchGroup {
                paper_code: paper.code().to_string(),
                order: paper.order(),
                paper_type,
                records: members
                    .into_iter()
                    .enumerate()
                    .map(|(i, record)| SequencedRecord {
                        sequence: i + 1,
                        record,
                    })
                    .collect(),
            }
        })
        .collect();

    let record_count = groups.iter().map(BatchGroup::record_count).sum();
    let total_quantity = groups.iter().map(BatchGroup::total_quantity).sum();

    GroupedView {
        group_count: groups.len(),
        record_count,
        total_quantity,
        groups,
    }
}
