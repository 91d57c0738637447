use serde::Serialize;

use crate::grouping::GroupedView;
use crate::model::Stream;

/// Table shown on screen for one stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenTable {
    pub stream: Stream,
    pub columns: Vec<&'static str>,
    pub summary: Summary,
    pub groups: Vec<ScreenGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub paper_types: usize,
    pub batches: usize,
    pub quantity: u64,
    pub quantity_label: &'static str,
}

impl Summary {
    pub fn from_view(stream: Stream, view: &GroupedView) -> Summary {
        Summary {
            paper_types: view.group_count,
            batches: view.record_count,
            quantity: view.total_quantity,
            quantity_label: match stream {
                Stream::Standard => "Total Rows",
                Stream::Alternate => "Total Print Qty",
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenGroup {
    pub header: String,
    pub rows: Vec<ScreenRow>,
}

/// One record line. `paper_code` is None in the 4pp table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper_code: Option<String>,
    pub paper_type: String,
    pub sequence: usize,
    pub text_batch: String,
    pub cover_batch: String,
    pub quantity: u32,
    pub order_date: String,
}

impl ScreenRow {
    /// Cell texts in column order, matching `ScreenTable::columns`.
    pub fn cells(&self) -> Vec<String> {
        let mut cells = Vec::with_capacity(7);
        if let Some(code) = &self.paper_code {
            cells.push(code.clone());
        }
        cells.extend([
            self.paper_type.clone(),
            self.sequence.to_string(),
            self.text_batch.clone(),
            self.cover_batch.clone(),
            self.quantity.to_string(),
            self.order_date.clone(),
        ]);
        cells
    }
}

pub fn columns(stream: Stream) -> Vec<&'static str> {
    let mut columns = Vec::with_capacity(7);
    if stream == Stream::Standard {
        columns.push("Paper Code");
    }
    columns.extend([
        "Paper Type",
        "Seq",
        "Text Batch",
        "Cover Batch",
        stream.quantity_label(),
        "Order Date",
    ]);
    columns
}

/// Build the on-screen table for one stream's grouped view.
pub fn screen_table(stream: Stream, view: &GroupedView) -> ScreenTable {
    let with_code = stream == Stream::Standard;

    let groups = view
        .groups
        .iter()
        .map(|group| {
            let header = if with_code {
                format!(
                    "{} - {} ({} batches)",
                    group.paper_code,
                    group.paper_type,
                    group.record_count()
                )
            } else {
                format!("{} ({} batches)", group.paper_type, group.record_count())
            };

            let rows = group
                .records
                .iter()
                .map(|item| ScreenRow {
                    paper_code: with_code.then(|| item.record.paper_code.clone()),
                    paper_type: item.record.paper_type.clone(),
                    sequence: item.sequence,
                    text_batch: item.record.text_batch_number.clone(),
                    cover_batch: item.record.cover_batch_number.clone(),
                    quantity: item.record.quantity,
                    order_date: item.record.order_date.clone(),
                })
                .collect();

            ScreenGroup { header, rows }
        })
        .collect();

    ScreenTable {
        stream,
        columns: columns(stream),
        summary: Summary::from_view(stream, view),
        groups,
    }
}
