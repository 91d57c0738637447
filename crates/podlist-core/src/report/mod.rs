//! Read-only projections of an import for display and export.
//!
//! Renderers receive groups already ordered and sorted, aggregates already
//! computed, and a paper code on every record; they only lay things out.

pub mod document;
pub mod filename;
pub mod screen;

use serde::Serialize;

use crate::grouping::{self, GroupedView};
use crate::model::{PipelineResult, Stream};

/// Both streams of an import, grouped and ordered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub standard: GroupedView,
    pub alternate: GroupedView,
    /// Raw order date of the representative record (standard stream first).
    pub order_date: String,
}

impl Report {
    /// Regroup both streams from scratch.
    pub fn build(result: &PipelineResult) -> Report {
        Report {
            standard: grouping::group(&result.standard),
            alternate: grouping::group(&result.alternate),
            order_date: result.representative_order_date().to_string(),
        }
    }

    pub fn view(&self, stream: Stream) -> &GroupedView {
        match stream {
            Stream::Standard => &self.standard,
            Stream::Alternate => &self.alternate,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.standard.is_empty() && self.alternate.is_empty()
    }
}
