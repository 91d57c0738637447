use serde::Serialize;

use crate::config::DocumentConfig;
use crate::grouping::{BatchGroup, GroupedView};
use crate::model::Stream;
use crate::report::screen::Summary;
use crate::report::Report;

pub const DOCUMENT_TITLE: &str = "PoD Work List - Batch Processing";

/// Column widths used by the plain-text rendering.
const COLUMN_WIDTHS: [usize; 5] = [12, 24, 12, 12, 10];

/// Rendered lines a group needs on its first page: header bar, column
/// header with its rule, one record.
const GROUP_MIN_LINES: usize = 4;

/// Rendered lines below the body of every page: a blank line and the footer.
const FOOTER_LINES: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum DocLine {
    Title(String),
    OrderDate(String),
    SectionTitle(String),
    Summary(String),
    GroupHeader(String),
    ColumnHeader(Vec<String>),
    Row(Vec<String>),
    Blank,
}

impl DocLine {
    /// Number of text lines this renders to.
    fn height(&self) -> usize {
        match self {
            DocLine::ColumnHeader(_) => 2,
            _ => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub number: usize,
    pub total: usize,
    pub lines: Vec<DocLine>,
}

impl Page {
    pub fn footer(&self) -> String {
        format!("Page {} of {}", self.number, self.total)
    }
}

/// Paginated export of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_date: Option<String>,
    pub pages: Vec<Page>,
}

impl Document {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Plain-text rendering; pages are separated by form feeds.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for (i, page) in self.pages.iter().enumerate() {
            if i > 0 {
                out.push('\x0c');
            }
            for line in &page.lines {
                out.push_str(&render_line(line));
                out.push('\n');
            }
            out.push('\n');
            out.push_str(&format!("{:>72}\n", page.footer()));
        }
        out
    }
}

fn render_line(line: &DocLine) -> String {
    match line {
        DocLine::Title(text) => text.clone(),
        DocLine::OrderDate(date) => format!("Order Date: {date}"),
        DocLine::SectionTitle(text) => format!("== {text} =="),
        DocLine::Summary(text) => text.clone(),
        DocLine::GroupHeader(text) => format!("[ {text} ]"),
        DocLine::ColumnHeader(cells) => {
            let header = pad_cells(cells);
            format!("{header}\n{}", "-".repeat(header.len()))
        }
        DocLine::Row(cells) => pad_cells(cells),
        DocLine::Blank => String::new(),
    }
}

fn pad_cells(cells: &[String]) -> String {
    cells
        .iter()
        .zip(COLUMN_WIDTHS)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(" ")
        .trim_end()
        .to_string()
}

/// Lay out both sections of a report onto pages.
///
/// Each non-empty stream becomes a titled section with its summary line;
/// the 4pp section starts on a fresh page. A group header is never left at
/// the bottom of a page without a record under it, and a group that runs
/// over a page break repeats its header (marked "continued") and the column
/// headers on the next page.
pub fn build_document(report: &Report, config: &DocumentConfig) -> Document {
    let mut pager = Pager::new(config.lines_per_page);

    pager.push(DocLine::Title(DOCUMENT_TITLE.to_string()));
    let order_date = Some(report.order_date.trim())
        .filter(|d| !d.is_empty())
        .map(str::to_string);
    if let Some(date) = &order_date {
        pager.push(DocLine::OrderDate(date.clone()));
    }
    pager.push(DocLine::Blank);

    let mut first_section = true;
    for stream in [Stream::Standard, Stream::Alternate] {
        let view = report.view(stream);
        if view.is_empty() {
            continue;
        }
        if !first_section {
            pager.break_page();
        }
        first_section = false;
        lay_out_section(&mut pager, stream, view, config);
    }

    let pages = pager.finish();
    let total = pages.len();
    Document {
        title: DOCUMENT_TITLE.to_string(),
        order_date,
        pages: pages
            .into_iter()
            .enumerate()
            .map(|(i, lines)| Page {
                number: i + 1,
                total,
                lines,
            })
            .collect(),
    }
}

fn lay_out_section(pager: &mut Pager, stream: Stream, view: &GroupedView, config: &DocumentConfig) {
    let title = match stream {
        Stream::Standard => "Standard Batches",
        Stream::Alternate => "4pp Batches",
    };
    let summary = Summary::from_view(stream, view);

    pager.push(DocLine::SectionTitle(title.to_string()));
    pager.push(DocLine::Summary(format!(
        "Total Paper Types: {} | Total Batches: {} | {}: {}",
        summary.paper_types, summary.batches, summary.quantity_label, summary.quantity
    )));
    pager.push(DocLine::Blank);

    let column_header = DocLine::ColumnHeader(
        ["Paper Code", "Paper Type", "Text Batch", "Cover Batch", stream.quantity_label()]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    );

    for (i, group) in view.groups.iter().enumerate() {
        if pager.remaining() < GROUP_MIN_LINES {
            pager.break_page();
        }
        pager.push(DocLine::GroupHeader(group_header(group, false)));
        pager.push(column_header.clone());

        for item in &group.records {
            if pager.remaining() == 0 {
                pager.break_page();
                pager.push(DocLine::GroupHeader(group_header(group, true)));
                pager.push(column_header.clone());
            }
            let record = &item.record;
            pager.push(DocLine::Row(vec![
                record.paper_code.clone(),
                truncate(&record.paper_type, config.paper_type_width),
                record.text_batch_number.clone(),
                record.cover_batch_number.clone(),
                record.quantity.to_string(),
            ]));
        }

        if i + 1 < view.groups.len() && pager.remaining() > 0 {
            pager.push(DocLine::Blank);
        }
    }
}

fn group_header(group: &BatchGroup, continued: bool) -> String {
    if continued {
        format!("{} - {} (continued)", group.paper_code, group.paper_type)
    } else {
        format!(
            "{} - {} ({} batches)",
            group.paper_code,
            group.paper_type,
            group.record_count()
        )
    }
}

/// Cut text longer than `width` characters and mark it with "..".
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        let head: String = text.chars().take(width).collect();
        format!("{head}..")
    } else {
        text.to_string()
    }
}

/// Fills pages by rendered height, keeping room for the footer.
struct Pager {
    capacity: usize,
    used: usize,
    pages: Vec<Vec<DocLine>>,
    current: Vec<DocLine>,
}

impl Pager {
    fn new(lines_per_page: usize) -> Self {
        Pager {
            capacity: lines_per_page
                .saturating_sub(FOOTER_LINES)
                .max(GROUP_MIN_LINES),
            used: 0,
            pages: Vec::new(),
            current: Vec::new(),
        }
    }

    fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.used)
    }

    fn push(&mut self, line: DocLine) {
        if self.remaining() < line.height() {
            self.break_page();
        }
        self.used += line.height();
        self.current.push(line);
    }

    fn break_page(&mut self) {
        if !self.current.is_empty() {
            self.pages.push(std::mem::take(&mut self.current));
            self.used = 0;
        }
    }

    fn finish(mut self) -> Vec<Vec<DocLine>> {
        self.break_page();
        self.pages
    }
}
