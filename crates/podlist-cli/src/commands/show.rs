use podlist_core::error::PodError;
use podlist_core::model::{SkippedRow, Stream};
use podlist_core::report::screen::{screen_table, ScreenTable};
use serde::Serialize;
use std::path::PathBuf;

use crate::output;

#[derive(Serialize)]
struct ShowOutput<'a> {
    order_date: &'a str,
    standard: ScreenTable,
    alternate: ScreenTable,
    #[serde(skip_serializing_if = "Option::is_none")]
    skipped: Option<&'a [SkippedRow]>,
}

pub fn run(
    input_file: PathBuf,
    config: Option<PathBuf>,
    output_format: &str,
    show_skipped: bool,
) -> Result<(), PodError> {
    let bench = super::import(&input_file, config)?;
    let report = bench.report();

    let standard = screen_table(Stream::Standard, &report.standard);
    let alternate = screen_table(Stream::Alternate, &report.alternate);
    let skipped = &bench.result().skipped;

    match output_format {
        "json" => output::json::print(&ShowOutput {
            order_date: &report.order_date,
            standard,
            alternate,
            skipped: show_skipped.then_some(skipped.as_slice()),
        })?,
        _ => {
            output::table::print(&standard);
            output::table::print(&alternate);
            if show_skipped {
                output::table::print_skipped(skipped);
            }
        }
    }

    Ok(())
}
