use podlist_core::catalog::{self, UNKNOWN_CODE, UNKNOWN_ORDER};
use podlist_core::error::PodError;
use podlist_core::parsing::date;

pub fn list() -> Result<(), PodError> {
    let entries = catalog::entries();
    let width = entries.iter().map(|e| e.name.len()).max().unwrap_or(10);

    println!("  {:<width$}  {:<8}  Order", "Paper Type", "Code");
    for entry in &entries {
        println!("  {:<width$}  {:<8}  {}", entry.name, entry.code, entry.order);
    }
    println!("  {:<width$}  {:<8}  {}", "(anything else)", UNKNOWN_CODE, UNKNOWN_ORDER);
    Ok(())
}

pub fn date(text: &str) -> Result<(), PodError> {
    println!("{}", date::normalize(text));
    Ok(())
}
