use podlist_core::error::PodError;
use serde::Serialize;

pub fn print<T: Serialize>(value: &T) -> Result<(), PodError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
