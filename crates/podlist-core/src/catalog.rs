use serde::{Deserialize, Serialize};
use std::fmt;

/// Code reported for paper types missing from the catalog.
pub const UNKNOWN_CODE: &str = "Unknown";

/// Rank given to unmapped paper types; sorts after every known type.
pub const UNKNOWN_ORDER: u32 = 999;

/// Paper stocks known to the production system.
///
/// Parsing is exact-match on the spreadsheet text (case and whitespace
/// sensitive); anything else lands in `Other` and keeps its original text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaperType {
    Bulky52_115,
    Cream65_138,
    Book52_82,
    Book55_108,
    Other(String),
}

/// One row of the catalog, as listed by `entries()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub code: &'static str,
    pub order: u32,
}

/// All known paper types, in display order.
pub fn known() -> [PaperType; 4] {
    [
        PaperType::Bulky52_115,
        PaperType::Cream65_138,
        PaperType::Book52_82,
        PaperType::Book55_108,
    ]
}

impl PaperType {
    pub fn parse(name: &str) -> PaperType {
        match name {
            "Bulky 52 / 115" => PaperType::Bulky52_115,
            "Cream 65 / 138" => PaperType::Cream65_138,
            "Book 52 / 82" => PaperType::Book52_82,
            "Book 55 / 108" => PaperType::Book55_108,
            other => PaperType::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            PaperType::Other(name) => name,
            known => known.catalog_name().unwrap_or_default(),
        }
    }

    fn catalog_name(&self) -> Option<&'static str> {
        match self {
            PaperType::Bulky52_115 => Some("Bulky 52 / 115"),
            PaperType::Cream65_138 => Some("Cream 65 / 138"),
            PaperType::Book52_82 => Some("Book 52 / 82"),
            PaperType::Book55_108 => Some("Book 55 / 108"),
            PaperType::Other(_) => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            PaperType::Bulky52_115 => "DCLAY 01",
            PaperType::Cream65_138 => "DCLAY 02",
            PaperType::Book52_82 => "DCLAY 03",
            PaperType::Book55_108 => "DCLAY 05",
            PaperType::Other(_) => UNKNOWN_CODE,
        }
    }

    pub fn order(&self) -> u32 {
        match self {
            PaperType::Bulky52_115 => 1,
            PaperType::Cream65_138 => 2,
            PaperType::Book52_82 => 3,
            PaperType::Book55_108 => 4,
            PaperType::Other(_) => UNKNOWN_ORDER,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, PaperType::Other(_))
    }
}

impl fmt::Display for PaperType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Production code for a paper-type name, or `"Unknown"`.
pub fn lookup_code(paper_type: &str) -> &'static str {
    PaperType::parse(paper_type).code()
}

/// Display rank for a paper-type name, or `999`.
pub fn lookup_order(paper_type: &str) -> u32 {
    PaperType::parse(paper_type).order()
}

pub fn entries() -> Vec<CatalogEntry> {
    known()
        .iter()
        .filter_map(|p| {
            Some(CatalogEntry {
                name: p.catalog_name()?,
                code: p.code(),
                order: p.order(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_types_map_exactly() {
        assert_eq!(lookup_code("Bulky 52 / 115"), "DCLAY 01");
        assert_eq!(lookup_code("Cream 65 / 138"), "DCLAY 02");
        assert_eq!(lookup_code("Book 52 / 82"), "DCLAY 03");
        assert_eq!(lookup_code("Book 55 / 108"), "DCLAY 05");
        assert_eq!(lookup_order("Bulky 52 / 115"), 1);
        assert_eq!(lookup_order("Book 55 / 108"), 4);
    }

    #[test]
    fn test_lookup_is_case_and_whitespace_sensitive() {
        assert_eq!(lookup_code("bulky 52 / 115"), UNKNOWN_CODE);
        assert_eq!(lookup_code("Bulky 52/115"), UNKNOWN_CODE);
        assert_eq!(lookup_order(" Bulky 52 / 115"), UNKNOWN_ORDER);
    }

    #[test]
    fn test_unknown_keeps_original_name() {
        let p = PaperType::parse("Matt 80 / 150");
        assert!(!p.is_known());
        assert_eq!(p.name(), "Matt 80 / 150");
        assert_eq!(p.order(), 999);
    }

    #[test]
    fn test_entries_round_trip_through_parse() {
        let entries = entries();
        assert_eq!(entries.len(), known().len());
        for entry in entries {
            let p = PaperType::parse(entry.name);
            assert!(p.is_known());
            assert_eq!(p.code(), entry.code);
            assert_eq!(p.order(), entry.order);
        }
    }
}
