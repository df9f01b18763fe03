//! SDF structure-data files, handled as opaque records.
//!
//! Screening never rebuilds a candidate from descriptors: accepted records
//! are written back with their original lines. The only interpretation
//! applied is data-item lookup, so the embedded SMILES annotation can be
//! extracted for profiling.

mod reader;
mod writer;

pub use reader::SdfRecords;
pub use writer::write_records;

/// One record of an SDF file: every line up to (excluding) the `$$$$`
/// delimiter, byte-preserving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdfRecord {
    pub lines: Vec<String>,
}

impl SdfRecord {
    /// Look up a named data item (`>  <NAME>` header) and return the value
    /// on the following line, trimmed. Returns `None` when the item is
    /// absent or has an empty value.
    pub fn property(&self, name: &str) -> Option<&str> {
        let tag = format!("<{name}>");
        let mut lines = self.lines.iter();
        while let Some(line) = lines.next() {
            if line.starts_with('>') && line.contains(&tag) {
                let value = lines.next()?.trim();
                return if value.is_empty() { None } else { Some(value) };
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(lines: &[&str]) -> SdfRecord {
        SdfRecord {
            lines: lines.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn property_lookup() {
        let rec = record(&[
            "mol-1",
            "",
            "",
            "  0  0  0  0  0  0  0  0  0  0999 V2000",
            "M  END",
            ">  <SMILES>",
            "CCO",
            "",
            ">  <ID>",
            "42",
        ]);
        assert_eq!(rec.property("SMILES"), Some("CCO"));
        assert_eq!(rec.property("ID"), Some("42"));
        assert_eq!(rec.property("NAME"), None);
    }

    #[test]
    fn empty_value_is_absent() {
        let rec = record(&[">  <SMILES>", "", ">  <ID>", "7"]);
        assert_eq!(rec.property("SMILES"), None);
    }

    #[test]
    fn header_at_end_without_value() {
        let rec = record(&["M  END", ">  <SMILES>"]);
        assert_eq!(rec.property("SMILES"), None);
    }
}
