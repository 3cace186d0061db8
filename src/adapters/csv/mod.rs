//! CSV adapter
//!
//! Reads a headered CSV file into a column-oriented [`Record`] and writes one
//! back. Only `.csv` files are accepted.

pub mod reader;
pub mod writer;

pub use reader::{parse_cell, read_record, read_record_from};
pub use writer::{write_record, write_record_to};

use crate::domain::{MaskError, Result};
use std::path::{Path, PathBuf};

/// Prefix of the file written next to the input
pub const MASKED_PREFIX: &str = "masked_";

/// Reject paths that are not `.csv` files
pub fn ensure_csv(path: &Path) -> Result<()> {
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    if is_csv {
        Ok(())
    } else {
        Err(MaskError::Configuration(format!(
            "File format not supported: {}",
            path.display()
        )))
    }
}

/// Sibling path `masked_<name>` for an input file
pub fn masked_output_path(input: impl AsRef<Path>) -> PathBuf {
    let input = input.as_ref();
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output.csv".to_string());
    input.with_file_name(format!("{MASKED_PREFIX}{name}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_csv() {
        assert!(ensure_csv(Path::new("data/people.csv")).is_ok());
        assert!(ensure_csv(Path::new("PEOPLE.CSV")).is_ok());

        let err = ensure_csv(Path::new("people.xlsx")).unwrap_err();
        assert!(err.to_string().contains("File format not supported"));
        assert!(ensure_csv(Path::new("people")).is_err());
    }

    #[test]
    fn test_masked_output_path() {
        assert_eq!(
            masked_output_path("data/people.csv"),
            PathBuf::from("data/masked_people.csv")
        );
        assert_eq!(masked_output_path("people.csv"), PathBuf::from("masked_people.csv"));
    }
}
