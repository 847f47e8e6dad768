//! CSV line sink for relationship records.

use crate::models::RelationshipRecord;
use std::error::Error;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Header line written before every appended batch.
pub const CSV_HEADER: &str = "Subnet,IP";

/// Append records to `path` after the `Subnet,IP` header, one `<subnet>,<ip>` line each.
///
/// Records are written in the order given. Nothing at all is written for an empty batch.
///
/// # Returns
/// * `Ok(usize)` - Number of record lines written
pub fn write_csv(path: &Path, records: &[RelationshipRecord]) -> Result<usize, Box<dyn Error>> {
    if records.is_empty() {
        log::info!("No records, not touching {}", path.display());
        return Ok(0);
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| format!("Error opening output file {}: {e}", path.display()))?;
    let mut out = BufWriter::new(file);
    writeln!(out, "{CSV_HEADER}")?;
    for record in records {
        writeln!(out, "{record}")?;
    }
    out.flush()?;
    log::info!("Wrote {} records to {}", records.len(), path.display());
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Address, Prefix};

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("ipsr_{}_{}.csv", name, std::process::id()))
    }

    #[test]
    fn test_write_csv_appends_with_header() {
        let path = temp_path("append");
        std::fs::remove_file(&path).ok();
        let records = vec![
            RelationshipRecord::new(
                Some(Prefix::new("101.24.8.0/24").unwrap()),
                Address::new("101.24.8.175").unwrap(),
            ),
            RelationshipRecord::new(None, Address::new("8.8.8.8").unwrap()),
        ];
        assert_eq!(write_csv(&path, &records).unwrap(), 2);
        assert_eq!(write_csv(&path, &records[1..]).unwrap(), 1);

        let content = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(
            content,
            "Subnet,IP\n101.24.8.0/24,101.24.8.175\n,8.8.8.8\nSubnet,IP\n,8.8.8.8\n"
        );
    }

    #[test]
    fn test_write_csv_empty_writes_nothing() {
        let path = temp_path("empty");
        std::fs::remove_file(&path).ok();
        assert_eq!(write_csv(&path, &[]).unwrap(), 0);
        assert!(!path.exists());
    }
}
