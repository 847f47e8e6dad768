//! JSON output for relationship records.

use crate::models::RelationshipRecord;
use std::error::Error;
use std::path::Path;

/// Write records as a pretty JSON array, replacing `path`. Nothing is written for an empty batch.
pub fn write_json(path: &Path, records: &[RelationshipRecord]) -> Result<usize, Box<dyn Error>> {
    if records.is_empty() {
        log::info!("No records, not touching {}", path.display());
        return Ok(0);
    }
    let json = serde_json::to_string_pretty(records)
        .map_err(|e| format!("Error serializing JSON: {e}"))?;
    std::fs::write(path, json)
        .map_err(|e| format!("Error writing output file {}: {e}", path.display()))?;
    log::info!("Wrote {} records to {}", records.len(), path.display());
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Address, Prefix};

    #[test]
    fn test_write_json() {
        let path = std::env::temp_dir().join(format!("ipsr_json_{}.json", std::process::id()));
        let records = vec![
            RelationshipRecord::new(
                Some(Prefix::new("10.0.0.0/8").unwrap()),
                Address::new("10.1.1.1").unwrap(),
            ),
            RelationshipRecord::new(None, Address::new("::1").unwrap()),
        ];
        assert_eq!(write_json(&path, &records).unwrap(), 2);
        let content = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value[0]["subnet"], "10.0.0.0/8");
        assert_eq!(value[0]["ip"], "10.1.1.1");
        assert!(value[1]["subnet"].is_null());
        assert_eq!(value[1]["ip"], "::1");
    }
}
