//! Build the subnet tables and match addresses against them.

use crate::models::{Address, Family, Prefix, RelationshipRecord};
use crate::trie::SubnetTable;
use colored::Colorize;
use std::collections::HashSet;

/// Parse subnet lines and insert them into the trie of their family.
///
/// Unparseable lines are skipped with a warning; the rest of the input is still used.
pub fn build<I, S>(subnets: I) -> SubnetTable
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut table = SubnetTable::new();
    let mut skipped = 0usize;
    for line in subnets {
        let line = line.as_ref();
        match Prefix::new(line).and_then(|prefix| table.insert(prefix)) {
            Ok(()) => {}
            Err(e) => {
                skipped += 1;
                log::warn!("Skipping subnet '{}': {e}", line.yellow());
            }
        }
    }
    log::info!("# Loaded {} subnets ({skipped} skipped)", table.len());
    log::debug!(
        "Trie nodes: v4={} v6={}",
        table.trie(Family::V4).node_count(),
        table.trie(Family::V6).node_count()
    );
    table
}

/// Look up every parseable address and return de-duplicated records.
///
/// Records keep the order in which each was first produced; unparseable lines are
/// skipped silently.
pub fn match_addresses<I, S>(addresses: I, table: &SubnetTable) -> Vec<RelationshipRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut records = Vec::new();
    for line in addresses {
        let line = line.as_ref();
        let addr = match Address::new(line) {
            Ok(addr) => addr,
            Err(e) => {
                log::debug!("Skipping address '{line}': {e}");
                continue;
            }
        };
        let record = RelationshipRecord::new(table.lookup(addr), addr);
        log::trace!("{record}");
        if seen.insert(record) {
            records.push(record);
        }
    }
    log::info!("# Matched {} unique addresses", records.len());
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(records: &[RelationshipRecord]) -> Vec<String> {
        let mut lines: Vec<String> = records.iter().map(|r| r.to_string()).collect();
        lines.sort();
        lines
    }

    #[test]
    fn test_build_skips_bad_lines() {
        let table = build([
            "101.24.8.0/24",
            "not a subnet",
            "10.0.0.0/33",
            "2001:db8::/32",
            "",
        ]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.trie(Family::V4).len(), 1);
        assert_eq!(table.trie(Family::V6).len(), 1);
    }

    #[test]
    fn test_build_duplicates_collapse() {
        let table = build(["10.0.0.0/8", "10.0.0.0/8", "10.1.1.1/8"]);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_match_scenario() {
        let table = build(["101.24.8.0/24", "10.130.166.0/24"]);
        let records = match_addresses(["101.24.8.175", "10.130.166.216", "8.8.8.8"], &table);
        assert_eq!(
            lines(&records),
            vec![
                ",8.8.8.8",
                "10.130.166.0/24,10.130.166.216",
                "101.24.8.0/24,101.24.8.175",
            ]
        );
    }

    #[test]
    fn test_match_overlapping() {
        let table = build(["10.0.0.0/8", "10.1.0.0/16"]);
        let records = match_addresses(["10.1.2.3"], &table);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].subnet, Some(Prefix::new("10.1.0.0/16").unwrap()));
    }

    #[test]
    fn test_match_dedup_and_skip() {
        let table = build(["2001:db8::/32"]);
        let records = match_addresses(
            [
                "2001:db8::1",
                "2001:DB8:0::1",
                "garbage",
                "10.0.0.1",
                "10.0.0.1",
            ],
            &table,
        );
        assert_eq!(lines(&records), vec![",10.0.0.1", "2001:db8::/32,2001:db8::1"]);
    }

    #[test]
    fn test_match_empty_inputs() {
        let table = build(Vec::<String>::new());
        assert!(table.is_empty());
        assert!(match_addresses(Vec::<String>::new(), &table).is_empty());
        let records = match_addresses(["1.2.3.4"], &table);
        assert_eq!(lines(&records), vec![",1.2.3.4"]);
    }
}
