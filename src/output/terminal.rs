//! Terminal run summary.

use crate::models::{Family, RelationshipRecord};
use crate::trie::SubnetTable;
use colored::Colorize;

/// Counts reported at the end of a run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub subnets_v4: usize,
    pub subnets_v6: usize,
    pub matched: usize,
    pub unmatched: usize,
}

impl RunSummary {
    pub fn new(table: &SubnetTable, records: &[RelationshipRecord]) -> Self {
        let matched = records.iter().filter(|r| r.is_match()).count();
        RunSummary {
            subnets_v4: table.trie(Family::V4).len(),
            subnets_v6: table.trie(Family::V6).len(),
            matched,
            unmatched: records.len() - matched,
        }
    }

    /// Label/value rows in display order.
    pub fn rows(&self) -> Vec<(&'static str, usize)> {
        vec![
            ("IPv4 subnets", self.subnets_v4),
            ("IPv6 subnets", self.subnets_v6),
            ("IPs matched", self.matched),
            ("IPs unmatched", self.unmatched),
        ]
    }
}

/// Right-align a value to `width` characters.
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    format!("{:>width$}", value.to_string())
}

/// Print the summary to stdout; unmatched addresses are highlighted.
pub fn print_summary(summary: &RunSummary) {
    println!("{}", "# Summary".bold());
    for (label, count) in summary.rows() {
        let count = format_field(count, 8);
        let count = if label == "IPs unmatched" && summary.unmatched > 0 {
            count.yellow()
        } else {
            count.normal()
        };
        println!("{label:<14}{count}");
    }
}
