//! Map IP addresses to the most specific subnet that contains them.
//!
//! Subnets are loaded into one binary prefix trie per address family; each address
//! is then resolved with a longest-prefix-match lookup.
//!
//! ```
//! use ip_subnet_relationship::{build, match_addresses};
//!
//! let table = build(["10.0.0.0/8", "10.1.0.0/16"]);
//! let records = match_addresses(["10.1.2.3", "8.8.8.8"], &table);
//! assert_eq!(records[0].to_string(), "10.1.0.0/16,10.1.2.3");
//! assert_eq!(records[1].to_string(), ",8.8.8.8");
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;
pub mod trie;

use config::{Config, OutputFormat};
use models::RelationshipRecord;
use output::RunSummary;
use std::error::Error;
use std::path::Path;
use trie::SubnetTable;

pub use error::ParseError;
pub use processing::{build, match_addresses};

/// Read both input files and return the subnet table plus sorted, de-duplicated records.
///
/// Both files are checked and fully read before any trie work begins; a read
/// error aborts the run.
pub fn relationships(
    ips: &Path,
    subnets: &Path,
) -> Result<(SubnetTable, Vec<RelationshipRecord>), Box<dyn Error>> {
    input::check_input_file(ips, "IPs")?;
    input::check_input_file(subnets, "subnets")?;

    let subnet_lines = input::read_all_lines(subnets)?;
    let ip_lines = input::read_all_lines(ips)?;

    let table = build(subnet_lines);
    let mut records = match_addresses(ip_lines, &table);
    processing::sort_records(&mut records);
    Ok((table, records))
}

/// Run a whole batch: match, write the output file and return the summary counts.
pub fn run(config: &Config) -> Result<RunSummary, Box<dyn Error>> {
    log::info!(
        "#Start run() ips={} subnets={}",
        config.ips.display(),
        config.subnets.display()
    );
    let (table, records) = relationships(&config.ips, &config.subnets)?;

    let output = config.output_path();
    match config.format {
        OutputFormat::Csv => output::write_csv(&output, &records)?,
        OutputFormat::Json => output::write_json(&output, &records)?,
    };

    Ok(RunSummary::new(&table, &records))
}
