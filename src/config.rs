//! Command line and environment configuration.
//!
//! Every option can also come from the environment (or a `.env` file loaded by `main`).

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

/// Default CSV output file, created in the working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "ip-subnet-relationship.csv";
/// Default output file for `--format json`.
pub const DEFAULT_JSON_FILE: &str = "ip-subnet-relationship.json";

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `Subnet,IP` lines appended to the output file
    Csv,
    /// JSON array replacing the output file
    Json,
}

/// Create a relationship file showing which subnet every IP is in, given a file of
/// IPs and a file of subnets.
#[derive(Parser, Debug, Clone)]
#[command(name = "ip-subnet-relationship", version)]
pub struct Config {
    /// Input file that contains all of the IPs.
    #[arg(short, long, env = "IPSR_IPS")]
    pub ips: PathBuf,

    /// Input file that contains all of the subnets.
    #[arg(short, long, env = "IPSR_SUBNETS")]
    pub subnets: PathBuf,

    /// Logging level: 10 (DEBUG) or 20 (INFO).
    #[arg(short, long, env = "IPSR_LOG", default_value = "20", value_parser = ["10", "20"])]
    pub log: String,

    /// Output file [default: ip-subnet-relationship.csv, or .json with --format json]
    #[arg(short, long, env = "IPSR_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Output format.
    #[arg(long, env = "IPSR_FORMAT", value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,
}

impl Config {
    /// Log level selected with `--log`.
    pub fn log_level(&self) -> LevelFilter {
        match self.log.as_str() {
            "10" => LevelFilter::Debug,
            _ => LevelFilter::Info,
        }
    }

    /// File to write, `--output` if given, else the default for `--format`.
    pub fn output_path(&self) -> PathBuf {
        match (&self.output, self.format) {
            (Some(path), _) => path.clone(),
            (None, OutputFormat::Csv) => PathBuf::from(DEFAULT_OUTPUT_FILE),
            (None, OutputFormat::Json) => PathBuf::from(DEFAULT_JSON_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::try_parse_from(["ipsr", "-i", "ips.txt", "-s", "subnets.txt"])
            .expect("Error parsing args");
        assert_eq!(config.ips, PathBuf::from("ips.txt"));
        assert_eq!(config.subnets, PathBuf::from("subnets.txt"));
        assert_eq!(config.output, None);
        assert_eq!(config.output_path(), PathBuf::from(DEFAULT_OUTPUT_FILE));
        assert_eq!(config.format, OutputFormat::Csv);
        assert_eq!(config.log_level(), LevelFilter::Info);
    }

    #[test]
    fn test_config_debug_json() {
        let config = Config::try_parse_from([
            "ipsr",
            "--ips",
            "a",
            "--subnets",
            "b",
            "--log",
            "10",
            "--format",
            "json",
            "-o",
            "out.json",
        ])
        .expect("Error parsing args");
        assert_eq!(config.log_level(), LevelFilter::Debug);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.output_path(), PathBuf::from("out.json"));
    }

    #[test]
    fn test_config_json_default_output() {
        let config = Config::try_parse_from(["ipsr", "-i", "a", "-s", "b", "--format", "json"])
            .expect("Error parsing args");
        assert_eq!(config.output_path(), PathBuf::from(DEFAULT_JSON_FILE));

        let config = Config::try_parse_from([
            "ipsr", "-i", "a", "-s", "b", "--format", "json", "-o", "rel.csv",
        ])
        .expect("Error parsing args");
        assert_eq!(config.output_path(), PathBuf::from("rel.csv"));
    }

    #[test]
    fn test_config_rejects_bad_log_level() {
        assert!(Config::try_parse_from(["ipsr", "-i", "a", "-s", "b", "-l", "30"]).is_err());
    }
}
