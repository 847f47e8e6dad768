//! Line source for the address and subnet files.

use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Fail early if an input file is missing, naming the working directory it was resolved against.
pub fn check_input_file(path: &Path, what: &str) -> Result<(), Box<dyn Error>> {
    if path.is_file() {
        log::debug!("Found {what} file: {}", path.display());
        return Ok(());
    }
    let cwd = std::env::current_dir()
        .map(|d| d.display().to_string())
        .unwrap_or_else(|_| "?".to_string());
    Err(format!(
        "Expecting to find file containing {what} at {} (working directory {cwd})",
        path.display()
    )
    .into())
}

/// Open a file and lazily yield its trimmed, non-empty lines.
///
/// Lines starting with `#` are comments. Invalid UTF-8 is replaced rather than
/// aborting the read, so such a line simply fails to parse later. Read errors are
/// passed through to the caller.
pub fn read_lines<P: AsRef<Path>>(
    path: P,
) -> Result<impl Iterator<Item = io::Result<String>>, Box<dyn Error>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| format!("Error opening {}: {e}", path.display()))?;
    log::info!("Reading lines from {}", path.display());

    let lines = BufReader::new(file)
        .split(b'\n')
        .map(|line| line.map(|bytes| String::from_utf8_lossy(&bytes).trim().to_string()))
        .filter(|line| match line {
            Ok(line) => !line.is_empty() && !line.starts_with('#'),
            Err(_) => true,
        });
    Ok(lines)
}

/// Read every line of a file, failing on the first read error so no partial input is used.
pub fn read_all_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, Box<dyn Error>> {
    let path = path.as_ref();
    let lines = read_lines(path)?
        .collect::<io::Result<Vec<String>>>()
        .map_err(|e| format!("Error reading {}: {e}", path.display()))?;
    log::debug!("Read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}
