//! Input files.
//!
//! - [`lines`] - Lazy line source over the address and subnet files

mod lines;

pub use lines::{check_input_file, read_all_lines, read_lines};
