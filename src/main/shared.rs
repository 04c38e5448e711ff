use std::fs;
use std::process;

use colored::Colorize;

pub(super) fn read_file(path: &str) -> Result<String, String> {
    fs::read_to_string(path).map_err(|e| format!("Cannot open file '{}': {}", path, e))
}

/// Prints `msg` as an error and exits with status 1.
pub(super) fn exit_with(msg: &str) -> ! {
    eprintln!("{} {}", "error:".red().bold(), msg);
    process::exit(1);
}
