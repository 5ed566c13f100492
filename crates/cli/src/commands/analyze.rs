use anyhow::{Context, Result};
use std::fs;
use tracing::debug;

use crate::display::formatter;
use evalscope_core::patterns::DeclarationScanner;

pub fn analyze_command(filepath: &str, json: bool) -> Result<()> {
    debug!("Analyzing file: {}", filepath);

    let source =
        fs::read_to_string(filepath).with_context(|| format!("Failed to read {filepath}"))?;
    let scanner = DeclarationScanner::new()?;

    if json {
        let declarations = scanner.scan(&source);
        println!("{}", serde_json::to_string_pretty(&declarations)?);
    } else {
        formatter::print_analysis(filepath, &source, &scanner);
    }

    Ok(())
}
