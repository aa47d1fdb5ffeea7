//! The `studykit validate` command.

use std::path::PathBuf;

use anyhow::Result;

use studykit_core::bank::{parse_bank, validate_bank};

pub fn execute(bank_path: PathBuf) -> Result<()> {
    let bank = parse_bank(&bank_path)?;
    println!(
        "Bank: {} ({} subjects, {} questions)",
        bank.name(),
        bank.subjects().len(),
        bank.question_count()
    );

    let warnings = validate_bank(&bank);
    for w in &warnings {
        let prefix = w
            .subject
            .as_ref()
            .map(|s| format!("  [{s}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Bank is valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
