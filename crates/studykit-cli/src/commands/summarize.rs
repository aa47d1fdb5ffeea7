//! The `studykit summarize` command.

use std::io::Read;

use anyhow::{Context, Result};

use studykit_core::summarizer::summarize;

pub fn execute(text: Option<String>) -> Result<()> {
    let text = match text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read text from stdin")?;
            buffer
        }
    };

    println!("{}", summarize(&text));
    Ok(())
}
