//! The `studykit quiz` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;

use studykit_core::model::Difficulty;
use studykit_server::AppState;

pub fn execute(
    subject: String,
    difficulty: String,
    answers: bool,
    bank: Option<PathBuf>,
    models_dir: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let difficulty: Difficulty = difficulty
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let config = super::resolve_config(bank, models_dir, config_path)?;
    let state = AppState::from_config(&config)?;

    let questions = state.selector().select(&subject, difficulty);
    if questions.is_empty() {
        println!("No questions for subject '{subject}'.");
        return Ok(());
    }

    let mut table = Table::new();
    let mut header = vec!["#", "Question", "Options"];
    if answers {
        header.push("Answer");
    }
    header.push("Difficulty");
    table.set_header(header);

    for (i, question) in questions.iter().enumerate() {
        let label = question
            .difficulty
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());
        let mut row = vec![
            (i + 1).to_string(),
            question.text.clone(),
            question.options.join(" / "),
        ];
        if answers {
            row.push(question.answer.clone());
        }
        row.push(label);
        table.add_row(row);
    }

    println!("{table}");
    Ok(())
}
