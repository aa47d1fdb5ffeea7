//! The `studykit plan` command.

use anyhow::Result;

use studykit_core::planner::generate_weekly_plan;

pub fn execute(subjects: String, hours: String, scenario: String) -> Result<()> {
    let subjects: Vec<String> = subjects
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    anyhow::ensure!(!subjects.is_empty(), "at least one subject is required");

    let plan = generate_weekly_plan(&subjects, &hours, &scenario)?;
    for line in &plan {
        println!("{line}");
    }
    Ok(())
}
