//! The `studykit init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create studykit.toml
    if std::path::Path::new("studykit.toml").exists() {
        println!("studykit.toml already exists, skipping.");
    } else {
        std::fs::write("studykit.toml", SAMPLE_CONFIG)?;
        println!("Created studykit.toml");
    }

    // Create example bank
    std::fs::create_dir_all("banks")?;
    let example_path = std::path::Path::new("banks/example.toml");
    if example_path.exists() {
        println!("banks/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_BANK)?;
        println!("Created banks/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit banks/example.toml with your own questions");
    println!("  2. Run: studykit validate --bank banks/example.toml");
    println!("  3. Run: studykit serve");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# studykit configuration

bind = "127.0.0.1:8080"

# Question bank file; comment out to use the built-in bank.
bank_path = "banks/example.toml"

# Directory holding the classifier artifacts (vectorizer.json and
# difficulty.json). If they are missing, questions fall back to their
# static difficulty labels.
models_dir = "models"
"#;

const EXAMPLE_BANK: &str = r#"[bank]
name = "Example bank"

[[subjects]]
name = "Math"

[[subjects.questions]]
text = "What is 2 + 2?"
options = ["3", "4", "5", "6"]
answer = "4"
difficulty = "easy"

[[subjects.questions]]
text = "What is 12 × 4?"
options = ["36", "48", "44", "52"]
answer = "48"
difficulty = "medium"

[[subjects.questions]]
text = "What is the derivative of x²?"
options = ["x", "2x", "x²", "2"]
answer = "2x"
difficulty = "hard"

[[subjects]]
name = "Science"

[[subjects.questions]]
text = "Red Planet?"
options = ["Earth", "Mars", "Venus", "Jupiter"]
answer = "Mars"
difficulty = "easy"
"#;
