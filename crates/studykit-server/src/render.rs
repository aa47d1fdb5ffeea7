//! Self-contained HTML rendering.
//!
//! Produces full pages with all CSS inlined; no templates, no static
//! assets to serve.

use studykit_core::model::{Difficulty, Question, QuizBank};

use crate::routes::SubmissionOutcome;

/// Escape a string for safe HTML insertion.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Render the main page: the submission form, plus results when a
/// submission was processed.
pub fn render_page(bank: &QuizBank, outcome: Option<&SubmissionOutcome>) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>studykit</title>\n");
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n<h1>studykit</h1>\n");
    html.push_str(&format!(
        "<p class=\"meta\">Bank: <strong>{}</strong> | {} subjects | {} questions</p>\n",
        html_escape(bank.name()),
        bank.subjects().len(),
        bank.question_count()
    ));
    html.push_str("</header>\n");

    render_form(&mut html, bank);

    if let Some(outcome) = outcome {
        render_outcome(&mut html, outcome);
    }

    html.push_str(&format!(
        "<footer><p class=\"meta\">generated {}</p></footer>\n",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</body>\n</html>");
    html
}

/// Render a submission error as its own page.
pub fn render_error(message: &str) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<title>studykit — error</title>\n");
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");
    html.push_str("<header>\n<h1>studykit</h1>\n</header>\n");
    html.push_str(&format!(
        "<section class=\"error\"><p>{}</p></section>\n",
        html_escape(message)
    ));
    html.push_str("<p><a href=\"/\">Back to the form</a></p>\n");
    html.push_str("</body>\n</html>");
    html
}

fn render_form(html: &mut String, bank: &QuizBank) {
    html.push_str("<section class=\"form\">\n<h2>Plan your week</h2>\n");
    html.push_str("<form method=\"post\" action=\"/\">\n");

    html.push_str("<fieldset>\n<legend>Subjects</legend>\n");
    for name in bank.subject_names() {
        let escaped = html_escape(name);
        html.push_str(&format!(
            "<label><input type=\"checkbox\" name=\"subjects\" value=\"{escaped}\"> {escaped}</label>\n",
        ));
    }
    html.push_str("</fieldset>\n");

    html.push_str(
        "<label>Weekly hours <input type=\"text\" name=\"hours\" placeholder=\"12\"></label>\n",
    );
    html.push_str(
        "<label>Scenario <input type=\"text\" name=\"scenario\" placeholder=\"exam\"></label>\n",
    );

    html.push_str("<label>Quiz difficulty <select name=\"difficulty\">\n");
    for level in Difficulty::ALL {
        html.push_str(&format!("<option value=\"{level}\">{level}</option>\n"));
    }
    html.push_str("</select></label>\n");

    html.push_str(
        "<label>Text to summarize <textarea name=\"text\" rows=\"4\"></textarea></label>\n",
    );

    html.push_str("<button type=\"submit\">Go</button>\n");
    html.push_str("</form>\n</section>\n");
}

fn render_outcome(html: &mut String, outcome: &SubmissionOutcome) {
    if let Some(plan) = &outcome.plan {
        html.push_str("<section class=\"plan\">\n<h2>Weekly plan</h2>\n<ul>\n");
        for line in plan {
            html.push_str(&format!("<li>{}</li>\n", html_escape(line)));
        }
        html.push_str("</ul>\n</section>\n");
    }

    if let Some(summary) = &outcome.summary {
        html.push_str("<section class=\"summary\">\n<h2>Summary</h2>\n");
        html.push_str(&format!("<p>{}</p>\n", html_escape(summary)));
        html.push_str("</section>\n");
    }

    for (subject, questions) in &outcome.quizzes {
        html.push_str(&format!(
            "<section class=\"quiz\">\n<h2>Quiz: {}</h2>\n",
            html_escape(subject)
        ));
        if questions.is_empty() {
            html.push_str("<p class=\"meta\">No questions available.</p>\n");
        } else {
            html.push_str("<ol>\n");
            for question in questions {
                render_question(html, question);
            }
            html.push_str("</ol>\n");
        }
        html.push_str("</section>\n");
    }
}

fn render_question(html: &mut String, question: &Question) {
    html.push_str(&format!("<li>{}\n", html_escape(&question.text)));
    html.push_str("<ol type=\"A\">\n");
    for option in &question.options {
        html.push_str(&format!("<li>{}</li>\n", html_escape(option)));
    }
    html.push_str("</ol>\n");
    html.push_str(&format!(
        "<details><summary>Answer</summary>{}</details>\n",
        html_escape(&question.answer)
    ));
    html.push_str("</li>\n");
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --accent: #2563eb; --error: #fde2e2; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --accent: #60a5fa; --error: #7f1d1d; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0 auto; max-width: 48rem; padding: 2rem; background: var(--bg); color: var(--fg); }
h1, h2 { margin-top: 2rem; }
.meta { color: #6b7280; }
fieldset { border: 1px solid var(--border); border-radius: 8px; margin: 1rem 0; }
label { display: block; margin: 0.5rem 0; }
input[type=text], textarea, select { width: 100%; max-width: 24rem; padding: 0.4rem; border: 1px solid var(--border); border-radius: 6px; background: var(--bg); color: var(--fg); }
button { padding: 0.5rem 1.5rem; border: none; border-radius: 6px; background: var(--accent); color: #fff; cursor: pointer; }
section { margin: 1.5rem 0; }
.error { background: var(--error); padding: 1rem; border-radius: 8px; }
details { margin: 0.25rem 0; }
summary { cursor: pointer; font-weight: bold; }
"#;
