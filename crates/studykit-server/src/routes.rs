//! Routes and request handling.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use axum_extra::extract::Form;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use studykit_core::error::PlanError;
use studykit_core::model::Question;
use studykit_core::planner::generate_weekly_plan;
use studykit_core::summarizer::summarize;

use crate::form::{FormError, QuizForm, Submission};
use crate::render;
use crate::state::AppState;

/// Results of one submission; any section may be absent.
#[derive(Debug, Default)]
pub struct SubmissionOutcome {
    pub plan: Option<Vec<String>>,
    pub summary: Option<String>,
    /// Per-subject quiz selections, in submission order.
    pub quizzes: Vec<(String, Vec<Question>)>,
}

/// Input failures rendered back to the user.
#[derive(Debug)]
pub enum AppError {
    Form(FormError),
    Plan(PlanError),
}

impl From<FormError> for AppError {
    fn from(e: FormError) -> Self {
        AppError::Form(e)
    }
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        AppError::Plan(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::Form(e) => e.to_string(),
            AppError::Plan(e) => e.to_string(),
        };
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(render::render_error(&message)),
        )
            .into_response()
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index).post(submit))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render::render_page(state.bank(), None))
}

async fn submit(
    State(state): State<Arc<AppState>>,
    Form(form): Form<QuizForm>,
) -> Result<Html<String>, AppError> {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("submission", %request_id);
    let _guard = span.enter();

    let submission = form.into_submission()?;
    let outcome = process(&state, &submission)?;

    tracing::info!(
        subjects = submission.subjects.len(),
        plan = outcome.plan.is_some(),
        summary = outcome.summary.is_some(),
        "submission handled"
    );

    Ok(Html(render::render_page(state.bank(), Some(&outcome))))
}

/// Pure submission processing, separate from the HTTP layer so tests
/// can drive it directly.
///
/// A plan is computed only when subjects were selected and hours were
/// given; a summary only when text was given; quizzes always, one
/// selection per selected subject.
pub fn process(state: &AppState, submission: &Submission) -> Result<SubmissionOutcome, PlanError> {
    let plan = match &submission.hours {
        Some(hours) if !submission.subjects.is_empty() => Some(generate_weekly_plan(
            &submission.subjects,
            hours,
            &submission.scenario,
        )?),
        _ => None,
    };

    let summary = submission.text.as_deref().map(summarize);

    let quizzes = submission
        .subjects
        .iter()
        .map(|subject| {
            (
                subject.clone(),
                state.selector().select(subject, submission.difficulty),
            )
        })
        .collect();

    Ok(SubmissionOutcome {
        plan,
        summary,
        quizzes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request};
    use tower::ServiceExt;

    use studykit_core::bank::builtin_bank;
    use studykit_core::model::Difficulty;

    fn test_state() -> Arc<AppState> {
        Arc::new(AppState::new(Arc::new(builtin_bank()), None))
    }

    fn post_form(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/")
            .header(
                header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn index_serves_the_form() {
        let response = router(test_state())
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let page = body_text(response).await;
        assert!(page.contains("name=\"subjects\" value=\"Math\""));
    }

    #[tokio::test]
    async fn healthz_is_ok() {
        let response = router(test_state())
            .oneshot(
                Request::builder()
                    .uri("/healthz")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "ok");
    }

    #[tokio::test]
    async fn full_submission_renders_all_sections() {
        let response = router(test_state())
            .oneshot(post_form(
                "subjects=Math&subjects=Python&hours=12&scenario=exam&text=a+b+c&difficulty=easy",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let page = body_text(response).await;
        assert!(page.contains("Monday: Math – 6.0 hrs (exam)"));
        assert!(page.contains("a b c"));
        assert!(page.contains("Quiz: Math"));
        assert!(page.contains("Quiz: Python"));
    }

    #[tokio::test]
    async fn quiz_only_submission_skips_plan_and_summary() {
        let response = router(test_state())
            .oneshot(post_form("subjects=Science&difficulty=medium"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let page = body_text(response).await;
        assert!(!page.contains("Weekly plan"));
        assert!(!page.contains("<h2>Summary</h2>"));
        assert!(page.contains("Quiz: Science"));
    }

    #[tokio::test]
    async fn malformed_hours_is_a_422() {
        let response = router(test_state())
            .oneshot(post_form("subjects=Math&hours=twelve"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let page = body_text(response).await;
        assert!(page.contains("invalid hours value"));
    }

    #[tokio::test]
    async fn malformed_difficulty_is_a_422() {
        let response = router(test_state())
            .oneshot(post_form("subjects=Math&difficulty=brutal"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let page = body_text(response).await;
        assert!(page.contains("invalid difficulty"));
    }

    #[tokio::test]
    async fn unknown_subject_renders_empty_quiz() {
        let response = router(test_state())
            .oneshot(post_form("subjects=History"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let page = body_text(response).await;
        assert!(page.contains("Quiz: History"));
        assert!(page.contains("No questions available."));
    }

    #[test]
    fn process_without_hours_computes_no_plan() {
        let state = test_state();
        let submission = Submission {
            subjects: vec!["Math".into()],
            hours: None,
            scenario: String::new(),
            text: None,
            difficulty: Difficulty::Easy,
        };
        let outcome = process(&state, &submission).unwrap();
        assert!(outcome.plan.is_none());
        assert!(outcome.summary.is_none());
        assert_eq!(outcome.quizzes.len(), 1);
    }

    #[test]
    fn process_summary_without_subjects() {
        let state = test_state();
        let submission = Submission {
            subjects: vec![],
            hours: Some("12".into()),
            scenario: "exam".into(),
            text: Some("one two three".into()),
            difficulty: Difficulty::Easy,
        };
        let outcome = process(&state, &submission).unwrap();
        // Hours without subjects cannot produce a plan.
        assert!(outcome.plan.is_none());
        assert_eq!(outcome.summary.as_deref(), Some("one two three"));
        assert!(outcome.quizzes.is_empty());
    }
}
