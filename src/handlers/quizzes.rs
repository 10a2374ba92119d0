use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;

use crate::{
    db::Question,
    extractors::JsonBody,
    models::QuizBody,
    rejections::{AppError, ResultExt},
    services::trivia::QuizOutcome,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/quizzes", post(next_question))
}

#[derive(Serialize)]
struct QuizResponse {
    success: bool,
    question: Option<Question>,
}

async fn next_question(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<QuizBody>,
) -> Result<Json<QuizResponse>, AppError> {
    let outcome = state
        .trivia
        .next_quiz_question(body.category_filter(), &body.previous_questions)
        .await
        .reject("could not select quiz question")?;

    let question = match outcome {
        QuizOutcome::Question(question) => Some(question),
        QuizOutcome::Exhausted => None,
        QuizOutcome::UnknownCategory => return Err(AppError::Unprocessable),
    };

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}
