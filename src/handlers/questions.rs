use std::collections::BTreeMap;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use serde::Serialize;

use crate::{
    db::Question,
    extractors::{IdParam, JsonBody, PageParam, RawPage},
    models::QuestionBody,
    rejections::{AppError, ResultExt},
    services::trivia::{CreateOutcome, DeleteOutcome, QuestionsOutcome},
    AppState,
};

use super::category_map;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/questions", get(list_questions).post(create_or_search))
        .route("/questions/{id}", delete(delete_question))
}

#[derive(Serialize)]
struct QuestionsResponse {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    categories: BTreeMap<i64, String>,
    current_category: BTreeMap<i64, String>,
}

async fn list_questions(
    State(state): State<AppState>,
    PageParam(page): PageParam,
) -> Result<Json<QuestionsResponse>, AppError> {
    let outcome = state
        .trivia
        .questions_page(page)
        .await
        .reject("could not get questions")?;

    let QuestionsOutcome::Page(page) = outcome else {
        return Err(AppError::BadRequest);
    };

    let categories = category_map(&page.categories);
    Ok(Json(QuestionsResponse {
        success: true,
        questions: page.questions,
        total_questions: page.total_questions,
        current_category: categories.clone(),
        categories,
    }))
}

#[derive(Serialize)]
struct SearchResponse {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
}

#[derive(Serialize)]
struct CreatedResponse {
    success: bool,
    created: i64,
    total_questions: i64,
}

async fn create_or_search(
    State(state): State<AppState>,
    raw_page: RawPage,
    JsonBody(body): JsonBody<QuestionBody>,
) -> Result<Response, AppError> {
    if let Some(term) = body.search_term() {
        let page = raw_page.page()?;
        let results = state
            .trivia
            .search(term, page)
            .await
            .reject("could not search questions")?;

        return Ok(Json(SearchResponse {
            success: true,
            questions: results.questions,
            total_questions: results.total_questions,
        })
        .into_response());
    }

    let outcome = state
        .trivia
        .create_question(body.into_draft())
        .await
        .reject("could not create question")?;

    match outcome {
        CreateOutcome::Created {
            id,
            total_questions,
        } => Ok(Json(CreatedResponse {
            success: true,
            created: id,
            total_questions,
        })
        .into_response()),
        CreateOutcome::MissingFields
        | CreateOutcome::InvalidDifficulty
        | CreateOutcome::UnknownCategory => Err(AppError::Unprocessable),
    }
}

#[derive(Serialize)]
struct DeletedResponse {
    success: bool,
    deleted: i64,
    total_questions: i64,
}

async fn delete_question(
    State(state): State<AppState>,
    IdParam(question_id): IdParam,
) -> Result<Json<DeletedResponse>, AppError> {
    let outcome = state
        .trivia
        .delete_question(question_id)
        .await
        .reject("could not delete question")?;

    match outcome {
        DeleteOutcome::Deleted { total_questions } => Ok(Json(DeletedResponse {
            success: true,
            deleted: question_id,
            total_questions,
        })),
        DeleteOutcome::NotFound => Err(AppError::NotFound),
    }
}
