use std::collections::BTreeMap;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::{
    db::Question,
    extractors::{IdParam, PageParam},
    rejections::{AppError, ResultExt},
    services::trivia::CategoryQuestionsOutcome,
    AppState,
};

use super::category_map;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{id}/questions", get(category_questions))
}

#[derive(Serialize)]
struct CategoriesResponse {
    success: bool,
    categories: BTreeMap<i64, String>,
    total_categories: usize,
}

async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, AppError> {
    let categories = state
        .trivia
        .categories()
        .await
        .reject("could not get categories")?;

    Ok(Json(CategoriesResponse {
        success: true,
        total_categories: categories.len(),
        categories: category_map(&categories),
    }))
}

#[derive(Serialize)]
struct CategoryQuestionsResponse {
    success: bool,
    question: Vec<Question>,
    total_questions: usize,
    current_category: BTreeMap<i64, String>,
}

async fn category_questions(
    State(state): State<AppState>,
    IdParam(category_id): IdParam,
    PageParam(page): PageParam,
) -> Result<Json<CategoryQuestionsResponse>, AppError> {
    let outcome = state
        .trivia
        .category_questions(category_id, page)
        .await
        .reject("could not get category questions")?;

    match outcome {
        CategoryQuestionsOutcome::Page {
            category,
            questions,
            total_questions,
        } => Ok(Json(CategoryQuestionsResponse {
            success: true,
            question: questions,
            total_questions,
            current_category: category_map(std::slice::from_ref(&category)),
        })),
        CategoryQuestionsOutcome::UnknownCategory | CategoryQuestionsOutcome::Empty => {
            Err(AppError::NotFound)
        }
    }
}
