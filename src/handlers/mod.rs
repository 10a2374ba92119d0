pub mod categories;
pub mod questions;
pub mod quizzes;

use std::collections::BTreeMap;

use axum::Router;

use crate::{db::Category, AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(categories::routes())
        .merge(questions::routes())
        .merge(quizzes::routes())
}

/// Categories as the `{id: type}` object the quiz frontend expects.
fn category_map(categories: &[Category]) -> BTreeMap<i64, String> {
    categories
        .iter()
        .map(|c| (c.id, c.kind.clone()))
        .collect()
}
