pub mod db;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod names;
pub mod pager;
pub mod quiz;
pub mod rejections;
pub mod services;

use axum::{
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    middleware,
    response::IntoResponse,
    Router,
};

use services::trivia::TriviaService;

#[derive(Clone)]
pub struct AppState {
    pub trivia: TriviaService,
}

impl AppState {
    pub fn new(db: db::Db) -> Self {
        Self {
            trivia: TriviaService::new(db),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::routes())
        .fallback(not_found)
        .layer(middleware::from_fn(cors))
        .with_state(state)
}

async fn not_found() -> rejections::AppError {
    rejections::AppError::NotFound
}

async fn cors(
    req: axum::http::Request<axum::body::Body>,
    next: middleware::Next,
) -> axum::response::Response {
    let mut response = if req.method() == Method::OPTIONS {
        StatusCode::NO_CONTENT.into_response()
    } else {
        next.run(req).await
    };

    add_cors_headers(response.headers_mut());
    response
}

fn add_cors_headers(headers: &mut HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(names::CORS_ALLOW_ORIGIN),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(names::CORS_ALLOW_HEADERS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(names::CORS_ALLOW_METHODS),
    );
}
