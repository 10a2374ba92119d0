pub const CATEGORIES_URL: &str = "/categories";
pub const QUESTIONS_URL: &str = "/questions";
pub const QUIZZES_URL: &str = "/quizzes";

pub fn question_url(question_id: i64) -> String {
    format!("/questions/{question_id}")
}

pub fn category_questions_url(category_id: i64) -> String {
    format!("/categories/{category_id}/questions")
}

// Paging
pub const QUESTIONS_PER_PAGE: usize = 10;

// Question defaults
pub const DEFAULT_DIFFICULTY: i64 = 1;
pub const MIN_DIFFICULTY: i64 = 1;
pub const MAX_DIFFICULTY: i64 = 5;

// Quiz requests use category id 0 for "any category"
pub const ANY_CATEGORY_ID: i64 = 0;

// CORS
pub const CORS_ALLOW_ORIGIN: &str = "*";
pub const CORS_ALLOW_HEADERS: &str = "Content-Type,Authorization,true";
pub const CORS_ALLOW_METHODS: &str = "GET,PUT,POST,DELETE,OPTIONS";
