#![allow(dead_code)]

use trivia::db::{Db, NewQuestion};

pub async fn create_test_db() -> Db {
    use std::sync::atomic::{AtomicU32, Ordering};
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let path = std::env::temp_dir().join(format!("trivia_test_{}_{}.db", std::process::id(), id));
    // Clean up leftover file from previous runs
    let _ = std::fs::remove_file(&path);
    let url = format!("sqlite://{}", path.display());
    Db::new(&url).await.expect("failed to create test database")
}

pub fn new_question(text: &str, answer: &str, category: i64) -> NewQuestion {
    NewQuestion {
        question: text.to_string(),
        answer: answer.to_string(),
        category,
        difficulty: 2,
    }
}

/// Inserts `n` questions into `category` and returns their ids in insertion order.
pub async fn insert_questions(db: &Db, n: usize, category: i64) -> Vec<i64> {
    let mut ids = Vec::with_capacity(n);
    for i in 0..n {
        let q = new_question(
            &format!("Question {} in category {category}", i + 1),
            &format!("Answer {}", i + 1),
            category,
        );
        ids.push(db.insert_question(&q).await.unwrap());
    }
    ids
}
