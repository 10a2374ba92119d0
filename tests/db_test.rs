mod common;

use common::{create_test_db, insert_questions, new_question};

#[tokio::test]
async fn test_db_connection() {
    let db = create_test_db().await;
    assert!(db.migration_applied("V1").await.unwrap());
    assert!(db.migration_applied("V2").await.unwrap());
    assert!(!db.migration_applied("V3").await.unwrap());
}

#[tokio::test]
async fn test_seeded_categories() {
    let db = create_test_db().await;

    let categories = db.categories().await.unwrap();
    let names: Vec<&str> = categories.iter().map(|c| c.kind.as_str()).collect();
    assert_eq!(
        names,
        ["Science", "Art", "Geography", "History", "Entertainment", "Sports"]
    );

    let history = db.category(4).await.unwrap().unwrap();
    assert_eq!(history.kind, "History");
    assert!(db.category(20).await.unwrap().is_none());
}

#[tokio::test]
async fn test_insert_and_list_questions() {
    let db = create_test_db().await;
    assert_eq!(db.questions_count().await.unwrap(), 0);

    let ids = insert_questions(&db, 3, 1).await;
    insert_questions(&db, 2, 5).await;

    assert_eq!(db.questions_count().await.unwrap(), 5);

    let all = db.all_questions().await.unwrap();
    assert_eq!(all.len(), 5);
    assert!(all.windows(2).all(|w| w[0].id < w[1].id), "ordered by id");

    let science = db.questions_by_category(1).await.unwrap();
    let science_ids: Vec<i64> = science.iter().map(|q| q.id).collect();
    assert_eq!(science_ids, ids);
    assert!(science.iter().all(|q| q.category == 1));
}

#[tokio::test]
async fn test_insert_rejects_unknown_category() {
    let db = create_test_db().await;

    let result = db.insert_question(&new_question("Q", "A", 99)).await;
    assert!(result.is_err(), "foreign key should reject category 99");
}

#[tokio::test]
async fn test_search_is_case_insensitive_substring() {
    let db = create_test_db().await;
    db.insert_question(&new_question(
        "What boxer's original name is Cassius Clay?",
        "Muhammad Ali",
        4,
    ))
    .await
    .unwrap();
    db.insert_question(&new_question("What is the heaviest organ?", "The Liver", 1))
        .await
        .unwrap();

    let hits = db.search_questions("cassius").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].answer, "Muhammad Ali");

    assert_eq!(db.search_questions("WHAT").await.unwrap().len(), 2);
    assert!(db.search_questions("Jailerman").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_search_treats_wildcards_literally() {
    let db = create_test_db().await;
    db.insert_question(&new_question("Is 100% of a circle 360 degrees?", "Yes", 1))
        .await
        .unwrap();
    db.insert_question(&new_question("Name a snake_case language", "Rust", 1))
        .await
        .unwrap();

    assert_eq!(db.search_questions("%").await.unwrap().len(), 1);
    assert_eq!(db.search_questions("_").await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_search_folds_non_ascii_case() {
    let db = create_test_db().await;
    let id = db
        .insert_question(&new_question("Who painted ÉCOLE D'ATHÈNES?", "Raphael", 2))
        .await
        .unwrap();
    db.insert_question(&new_question("Which city hosts the Louvre?", "Paris", 3))
        .await
        .unwrap();

    let hits = db.search_questions("école").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, id);

    assert_eq!(db.search_questions("athènes").await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_question() {
    let db = create_test_db().await;
    let ids = insert_questions(&db, 2, 3).await;

    assert!(db.delete_question(ids[0]).await.unwrap());
    assert!(!db.delete_question(ids[0]).await.unwrap(), "second delete is a miss");
    assert_eq!(db.questions_count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_ids_are_not_reused_after_delete() {
    let db = create_test_db().await;
    let ids = insert_questions(&db, 2, 3).await;
    db.delete_question(ids[1]).await.unwrap();

    let next = insert_questions(&db, 1, 3).await;
    assert!(next[0] > ids[1]);
}
