//! Integration tests for the search/filter engine

use phonedir_common::db::{self, employees, NewEmployee};
use phonedir_common::search::{search_employees, SearchParams};
use sqlx::SqlitePool;

async fn setup() -> SqlitePool {
    let pool = db::connect_memory().await.expect("in-memory database");

    let staff = [
        ("IT", "А. Иванов", "Инженер", "200", "a@x.com"),
        ("IT", "Г. Смирнова", "Разработчик", "202", "g@x.com"),
        ("HR", "Б. Петров", "Менеджер", "201", "b@x.com"),
        ("Бухгалтерия", "В. Сидорова", "Бухгалтер", "203", "v@x.com"),
    ];
    for (department, full_name, position, phone, email) in staff {
        let new = NewEmployee {
            department: department.to_string(),
            full_name: full_name.to_string(),
            position: position.to_string(),
            internal_phone: Some(phone.to_string()),
            email: Some(email.to_string()),
            ..Default::default()
        };
        employees::insert_employee(&pool, &new).await.unwrap();
    }
    pool
}

fn params(search: Option<&str>, department: Option<&str>) -> SearchParams {
    SearchParams {
        search: search.map(String::from),
        department: department.map(String::from),
    }
}

#[tokio::test]
async fn no_filters_returns_everything_in_insertion_order() {
    let pool = setup().await;

    let all = search_employees(&pool, &SearchParams::default()).await.unwrap();
    assert_eq!(all.len(), 4);
    assert_eq!(all[0].full_name, "А. Иванов");
    assert_eq!(all[3].full_name, "В. Сидорова");
}

#[tokio::test]
async fn free_text_matches_cyrillic_case_insensitively() {
    let pool = setup().await;

    let found = search_employees(&pool, &params(Some("инж"), None))
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].position, "Инженер");
}

#[tokio::test]
async fn free_text_scans_all_textual_fields() {
    let pool = setup().await;

    // Phone substring
    let by_phone = search_employees(&pool, &params(Some("203"), None))
        .await
        .unwrap();
    assert_eq!(by_phone.len(), 1);
    assert_eq!(by_phone[0].full_name, "В. Сидорова");

    // Email substring
    let by_email = search_employees(&pool, &params(Some("b@x"), None))
        .await
        .unwrap();
    assert_eq!(by_email.len(), 1);
    assert_eq!(by_email[0].full_name, "Б. Петров");

    // Department substring, lowercased query against "Бухгалтерия"
    let by_dept = search_employees(&pool, &params(Some("бухгалтер"), None))
        .await
        .unwrap();
    assert_eq!(by_dept.len(), 1);
}

#[tokio::test]
async fn department_filter_is_exact_equality() {
    let pool = setup().await;

    let it = search_employees(&pool, &params(None, Some("IT"))).await.unwrap();
    assert_eq!(it.len(), 2);

    // Case-sensitive: "it" is a different department
    let lower = search_employees(&pool, &params(None, Some("it"))).await.unwrap();
    assert!(lower.is_empty());
}

#[tokio::test]
async fn filters_combine_with_logical_and() {
    let pool = setup().await;

    let found = search_employees(&pool, &params(Some("разраб"), Some("IT")))
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].full_name, "Г. Смирнова");

    let none = search_employees(&pool, &params(Some("разраб"), Some("HR")))
        .await
        .unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn empty_strings_are_treated_as_absent_filters() {
    let pool = setup().await;

    let all = search_employees(&pool, &params(Some(""), Some("")))
        .await
        .unwrap();
    assert_eq!(all.len(), 4);
}
