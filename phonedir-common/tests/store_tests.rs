//! Integration tests for the employee record store

use phonedir_common::db::{self, employees, EmployeeUpdate, NewEmployee};
use phonedir_common::Error;
use sqlx::SqlitePool;

fn engineer() -> NewEmployee {
    NewEmployee {
        department: "IT".to_string(),
        full_name: "А. Иванов".to_string(),
        position: "Инженер".to_string(),
        internal_phone: Some("200".to_string()),
        common_phone: Some("+996555111222".to_string()),
        city_phone: None,
        email: Some("a@x.com".to_string()),
    }
}

async fn setup() -> SqlitePool {
    db::connect_memory().await.expect("in-memory database")
}

#[tokio::test]
async fn create_assigns_guid_and_timestamps() {
    let pool = setup().await;

    let created = employees::insert_employee(&pool, &engineer()).await.unwrap();
    assert!(!created.guid.is_empty());
    assert!(!created.created_at.is_empty());

    let loaded = employees::get_employee(&pool, &created.guid)
        .await
        .unwrap()
        .expect("record should exist");
    assert_eq!(loaded.full_name, "А. Иванов");
    assert_eq!(loaded.internal_phone.as_deref(), Some("200"));
    assert_eq!(loaded.photo, None);
}

#[tokio::test]
async fn create_rejects_empty_required_fields() {
    let pool = setup().await;

    let mut new = engineer();
    new.position = "   ".to_string();

    let err = employees::insert_employee(&pool, &new).await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));

    let all = employees::list_by_department(&pool, None).await.unwrap();
    assert!(all.is_empty());
}

#[tokio::test]
async fn partial_update_retains_unspecified_fields() {
    let pool = setup().await;
    let created = employees::insert_employee(&pool, &engineer()).await.unwrap();

    let update = EmployeeUpdate {
        position: Some("Старший инженер".to_string()),
        ..Default::default()
    };
    let updated = employees::update_employee(&pool, &created.guid, &update)
        .await
        .unwrap();

    assert_eq!(updated.position, "Старший инженер");
    assert_eq!(updated.full_name, "А. Иванов");
    assert_eq!(updated.internal_phone.as_deref(), Some("200"));
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
}

#[tokio::test]
async fn update_rejects_emptying_required_field() {
    let pool = setup().await;
    let created = employees::insert_employee(&pool, &engineer()).await.unwrap();

    let update = EmployeeUpdate {
        department: Some(String::new()),
        ..Default::default()
    };
    let err = employees::update_employee(&pool, &created.guid, &update)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[tokio::test]
async fn update_unknown_guid_is_not_found() {
    let pool = setup().await;

    let err = employees::update_employee(&pool, "no-such-guid", &EmployeeUpdate::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[tokio::test]
async fn delete_removes_record_once() {
    let pool = setup().await;
    let created = employees::insert_employee(&pool, &engineer()).await.unwrap();

    employees::delete_employee(&pool, &created.guid).await.unwrap();
    let err = employees::delete_employee(&pool, &created.guid)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[tokio::test]
async fn distinct_departments_are_sorted_and_nonempty() {
    let pool = setup().await;

    for dept in ["IT", "HR", "IT", ""] {
        let new = NewEmployee {
            department: dept.to_string(),
            full_name: "Кто-то".to_string(),
            position: "Сотрудник".to_string(),
            ..Default::default()
        };
        // Blank department only enters via bulk import leniency
        employees::insert_employees(&pool, &[new]).await.unwrap();
    }

    let departments = employees::distinct_departments(&pool).await.unwrap();
    assert_eq!(departments, vec!["HR".to_string(), "IT".to_string()]);
}

#[tokio::test]
async fn set_photo_updates_reference() {
    let pool = setup().await;
    let created = employees::insert_employee(&pool, &engineer()).await.unwrap();

    employees::set_photo(&pool, &created.guid, "photo.jpg")
        .await
        .unwrap();

    let loaded = employees::get_employee(&pool, &created.guid)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(loaded.photo.as_deref(), Some("photo.jpg"));
}
