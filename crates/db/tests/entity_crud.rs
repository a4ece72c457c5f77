//! Integration tests for the content repositories.
//!
//! Exercises the repository layer against a fresh SQLite database:
//! - Create / list ordering (newest first)
//! - Partial updates
//! - Physical deletes returning the removed row
//! - Subscriber email uniqueness at the storage level
//! - Dashboard counts

use folio_db::models::client::{CreateClient, UpdateClient};
use folio_db::models::contact::CreateContact;
use folio_db::models::project::{CreateProject, UpdateProject};
use folio_db::repositories::{ClientRepo, ContactRepo, DashboardRepo, ProjectRepo, SubscriberRepo};
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_project(name: &str) -> CreateProject {
    CreateProject {
        name: name.to_string(),
        description: format!("{name} description"),
        image: None,
    }
}

fn new_client(name: &str) -> CreateClient {
    CreateClient {
        name: name.to_string(),
        description: "Great to work with".to_string(),
        designation: "CEO".to_string(),
        image: Some("uploads/20240101_000000_face.png".to_string()),
    }
}

fn new_contact(full_name: &str) -> CreateContact {
    CreateContact {
        full_name: full_name.to_string(),
        email: "someone@example.com".to_string(),
        mobile: "5551234".to_string(),
        city: "Lisbon".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_create_project_assigns_id_and_timestamp(pool: SqlitePool) {
    let project = ProjectRepo::create(&pool, &new_project("Foo")).await.unwrap();

    assert!(project.id > 0);
    assert_eq!(project.name, "Foo");
    assert_eq!(project.image, None);

    let found = ProjectRepo::find_by_id(&pool, project.id).await.unwrap().unwrap();
    assert_eq!(found.created_at, project.created_at);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_projects_newest_first(pool: SqlitePool) {
    let first = ProjectRepo::create(&pool, &new_project("First")).await.unwrap();
    let second = ProjectRepo::create(&pool, &new_project("Second")).await.unwrap();
    let third = ProjectRepo::create(&pool, &new_project("Third")).await.unwrap();

    let ids: Vec<i64> = ProjectRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec![third.id, second.id, first.id]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_project_applies_only_present_fields(pool: SqlitePool) {
    let mut input = new_project("Original");
    input.image = Some("uploads/old.png".to_string());
    let project = ProjectRepo::create(&pool, &input).await.unwrap();

    let update = UpdateProject {
        name: Some("Renamed".to_string()),
        ..Default::default()
    };
    let updated = ProjectRepo::update(&pool, project.id, &update)
        .await
        .unwrap()
        .expect("project should exist");

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.description, project.description);
    assert_eq!(updated.image.as_deref(), Some("uploads/old.png"));
    assert_eq!(updated.created_at, project.created_at);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_missing_project_returns_none(pool: SqlitePool) {
    let result = ProjectRepo::update(&pool, 999, &UpdateProject::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_project_returns_removed_row(pool: SqlitePool) {
    let project = ProjectRepo::create(&pool, &new_project("Gone")).await.unwrap();

    let removed = ProjectRepo::delete(&pool, project.id).await.unwrap();
    assert_eq!(removed.map(|p| p.id), Some(project.id));
    assert!(ProjectRepo::find_by_id(&pool, project.id).await.unwrap().is_none());

    // Second delete finds nothing.
    assert!(ProjectRepo::delete(&pool, project.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_project_name_length_is_enforced_by_schema(pool: SqlitePool) {
    let result = ProjectRepo::create(&pool, &new_project(&"x".repeat(101))).await;
    assert!(result.is_err());
    assert!(ProjectRepo::list(&pool).await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Clients
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_client_crud(pool: SqlitePool) {
    let client = ClientRepo::create(&pool, &new_client("Ada")).await.unwrap();
    assert_eq!(client.designation, "CEO");

    let update = UpdateClient {
        designation: Some("CTO".to_string()),
        ..Default::default()
    };
    let updated = ClientRepo::update(&pool, client.id, &update)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.designation, "CTO");
    assert_eq!(updated.name, "Ada");
    assert_eq!(updated.image, client.image);

    let removed = ClientRepo::delete(&pool, client.id).await.unwrap().unwrap();
    assert_eq!(removed.image, client.image);
    assert!(ClientRepo::list(&pool).await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Contacts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_contact_create_list_delete(pool: SqlitePool) {
    let a = ContactRepo::create(&pool, &new_contact("A")).await.unwrap();
    let b = ContactRepo::create(&pool, &new_contact("B")).await.unwrap();

    let listed = ContactRepo::list(&pool).await.unwrap();
    assert_eq!(listed.iter().map(|c| c.id).collect::<Vec<_>>(), vec![b.id, a.id]);

    assert!(ContactRepo::delete(&pool, a.id).await.unwrap());
    assert!(!ContactRepo::delete(&pool, a.id).await.unwrap());
    assert_eq!(ContactRepo::list(&pool).await.unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Subscribers
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_subscriber_violates_unique_constraint(pool: SqlitePool) {
    SubscriberRepo::create(&pool, "a@x.com").await.unwrap();

    let err = SubscriberRepo::create(&pool, "a@x.com").await.unwrap_err();
    match err {
        sqlx::Error::Database(db_err) => assert!(db_err.is_unique_violation()),
        other => panic!("expected unique violation, got {other:?}"),
    }

    assert_eq!(SubscriberRepo::list(&pool).await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_find_subscriber_by_email(pool: SqlitePool) {
    let created = SubscriberRepo::create(&pool, "b@x.com").await.unwrap();

    let found = SubscriberRepo::find_by_email(&pool, "b@x.com").await.unwrap();
    assert_eq!(found.map(|s| s.id), Some(created.id));
    assert!(SubscriberRepo::find_by_email(&pool, "c@x.com").await.unwrap().is_none());

    assert!(SubscriberRepo::delete(&pool, created.id).await.unwrap());
    assert!(SubscriberRepo::find_by_email(&pool, "b@x.com").await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_dashboard_counts(pool: SqlitePool) {
    ProjectRepo::create(&pool, &new_project("P1")).await.unwrap();
    ProjectRepo::create(&pool, &new_project("P2")).await.unwrap();
    ClientRepo::create(&pool, &new_client("C1")).await.unwrap();
    SubscriberRepo::create(&pool, "d@x.com").await.unwrap();

    let counts = DashboardRepo::counts(&pool).await.unwrap();
    assert_eq!(counts.projects, 2);
    assert_eq!(counts.clients, 1);
    assert_eq!(counts.contacts, 0);
    assert_eq!(counts.subscribers, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_health_check(pool: SqlitePool) {
    folio_db::health_check(&pool).await.unwrap();
}
