//! End-to-end service tests against a real Postgres.
//!
//! Ignored by default; point DATABASE_URL at a disposable database and
//! run with `cargo test -- --ignored --test-threads=1` (the fixtures
//! truncate shared tables between tests).

use std::collections::HashMap;

use healthcare_backend::dto::{AdminPayload, CreateAdminRequest};
use healthcare_backend::interceptors::AppError;
use healthcare_backend::models::Role;
use healthcare_backend::services::{AdminFilter, AdminService};
use sqlx::postgres::PgPoolOptions;

async fn test_service() -> AdminService {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for db tests");
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("failed to connect to test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrations failed");

    sqlx::query("TRUNCATE admins, users")
        .execute(&pool)
        .await
        .expect("failed to reset fixture tables");

    AdminService::new(pool)
}

fn creation_request(email: &str, name: &str, contact: &str) -> CreateAdminRequest {
    CreateAdminRequest {
        password: "Secret1".to_string(),
        admin: AdminPayload {
            email: email.to_string(),
            name: name.to_string(),
            contact_number: contact.to_string(),
            address: None,
        },
    }
}

fn filter(pairs: &[(&str, &str)]) -> AdminFilter {
    let params: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    AdminFilter::from_query(params).unwrap()
}

#[tokio::test]
#[ignore]
async fn create_admin_persists_user_and_profile() {
    let service = test_service().await;

    let response = service
        .create_admin(creation_request("a@x.com", "A", "0123456789"))
        .await
        .unwrap();

    assert_eq!(response.created_user_data.email, "a@x.com");
    assert_eq!(response.created_user_data.role, Role::Admin);
    assert_eq!(response.created_admin_data.name, "A");
    assert_eq!(
        response.created_admin_data.user_id,
        response.created_user_data.id
    );
}

#[tokio::test]
#[ignore]
async fn duplicate_email_fails_without_partial_state() {
    let service = test_service().await;

    service
        .create_admin(creation_request("dup@x.com", "First", "0100000000"))
        .await
        .unwrap();

    let err = service
        .create_admin(creation_request("dup@x.com", "Second", "0200000000"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)), "got {:?}", err);

    // The failed attempt left neither a user nor a profile behind
    let admins = service
        .list_admins(&filter(&[("email", "dup@x.com")]))
        .await
        .unwrap();
    assert_eq!(admins.len(), 1);
    assert_eq!(admins[0].name, "First");
}

#[tokio::test]
#[ignore]
async fn search_term_matches_substring_case_insensitively() {
    let service = test_service().await;
    service
        .create_admin(creation_request("john@x.com", "John Doe", "0100000000"))
        .await
        .unwrap();
    service
        .create_admin(creation_request("jane@x.com", "Jane Roe", "0200000000"))
        .await
        .unwrap();

    let admins = service
        .list_admins(&filter(&[("searchTerm", "doe")]))
        .await
        .unwrap();

    assert_eq!(admins.len(), 1);
    assert_eq!(admins[0].name, "John Doe");
}

#[tokio::test]
#[ignore]
async fn exact_filters_exclude_partial_matches() {
    let service = test_service().await;
    service
        .create_admin(creation_request("j@x.com", "John Doe", "0100000000"))
        .await
        .unwrap();
    service
        .create_admin(creation_request("jd@x.com", "John Doe Jr", "0200000000"))
        .await
        .unwrap();

    let admins = service
        .list_admins(&filter(&[("name", "John Doe"), ("email", "j@x.com")]))
        .await
        .unwrap();

    assert_eq!(admins.len(), 1);
    assert_eq!(admins[0].email, "j@x.com");
}

#[tokio::test]
#[ignore]
async fn empty_filter_returns_all_records() {
    let service = test_service().await;
    service
        .create_admin(creation_request("a@x.com", "A", "0100000000"))
        .await
        .unwrap();
    service
        .create_admin(creation_request("b@x.com", "B", "0200000000"))
        .await
        .unwrap();

    let admins = service.list_admins(&AdminFilter::default()).await.unwrap();

    assert_eq!(admins.len(), 2);
}
