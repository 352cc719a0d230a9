#[macro_use]
mod common;

use actix_web::{http::StatusCode, test};
use common::{course, test_state};
use nexus_sst_api::database::{MemoryStore, UserRepository};
use nexus_sst_api::models::{CourseStatus, NewUser, Role};
use serde_json::{json, Value};
use std::sync::Arc;

fn new_user(email: &str) -> NewUser {
    NewUser {
        email: email.to_string(),
        password_hash: "$2b$04$digest".to_string(),
        first_name: "Ana".to_string(),
        last_name: "Silva".to_string(),
        company_name: None,
        role: Role::User,
    }
}

fn expected_chart_data() -> Value {
    json!({
        "coursePopularity": [
            { "name": "NR-35", "enrollments": 45 },
            { "name": "NR-10", "enrollments": 38 },
            { "name": "NR-06", "enrollments": 32 },
            { "name": "NR-17", "enrollments": 28 },
            { "name": "NR-12", "enrollments": 25 }
        ],
        "certificateStatus": [
            { "name": "Válidos", "value": 120, "color": "#4caf50" },
            { "name": "Vencidos", "value": 15, "color": "#ff9800" },
            { "name": "Revogados", "value": 3, "color": "#f44336" }
        ]
    })
}

#[actix_web::test]
async fn test_stats_match_store_counts() {
    let store = Arc::new(MemoryStore::with_courses(vec![
        course(1, "NR-10", CourseStatus::Active, 3),
        course(2, "NR-12", CourseStatus::Inactive, 2),
    ]));
    store.insert_one(new_user("a@x.com")).await.unwrap();
    store.insert_one(new_user("b@x.com")).await.unwrap();
    store.insert_one(new_user("c@x.com")).await.unwrap();
    store.add_certificates(7).await;

    let app = test_app!(test_state(store));

    let req = test::TestRequest::get().uri("/api/dashboard/stats").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["stats"],
        json!({
            "totalUsers": 3,
            "totalCourses": 2,
            "totalCertificates": 7,
            "completionRate": 85
        })
    );
    assert_eq!(body["chartData"], expected_chart_data());
}

#[actix_web::test]
async fn test_chart_data_ignores_counts() {
    let app = test_app!(test_state(Arc::new(MemoryStore::new())));

    let req = test::TestRequest::get().uri("/api/dashboard/stats").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["stats"]["totalUsers"], 0);
    assert_eq!(body["stats"]["completionRate"], 85);
    assert_eq!(body["chartData"], expected_chart_data());
}

#[actix_web::test]
async fn test_stats_fail_when_a_count_fails() {
    let store = Arc::new(MemoryStore::new());
    store.set_unavailable(true);
    let app = test_app!(test_state(store));

    let req = test::TestRequest::get().uri("/api/dashboard/stats").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": "Erro interno do servidor" }));
}
