//! HTTP 层集成测试：内存 SQLite + 完整路由表

use std::sync::Arc;

use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use serde_json::{Value, json};

use crate::config::Argon2Config;
use crate::models::admins::{entities::Admin, requests::CreateAdminRequest};
use crate::storage::Storage;
use crate::storage::sea_orm_storage::{SeaOrmStorage, fixtures};
use crate::utils::jwt::JwtUtils;
use crate::utils::password::hash_password_with;
use crate::utils::{json_error_handler, path_error_handler, query_error_handler};

use super::configure_api_routes;

async fn test_storage() -> (SeaOrmStorage, Arc<dyn Storage>) {
    let storage = fixtures::storage().await;
    let shared: Arc<dyn Storage> = Arc::new(storage.clone());
    (storage, shared)
}

macro_rules! test_app {
    ($storage:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($storage))
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .app_data(web::QueryConfig::default().error_handler(query_error_handler))
                .app_data(web::PathConfig::default().error_handler(path_error_handler))
                .configure(configure_api_routes),
        )
        .await
    };
}

async fn create_admin(storage: &SeaOrmStorage, email: &str, super_admin: bool) -> Admin {
    let light = Argon2Config {
        memory_cost: 1024,
        time_cost: 1,
        parallelism: 1,
    };
    storage
        .create_admin(CreateAdminRequest {
            name: "Administrator".to_string(),
            email: email.to_string(),
            password: hash_password_with("Secret123", &light).unwrap(),
            is_super_admin: super_admin,
        })
        .await
        .unwrap()
}

async fn bearer(storage: &SeaOrmStorage, super_admin: bool) -> (header::HeaderName, String) {
    let email = if super_admin { "admin" } else { "teacher" };
    let admin = create_admin(storage, email, super_admin).await;
    let token = JwtUtils::generate_session_token(admin.id).unwrap();
    (header::AUTHORIZATION, format!("Bearer {token}"))
}

#[actix_web::test]
async fn test_unauthenticated_mutations_are_rejected_without_state_change() {
    let (storage, shared) = test_storage().await;
    let class = fixtures::class(&storage).await;
    let student = fixtures::student(&storage, class.id, 1, "Aakash Yadav").await;
    let app = test_app!(shared);

    let requests = vec![
        test::TestRequest::post()
            .uri("/api/students")
            .set_json(json!({"rollNo": 2, "name": "Aryan Kumar", "classId": class.id})),
        test::TestRequest::patch()
            .uri(&format!("/api/students/{}", student.id))
            .set_json(json!({"name": "Changed"})),
        test::TestRequest::delete().uri(&format!("/api/students/{}", student.id)),
        test::TestRequest::delete().uri(&format!("/api/classes/{}", class.id)),
        test::TestRequest::post()
            .uri("/api/marks")
            .set_json(json!({"studentId": student.id, "subjectId": 1, "obtained": 10})),
    ];

    for req in requests {
        let resp = test::call_service(&app, req.to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"message": "Unauthorized"}));
    }

    let students = storage.list_students_with_marks(None).await.unwrap();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].student.name, "Aakash Yadav");
    assert!(storage.get_class_by_id(class.id).await.unwrap().is_some());
}

#[actix_web::test]
async fn test_invalid_token_is_unauthorized() {
    let (_, shared) = test_storage().await;
    let app = test_app!(shared);

    let req = test::TestRequest::post()
        .uri("/api/sessions")
        .insert_header((header::AUTHORIZATION, "Bearer not-a-jwt"))
        .set_json(json!({"name": "2025-26"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_student_crud_flow() {
    let (storage, shared) = test_storage().await;
    let class = fixtures::class(&storage).await;
    let auth = bearer(&storage, true).await;
    let app = test_app!(shared);

    let req = test::TestRequest::post()
        .uri("/api/students")
        .insert_header(auth.clone())
        .set_json(json!({"rollNo": 3, "name": "Rahul Kumar", "classId": class.id}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["rollNo"], 3);
    assert_eq!(created["classId"], class.id);
    let id = created["id"].as_i64().unwrap();

    let req = test::TestRequest::patch()
        .uri(&format!("/api/students/{id}"))
        .insert_header(auth.clone())
        .set_json(json!({"name": "Rahul K."}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["name"], "Rahul K.");
    assert_eq!(updated["rollNo"], 3);

    let req = test::TestRequest::get()
        .uri(&format!("/api/students/{id}"))
        .to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched["marks"], json!([]));

    let req = test::TestRequest::delete()
        .uri(&format!("/api/students/{id}"))
        .insert_header(auth.clone())
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NO_CONTENT
    );

    let req = test::TestRequest::get()
        .uri(&format!("/api/students/{id}"))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );

    let req = test::TestRequest::patch()
        .uri(&format!("/api/students/{id}"))
        .insert_header(auth)
        .set_json(json!({"name": "Ghost"}))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[actix_web::test]
async fn test_validation_failures_name_the_field() {
    let (storage, shared) = test_storage().await;
    let class = fixtures::class(&storage).await;
    let auth = bearer(&storage, true).await;
    let app = test_app!(shared);

    let req = test::TestRequest::post()
        .uri("/api/students")
        .insert_header(auth.clone())
        .set_json(json!({"rollNo": 0, "name": "Nobody", "classId": class.id}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["field"], "rollNo");

    let req = test::TestRequest::post()
        .uri("/api/subjects")
        .insert_header(auth.clone())
        .set_json(json!({"name": "Math", "date": "2024-07-15", "classId": class.id}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["field"], "maxMarks");

    let req = test::TestRequest::post()
        .uri("/api/students")
        .insert_header(auth)
        .set_json(json!({"rollNo": 1, "name": "Nobody", "classId": 9999}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["field"], "classId");

    assert_eq!(storage.count_students().await.unwrap(), 0);
}

#[actix_web::test]
async fn test_duplicate_roll_no_conflicts() {
    let (storage, shared) = test_storage().await;
    let class = fixtures::class(&storage).await;
    fixtures::student(&storage, class.id, 7, "Meraj Alam").await;
    let auth = bearer(&storage, true).await;
    let app = test_app!(shared);

    let req = test::TestRequest::post()
        .uri("/api/students")
        .insert_header(auth)
        .set_json(json!({"rollNo": 7, "name": "Someone", "classId": class.id}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[actix_web::test]
async fn test_subject_backfill_and_mark_entry() {
    let (storage, shared) = test_storage().await;
    let class = fixtures::class(&storage).await;
    let a = fixtures::student(&storage, class.id, 1, "Aakash Yadav").await;
    fixtures::student(&storage, class.id, 2, "Aryan Kumar").await;
    let auth = bearer(&storage, true).await;
    let app = test_app!(shared);

    let req = test::TestRequest::post()
        .uri("/api/subjects")
        .insert_header(auth.clone())
        .set_json(json!({
            "name": "Initial Test",
            "date": "2024-07-15",
            "maxMarks": 80,
            "classId": class.id
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let subject: Value = test::read_body_json(resp).await;
    let subject_id = subject["id"].as_i64().unwrap();

    let req = test::TestRequest::get()
        .uri(&format!("/api/students?classId={}", class.id))
        .to_request();
    let students: Value = test::call_and_read_body_json(&app, req).await;
    let students = students.as_array().unwrap();
    assert_eq!(students.len(), 2);
    for s in students {
        assert_eq!(s["marks"][0]["obtained"], "0");
        assert_eq!(s["marks"][0]["subject"]["maxMarks"], 80);
    }

    let req = test::TestRequest::post()
        .uri("/api/marks")
        .insert_header(auth.clone())
        .set_json(json!({"studentId": a.id, "subjectId": subject_id, "obtained": 54}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let mark: Value = test::read_body_json(resp).await;
    assert_eq!(mark["obtained"], "54");

    let req = test::TestRequest::post()
        .uri("/api/marks")
        .insert_header(auth.clone())
        .set_json(json!({"studentId": a.id, "subjectId": subject_id, "obtained": "81"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["field"], "obtained");

    let req = test::TestRequest::post()
        .uri("/api/marks")
        .insert_header(auth)
        .set_json(json!({"studentId": 9999, "subjectId": subject_id, "obtained": 1}))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );

    assert_eq!(fixtures::mark_count(&storage).await, 2);
}

#[actix_web::test]
async fn test_leaderboard_ranks_and_filters() {
    let (storage, shared) = test_storage().await;
    let class = fixtures::class(&storage).await;
    let subject = fixtures::subject(&storage, class.id, "Initial Test").await;
    for (roll, name, obtained) in [(1, "Eighty", "64"), (2, "Sixty", "48"), (3, "Ninety", "72")] {
        let s = fixtures::student(&storage, class.id, roll, name).await;
        storage
            .upsert_mark(s.id, subject.id, obtained.to_string())
            .await
            .unwrap();
    }
    let app = test_app!(shared);

    let req = test::TestRequest::get()
        .uri(&format!("/api/leaderboard?classId={}", class.id))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["totalStudents"], 3);
    assert_eq!(body["topPerformer"], "Ninety");
    assert_eq!(body["averagePercentage"], 76.7);
    let names: Vec<&str> = body["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Ninety", "Eighty", "Sixty"]);

    let req = test::TestRequest::get()
        .uri("/api/leaderboard?search=six")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["totalStudents"], 3);
    assert_eq!(body["entries"].as_array().unwrap().len(), 1);
    assert_eq!(body["entries"][0]["percentage"], 60.0);
}

#[actix_web::test]
async fn test_bad_query_and_path_parameters() {
    let (_, shared) = test_storage().await;
    let app = test_app!(shared);

    let req = test::TestRequest::get()
        .uri("/api/subjects?classId=abc")
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );

    let req = test::TestRequest::get().uri("/api/students/abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["field"], "id");
}

#[actix_web::test]
async fn test_login_cookie_session() {
    let (storage, shared) = test_storage().await;
    create_admin(&storage, "admin", true).await;
    let app = test_app!(shared);

    let req = test::TestRequest::post()
        .uri("/api/login")
        .peer_addr("10.9.0.1:5000".parse().unwrap())
        .set_json(json!({"username": "admin", "password": "wrong"}))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );

    let req = test::TestRequest::post()
        .uri("/api/login")
        .peer_addr("10.9.0.1:5000".parse().unwrap())
        .set_json(json!({"username": "admin", "password": "Secret123"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = resp
        .response()
        .cookies()
        .find(|c| c.name() == "gradebook_session")
        .map(|c| c.into_owned())
        .expect("session cookie");
    assert!(cookie.http_only().unwrap_or(false));
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["admin"]["email"], "admin");
    assert!(body["admin"].get("password").is_none());

    let req = test::TestRequest::get()
        .uri("/api/user")
        .cookie(cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let me: Value = test::read_body_json(resp).await;
    assert_eq!(me["isSuperAdmin"], true);

    let req = test::TestRequest::post().uri("/api/logout").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let cleared = resp
        .response()
        .cookies()
        .find(|c| c.name() == "gradebook_session")
        .expect("cleared cookie");
    assert_eq!(cleared.value(), "");
}

#[actix_web::test]
async fn test_only_super_admin_creates_admins() {
    let (storage, shared) = test_storage().await;
    let regular = bearer(&storage, false).await;
    let app = test_app!(shared);

    let req = test::TestRequest::post()
        .uri("/api/admins")
        .insert_header(regular)
        .set_json(json!({"name": "New", "email": "new@school.edu", "password": "Secret123"}))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::FORBIDDEN
    );

    let req = test::TestRequest::post()
        .uri("/api/admins")
        .set_json(json!({"name": "New", "email": "new@school.edu", "password": "Secret123"}))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );
}

#[actix_web::test]
async fn test_super_admin_creates_admin_and_duplicate_conflicts() {
    let (storage, shared) = test_storage().await;
    let auth = bearer(&storage, true).await;
    let app = test_app!(shared);

    let payload = json!({"name": "Teacher", "email": "teacher@school.edu", "password": "Secret123"});
    let req = test::TestRequest::post()
        .uri("/api/admins")
        .insert_header(auth.clone())
        .set_json(payload.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["isSuperAdmin"], false);

    let req = test::TestRequest::post()
        .uri("/api/admins")
        .insert_header(auth)
        .set_json(payload)
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CONFLICT
    );
}

#[actix_web::test]
async fn test_sessions_and_classes_routes() {
    let (storage, shared) = test_storage().await;
    let auth = bearer(&storage, true).await;
    let app = test_app!(shared);

    let req = test::TestRequest::post()
        .uri("/api/sessions")
        .insert_header(auth.clone())
        .set_json(json!({"name": "2025-26", "isActive": false}))
        .to_request();
    let session: Value = test::call_and_read_body_json(&app, req).await;
    let session_id = session["id"].as_i64().unwrap();

    let req = test::TestRequest::patch()
        .uri(&format!("/api/sessions/{session_id}"))
        .insert_header(auth.clone())
        .set_json(json!({"isActive": true}))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["isActive"], true);
    assert_eq!(updated["name"], "2025-26");

    let req = test::TestRequest::post()
        .uri("/api/classes")
        .insert_header(auth.clone())
        .set_json(json!({"name": "10th", "sessionId": session_id}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let class: Value = test::read_body_json(resp).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/sessions/{session_id}/classes"))
        .to_request();
    let classes: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(classes, json!([class]));

    let req = test::TestRequest::delete()
        .uri(&format!("/api/classes/{}", class["id"]))
        .insert_header(auth)
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NO_CONTENT
    );

    let req = test::TestRequest::get().uri("/api/classes").to_request();
    let classes: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(classes, json!([]));
}

#[actix_web::test]
async fn test_lowering_max_marks_below_recorded_mark_is_rejected() {
    let (storage, shared) = test_storage().await;
    let class = fixtures::class(&storage).await;
    let student = fixtures::student(&storage, class.id, 3, "Rahul Kumar").await;
    let subject = fixtures::subject(&storage, class.id, "Initial Test").await;
    storage
        .upsert_mark(student.id, subject.id, "70".to_string())
        .await
        .unwrap();
    let auth = bearer(&storage, true).await;
    let app = test_app!(shared);

    let req = test::TestRequest::patch()
        .uri(&format!("/api/subjects/{}", subject.id))
        .insert_header(auth.clone())
        .set_json(json!({"maxMarks": 50}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["field"], "maxMarks");
    let unchanged = storage.get_subject_by_id(subject.id).await.unwrap().unwrap();
    assert_eq!(unchanged.max_marks, 80);

    let req = test::TestRequest::patch()
        .uri(&format!("/api/subjects/{}", subject.id))
        .insert_header(auth)
        .set_json(json!({"maxMarks": 70}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["maxMarks"], 70);
}

#[actix_web::test]
async fn test_moved_student_ranks_on_new_class_subjects_only() {
    let (storage, shared) = test_storage().await;
    let first = fixtures::class(&storage).await;
    let second = fixtures::class_named(&storage, "9th").await;
    let old_subject = fixtures::subject(&storage, first.id, "Old Test").await;
    fixtures::subject(&storage, second.id, "New Test").await;
    let student = fixtures::student(&storage, first.id, 1, "Tahir").await;
    storage
        .upsert_mark(student.id, old_subject.id, "40".to_string())
        .await
        .unwrap();
    let auth = bearer(&storage, true).await;
    let app = test_app!(shared);

    let req = test::TestRequest::patch()
        .uri(&format!("/api/students/{}", student.id))
        .insert_header(auth)
        .set_json(json!({"classId": second.id}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/api/leaderboard?classId={}", second.id))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["entries"][0]["name"], "Tahir");
    assert_eq!(body["entries"][0]["percentage"], 0.0);
    assert_eq!(body["entries"][0]["marks"][0]["subject"]["name"], "New Test");
}

#[actix_web::test]
async fn test_zero_class_id_means_no_filter() {
    let (storage, shared) = test_storage().await;
    let class = fixtures::class(&storage).await;
    fixtures::student(&storage, class.id, 1, "Farhin").await;
    let app = test_app!(shared);

    let req = test::TestRequest::get()
        .uri("/api/students?classId=0")
        .to_request();
    let students: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(students.as_array().unwrap().len(), 1);
}
