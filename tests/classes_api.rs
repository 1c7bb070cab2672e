use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_http::Request;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::{StatusCode, header::ContentType};
use actix_web::{App, test, web};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use serde_json::{Value, json};

use rust_classhub::config::DatabaseConfig;
use rust_classhub::entity::{classes, users};
use rust_classhub::middlewares::RequestTrace;
use rust_classhub::models::AppStartTime;
use rust_classhub::models::departments::requests::CreateDepartmentRequest;
use rust_classhub::models::subjects::requests::CreateSubjectRequest;
use rust_classhub::routes;
use rust_classhub::storage::Storage;
use rust_classhub::storage::sea_orm_storage::SeaOrmStorage;
use rust_classhub::utils::json_error_handler;

const BASE_TS: i64 = 1_700_000_000;

async fn memory_storage() -> SeaOrmStorage {
    SeaOrmStorage::connect(&DatabaseConfig {
        url: ":memory:".into(),
        pool_size: 1,
        timeout: 5,
    })
    .await
    .unwrap()
}

async fn init_app(
    storage: &SeaOrmStorage,
) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error> {
    let storage: Arc<dyn Storage> = Arc::new(storage.clone());
    test::init_service(
        App::new()
            .wrap(RequestTrace)
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::Data::new(storage))
            .app_data(web::Data::new(AppStartTime {
                start_datetime: chrono::Utc::now(),
            }))
            .configure(routes::configure_system_routes)
            .configure(routes::configure_user_routes)
            .configure(routes::configure_departments_routes)
            .configure(routes::configure_subjects_routes)
            .configure(routes::configure_classes_routes),
    )
    .await
}

async fn get_json<S, B>(app: &S, uri: &str) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let res = test::call_service(app, test::TestRequest::get().uri(uri).to_request()).await;
    let status = res.status();
    (status, test::read_body_json(res).await)
}

async fn post_json<S, B>(app: &S, uri: &str, body: Value) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post().uri(uri).set_json(body).to_request();
    let res = test::call_service(app, req).await;
    let status = res.status();
    (status, test::read_body_json(res).await)
}

async fn seed_teacher(db: &DatabaseConnection, name: &str, email: &str) -> i64 {
    users::ActiveModel {
        name: Set(name.to_string()),
        email: Set(email.to_string()),
        role: Set("teacher".to_string()),
        image: Set(Some(format!("https://img.example.com/{email}.png"))),
        image_cld_pub_id: Set(None),
        created_at: Set(BASE_TS),
        updated_at: Set(BASE_TS),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
    .id
}

async fn seed_class(
    db: &DatabaseConnection,
    name: &str,
    invite_code: &str,
    subject_id: Option<i64>,
    teacher_id: Option<i64>,
    created_at: i64,
) -> i64 {
    classes::ActiveModel {
        name: Set(name.to_string()),
        invite_code: Set(invite_code.to_string()),
        teacher_id: Set(teacher_id),
        subject_id: Set(subject_id),
        capacity: Set(30),
        description: Set(None),
        status: Set("active".to_string()),
        banner_url: Set(None),
        banner_cld_pub_id: Set(None),
        schedules: Set(json!([])),
        created_at: Set(created_at),
        updated_at: Set(created_at),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
    .id
}

// 院系 + 两个科目 + 一位教师
async fn seed_catalog(storage: &SeaOrmStorage) -> (i64, i64, i64) {
    let department = storage
        .create_department(CreateDepartmentRequest {
            code: "SCI".into(),
            name: "Science".into(),
            description: None,
        })
        .await
        .unwrap();
    let math = storage
        .create_subject(CreateSubjectRequest {
            department_id: department.id,
            name: "100% Math".into(),
            code: "MATH100".into(),
            description: None,
        })
        .await
        .unwrap();
    let biology = storage
        .create_subject(CreateSubjectRequest {
            department_id: department.id,
            name: "Biology".into(),
            code: "BIO".into(),
            description: None,
        })
        .await
        .unwrap();
    let teacher = seed_teacher(storage.connection(), "Ada Lovelace", "ada@example.com").await;

    (math.id, biology.id, teacher)
}

#[actix_web::test]
async fn test_default_listing_is_newest_first() {
    let storage = memory_storage().await;
    for i in 0..12 {
        seed_class(
            storage.connection(),
            &format!("Class {i}"),
            &format!("code{i:04}"),
            None,
            None,
            BASE_TS + i,
        )
        .await;
    }
    let app = init_app(&storage).await;

    let (status, body) = get_json(&app, "/api/classes").await;
    assert_eq!(status, StatusCode::OK);

    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 10);
    assert_eq!(data[0]["name"], "Class 11");
    assert_eq!(data[9]["name"], "Class 2");
    assert_eq!(
        body["pagination"],
        json!({"page": 1, "limit": 10, "total": 12, "totalPage": 2})
    );

    let (_, body) = get_json(&app, "/api/classes?page=2").await;
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[1]["name"], "Class 0");
}

#[actix_web::test]
async fn test_pagination_parameters_are_clamped() {
    let storage = memory_storage().await;
    for i in 0..3 {
        seed_class(
            storage.connection(),
            &format!("Class {i}"),
            &format!("code{i:04}"),
            None,
            None,
            BASE_TS + i,
        )
        .await;
    }
    let app = init_app(&storage).await;

    let (_, body) = get_json(&app, "/api/classes?limit=-5").await;
    assert_eq!(body["pagination"]["limit"], 1);
    assert_eq!(body["pagination"]["totalPage"], 3);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (_, body) = get_json(&app, "/api/classes?limit=500").await;
    assert_eq!(body["pagination"]["limit"], 100);

    let (_, body) = get_json(&app, "/api/classes?page=0&limit=abc").await;
    assert_eq!(body["pagination"]["page"], 1);
    assert_eq!(body["pagination"]["limit"], 10);

    // 重复的参数取第一次出现的值
    let (status, body) = get_json(&app, "/api/classes?page=1&page=2&limit=2&limit=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["page"], 1);
    assert_eq!(body["pagination"]["limit"], 2);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    // 超出范围的页返回空数据，但总数不变
    let (status, body) = get_json(&app, "/api/classes?page=9").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].as_array().unwrap().is_empty());
    assert_eq!(body["pagination"]["total"], 3);
}

#[actix_web::test]
async fn test_search_matches_name_or_invite_code() {
    let storage = memory_storage().await;
    let db = storage.connection();
    seed_class(db, "ABC Physics", "qqqqqqqq", None, None, BASE_TS).await;
    seed_class(db, "Other", "xxabcxx1", None, None, BASE_TS + 1).await;
    seed_class(db, "Chemistry", "zzzzzzzz", None, None, BASE_TS + 2).await;
    let app = init_app(&storage).await;

    let (_, body) = get_json(&app, "/api/classes?search=abc").await;
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Other", "ABC Physics"]);
    assert_eq!(body["pagination"]["total"], 2);

    let (_, body) = get_json(&app, "/api/classes?search=nothing-here").await;
    assert!(body["data"].as_array().unwrap().is_empty());
    assert_eq!(body["pagination"]["total"], 0);
    assert_eq!(body["pagination"]["totalPage"], 0);
}

#[actix_web::test]
async fn test_search_with_non_ascii_text() {
    let storage = memory_storage().await;
    let db = storage.connection();
    seed_class(db, "Émile Physique", "emile001", None, None, BASE_TS).await;
    seed_class(db, "Chemistry", "chem0001", None, None, BASE_TS + 1).await;
    let app = init_app(&storage).await;

    let (status, body) = get_json(&app, "/api/classes?search=%C3%89mile").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["total"], 1);
    assert_eq!(body["data"][0]["name"], "Émile Physique");

    // ASCII 部分仍然大小写不敏感
    let (_, body) = get_json(&app, "/api/classes?search=%C3%89MILE%20PHYS").await;
    assert_eq!(body["pagination"]["total"], 1);

    let (status, body) = get_json(&app, "/api/classes?search=chem&search=%C3%89mile").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["name"], "Chemistry");
    assert_eq!(body["pagination"]["total"], 1);
}

#[actix_web::test]
async fn test_subject_and_teacher_filters() {
    let storage = memory_storage().await;
    let (math, biology, teacher) = seed_catalog(&storage).await;
    let db = storage.connection();
    seed_class(db, "Algebra", "alg00001", Some(math), Some(teacher), BASE_TS).await;
    seed_class(db, "Cells", "bio00001", Some(biology), None, BASE_TS + 1).await;
    seed_class(db, "Homeroom", "hom00001", None, None, BASE_TS + 2).await;
    let app = init_app(&storage).await;

    // `%` 按字面匹配，只命中名称里带百分号的科目
    let (_, body) = get_json(&app, "/api/classes?subject=%25").await;
    assert_eq!(body["pagination"]["total"], 1);
    assert_eq!(body["data"][0]["name"], "Algebra");
    assert_eq!(body["data"][0]["subject"]["name"], "100% Math");

    let (_, body) = get_json(&app, "/api/classes?subject=BIO").await;
    assert_eq!(body["pagination"]["total"], 1);
    assert_eq!(body["data"][0]["name"], "Cells");
    assert!(body["data"][0]["teacher"].is_null());

    let (_, body) = get_json(&app, "/api/classes?teacher=lovelace&subject=math").await;
    assert_eq!(body["pagination"]["total"], 1);
    assert_eq!(body["data"][0]["teacher"]["name"], "Ada Lovelace");

    // 空字符串等同于未提供
    let (_, body) = get_json(&app, "/api/classes?subject=&teacher=").await;
    assert_eq!(body["pagination"]["total"], 3);
}

#[actix_web::test]
async fn test_class_detail() {
    let storage = memory_storage().await;
    let (math, _, teacher) = seed_catalog(&storage).await;
    let db = storage.connection();
    let full = seed_class(db, "Algebra", "alg00001", Some(math), Some(teacher), BASE_TS).await;
    let bare = seed_class(db, "Homeroom", "hom00001", None, None, BASE_TS + 1).await;
    let app = init_app(&storage).await;

    let (status, body) = get_json(&app, "/api/classes/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 1002);

    let (status, body) = get_json(&app, "/api/classes/999999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Class not found");

    let (status, body) = get_json(&app, &format!("/api/classes/{full}")).await;
    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["id"], full);
    assert_eq!(data["inviteCode"], "alg00001");
    assert_eq!(data["subject"]["code"], "MATH100");
    assert_eq!(data["department"]["name"], "Science");
    assert_eq!(data["teacher"]["email"], "ada@example.com");

    let (status, body) = get_json(&app, &format!("/api/classes/{bare}")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["subject"].is_null());
    assert!(body["data"]["department"].is_null());
    assert!(body["data"]["teacher"].is_null());
}

#[actix_web::test]
async fn test_create_class() {
    let storage = memory_storage().await;
    let app = init_app(&storage).await;

    let (status, first) = post_json(&app, "/api/classes", json!({"name": "Algebra"})).await;
    assert_eq!(status, StatusCode::CREATED);
    let first_id = first["data"]["id"].as_i64().unwrap();

    let (status, second) = post_json(&app, "/api/classes", json!({"name": "Geometry"})).await;
    assert_eq!(status, StatusCode::CREATED);
    let second_id = second["data"]["id"].as_i64().unwrap();
    assert_ne!(first_id, second_id);

    let (_, first) = get_json(&app, &format!("/api/classes/{first_id}")).await;
    let (_, second) = get_json(&app, &format!("/api/classes/{second_id}")).await;
    assert_eq!(first["data"]["schedules"], json!([]));
    assert_eq!(first["data"]["status"], "active");
    assert_eq!(first["data"]["capacity"], 50);

    let first_code = first["data"]["inviteCode"].as_str().unwrap();
    let second_code = second["data"]["inviteCode"].as_str().unwrap();
    assert_eq!(first_code.len(), 8);
    assert_ne!(first_code, second_code);
}

#[actix_web::test]
async fn test_create_class_rejects_bad_input() {
    let storage = memory_storage().await;
    let app = init_app(&storage).await;

    let (status, body) = post_json(&app, "/api/classes", json!({"name": "   "})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 1001);

    let (status, _) = post_json(
        &app,
        "/api/classes",
        json!({"name": "Algebra", "status": "closed"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/classes")
        .insert_header(ContentType::json())
        .set_payload("{\"name\":")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // 不存在的教师由外键约束拒绝
    let (status, body) = post_json(
        &app,
        "/api/classes",
        json!({"name": "Algebra", "teacherId": 424242}),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to create class");
}

#[actix_web::test]
async fn test_subjects_and_departments() {
    let storage = memory_storage().await;
    let app = init_app(&storage).await;

    let (status, body) = post_json(
        &app,
        "/api/departments",
        json!({"code": "ENG", "name": "Engineering"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let department_id = body["data"]["id"].as_i64().unwrap();

    let (status, _) = post_json(
        &app,
        "/api/departments",
        json!({"code": "ENG", "name": "Duplicate"}),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = post_json(
        &app,
        "/api/subjects",
        json!({"departmentId": department_id, "name": "Circuits", "code": "EE-101"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let subject_id = body["data"]["id"].as_i64().unwrap();

    let (_, body) = get_json(&app, "/api/subjects?department=engin").await;
    assert_eq!(body["pagination"]["total"], 1);
    assert_eq!(body["data"][0]["department"]["code"], "ENG");

    let (status, body) = get_json(&app, &format!("/api/subjects/{subject_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["departmentId"], department_id);

    let (_, body) = get_json(&app, "/api/departments?search=eng").await;
    assert_eq!(body["data"][0]["name"], "Engineering");

    let (status, _) = get_json(&app, "/api/departments/77").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_users_and_health() {
    let storage = memory_storage().await;
    seed_teacher(storage.connection(), "Grace Hopper", "grace@example.com").await;
    let app = init_app(&storage).await;

    let (_, body) = get_json(&app, "/api/users?role=teacher&search=GRACE").await;
    assert_eq!(body["pagination"]["total"], 1);
    assert_eq!(body["data"][0]["role"], "teacher");

    let (_, body) = get_json(&app, "/api/users?role=student").await;
    assert_eq!(body["pagination"]["total"], 0);

    let (status, body) = get_json(&app, "/api/users?role=wizard").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 1000);

    let (status, body) = get_json(&app, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "ok");
    assert!(body["data"]["uptimeSeconds"].as_i64().unwrap() >= 0);
}
