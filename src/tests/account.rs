use std::sync::Arc;

use actix_web::http::{StatusCode, header};
use rstest::*;
use serde_json::json;

use crate::domain::models::account::CreateAccount;
use crate::domain::repositories::account::AccountRepository;
use crate::domain::services::account::AccountService;
use crate::infrastructure::repositories::account::AccountRepositoryImpl;
use crate::tests::utils::seed::seed_account;
use crate::tests::{Error, Status, TestContext, context};

use crate::app;
use actix_web::test;
use actix_web::test::TestRequest;

fn status(message: &str) -> Status {
    Status {
        message: message.to_string(),
    }
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_success_register(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container)).await;

    let res = TestRequest::post()
        .uri("/register")
        .set_json(json!({
            "username": "alice",
            "password": "pw1",
        }))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::CREATED);
    assert!(res.headers().contains_key("x-request-id"));

    let body: Status = test::read_body_json(res).await;
    assert_eq!(body, status("success"));

    let repository = AccountRepositoryImpl::new(context.db.clone());
    let account = repository
        .find_by_username("alice")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(account.password, "pw1");
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_register_twice(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container)).await;

    let account = seed_account(&context.db, "alice", "pw1").await;

    let res = TestRequest::post()
        .uri("/register")
        .set_json(json!({
            "username": account.username,
            "password": "pw2",
        }))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::OK);

    let body: Status = test::read_body_json(res).await;
    assert_eq!(body, status("username_exists"));

    let repository = AccountRepositoryImpl::new(context.db.clone());
    assert_eq!(repository.count().await.unwrap(), 1);

    let stored = repository
        .find_by_username("alice")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.password, "pw1");
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_success_login(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container)).await;

    let account = seed_account(&context.db, "alice", "pw1").await;

    let res = TestRequest::post()
        .uri("/login")
        .set_json(json!({
            "username": account.username,
            "password": account.password,
        }))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::OK);

    let body: Status = test::read_body_json(res).await;
    assert_eq!(body, status("success"));
}

#[rstest]
#[case::wrong_password("alice", "wrong")]
#[case::unknown_username("bob", "x")]
#[case::password_case("alice", "PW1")]
#[awt]
#[actix_web::test]
async fn test_invalid_login(
    #[future] context: TestContext,
    #[case] username: String,
    #[case] password: String,
) {
    let app = test::init_service(app::create(context.container)).await;

    seed_account(&context.db, "alice", "pw1").await;

    let res = TestRequest::post()
        .uri("/login")
        .set_json(json!({
            "username": username,
            "password": password,
        }))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::OK);

    let body: Status = test::read_body_json(res).await;
    assert_eq!(body, status("fail"));
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_register_then_login_scenario(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container)).await;

    let steps = [
        ("/register", "alice", "pw1", StatusCode::CREATED, "success"),
        ("/register", "alice", "pw2", StatusCode::OK, "username_exists"),
        ("/login", "alice", "pw1", StatusCode::OK, "success"),
        ("/login", "alice", "wrong", StatusCode::OK, "fail"),
        ("/login", "bob", "x", StatusCode::OK, "fail"),
    ];

    for (uri, username, password, expected_status, expected_message) in steps {
        let res = TestRequest::post()
            .uri(uri)
            .set_json(json!({
                "username": username,
                "password": password,
            }))
            .send_request(&app)
            .await;

        assert_eq!(res.status(), expected_status, "{uri} {username}/{password}");

        let body: Status = test::read_body_json(res).await;
        assert_eq!(body, status(expected_message), "{uri} {username}/{password}");
    }
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_register_malformed_body(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container)).await;

    let res = TestRequest::post()
        .uri("/register")
        .insert_header(header::ContentType::json())
        .set_payload("{ \"username\": \"alice\", ")
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let err: Error = test::read_body_json(res).await;
    assert_eq!(err.code, 400);

    let repository = AccountRepositoryImpl::new(context.db.clone());
    assert_eq!(repository.count().await.unwrap(), 0);
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_cors_allows_any_origin(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container)).await;

    let res = TestRequest::post()
        .uri("/login")
        .insert_header((header::ORIGIN, "http://frontend.example:8080"))
        .set_json(json!({
            "username": "alice",
            "password": "pw1",
        }))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_cors_preflight(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container)).await;

    let res = TestRequest::default()
        .method(actix_web::http::Method::OPTIONS)
        .uri("/register")
        .insert_header((header::ORIGIN, "http://another.example"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type"))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    assert!(
        res.headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
    );
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_openapi_document(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container)).await;

    let res = TestRequest::get()
        .uri("/api-docs/openapi.json")
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::OK);

    let doc: serde_json::Value = test::read_body_json(res).await;
    assert!(doc["paths"]["/register"]["post"].is_object());
    assert!(doc["paths"]["/login"]["post"].is_object());
}

#[rstest]
#[awt]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_register_same_username(#[future] context: TestContext) {
    let service = Arc::clone(&context.container.account_service);

    let handles = (0..8)
        .map(|i| {
            let service = Arc::clone(&service);
            tokio::spawn(async move {
                service
                    .register(CreateAccount {
                        username: "dave".to_string(),
                        password: format!("pw{i}"),
                    })
                    .await
            })
        })
        .collect::<Vec<_>>();

    let created = futures::future::join_all(handles)
        .await
        .into_iter()
        .map(|res| res.unwrap())
        .filter(Result::is_ok)
        .count();

    assert_eq!(created, 1);

    let repository = AccountRepositoryImpl::new(context.db.clone());
    assert_eq!(repository.count().await.unwrap(), 1);
}

#[rstest]
#[awt]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_register_distinct_usernames(#[future] context: TestContext) {
    let service = Arc::clone(&context.container.account_service);

    let handles = (0..16)
        .map(|i| {
            let service = Arc::clone(&service);
            tokio::spawn(async move {
                service
                    .register(CreateAccount {
                        username: format!("user{i}"),
                        password: format!("pw{i}"),
                    })
                    .await
            })
        })
        .collect::<Vec<_>>();

    for res in futures::future::join_all(handles).await {
        assert!(res.unwrap().is_ok());
    }

    let repository = AccountRepositoryImpl::new(context.db.clone());
    assert_eq!(repository.count().await.unwrap(), 16);

    let account = repository.find_by_username("user7").await.unwrap().unwrap();
    assert_eq!(account.password, "pw7");
}
