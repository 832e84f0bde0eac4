use actix_web::{http, test};
use sea_orm::{ActiveModelTrait, DbErr};

use crate::{factory, utils::{init_app, login_cookie}};

#[actix_web::test]
async fn create_with_name_only_applies_defaults() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let user = factory::user().insert(&db).await?;

    let req = test::TestRequest::post()
        .uri("/api/tags")
        .cookie(login_cookie(user.id))
        .set_json(serde_json::json!({ "name": "Work" }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::CREATED);
    let location = res.headers().get("location").unwrap().to_str().unwrap();
    assert!(location.starts_with("tags/"));

    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["name"], "Work");
    assert_eq!(body["theme_color"], "ecf0f1");
    assert_eq!(body["user_id"], user.id);
    assert_eq!(body["pinned"], false);
    assert!(body.get("parent_id").is_none());
    Ok(())
}

#[actix_web::test]
async fn create_preserves_three_digit_color() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let user = factory::user().insert(&db).await?;

    let req = test::TestRequest::post()
        .uri("/api/tags")
        .cookie(login_cookie(user.id))
        .set_json(serde_json::json!({ "name": "Work", "theme_color": "f0a" }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::CREATED);
    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["theme_color"], "f0a");
    Ok(())
}

#[actix_web::test]
async fn create_with_parent_echoes_parent_id() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let parent = factory::tag(user.id).insert(&db).await?;

    let req = test::TestRequest::post()
        .uri("/api/tags")
        .cookie(login_cookie(user.id))
        .set_json(serde_json::json!({ "name": "Child", "parent_id": parent.id }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::CREATED);
    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["parent_id"], parent.id);
    Ok(())
}

#[actix_web::test]
async fn create_rejects_bad_theme_color() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let user = factory::user().insert(&db).await?;

    let req = test::TestRequest::post()
        .uri("/api/tags")
        .cookie(login_cookie(user.id))
        .set_json(serde_json::json!({ "name": "Work", "theme_color": "#ecf0f1" }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["error"], "Unprocessable entity (theme_color)");
    Ok(())
}

#[actix_web::test]
async fn create_rejects_missing_name() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let user = factory::user().insert(&db).await?;

    let req = test::TestRequest::post()
        .uri("/api/tags")
        .cookie(login_cookie(user.id))
        .set_json(serde_json::json!({ "theme_color": "abc" }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["error"], "Invalid request");
    Ok(())
}

#[actix_web::test]
async fn create_requires_json_content_type() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let user = factory::user().insert(&db).await?;

    let req = test::TestRequest::post()
        .uri("/api/tags")
        .cookie(login_cookie(user.id))
        .insert_header(("content-type", "text/plain"))
        .set_payload("{\"name\":\"Work\"}")
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["error"], "Unsupported media type");
    Ok(())
}

#[actix_web::test]
async fn create_rejects_malformed_json_body() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let user = factory::user().insert(&db).await?;

    let req = test::TestRequest::post()
        .uri("/api/tags")
        .cookie(login_cookie(user.id))
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"name\": ")
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["error"], "Invalid request");
    Ok(())
}
