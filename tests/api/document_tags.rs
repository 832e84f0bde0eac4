use actix_web::{http, test};
use sea_orm::{ActiveModelTrait, DbErr};

use crate::{
    factory::{self, UserFactory},
    utils::{init_app, login_cookie},
};

#[actix_web::test]
async fn create() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let user = factory::user().insert(&db).await?;

    let req = test::TestRequest::post()
        .uri("/api/document_tags")
        .cookie(login_cookie(user.id))
        .set_json(serde_json::json!({ "name": "reference" }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::CREATED);
    let location = res.headers().get(http::header::LOCATION).unwrap();
    assert!(location.to_str().unwrap().starts_with("document_tags/"));

    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["name"], "reference");
    assert_eq!(body["user_id"], user.id);
    assert!(body["id"].is_i64());
    Ok(())
}

#[actix_web::test]
async fn create_requires_name() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let user = factory::user().insert(&db).await?;

    let req = test::TestRequest::post()
        .uri("/api/document_tags")
        .cookie(login_cookie(user.id))
        .set_json(serde_json::json!({}))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["error"], "Invalid request");
    Ok(())
}

#[actix_web::test]
async fn list_is_scoped_to_the_caller() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let other = factory::user().email("other@test.com".to_string()).insert(&db).await?;
    let mine = factory::document_tag(user.id).insert(&db).await?;
    factory::document_tag(other.id).insert(&db).await?;

    let req = test::TestRequest::get()
        .uri("/api/document_tags")
        .cookie(login_cookie(user.id))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(res).await;
    let document_tags = body.as_array().unwrap();
    assert_eq!(document_tags.len(), 1);
    assert_eq!(document_tags[0]["id"], mine.id);
    Ok(())
}
