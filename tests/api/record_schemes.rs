use actix_web::{http, test};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait};

use flowfirmer_backend::entities::free_record_scheme;

use crate::{
    factory::{self, UserFactory},
    utils::{init_app, login_cookie},
};

#[actix_web::test]
async fn create_with_defaults() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let tag = factory::tag(user.id).insert(&db).await?;

    let req = test::TestRequest::post()
        .uri(&format!("/api/tags/{}/record_schemes", tag.id))
        .cookie(login_cookie(user.id))
        .set_json(serde_json::json!({ "name": "Push-ups" }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::CREATED);
    let location = res.headers().get(http::header::LOCATION).unwrap();
    assert!(location
        .to_str()
        .unwrap()
        .starts_with(&format!("tags/{}/record_schemes/", tag.id)));

    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["name"], "Push-ups");
    assert_eq!(body["unit_name"], serde_json::Value::Null);
    assert_eq!(body["default_graph_type"], "flat");
    assert_eq!(body["tag"]["id"], tag.id);
    assert_eq!(body["tag"]["name"], tag.name);
    Ok(())
}

#[actix_web::test]
async fn create_lowercases_the_graph_type() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let tag = factory::tag(user.id).insert(&db).await?;

    let req = test::TestRequest::post()
        .uri(&format!("/api/tags/{}/record_schemes", tag.id))
        .cookie(login_cookie(user.id))
        .set_json(serde_json::json!({
            "name": "Reading minutes",
            "unit_name": "min",
            "default_graph_type": "SUM",
        }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::CREATED);
    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["default_graph_type"], "sum");
    assert_eq!(body["unit_name"], "min");

    let scheme_id = body["id"].as_i64().unwrap() as i32;
    let stored = free_record_scheme::Entity::find_by_id(scheme_id)
        .one(&db)
        .await?
        .unwrap();
    assert_eq!(stored.default_graph_type, "sum");
    Ok(())
}

#[actix_web::test]
async fn create_rejects_unknown_graph_type() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let tag = factory::tag(user.id).insert(&db).await?;

    let req = test::TestRequest::post()
        .uri(&format!("/api/tags/{}/record_schemes", tag.id))
        .cookie(login_cookie(user.id))
        .set_json(serde_json::json!({
            "name": "Bad graph",
            "default_graph_type": "pie",
        }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["error"], "Unprocessable entity (default_graph_type)");
    Ok(())
}

#[actix_web::test]
async fn create_under_a_foreign_tag_is_not_found() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let other = factory::user().email("other@test.com".to_string()).insert(&db).await?;
    let foreign_tag = factory::tag(other.id).insert(&db).await?;

    let req = test::TestRequest::post()
        .uri(&format!("/api/tags/{}/record_schemes", foreign_tag.id))
        .cookie(login_cookie(user.id))
        .set_json(serde_json::json!({ "name": "Sneaky" }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["error"], format!("Tag not found (id: {})", foreign_tag.id));
    Ok(())
}

#[actix_web::test]
async fn get_unknown_scheme_is_not_found() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let tag = factory::tag(user.id).insert(&db).await?;

    let req = test::TestRequest::get()
        .uri(&format!("/api/tags/{}/record_schemes/999", tag.id))
        .cookie(login_cookie(user.id))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["error"], "RecordScheme not found");
    Ok(())
}

#[actix_web::test]
async fn get_returns_the_scheme() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let tag = factory::tag(user.id).insert(&db).await?;
    let scheme = factory::record_scheme(tag.id).insert(&db).await?;

    let req = test::TestRequest::get()
        .uri(&format!("/api/tags/{}/record_schemes/{}", tag.id, scheme.id))
        .cookie(login_cookie(user.id))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["id"], scheme.id);
    assert_eq!(body["name"], scheme.name);
    Ok(())
}

#[actix_web::test]
async fn update_applies_allowed_keys() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let tag = factory::tag(user.id).insert(&db).await?;
    let scheme = factory::record_scheme(tag.id).insert(&db).await?;

    let req = test::TestRequest::patch()
        .uri(&format!("/api/tags/{}/record_schemes/{}", tag.id, scheme.id))
        .cookie(login_cookie(user.id))
        .set_json(serde_json::json!({
            "name": "Renamed",
            "unit_name": "reps",
            "default_graph_type": "Sum",
        }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["message"], "Success");

    let stored = free_record_scheme::Entity::find_by_id(scheme.id)
        .one(&db)
        .await?
        .unwrap();
    assert_eq!(stored.name, "Renamed");
    assert_eq!(stored.unit_name, Some("reps".to_string()));
    assert_eq!(stored.default_graph_type, "sum");
    Ok(())
}

#[actix_web::test]
async fn update_rejects_disallowed_keys() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let tag = factory::tag(user.id).insert(&db).await?;
    let scheme = factory::record_scheme(tag.id).insert(&db).await?;

    let req = test::TestRequest::patch()
        .uri(&format!("/api/tags/{}/record_schemes/{}", tag.id, scheme.id))
        .cookie(login_cookie(user.id))
        .set_json(serde_json::json!({ "tag_id": 1 }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["error"], "Unprocessable entity (tag_id)");
    Ok(())
}

#[actix_web::test]
async fn update_unknown_scheme_is_not_found() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let tag = factory::tag(user.id).insert(&db).await?;

    let req = test::TestRequest::patch()
        .uri(&format!("/api/tags/{}/record_schemes/999", tag.id))
        .cookie(login_cookie(user.id))
        .set_json(serde_json::json!({ "name": "Ghost" }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["error"], "RecordScheme not found");
    Ok(())
}

#[actix_web::test]
async fn delete_then_delete_again() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let tag = factory::tag(user.id).insert(&db).await?;
    let scheme = factory::record_scheme(tag.id).insert(&db).await?;

    let uri = format!("/api/tags/{}/record_schemes/{}", tag.id, scheme.id);
    let req = test::TestRequest::delete()
        .uri(&uri)
        .cookie(login_cookie(user.id))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::NO_CONTENT);
    assert!(free_record_scheme::Entity::find_by_id(scheme.id)
        .one(&db)
        .await?
        .is_none());

    let req = test::TestRequest::delete()
        .uri(&uri)
        .cookie(login_cookie(user.id))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["error"], "RecordScheme not found");
    Ok(())
}
