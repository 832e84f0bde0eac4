use actix_web::{http, test};
use sea_orm::{ActiveModelTrait, DbErr};

use crate::{
    factory::{self, TagFactory, UserFactory},
    utils::{init_app, login_cookie},
};

#[actix_web::test]
async fn list_always_carries_a_children_array() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let parent = factory::tag(user.id).name("parent".to_string()).insert(&db).await?;
    let child = factory::tag(user.id)
        .name("child".to_string())
        .parent_id(Some(parent.id))
        .insert(&db)
        .await?;
    let childless = factory::tag(user.id).name("childless".to_string()).insert(&db).await?;

    let req = test::TestRequest::get()
        .uri("/api/tags")
        .cookie(login_cookie(user.id))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(res).await;
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 2);

    assert_eq!(list[0]["id"], parent.id);
    assert_eq!(list[0]["tags"][0]["id"], child.id);
    assert_eq!(list[0]["tags"][0]["parent_id"], parent.id);

    // A childless parent still carries the array, as [].
    assert_eq!(list[1]["id"], childless.id);
    assert_eq!(list[1]["tags"], serde_json::json!([]));

    // The child never shows up at the top level.
    assert!(!list.iter().any(|t| t["id"] == child.id));
    Ok(())
}

#[actix_web::test]
async fn list_is_scoped_to_the_caller() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let other = factory::user().email("other@test.com".to_string()).insert(&db).await?;
    factory::tag(other.id).insert(&db).await?;

    let req = test::TestRequest::get()
        .uri("/api/tags")
        .cookie(login_cookie(user.id))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body, serde_json::json!([]));
    Ok(())
}
