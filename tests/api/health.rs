use actix_web::{http, test};
use sea_orm::DbErr;

use crate::utils::init_app;

#[actix_web::test]
async fn health_check_needs_no_auth() -> Result<(), DbErr> {
    let (app, _db) = init_app().await?;

    let req = test::TestRequest::get().uri("/api/health-check").to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::OK);
    Ok(())
}
