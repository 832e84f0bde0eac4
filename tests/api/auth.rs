use actix_web::{cookie::Cookie, http, test};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use sea_orm::{ActiveModelTrait, DbErr};

use crate::{
    factory,
    utils::{init_app, login_cookie, TEST_JWT_SECRET},
};

#[actix_web::test]
async fn missing_cookie_is_challenged_with_token_required() -> Result<(), DbErr> {
    let (app, _db) = init_app().await?;

    let req = test::TestRequest::get().uri("/api/tags").to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::UNAUTHORIZED);
    let challenge = res
        .headers()
        .get("www-authenticate")
        .unwrap()
        .to_str()
        .unwrap();
    assert_eq!(challenge, "Bearer error=\"token_required\"");
    Ok(())
}

#[actix_web::test]
async fn garbage_token_is_invalid_token() -> Result<(), DbErr> {
    let (app, _db) = init_app().await?;

    let req = test::TestRequest::get()
        .uri("/api/tags")
        .cookie(Cookie::new("token", "not.a.jwt"))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::UNAUTHORIZED);
    let challenge = res
        .headers()
        .get("www-authenticate")
        .unwrap()
        .to_str()
        .unwrap();
    assert_eq!(challenge, "Bearer error=\"invalid_token\"");
    Ok(())
}

#[actix_web::test]
async fn foreign_secret_token_is_invalid_not_500() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let token =
        flowfirmer_backend::utils::auth::tokens::issue_token(user.id, "some-other-secret", 7)
            .unwrap();

    let req = test::TestRequest::get()
        .uri("/api/tags")
        .cookie(Cookie::new("token", token))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::UNAUTHORIZED);
    Ok(())
}

#[actix_web::test]
async fn wrong_issuer_token_is_invalid() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let user = factory::user().insert(&db).await?;
    #[derive(serde::Serialize)]
    struct ForeignClaims {
        user_id: i32,
        iat: i64,
        exp: i64,
        iss: String,
    }
    let now = Utc::now();
    let token = encode(
        &Header::default(),
        &ForeignClaims {
            user_id: user.id,
            iat: now.timestamp(),
            exp: (now + Duration::days(1)).timestamp(),
            iss: "someone else entirely".to_string(),
        },
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .unwrap();

    let req = test::TestRequest::get()
        .uri("/api/tags")
        .cookie(Cookie::new("token", token))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::UNAUTHORIZED);
    let challenge = res
        .headers()
        .get("www-authenticate")
        .unwrap()
        .to_str()
        .unwrap();
    assert_eq!(challenge, "Bearer error=\"invalid_token\"");
    Ok(())
}

#[actix_web::test]
async fn uppercase_cookie_works_as_fallback() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let token =
        flowfirmer_backend::utils::auth::tokens::issue_token(user.id, TEST_JWT_SECRET, 7).unwrap();

    let req = test::TestRequest::get()
        .uri("/api/tags")
        .cookie(Cookie::new("TOKEN", token))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::OK);
    Ok(())
}

#[actix_web::test]
async fn lowercase_cookie_is_preferred_over_uppercase() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let user = factory::user().insert(&db).await?;

    let req = test::TestRequest::get()
        .uri("/api/tags")
        .cookie(login_cookie(user.id))
        .cookie(Cookie::new("TOKEN", "garbage"))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::OK);
    Ok(())
}

#[actix_web::test]
async fn valid_cookie_reaches_the_handler() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let user = factory::user().insert(&db).await?;

    let req = test::TestRequest::get()
        .uri("/api/tags")
        .cookie(login_cookie(user.id))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::OK);
    Ok(())
}
