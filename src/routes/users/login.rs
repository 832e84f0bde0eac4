use actix_web::{
    cookie::Cookie,
    post,
    rt::task,
    web::{Data, Json},
    HttpResponse,
};

use crate::{
    routes::utils::{response_400, response_401, response_500},
    services::user::Query as UserQuery,
    startup::AppState,
    types::{ErrorResponse, SuccessResponse, UserLoginRequest},
    utils::auth::{password::verify_password, tokens::issue_token},
};

#[tracing::instrument(name = "Logging a user in", skip(data, req))]
#[post("")]
pub async fn login_user(data: Data<AppState>, req: Json<UserLoginRequest>) -> HttpResponse {
    let (email, plaintext) = match (&req.email, &req.password) {
        (Some(email), Some(password)) => (email.clone(), password.clone()),
        _ => return response_400("Invalid request"),
    };

    let user = match UserQuery::find_by_email(&data.conn, &email).await {
        Ok(Some(user)) => user,
        Ok(None) => return response_401(),
        Err(e) => return response_500(e),
    };

    let digest = user.password.clone();
    let verified = task::spawn_blocking(move || verify_password(&digest, plaintext.as_bytes()))
        .await
        .expect("Unable to unwrap JoinError.");
    if verified.is_err() {
        return response_401();
    }

    let secret = match &data.settings.secret.jwt_secret {
        Some(secret) => secret.clone(),
        None => {
            tracing::event!(
                target: "backend",
                tracing::Level::ERROR,
                "JWT secret is not configured."
            );
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "JWT secret is not configured.".to_string(),
            });
        }
    };
    let token = match issue_token(user.id, &secret, data.settings.secret.token_expiration_days) {
        Ok(token) => token,
        Err(e) => return response_500(e),
    };

    tracing::event!(target: "backend", tracing::Level::INFO, "User logged in successfully.");
    HttpResponse::Ok()
        .cookie(
            Cookie::build("TOKEN", token)
                .path("/")
                .http_only(true)
                .finish(),
        )
        .json(SuccessResponse {
            message: "Success".to_string(),
        })
}
