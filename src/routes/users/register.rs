use actix_web::{
    cookie::Cookie,
    http::header,
    post,
    web::{Data, Json},
    HttpResponse,
};

use crate::{
    routes::utils::{response_400, response_422, response_500},
    services::user::{Mutation as UserMutation, NewUser, Query as UserQuery},
    startup::AppState,
    types::{ErrorResponse, UserRegisterRequest, UserRegistered},
    utils::auth::{password, tokens::issue_token},
};

#[tracing::instrument(name = "Registering a user", skip(data, req))]
#[post("")]
pub async fn register_user(
    data: Data<AppState>,
    req: Json<UserRegisterRequest>,
) -> HttpResponse {
    let (name, email, plaintext) = match (&req.name, &req.email, &req.password) {
        (Some(name), Some(email), Some(password)) => {
            (name.clone(), email.clone(), password.clone())
        }
        _ => return response_400("Invalid request"),
    };

    match UserQuery::find_by_email(&data.conn, &email).await {
        Ok(Some(_)) => return response_422("Email address already registered."),
        Ok(None) => (),
        Err(e) => return response_500(e),
    }

    let hashed_password = password::hash(plaintext.as_bytes()).await;
    let user = match UserMutation::create_user(
        &data.conn,
        NewUser {
            name,
            email,
            password: hashed_password,
        },
    )
    .await
    {
        Ok(user) => user,
        Err(e) => return response_500(e),
    };

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

    tracing::event!(target: "backend", tracing::Level::INFO, "New user registered.");
    HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/{}", user.id)))
        .cookie(
            Cookie::build("TOKEN", token)
                .path("/")
                .http_only(true)
                .finish(),
        )
        .json(UserRegistered {
            message: "Success".to_string(),
            user_name: user.name,
        })
}
