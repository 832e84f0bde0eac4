use std::{
    future::{ready, Ready},
    rc::Rc,
};

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header,
    web::Data,
    Error, HttpMessage, HttpResponse,
};
use futures::future::LocalBoxFuture;

use crate::{
    startup::AppState,
    types::{CurrentUser, ErrorResponse},
    utils::auth::tokens::{authenticate, AuthError},
};

pub struct AuthenticateUser;

impl<S: 'static, B> Transform<S, ServiceRequest> for AuthenticateUser
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthenticateUserMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthenticateUserMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct AuthenticateUserMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthenticateUserMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let svc = self.service.clone();
        Box::pin(async move {
            // The lowercase cookie wins when both are present.
            let token = req
                .cookie("token")
                .or_else(|| req.cookie("TOKEN"))
                .map(|cookie| cookie.value().to_string());
            let secret = req
                .app_data::<Data<AppState>>()
                .and_then(|data| data.settings.secret.jwt_secret.clone());

            match authenticate(token.as_deref(), secret.as_deref()) {
                Ok(claims) => {
                    req.extensions_mut().insert(CurrentUser {
                        id: claims.user_id,
                    });
                    let res = svc.call(req).await?;
                    Ok(res.map_into_left_body())
                }
                Err(e) => {
                    let res = challenge_response(e);
                    Ok(req.into_response(res).map_into_right_body())
                }
            }
        })
    }
}

fn challenge_response(error: AuthError) -> HttpResponse {
    match error {
        AuthError::TokenRequired => HttpResponse::Unauthorized()
            .insert_header((
                header::WWW_AUTHENTICATE,
                "Bearer error=\"token_required\"",
            ))
            .json(ErrorResponse {
                error: "Unauthorized".to_string(),
            }),
        AuthError::InvalidToken => HttpResponse::Unauthorized()
            .insert_header((
                header::WWW_AUTHENTICATE,
                "Bearer error=\"invalid_token\"",
            ))
            .json(ErrorResponse {
                error: "Unauthorized".to_string(),
            }),
        AuthError::MissingSecret => {
            tracing::event!(
                target: "backend",
                tracing::Level::ERROR,
                "JWT secret is not configured."
            );
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "JWT secret is not configured.".to_string(),
            })
        }
    }
}
