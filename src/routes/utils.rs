use std::fmt::Debug;

use actix_web::HttpResponse;

use crate::types::{ErrorResponse, INTERNAL_SERVER_ERROR_MESSAGE};

/// Bad Request
pub fn response_400(error_message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error_message.to_string(),
    })
}

/// Unauthorized
pub fn response_401() -> HttpResponse {
    HttpResponse::Unauthorized().json(ErrorResponse {
        error: "Unauthorized".to_string(),
    })
}

/// Not Found
pub fn response_404(error_message: &str) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        error: error_message.to_string(),
    })
}

/// Unprocessable Entity
pub fn response_422(error_message: &str) -> HttpResponse {
    HttpResponse::UnprocessableEntity().json(ErrorResponse {
        error: error_message.to_string(),
    })
}

/// Unsupported Media Type, used where field validation answers with it
pub fn response_415(error_message: &str) -> HttpResponse {
    HttpResponse::UnsupportedMediaType().json(ErrorResponse {
        error: error_message.to_string(),
    })
}

/// Internal Server Error: with logging
pub fn response_500<T: Debug>(e: T) -> HttpResponse {
    tracing::event!(target: "backend", tracing::Level::ERROR, "{:#?}", e);
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: INTERNAL_SERVER_ERROR_MESSAGE.to_string(),
    })
}

/// Fallback for a path that exists with a different method.
pub async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed().json(ErrorResponse {
        error: "Method not allowed".to_string(),
    })
}
