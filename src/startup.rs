use actix_web::{
    dev::Server,
    error::{InternalError, JsonPayloadError},
    web::{self, Data},
    App, HttpResponse, HttpServer,
};
use sea_orm::{Database, DatabaseConnection};
use std::env;

use crate::{
    routes,
    settings::Settings,
    types::ErrorResponse,
    utils::auth::auth_middleware::AuthenticateUser,
};

pub struct Application {
    port: u16,
    server: Server,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub conn: DatabaseConnection,
    pub settings: Settings,
}

impl Application {
    pub async fn build(settings: Settings) -> Result<Self, std::io::Error> {
        let db = get_database_connection().await;
        let address = format!(
            "{}:{}",
            settings.application.host, settings.application.port
        );

        let listener = std::net::TcpListener::bind(&address)?;
        let port = listener.local_addr().unwrap().port();
        let server = run(listener, db, settings).await?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub async fn get_database_connection() -> DatabaseConnection {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    Database::connect(&database_url)
        .await
        .expect("Failed to open DB connection.")
}

/// Requests without an `application/json` Content-Type get a 415; payloads
/// that fail to parse get a 400.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = match &err {
            JsonPayloadError::ContentType => {
                HttpResponse::UnsupportedMediaType().json(ErrorResponse {
                    error: "Unsupported media type".to_string(),
                })
            }
            _ => HttpResponse::BadRequest().json(ErrorResponse {
                error: "Invalid request".to_string(),
            }),
        };
        InternalError::from_response(err, response).into()
    })
}

/// A path segment that fails to parse as an id does not match any record.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::NotFound().json(ErrorResponse {
            error: "Page not found".to_string(),
        });
        InternalError::from_response(err, response).into()
    })
}

async fn run(
    listener: std::net::TcpListener,
    db: DatabaseConnection,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let state = AppState {
        conn: db,
        settings,
    };

    let server = HttpServer::new(move || {
        App::new()
            .app_data(json_config())
            .app_data(path_config())
            .app_data(Data::new(state.clone()))
            .service(
                web::scope("/api")
                    .service(routes::health_check)
                    .configure(routes::auth_routes)
                    .service(
                        web::scope("")
                            .wrap(AuthenticateUser)
                            // Record scheme routes live under /tags/{id}/... and must be
                            // registered ahead of the /tags scope.
                            .configure(routes::record_scheme_routes)
                            .configure(routes::tag_routes)
                            .configure(routes::document_tag_routes)
                            .configure(routes::document_routes)
                            .configure(routes::todo_routes)
                            .configure(routes::term_routes),
                    ),
            )
    })
    .listen(listener)?
    .run();

    Ok(server)
}
