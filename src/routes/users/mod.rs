mod login;
mod register;

use actix_web::web::{route, scope, ServiceConfig};

use super::utils::method_not_allowed;

pub fn auth_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/users")
            .service(register::register_user)
            .default_service(route().to(method_not_allowed)),
    )
    .service(
        scope("/login")
            .service(login::login_user)
            .default_service(route().to(method_not_allowed)),
    );
}
