mod create;

use actix_web::web::{route, scope, ServiceConfig};

use super::utils::method_not_allowed;

pub fn todo_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/todos")
            .service(create::create_todo)
            .default_service(route().to(method_not_allowed)),
    );
}
