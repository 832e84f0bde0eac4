mod create;
mod list;

use actix_web::web::{route, scope, ServiceConfig};

use super::utils::method_not_allowed;

pub fn term_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/terms")
            .service(list::list_terms)
            .service(create::create_term)
            .default_service(route().to(method_not_allowed)),
    );
}
