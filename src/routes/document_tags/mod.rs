mod create;
mod list;

use actix_web::web::{route, scope, ServiceConfig};

use super::utils::method_not_allowed;

pub fn document_tag_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/document_tags")
            .service(list::list_document_tags)
            .service(create::create_document_tag)
            .default_service(route().to(method_not_allowed)),
    );
}
