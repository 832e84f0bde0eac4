mod create;
mod list;

use actix_web::web::{route, scope, ServiceConfig};

use super::utils::method_not_allowed;

pub fn document_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/documents")
            .service(list::list_documents)
            .service(create::create_document)
            .default_service(route().to(method_not_allowed)),
    );
}
