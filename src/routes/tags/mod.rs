mod create;
mod delete;
mod get;
mod list;
mod update;

use actix_web::web::{route, scope, ServiceConfig};

use super::utils::method_not_allowed;

pub fn tag_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/tags")
            .service(list::list_tags)
            .service(create::create_tag)
            .service(get::get_tag)
            .service(update::update_tag)
            .service(delete::delete_tag)
            .default_service(route().to(method_not_allowed)),
    );
}
