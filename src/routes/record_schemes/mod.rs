mod create;
mod delete;
mod get;
mod update;

use actix_web::web::{route, scope, ServiceConfig};

use super::utils::method_not_allowed;

// Registered ahead of the /tags scope so the nested path is not swallowed
// by the tag routes' default handler.
pub fn record_scheme_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/tags/{tag_id}/record_schemes")
            .service(create::create_record_scheme)
            .service(get::get_record_scheme)
            .service(update::update_record_scheme)
            .service(delete::delete_record_scheme)
            .default_service(route().to(method_not_allowed)),
    );
}

pub(crate) fn normalize_graph_type(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => {
            let graph_type = s.to_lowercase();
            if graph_type == "sum" || graph_type == "flat" {
                Some(graph_type)
            } else {
                None
            }
        }
        _ => None,
    }
}
