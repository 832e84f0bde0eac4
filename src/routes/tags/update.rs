use actix_web::{
    patch,
    web::{Data, Json, Path, ReqData},
    HttpResponse,
};

use crate::{
    routes::utils::{response_400, response_401, response_404, response_422, response_500},
    services::{
        reference_resolver::coerce_id,
        tag_mutation::{TagChangeset, TagMutation},
    },
    startup::AppState,
    types::{CurrentUser, SuccessResponse},
    utils::validate::{truthy, THEME_COLOR_RE},
};

const ALLOWED_KEYS: [&str; 6] = ["name", "theme_color", "parent_id", "pinned", "order", "hidden"];

#[tracing::instrument(name = "Updating a tag", skip(data, user))]
#[patch("/{id}")]
pub async fn update_tag(
    data: Data<AppState>,
    user: Option<ReqData<CurrentUser>>,
    path: Path<i32>,
    req: Json<serde_json::Map<String, serde_json::Value>>,
) -> HttpResponse {
    let user = match user {
        Some(user) => user.into_inner(),
        None => return response_401(),
    };
    let tag_id = path.into_inner();

    let disallowed: Vec<&str> = req
        .keys()
        .map(String::as_str)
        .filter(|key| !ALLOWED_KEYS.contains(key))
        .collect();
    if !disallowed.is_empty() {
        return response_422(&format!("Unprocessable entity ({})", disallowed.join(", ")));
    }
    if req.is_empty() {
        return response_400("Invalid request");
    }

    let mut changes = TagChangeset::default();
    for (key, value) in req.iter() {
        match key.as_str() {
            "name" => match value {
                serde_json::Value::String(name) => changes.name = Some(name.clone()),
                _ => return response_422("Unprocessable entity (name)"),
            },
            "theme_color" => match value {
                serde_json::Value::String(color) if THEME_COLOR_RE.is_match(color) => {
                    changes.theme_color = Some(color.clone())
                }
                _ => return response_422("Unprocessable entity (theme_color)"),
            },
            "parent_id" => match value {
                serde_json::Value::Null => changes.parent_id = Some(None),
                value => match coerce_id(value) {
                    Some(id) => changes.parent_id = Some(Some(id)),
                    None => return response_422("Unprocessable entity (parent_id)"),
                },
            },
            "pinned" => changes.pinned = Some(truthy(value)),
            "order" => match coerce_id(value) {
                Some(order) => changes.order = Some(order),
                None => return response_422("Unprocessable entity (order)"),
            },
            "hidden" => changes.hidden = Some(truthy(value)),
            _ => unreachable!(),
        }
    }

    match TagMutation::update(&data.conn, tag_id, user.id, changes).await {
        Ok(0) => response_404(&format!("Tag not found (id: {})", tag_id)),
        Ok(_) => HttpResponse::Ok().json(SuccessResponse {
            message: "Success".to_string(),
        }),
        Err(e) => response_500(e),
    }
}
