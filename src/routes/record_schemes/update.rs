use actix_web::{
    patch,
    web::{Data, Json, Path, ReqData},
    HttpResponse,
};

use crate::{
    routes::utils::{
        response_400, response_401, response_404, response_415, response_422, response_500,
    },
    services::{
        record_scheme_mutation::{RecordSchemeChangeset, RecordSchemeMutation},
        tag_query::TagQuery,
    },
    startup::AppState,
    types::{CurrentUser, SuccessResponse},
};

use super::normalize_graph_type;

const ALLOWED_KEYS: [&str; 3] = ["name", "unit_name", "default_graph_type"];

#[tracing::instrument(name = "Updating a record scheme", skip(data, user))]
#[patch("/{id}")]
pub async fn update_record_scheme(
    data: Data<AppState>,
    user: Option<ReqData<CurrentUser>>,
    path: Path<(i32, i32)>,
    req: Json<serde_json::Map<String, serde_json::Value>>,
) -> HttpResponse {
    let user = match user {
        Some(user) => user.into_inner(),
        None => return response_401(),
    };
    let (tag_id, scheme_id) = path.into_inner();
    match TagQuery::find_by_id_and_user_id(&data.conn, tag_id, user.id).await {
        Ok(Some(_)) => (),
        Ok(None) => return response_404(&format!("Tag not found (id: {})", tag_id)),
        Err(e) => return response_500(e),
    }

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

    let mut changes = RecordSchemeChangeset::default();
    for (key, value) in req.iter() {
        match key.as_str() {
            "name" => match value {
                serde_json::Value::String(name) => changes.name = Some(name.clone()),
                _ => return response_422("Unprocessable entity (name)"),
            },
            "unit_name" => match value {
                serde_json::Value::String(unit) => changes.unit_name = Some(unit.clone()),
                _ => return response_422("Unprocessable entity (unit_name)"),
            },
            "default_graph_type" => match normalize_graph_type(value) {
                Some(graph_type) => changes.default_graph_type = Some(graph_type),
                None => return response_415("Unprocessable entity (default_graph_type)"),
            },
            _ => unreachable!(),
        }
    }

    match RecordSchemeMutation::update(&data.conn, scheme_id, tag_id, changes).await {
        Ok(0) => response_404("RecordScheme not found"),
        Ok(_) => HttpResponse::Ok().json(SuccessResponse {
            message: "Success".to_string(),
        }),
        Err(e) => response_500(e),
    }
}
