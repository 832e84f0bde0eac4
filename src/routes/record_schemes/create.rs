use actix_web::{
    http::header,
    post,
    web::{Data, Json, Path, ReqData},
    HttpResponse,
};

use crate::{
    routes::utils::{response_400, response_401, response_404, response_415, response_500},
    services::{
        record_scheme_mutation::{NewRecordScheme, RecordSchemeMutation},
        tag_query::TagQuery,
    },
    startup::AppState,
    types::{CurrentUser, RecordSchemeCreateRequest, RecordSchemeCreated},
};

use super::normalize_graph_type;

#[tracing::instrument(name = "Creating a record scheme", skip(data, user))]
#[post("")]
pub async fn create_record_scheme(
    data: Data<AppState>,
    user: Option<ReqData<CurrentUser>>,
    path: Path<i32>,
    req: Json<RecordSchemeCreateRequest>,
) -> HttpResponse {
    let user = match user {
        Some(user) => user.into_inner(),
        None => return response_401(),
    };
    let tag_id = path.into_inner();
    // Ownership gate first: schemes hang off the caller's own tag.
    let tag = match TagQuery::find_by_id_and_user_id(&data.conn, tag_id, user.id).await {
        Ok(Some(tag)) => tag,
        Ok(None) => return response_404(&format!("Tag not found (id: {})", tag_id)),
        Err(e) => return response_500(e),
    };
    let name = match &req.name {
        Some(name) => name.clone(),
        None => return response_400("Invalid request"),
    };
    let unit_name = match &req.unit_name {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(unit)) => Some(unit.clone()),
        Some(_) => return response_415("Unprocessable entity (unit_name)"),
    };
    let default_graph_type = match &req.default_graph_type {
        None | Some(serde_json::Value::Null) => None,
        Some(value) => match normalize_graph_type(value) {
            Some(graph_type) => Some(graph_type),
            None => return response_415("Unprocessable entity (default_graph_type)"),
        },
    };

    match RecordSchemeMutation::create(
        &data.conn,
        NewRecordScheme {
            tag_id: tag.id,
            name,
            unit_name,
            default_graph_type,
        },
    )
    .await
    {
        Ok(scheme) => HttpResponse::Created()
            .insert_header((
                header::LOCATION,
                format!("tags/{}/record_schemes/{}", tag.id, scheme.id),
            ))
            .json(RecordSchemeCreated {
                id: scheme.id,
                name: scheme.name,
                unit_name: scheme.unit_name,
                default_graph_type: scheme.default_graph_type,
                tag,
            }),
        Err(e) => response_500(e),
    }
}
