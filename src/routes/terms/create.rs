use actix_web::{
    http::header,
    post,
    web::{Data, Json, ReqData},
    HttpResponse,
};

use crate::{
    routes::utils::{response_400, response_401, response_404, response_422, response_500},
    services::{
        reference_resolver::{coerce_id, coerce_ids, ReferenceResolver, ResolveError},
        term_mutation::{NewTerm, TermMutation},
    },
    startup::AppState,
    types::{CurrentUser, TagSummary, TermCreateRequest, TermCreated},
    utils::validate::parse_flexible_date,
};

#[tracing::instrument(name = "Creating a term", skip(data, user))]
#[post("")]
pub async fn create_term(
    data: Data<AppState>,
    user: Option<ReqData<CurrentUser>>,
    req: Json<TermCreateRequest>,
) -> HttpResponse {
    let user = match user {
        Some(user) => user.into_inner(),
        None => return response_401(),
    };
    let name = match &req.name {
        Some(name) => name.clone(),
        None => return response_400("Invalid request"),
    };
    let start = match &req.start {
        Some(serde_json::Value::String(raw)) => match parse_flexible_date(raw) {
            Some(date) => date,
            None => return response_422("Unprocessable entity (start)"),
        },
        Some(_) => return response_422("Unprocessable entity (start)"),
        None => return response_400("Invalid request"),
    };
    let end = match &req.end {
        Some(serde_json::Value::String(raw)) => match parse_flexible_date(raw) {
            Some(date) => date,
            None => return response_422("Unprocessable entity (end)"),
        },
        Some(_) => return response_422("Unprocessable entity (end)"),
        None => return response_400("Invalid request"),
    };
    // Like tags, the parent id goes in without an ownership check.
    let parent_id = match &req.parent_id {
        None | Some(serde_json::Value::Null) => None,
        Some(value) => match coerce_id(value) {
            Some(id) => Some(id),
            None => return response_422("Unprocessable entity (parent_id)"),
        },
    };
    let tag_ids = match &req.tag_ids {
        None | Some(serde_json::Value::Null) => vec![],
        Some(serde_json::Value::Array(values)) => coerce_ids(values),
        Some(_) => return response_422("Unprocessable entity (tag_ids)"),
    };

    let tags = match ReferenceResolver::resolve_tags(&data.conn, user.id, &tag_ids).await {
        Ok(tags) => tags,
        Err(ResolveError::NotFound(missing)) => {
            let ids: Vec<String> = missing.iter().map(i32::to_string).collect();
            return response_404(&format!("Tag not found (id: {})", ids.join(", ")));
        }
        Err(ResolveError::Db(e)) => return response_500(e),
    };

    let term = match TermMutation::create(
        &data.conn,
        NewTerm {
            user_id: user.id,
            name,
            description: req.description.clone(),
            start,
            end,
            parent_id,
        },
    )
    .await
    {
        Ok(term) => term,
        Err(e) => return response_500(e),
    };

    let awaited = data.settings.application.await_association_writes;
    if let Err(e) = TermMutation::attach_tags(data.conn.clone(), term.id, tag_ids, awaited).await {
        return response_500(e);
    }

    HttpResponse::Created()
        .insert_header((header::LOCATION, format!("terms/{}", term.id)))
        .json(TermCreated {
            id: term.id,
            user_id: term.user_id,
            name: term.name,
            description: term.description,
            start: term.start,
            end: term.end,
            parent_id: term.parent_id,
            tags: tags.into_iter().map(TagSummary::from).collect(),
        })
}
