use actix_web::{
    http::header,
    post,
    web::{Data, Json, ReqData},
    HttpResponse,
};

use crate::{
    routes::utils::{response_400, response_401, response_422, response_500},
    services::{
        reference_resolver::coerce_id,
        tag_mutation::{NewTag, TagMutation},
    },
    startup::AppState,
    types::{CurrentUser, TagCreateRequest, TagCreated},
    utils::validate::{truthy, THEME_COLOR_RE},
};

const DEFAULT_THEME_COLOR: &str = "ecf0f1";

#[tracing::instrument(name = "Creating a tag", skip(data, user))]
#[post("")]
pub async fn create_tag(
    data: Data<AppState>,
    user: Option<ReqData<CurrentUser>>,
    req: Json<TagCreateRequest>,
) -> HttpResponse {
    let user = match user {
        Some(user) => user.into_inner(),
        None => return response_401(),
    };
    let name = match &req.name {
        Some(name) => name.clone(),
        None => return response_400("Invalid request"),
    };
    let theme_color = match &req.theme_color {
        None | Some(serde_json::Value::Null) => DEFAULT_THEME_COLOR.to_string(),
        Some(serde_json::Value::String(color)) if THEME_COLOR_RE.is_match(color) => color.clone(),
        Some(_) => return response_422("Unprocessable entity (theme_color)"),
    };
    // The parent id is inserted verbatim, without an ownership check.
    let parent_id = match &req.parent_id {
        None | Some(serde_json::Value::Null) => None,
        Some(value) => match coerce_id(value) {
            Some(id) => Some(id),
            None => return response_422("Unprocessable entity (parent_id)"),
        },
    };
    let pinned = req.pinned.as_ref().map(truthy).unwrap_or(false);

    match TagMutation::create(
        &data.conn,
        NewTag {
            user_id: user.id,
            name,
            theme_color,
            parent_id,
            pinned,
        },
    )
    .await
    {
        Ok(tag) => HttpResponse::Created()
            .insert_header((header::LOCATION, format!("tags/{}", tag.id)))
            .json(TagCreated {
                id: tag.id,
                name: tag.name,
                theme_color: tag.theme_color,
                parent_id: tag.parent_id,
                user_id: tag.user_id,
                pinned: tag.pinned,
            }),
        Err(e) => response_500(e),
    }
}
