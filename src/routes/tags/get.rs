use actix_web::{
    get,
    web::{Data, Path, ReqData},
    HttpResponse,
};

use crate::{
    routes::utils::{response_401, response_404, response_500},
    services::tag_query::TagQuery,
    startup::AppState,
    types::{CurrentUser, TagDetail, TagSummary},
};

#[tracing::instrument(name = "Reading a tag", skip(data, user))]
#[get("/{id}")]
pub async fn get_tag(
    data: Data<AppState>,
    user: Option<ReqData<CurrentUser>>,
    path: Path<i32>,
) -> HttpResponse {
    let user = match user {
        Some(user) => user.into_inner(),
        None => return response_401(),
    };
    let tag_id = path.into_inner();
    let tag = match TagQuery::find_by_id_and_user_id(&data.conn, tag_id, user.id).await {
        Ok(Some(tag)) => tag,
        Ok(None) => return response_404(&format!("Tag not found (id: {})", tag_id)),
        Err(e) => return response_500(e),
    };
    let children = match TagQuery::find_children(&data.conn, tag.id, user.id).await {
        Ok(children) => children,
        Err(e) => return response_500(e),
    };
    let sub_tags = if children.is_empty() {
        None
    } else {
        Some(children.into_iter().map(TagSummary::from).collect())
    };
    HttpResponse::Ok().json(TagDetail {
        id: tag.id,
        name: tag.name,
        parent_id: tag.parent_id,
        theme_color: tag.theme_color,
        pinned: tag.pinned,
        order: tag.order,
        hidden: tag.hidden,
        sub_tags,
    })
}
