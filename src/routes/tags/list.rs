use actix_web::{
    get,
    web::{Data, ReqData},
    HttpResponse,
};

use crate::{
    routes::utils::{response_401, response_500},
    services::tag_query::TagQuery,
    startup::AppState,
    types::CurrentUser,
};

#[tracing::instrument(name = "Listing tags", skip(data, user))]
#[get("")]
pub async fn list_tags(
    data: Data<AppState>,
    user: Option<ReqData<CurrentUser>>,
) -> HttpResponse {
    let user = match user {
        Some(user) => user.into_inner(),
        None => return response_401(),
    };
    match TagQuery::find_all_with_children(&data.conn, user.id).await {
        Ok(tags) => HttpResponse::Ok().json(tags),
        Err(e) => response_500(e),
    }
}
