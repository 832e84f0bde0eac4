use actix_web::{
    get,
    web::{Data, ReqData},
    HttpResponse,
};

use crate::{
    routes::utils::{response_401, response_500},
    services::document_tag_query::DocumentTagQuery,
    startup::AppState,
    types::{CurrentUser, DocumentTagVisible},
};

#[tracing::instrument(name = "Listing document tags", skip(data, user))]
#[get("")]
pub async fn list_document_tags(
    data: Data<AppState>,
    user: Option<ReqData<CurrentUser>>,
) -> HttpResponse {
    let user = match user {
        Some(user) => user.into_inner(),
        None => return response_401(),
    };
    match DocumentTagQuery::find_all_by_user_id(&data.conn, user.id).await {
        Ok(document_tags) => HttpResponse::Ok().json(
            document_tags
                .into_iter()
                .map(DocumentTagVisible::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => response_500(e),
    }
}
