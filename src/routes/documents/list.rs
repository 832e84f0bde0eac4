use actix_web::{
    get,
    web::{Data, ReqData},
    HttpResponse,
};

use crate::{
    routes::utils::{response_401, response_500},
    services::document_query::DocumentQuery,
    startup::AppState,
    types::CurrentUser,
};

#[tracing::instrument(name = "Listing documents", skip(data, user))]
#[get("")]
pub async fn list_documents(
    data: Data<AppState>,
    user: Option<ReqData<CurrentUser>>,
) -> HttpResponse {
    let user = match user {
        Some(user) => user.into_inner(),
        None => return response_401(),
    };
    match DocumentQuery::find_all_with_refs(&data.conn, user.id).await {
        Ok(documents) => HttpResponse::Ok().json(documents),
        Err(e) => response_500(e),
    }
}
