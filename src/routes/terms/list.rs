use actix_web::{
    get,
    web::{Data, ReqData},
    HttpResponse,
};

use crate::{
    routes::utils::{response_401, response_500},
    services::term_query::TermQuery,
    startup::AppState,
    types::CurrentUser,
};

#[tracing::instrument(name = "Listing terms", skip(data, user))]
#[get("")]
pub async fn list_terms(
    data: Data<AppState>,
    user: Option<ReqData<CurrentUser>>,
) -> HttpResponse {
    let user = match user {
        Some(user) => user.into_inner(),
        None => return response_401(),
    };
    match TermQuery::find_all_with_refs(&data.conn, user.id).await {
        Ok(terms) => HttpResponse::Ok().json(terms),
        Err(e) => response_500(e),
    }
}
