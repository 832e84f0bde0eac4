use actix_web::{
    get,
    web::{Data, Path, ReqData},
    HttpResponse,
};

use crate::{
    routes::utils::{response_401, response_404, response_500},
    services::{record_scheme_query::RecordSchemeQuery, tag_query::TagQuery},
    startup::AppState,
    types::CurrentUser,
};

#[tracing::instrument(name = "Reading a record scheme", skip(data, user))]
#[get("/{id}")]
pub async fn get_record_scheme(
    data: Data<AppState>,
    user: Option<ReqData<CurrentUser>>,
    path: Path<(i32, i32)>,
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
    match RecordSchemeQuery::find_by_id_and_tag_id(&data.conn, scheme_id, tag_id).await {
        Ok(Some(scheme)) => HttpResponse::Ok().json(scheme),
        Ok(None) => response_404("RecordScheme not found"),
        Err(e) => response_500(e),
    }
}
