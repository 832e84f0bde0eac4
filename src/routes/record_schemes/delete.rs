use actix_web::{
    delete,
    web::{Data, Path, ReqData},
    HttpResponse,
};

use crate::{
    routes::utils::{response_401, response_404, response_500},
    services::{record_scheme_mutation::RecordSchemeMutation, tag_query::TagQuery},
    startup::AppState,
    types::CurrentUser,
};

#[tracing::instrument(name = "Deleting a record scheme", skip(data, user))]
#[delete("/{id}")]
pub async fn delete_record_scheme(
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
    match RecordSchemeMutation::delete(&data.conn, scheme_id, tag_id).await {
        Ok(0) => response_404("RecordScheme not found"),
        Ok(_) => HttpResponse::NoContent().finish(),
        Err(e) => response_500(e),
    }
}
