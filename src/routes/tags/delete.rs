use actix_web::{
    delete,
    web::{Data, Path, ReqData},
    HttpResponse,
};

use crate::{
    routes::utils::{response_401, response_404, response_500},
    services::tag_mutation::TagMutation,
    startup::AppState,
    types::CurrentUser,
};

#[tracing::instrument(name = "Deleting a tag", skip(data, user))]
#[delete("/{id}")]
pub async fn delete_tag(
    data: Data<AppState>,
    user: Option<ReqData<CurrentUser>>,
    path: Path<i32>,
) -> HttpResponse {
    let user = match user {
        Some(user) => user.into_inner(),
        None => return response_401(),
    };
    let tag_id = path.into_inner();
    match TagMutation::delete(&data.conn, tag_id, user.id).await {
        Ok(0) => response_404(&format!("Tag not found (id: {})", tag_id)),
        Ok(_) => HttpResponse::NoContent().finish(),
        Err(e) => response_500(e),
    }
}
