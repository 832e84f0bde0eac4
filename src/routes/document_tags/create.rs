use actix_web::{
    http::header,
    post,
    web::{Data, Json, ReqData},
    HttpResponse,
};

use crate::{
    routes::utils::{response_400, response_401, response_500},
    services::document_tag_mutation::DocumentTagMutation,
    startup::AppState,
    types::{CurrentUser, DocumentTagCreateRequest, DocumentTagCreated},
};

#[tracing::instrument(name = "Creating a document tag", skip(data, user))]
#[post("")]
pub async fn create_document_tag(
    data: Data<AppState>,
    user: Option<ReqData<CurrentUser>>,
    req: Json<DocumentTagCreateRequest>,
) -> HttpResponse {
    let user = match user {
        Some(user) => user.into_inner(),
        None => return response_401(),
    };
    let name = match &req.name {
        Some(name) => name.clone(),
        None => return response_400("Invalid request"),
    };
    match DocumentTagMutation::create(&data.conn, user.id, name).await {
        Ok(document_tag) => HttpResponse::Created()
            .insert_header((
                header::LOCATION,
                format!("document_tags/{}", document_tag.id),
            ))
            .json(DocumentTagCreated {
                id: document_tag.id,
                name: document_tag.name,
                user_id: document_tag.user_id,
            }),
        Err(e) => response_500(e),
    }
}
