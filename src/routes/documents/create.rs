use actix_web::{
    http::header,
    post,
    web::{Data, Json, ReqData},
    HttpResponse,
};

use crate::{
    routes::utils::{response_400, response_401, response_404, response_415, response_500},
    services::{
        document_mutation::{DocumentMutation, NewDocument},
        reference_resolver::{coerce_ids, ReferenceResolver, ResolveError},
    },
    startup::AppState,
    types::{CurrentUser, DocumentCreateRequest, DocumentCreated, DocumentTagVisible, TagSummary},
};

fn ids_message(entity: &str, missing: &[i32]) -> String {
    let ids: Vec<String> = missing.iter().map(i32::to_string).collect();
    format!("{} not found (id: {})", entity, ids.join(", "))
}

#[tracing::instrument(name = "Creating a document", skip(data, user))]
#[post("")]
pub async fn create_document(
    data: Data<AppState>,
    user: Option<ReqData<CurrentUser>>,
    req: Json<DocumentCreateRequest>,
) -> HttpResponse {
    let user = match user {
        Some(user) => user.into_inner(),
        None => return response_401(),
    };
    let (title, url) = match (&req.title, &req.url) {
        (Some(title), Some(url)) => (title.clone(), url.clone()),
        _ => return response_400("Invalid request"),
    };
    let tag_ids = match &req.tag_ids {
        None | Some(serde_json::Value::Null) => vec![],
        Some(serde_json::Value::Array(values)) => coerce_ids(values),
        Some(_) => return response_415("Unprocessable entity (tag_ids)"),
    };
    let document_tag_ids = match &req.document_tag_ids {
        None | Some(serde_json::Value::Null) => vec![],
        Some(serde_json::Value::Array(values)) => coerce_ids(values),
        Some(_) => return response_415("Unprocessable entity (document_tag_ids)"),
    };

    // Both reference sets resolve before the document row is inserted.
    let tags = match ReferenceResolver::resolve_tags(&data.conn, user.id, &tag_ids).await {
        Ok(tags) => tags,
        Err(ResolveError::NotFound(missing)) => {
            return response_404(&ids_message("Tag", &missing))
        }
        Err(ResolveError::Db(e)) => return response_500(e),
    };
    let document_tags =
        match ReferenceResolver::resolve_document_tags(&data.conn, user.id, &document_tag_ids)
            .await
        {
            Ok(document_tags) => document_tags,
            Err(ResolveError::NotFound(missing)) => {
                return response_404(&ids_message("DocumentTag", &missing))
            }
            Err(ResolveError::Db(e)) => return response_500(e),
        };

    let document = match DocumentMutation::create(
        &data.conn,
        NewDocument {
            user_id: user.id,
            title,
            url,
        },
    )
    .await
    {
        Ok(document) => document,
        Err(e) => return response_500(e),
    };

    let awaited = data.settings.application.await_association_writes;
    if let Err(e) =
        DocumentMutation::attach_tags(data.conn.clone(), document.id, tag_ids, awaited).await
    {
        return response_500(e);
    }
    if let Err(e) = DocumentMutation::attach_document_tags(
        data.conn.clone(),
        document.id,
        document_tag_ids,
        awaited,
    )
    .await
    {
        return response_500(e);
    }

    HttpResponse::Created()
        .insert_header((header::LOCATION, format!("documents/{}", document.id)))
        .json(DocumentCreated {
            id: document.id,
            title: document.title,
            url: document.url,
            tags: tags.into_iter().map(TagSummary::from).collect(),
            document_tags: document_tags
                .into_iter()
                .map(DocumentTagVisible::from)
                .collect(),
        })
}
