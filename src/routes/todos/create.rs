use actix_web::{
    http::header,
    post,
    web::{Data, Json, ReqData},
    HttpResponse,
};

use crate::{
    routes::utils::{response_400, response_401, response_404, response_415, response_500},
    services::{
        reference_resolver::{coerce_id, coerce_ids, ReferenceResolver, ResolveError},
        todo_mutation::{NewTodo, TodoMutation},
    },
    startup::AppState,
    types::{CurrentUser, TagSummary, TodoCreateRequest, TodoCreated},
    utils::validate::{parse_flexible_date, TIME_RE},
};

#[tracing::instrument(name = "Creating a todo", skip(data, user))]
#[post("")]
pub async fn create_todo(
    data: Data<AppState>,
    user: Option<ReqData<CurrentUser>>,
    req: Json<TodoCreateRequest>,
) -> HttpResponse {
    let user = match user {
        Some(user) => user.into_inner(),
        None => return response_401(),
    };
    let name = match &req.name {
        Some(name) => name.clone(),
        None => return response_400("Invalid request"),
    };
    let description = match &req.description {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(text)) => Some(text.clone()),
        Some(value) => Some(value.to_string()),
    };
    let date = match &req.date {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(raw)) => match parse_flexible_date(raw) {
            Some(date) => Some(date),
            None => return response_415("Unprocessable entity (date)"),
        },
        Some(_) => return response_415("Unprocessable entity (date)"),
    };
    let time = match &req.time {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(raw)) if TIME_RE.is_match(raw) => Some(raw.clone()),
        Some(_) => return response_415("Unprocessable entity (time)"),
    };
    let execution_time = match &req.execution_time {
        None | Some(serde_json::Value::Null) => None,
        Some(value) => match coerce_id(value) {
            Some(minutes) => Some(minutes),
            None => return response_415("Unprocessable entity (execution_time)"),
        },
    };
    let term_id = match &req.term_id {
        None | Some(serde_json::Value::Null) => None,
        Some(value) => match coerce_id(value) {
            Some(id) => Some(id),
            None => return response_415("Unprocessable entity (term_id)"),
        },
    };
    let tag_ids = match &req.tag_ids {
        None | Some(serde_json::Value::Null) => vec![],
        Some(serde_json::Value::Array(values)) => coerce_ids(values),
        Some(_) => return response_415("Unprocessable entity (tag_ids)"),
    };

    let term = match term_id {
        Some(term_id) => match ReferenceResolver::resolve_term(&data.conn, user.id, term_id).await
        {
            Ok(term) => Some(term),
            Err(ResolveError::NotFound(_)) => {
                return response_404(&format!("Term not found (id: {})", term_id))
            }
            Err(ResolveError::Db(e)) => return response_500(e),
        },
        None => None,
    };
    let tags = match ReferenceResolver::resolve_tags(&data.conn, user.id, &tag_ids).await {
        Ok(tags) => tags,
        Err(ResolveError::NotFound(missing)) => {
            let ids: Vec<String> = missing.iter().map(i32::to_string).collect();
            return response_404(&format!("Tag not found (id: {})", ids.join(", ")));
        }
        Err(ResolveError::Db(e)) => return response_500(e),
    };

    let todo = match TodoMutation::create(
        &data.conn,
        NewTodo {
            user_id: user.id,
            name,
            description,
            date,
            time,
            execution_time,
            term_id,
        },
    )
    .await
    {
        Ok(todo) => todo,
        Err(e) => return response_500(e),
    };

    let awaited = data.settings.application.await_association_writes;
    if let Err(e) = TodoMutation::attach_tags(data.conn.clone(), todo.id, tag_ids, awaited).await {
        return response_500(e);
    }

    HttpResponse::Created()
        .insert_header((header::LOCATION, format!("todos/{}", todo.id)))
        .json(TodoCreated {
            id: todo.id,
            name: todo.name,
            description: todo.description,
            date: todo.date,
            time: todo.time,
            execution_time: todo.execution_time,
            tags: tags.into_iter().map(TagSummary::from).collect(),
            term: term.map(Into::into),
        })
}
