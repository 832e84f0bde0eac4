mod document_tags;
mod documents;
mod health;
mod record_schemes;
mod tags;
mod terms;
mod todos;
mod users;
mod utils;

pub use document_tags::document_tag_routes;
pub use documents::document_routes;
pub use health::health_check;
pub use record_schemes::record_scheme_routes;
pub use tags::tag_routes;
pub use terms::term_routes;
pub use todos::todo_routes;
pub use users::auth_routes;
