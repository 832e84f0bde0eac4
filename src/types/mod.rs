mod document_tags;
mod documents;
mod general;
mod record_schemes;
mod tags;
mod terms;
mod todos;
mod users;

pub use document_tags::*;
pub use documents::*;
pub use general::{ErrorResponse, SuccessResponse, INTERNAL_SERVER_ERROR_MESSAGE};
pub use record_schemes::*;
pub use tags::*;
pub use terms::*;
pub use todos::*;
pub use users::*;
