pub mod document_mutation;
pub mod document_query;
pub mod document_tag_mutation;
pub mod document_tag_query;
pub mod record_scheme_mutation;
pub mod record_scheme_query;
pub mod reference_resolver;
pub mod tag_mutation;
pub mod tag_query;
pub mod term_mutation;
pub mod term_query;
pub mod todo_mutation;
pub mod user;
