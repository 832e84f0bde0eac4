pub mod document;
pub mod document_document_tag_map;
pub mod document_tag;
pub mod document_tag_map;
pub mod free_record_scheme;
pub mod tag;
pub mod term;
pub mod term_tag_map;
pub mod todo;
pub mod todo_tag_map;
pub mod user;
