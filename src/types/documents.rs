use serde::{Deserialize, Serialize};

use super::{DocumentTagVisible, TagSummary, TagVisible};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DocumentCreateRequest {
    pub title: Option<String>,
    pub url: Option<String>,
    pub tag_ids: Option<serde_json::Value>,
    pub document_tag_ids: Option<serde_json::Value>,
}

#[derive(Serialize, Deserialize, PartialEq, Debug)]
pub struct DocumentCreated {
    pub id: i32,
    pub title: String,
    pub url: String,
    pub tags: Vec<TagSummary>,
    pub document_tags: Vec<DocumentTagVisible>,
}

#[derive(Serialize, Deserialize, PartialEq, Debug)]
pub struct DocumentWithRefs {
    pub id: i32,
    pub title: String,
    pub url: String,
    pub tags: Vec<TagVisible>,
    pub document_tags: Vec<DocumentTagVisible>,
}
