use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{TagSummary, TermVisible};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TodoCreateRequest {
    pub name: Option<String>,
    pub description: Option<serde_json::Value>,
    pub date: Option<serde_json::Value>,
    pub time: Option<serde_json::Value>,
    pub execution_time: Option<serde_json::Value>,
    pub term_id: Option<serde_json::Value>,
    pub tag_ids: Option<serde_json::Value>,
}

#[derive(Serialize, Deserialize, PartialEq, Debug)]
pub struct TodoCreated {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub execution_time: Option<i32>,
    pub tags: Vec<TagSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<TermVisible>,
}
