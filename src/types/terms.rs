use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{TagSummary, TagVisible};
use crate::entities::term;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TermCreateRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub start: Option<serde_json::Value>,
    pub end: Option<serde_json::Value>,
    pub parent_id: Option<serde_json::Value>,
    pub tag_ids: Option<serde_json::Value>,
}

#[derive(Serialize, Deserialize, PartialEq, Debug)]
pub struct TermCreated {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub start: NaiveDate,
    pub end: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i32>,
    pub tags: Vec<TagSummary>,
}

/// A term as embedded in a todo create response.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct TermVisible {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub parent_id: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct SubTerm {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Serialize, Deserialize, PartialEq, Debug)]
pub struct TermWithRefs {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub tags: Vec<TagVisible>,
    pub sub_terms: Vec<SubTerm>,
}

impl From<term::Model> for TermVisible {
    fn from(item: term::Model) -> Self {
        TermVisible {
            id: item.id,
            name: item.name,
            description: item.description,
            start: item.start,
            end: item.end,
            parent_id: item.parent_id,
        }
    }
}

impl From<term::Model> for SubTerm {
    fn from(item: term::Model) -> Self {
        SubTerm {
            id: item.id,
            name: item.name,
            description: item.description,
            start: item.start,
            end: item.end,
        }
    }
}
