use serde::{Deserialize, Serialize};

use crate::entities::tag;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RecordSchemeCreateRequest {
    pub name: Option<String>,
    pub unit_name: Option<serde_json::Value>,
    pub default_graph_type: Option<serde_json::Value>,
}

#[derive(Serialize, Deserialize, PartialEq, Debug)]
pub struct RecordSchemeCreated {
    pub id: i32,
    pub name: String,
    pub unit_name: Option<String>,
    pub default_graph_type: String,
    pub tag: tag::Model,
}
