use serde::{Deserialize, Serialize};

use crate::entities::document_tag;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DocumentTagCreateRequest {
    pub name: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct DocumentTagVisible {
    pub id: i32,
    pub name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Debug)]
pub struct DocumentTagCreated {
    pub id: i32,
    pub name: String,
    pub user_id: i32,
}

impl From<document_tag::Model> for DocumentTagVisible {
    fn from(item: document_tag::Model) -> Self {
        DocumentTagVisible {
            id: item.id,
            name: item.name,
        }
    }
}
