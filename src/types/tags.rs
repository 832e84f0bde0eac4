use serde::{Deserialize, Serialize};

use crate::entities::tag;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TagCreateRequest {
    pub name: Option<String>,
    pub theme_color: Option<serde_json::Value>,
    pub parent_id: Option<serde_json::Value>,
    pub pinned: Option<serde_json::Value>,
}

/// A tag as embedded in list views and in term/document read views.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct TagVisible {
    pub id: i32,
    pub name: String,
    pub theme_color: String,
    pub parent_id: Option<i32>,
    pub pinned: bool,
    pub order: i32,
    pub hidden: bool,
}

/// A tag as embedded in create responses and single-tag `sub_tags`:
/// no `parent_id`, mirroring the narrower column set those paths select.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct TagSummary {
    pub id: i32,
    pub name: String,
    pub theme_color: String,
    pub pinned: bool,
    pub order: i32,
    pub hidden: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Debug)]
pub struct TagCreated {
    pub id: i32,
    pub name: String,
    pub theme_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i32>,
    pub user_id: i32,
    pub pinned: bool,
}

/// Single-tag read: `sub_tags` is omitted entirely when the tag has no
/// children, unlike the list view which always carries a `tags` array.
#[derive(Serialize, Deserialize, PartialEq, Debug)]
pub struct TagDetail {
    pub id: i32,
    pub name: String,
    pub parent_id: Option<i32>,
    pub theme_color: String,
    pub pinned: bool,
    pub order: i32,
    pub hidden: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_tags: Option<Vec<TagSummary>>,
}

#[derive(Serialize, Deserialize, PartialEq, Debug)]
pub struct TagWithChildren {
    pub id: i32,
    pub name: String,
    pub theme_color: String,
    pub pinned: bool,
    pub order: i32,
    pub hidden: bool,
    pub tags: Vec<TagVisible>,
}

impl From<tag::Model> for TagVisible {
    fn from(item: tag::Model) -> Self {
        TagVisible {
            id: item.id,
            name: item.name,
            theme_color: item.theme_color,
            parent_id: item.parent_id,
            pinned: item.pinned,
            order: item.order,
            hidden: item.hidden,
        }
    }
}

impl From<tag::Model> for TagSummary {
    fn from(item: tag::Model) -> Self {
        TagSummary {
            id: item.id,
            name: item.name,
            theme_color: item.theme_color,
            pinned: item.pinned,
            order: item.order,
            hidden: item.hidden,
        }
    }
}
