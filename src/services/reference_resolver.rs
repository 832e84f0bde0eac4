use sea_orm::{entity::prelude::*, DbConn};

use crate::entities::{document_tag, tag, term};

/// Coerces a JSON value into a record id the way a loosely typed client
/// would expect: numbers must be integral, strings must parse as one.
/// Anything else is dropped silently.
pub fn coerce_id(value: &serde_json::Value) -> Option<i32> {
    match value {
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i32::try_from(i).ok()
            } else {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0)
                    .and_then(|f| if f >= i32::MIN as f64 && f <= i32::MAX as f64 {
                        Some(f as i32)
                    } else {
                        None
                    })
            }
        }
        serde_json::Value::String(s) => s.trim().parse::<i32>().ok(),
        _ => None,
    }
}

pub fn coerce_ids(values: &[serde_json::Value]) -> Vec<i32> {
    values.iter().filter_map(coerce_id).collect()
}

#[derive(Debug)]
pub enum ResolveError {
    /// The ids that matched no owned record. Duplicate requested ids can
    /// produce a count mismatch with an empty missing set.
    NotFound(Vec<i32>),
    Db(DbErr),
}

impl From<DbErr> for ResolveError {
    fn from(e: DbErr) -> Self {
        ResolveError::Db(e)
    }
}

fn missing_ids<T>(requested: &[i32], found: &[T], id_of: impl Fn(&T) -> i32) -> Vec<i32> {
    let found_ids: Vec<i32> = found.iter().map(id_of).collect();
    let mut missing: Vec<i32> = requested
        .iter()
        .filter(|id| !found_ids.contains(id))
        .copied()
        .collect();
    missing.dedup();
    missing
}

pub struct ReferenceResolver;

impl ReferenceResolver {
    /// Resolves requested tag ids against the caller's own tags. Every
    /// requested id must match, or the whole set is rejected.
    pub async fn resolve_tags(
        db: &DbConn,
        user_id: i32,
        ids: &[i32],
    ) -> Result<Vec<tag::Model>, ResolveError> {
        if ids.is_empty() {
            return Ok(vec![]);
        }
        let found = tag::Entity::find()
            .filter(tag::Column::UserId.eq(user_id))
            .filter(tag::Column::Id.is_in(ids.to_vec()))
            .all(db)
            .await?;
        if found.len() != ids.len() {
            return Err(ResolveError::NotFound(missing_ids(ids, &found, |t| t.id)));
        }
        Ok(found)
    }

    pub async fn resolve_document_tags(
        db: &DbConn,
        user_id: i32,
        ids: &[i32],
    ) -> Result<Vec<document_tag::Model>, ResolveError> {
        if ids.is_empty() {
            return Ok(vec![]);
        }
        let found = document_tag::Entity::find()
            .filter(document_tag::Column::UserId.eq(user_id))
            .filter(document_tag::Column::Id.is_in(ids.to_vec()))
            .all(db)
            .await?;
        if found.len() != ids.len() {
            return Err(ResolveError::NotFound(missing_ids(ids, &found, |t| t.id)));
        }
        Ok(found)
    }

    pub async fn resolve_term(
        db: &DbConn,
        user_id: i32,
        id: i32,
    ) -> Result<term::Model, ResolveError> {
        term::Entity::find_by_id(id)
            .filter(term::Column::UserId.eq(user_id))
            .one(db)
            .await?
            .ok_or(ResolveError::NotFound(vec![id]))
    }
}
