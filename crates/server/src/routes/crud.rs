//! Generic controllers and the per-entity route table.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use serde_json::{json, Map, Value};

use service::{pagination::Pagination, CrudService, Resource};

use crate::errors::ApiError;

type Svc<R> = State<Arc<CrudService<R>>>;

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl PageQuery {
    /// `None` unless the client asked for a page.
    pub fn pagination(&self) -> Option<Pagination> {
        Pagination::from_query(self.page, self.per_page)
    }
}

/// Base-10 `i32`, surrounding whitespace ignored.
pub fn parse_id(raw: &str) -> Result<i32, ApiError> {
    raw.trim().parse::<i32>().map_err(|_| ApiError::InvalidId)
}

fn parse_body<R: Resource>(body: Result<Json<Value>, JsonRejection>) -> Result<R::Input, ApiError> {
    let Json(raw) = body.map_err(|e| ApiError::Validation(e.body_text()))?;
    serde_json::from_value(raw).map_err(|e| ApiError::Validation(e.to_string()))
}

pub async fn create<R: Resource>(
    State(svc): Svc<R>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let input = parse_body::<R>(body)?;
    let row = svc
        .create(input)
        .await?
        .ok_or_else(|| ApiError::Internal(format!("{} could not be created", R::LABEL)))?;
    let mut out = Map::new();
    out.insert("message".into(), Value::String(R::created_message()));
    out.insert(R::KEY.into(), serde_json::to_value(row)?);
    Ok((StatusCode::CREATED, Json(Value::Object(out))))
}

pub async fn get_all<R: Resource>(
    State(svc): Svc<R>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let Query(q) = query.map_err(|e| ApiError::Validation(e.body_text()))?;
    let rows = svc.get_all(q.pagination()).await?;
    Ok(Json(json!({ "data": rows })))
}

pub async fn get_by_id<R: Resource>(State(svc): Svc<R>, Path(raw): Path<String>) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&raw)?;
    let row = svc.get_by_id(id).await?.ok_or_else(|| ApiError::NotFound(format!("{} not found", R::LABEL)))?;
    Ok(Json(json!({ "data": row })))
}

pub async fn get_many_by_id<R: Resource>(State(svc): Svc<R>, Path(raw): Path<String>) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&raw)?;
    let rows = svc.get_many_by_id(id).await?;
    Ok(Json(json!({ "data": rows })))
}

pub async fn update<R: Resource>(
    State(svc): Svc<R>,
    Path(raw): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&raw)?;
    let input = parse_body::<R>(body)?;
    let message = svc.update(id, input).await?;
    Ok(Json(json!({ "message": message })))
}

pub async fn delete<R: Resource>(State(svc): Svc<R>, Path(raw): Path<String>) -> Result<StatusCode, ApiError> {
    let id = parse_id(&raw)?;
    svc.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Route table for one entity, keyed by `R::KEY`.
pub fn resource_routes<R, S>(svc: Arc<CrudService<R>>) -> Router<S>
where
    R: Resource,
    S: Clone + Send + Sync + 'static,
{
    let single = format!("/api/{}", R::KEY);
    let single_id = format!("/api/{}/:id", R::KEY);
    let plural = format!("/api/{}s", R::KEY);
    let plural_id = format!("/api/{}s/:id", R::KEY);

    Router::new()
        .route(&single, post(create::<R>))
        .route(&plural, get(get_all::<R>))
        .route(&single_id, get(get_by_id::<R>).put(update::<R>).delete(delete::<R>))
        .route(&plural_id, get(get_many_by_id::<R>))
        .with_state(svc)
}

/// Build the service for `R` on `db` and return its routes.
pub fn mount<R: Resource, S: Clone + Send + Sync + 'static>(db: &Arc<DatabaseConnection>) -> Router<S> {
    resource_routes::<R, S>(Arc::new(CrudService::with_db(db.clone())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_strict_base_ten() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id(" 7 ").unwrap(), 7);
        assert!(parse_id("abc").is_err());
        assert!(parse_id("12abc").is_err());
        assert!(parse_id("").is_err());
        assert!(parse_id("99999999999").is_err());
    }

    #[test]
    fn page_query_is_optional() {
        assert!(PageQuery::default().pagination().is_none());
        let p = PageQuery { page: Some(2), per_page: None }.pagination().unwrap();
        assert_eq!(p.index(), 1);
        assert_eq!(p.per_page(), service::pagination::DEFAULT_PER_PAGE);
    }
}
