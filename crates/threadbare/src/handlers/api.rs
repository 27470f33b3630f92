//! JSON endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;
use threadbare_core::catalog::{run_catalog, CatalogPage, CatalogParams, Item};
use threadbare_core::storage::RepositoryError;

use super::AppError;
use crate::state::AppState;

/// Body returned by GET /run-tests.
#[derive(Debug, Serialize)]
pub struct TestRunResult {
    pub message: &'static str,
}

/// Stub test trigger (GET /run-tests).
///
/// Always reports success; nothing is executed.
pub async fn run_tests() -> Json<TestRunResult> {
    tracing::info!("Test run requested");
    Json(TestRunResult {
        message: "Tests completed successfully!",
    })
}

/// List catalog items (GET /api/items).
///
/// Accepts the same query parameters as the catalog page. Unlike the page,
/// an invalid parameter is reported to the caller.
pub async fn list_items(
    State(state): State<AppState>,
    Query(params): Query<CatalogParams>,
) -> Result<Json<CatalogPage>, AppError> {
    let page = run_catalog(state.item_repo.as_ref(), &params).await?;
    tracing::debug!(items = page.items.len(), "Listed items");
    Ok(Json(page))
}

/// Get a single item (GET /api/items/{id}).
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Item>, AppError> {
    let item = state
        .item_repo
        .get_item(id)
        .await?
        .ok_or_else(|| RepositoryError::NotFound {
            entity_type: "Item",
            id: id.to_string(),
        })?;

    Ok(Json(item))
}
