use askama::Template;
use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::{IntoResponse, Redirect, Response},
};
use threadbare_core::catalog::Item;

use super::pages::{not_found_page, HtmlTemplate};
use crate::state::AppState;

/// Product detail page template.
#[derive(Template)]
#[template(path = "product.html")]
struct ProductTemplate {
    active: &'static str,
    item: Item,
    image_src: String,
    has_image: bool,
    notes: String,
}

impl From<Item> for ProductTemplate {
    fn from(item: Item) -> Self {
        let image_src = item.image_src();
        Self {
            active: "catalog",
            has_image: image_src.is_some(),
            image_src: image_src.unwrap_or_default(),
            notes: item.notes_text().to_string(),
            item,
        }
    }
}

/// Handler for the product detail page (GET /product/{id}).
///
/// Unknown or non-numeric ids get the not-found page; a storage failure
/// sends the visitor back to the catalog.
pub async fn product_detail(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Response {
    let Ok(Path(id)) = id else {
        return not_found_page("That is not a product we know about.");
    };

    match state.item_repo.get_item(id).await {
        Ok(Some(item)) => {
            tracing::debug!(item_id = id, name = %item.name, "Rendering product");
            HtmlTemplate(ProductTemplate::from(item)).into_response()
        }
        Ok(None) => {
            tracing::debug!(item_id = id, "Product not found");
            not_found_page(format!("Product {id} does not exist."))
        }
        Err(err) => {
            tracing::error!(item_id = id, error = %err, "Failed to load product");
            Redirect::to("/catalog").into_response()
        }
    }
}
