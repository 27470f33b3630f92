//! Catalog page (GET /catalog).
//!
//! A failing query never surfaces as an error page: the failure is logged
//! and the shop renders empty with the form reset.

use askama::Template;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::IntoResponse,
};
use threadbare_core::catalog::{
    run_catalog, CatalogPage, CatalogParams, Item, SortDirection, SortKey,
};

use super::pages::HtmlTemplate;
use crate::state::AppState;

/// One entry in the category dropdown.
struct CategoryOption {
    value: String,
    selected: bool,
}

/// One entry in a fixed select box.
struct SelectOption {
    value: &'static str,
    label: &'static str,
    selected: bool,
}

const SORT_KEYS: [(SortKey, &str); 3] = [
    (SortKey::DateAdded, "Newest"),
    (SortKey::Price, "Price"),
    (SortKey::Name, "Name"),
];

const SORT_DIRECTIONS: [(SortDirection, &str); 2] = [
    (SortDirection::Descending, "Descending"),
    (SortDirection::Ascending, "Ascending"),
];

#[derive(Template)]
#[template(path = "shop.html")]
struct ShopTemplate {
    active: &'static str,
    items: Vec<Item>,
    categories: Vec<CategoryOption>,
    search: String,
    min_price: String,
    max_price: String,
    sort_options: Vec<SelectOption>,
    order_options: Vec<SelectOption>,
}

impl ShopTemplate {
    /// Builds the page for a successful query, echoing the filters back.
    fn from_page(page: CatalogPage, params: &CatalogParams) -> Self {
        let query = page.query;
        let categories = page
            .categories
            .into_iter()
            .map(|value| CategoryOption {
                selected: query.category.as_deref() == Some(value.as_str()),
                value,
            })
            .collect();

        Self {
            active: "catalog",
            items: page.items,
            categories,
            search: query.search,
            min_price: echo_price(params.min_price.as_deref()),
            max_price: echo_price(params.max_price.as_deref()),
            sort_options: sort_options(query.sort),
            order_options: order_options(query.direction),
        }
    }

    /// Empty listing with the form in its default state.
    fn empty() -> Self {
        Self {
            active: "catalog",
            items: Vec::new(),
            categories: Vec::new(),
            search: String::new(),
            min_price: String::new(),
            max_price: String::new(),
            sort_options: sort_options(SortKey::default()),
            order_options: order_options(SortDirection::Descending),
        }
    }
}

fn echo_price(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_string()
}

fn sort_options(current: SortKey) -> Vec<SelectOption> {
    SORT_KEYS
        .iter()
        .map(|(key, label)| SelectOption {
            value: key.as_param(),
            label: *label,
            selected: *key == current,
        })
        .collect()
}

fn order_options(current: SortDirection) -> Vec<SelectOption> {
    SORT_DIRECTIONS
        .iter()
        .map(|(direction, label)| SelectOption {
            value: direction.as_param(),
            label: *label,
            selected: *direction == current,
        })
        .collect()
}

/// Handler for the catalog page (GET /catalog).
pub async fn catalog(
    State(state): State<AppState>,
    params: Result<Query<CatalogParams>, QueryRejection>,
) -> impl IntoResponse {
    let params = match params {
        Ok(Query(params)) => params,
        Err(rejection) => {
            tracing::error!(error = %rejection, "Unreadable catalog query string");
            return HtmlTemplate(ShopTemplate::empty());
        }
    };

    match run_catalog(state.item_repo.as_ref(), &params).await {
        Ok(page) => {
            tracing::debug!(
                items = page.items.len(),
                categories = page.categories.len(),
                sort = page.query.sort.as_param(),
                direction = page.query.direction.as_param(),
                "Rendering catalog"
            );
            HtmlTemplate(ShopTemplate::from_page(page, &params))
        }
        Err(err) => {
            tracing::error!(error = %err, ?params, "Catalog query failed");
            HtmlTemplate(ShopTemplate::empty())
        }
    }
}
