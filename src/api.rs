//! Client for the storefront products endpoint.

use serde::Deserialize;

use crate::utils::CCStr;

/// The public product-listing endpoint consumed by the app.
pub const PRODUCTS_ENDPOINT: &str = "https://fakestoreapi.com/products";

/// One catalog item, as served by the products endpoint.
///
/// The endpoint ships more fields than we display (e.g. `rating`); unknown
/// fields are ignored during decoding.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub id: u32,
    pub title: CCStr,
    pub price: f64,
    pub description: CCStr,
    pub category: CCStr,
    pub image: CCStr,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("unexpected response status: {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed product list: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Fetches the product list from `endpoint`.
///
/// A non-success HTTP status is an [`ApiError::Status`], a body that is not
/// a JSON array of products is an [`ApiError::Decode`]. The caller decides
/// what to show the user; no distinction is surfaced there.
pub async fn fetch_products(
    client: &reqwest::Client,
    endpoint: &str,
) -> Result<Vec<Product>, ApiError> {
    let response = client
        .get(endpoint)
        .send()
        .await
        .map_err(ApiError::Request)?;

    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status(status));
    }

    let body = response.text().await.map_err(ApiError::Request)?;
    serde_json::from_str(&body).map_err(ApiError::Decode)
}
