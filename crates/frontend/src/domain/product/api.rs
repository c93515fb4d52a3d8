use crate::shared::api_utils::api_url;
use contracts::domain::product::Product;
use gloo_net::http::Request;

/// Загрузить глобальный список товаров
pub async fn get_products() -> Result<Vec<Product>, String> {
    Request::get(&api_url("/api/products"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
