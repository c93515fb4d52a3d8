use crate::shared::api_utils::api_url;
use contracts::domain::shop::{Shop, ShopProductBinding};
use gloo_net::http::Request;

/// Загрузить список магазинов
pub async fn get_shops() -> Result<Vec<Shop>, String> {
    Request::get(&api_url("/api/shops"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Отправить пакет привязок товаров к магазину одним запросом
pub async fn add_products_in_shop(list: Vec<ShopProductBinding>) -> Result<(), String> {
    let resp = Request::post(&api_url("/api/shops/products"))
        .json(&list)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    Ok(())
}
