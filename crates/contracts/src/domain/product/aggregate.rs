use serde::{Deserialize, Serialize};

/// Глобальная карточка товара, не привязанная к магазину.
///
/// `count`/`price` — сеансовые поля редактирования в панели назначения:
/// `None`, пока пользователь не ввёл значение. На сервере не хранятся,
/// при отсутствии не сериализуются.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "ID")]
    pub id: i32,

    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Count", default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,

    #[serde(rename = "Price", default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl Product {
    pub fn new(id: i32, name: String) -> Self {
        Self {
            id,
            name,
            count: None,
            price: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_fields_absent_until_entered() {
        let product = Product::new(1, "Хлеб".to_string());
        assert_eq!(product.count, None);
        assert_eq!(product.price, None);

        let json = serde_json::to_value(&product).unwrap();
        assert!(json.get("Count").is_none());
        assert!(json.get("Price").is_none());
    }

    #[test]
    fn test_deserializes_bare_catalog_entry() {
        let product: Product = serde_json::from_str(r#"{"ID":7,"Name":"Сыр"}"#).unwrap();
        assert_eq!(product.id, 7);
        assert_eq!(product.count, None);
    }
}
