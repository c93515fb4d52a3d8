use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate Root
// ============================================================================
/// Магазин: адресованная точка со списком назначенных ей товаров.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shop {
    #[serde(rename = "ID")]
    pub id: i32,

    #[serde(rename = "Address")]
    pub address: String,

    #[serde(rename = "Name")]
    pub name: String,

    /// Список назначений; после конструирования всегда существует,
    /// повторяющиеся id товаров здесь не отсекаются
    #[serde(rename = "Products", default)]
    pub products: Vec<ShopProduct>,
}

impl Shop {
    pub fn new(id: i32, address: String, name: String) -> Self {
        Self {
            id,
            address,
            name,
            products: Vec::new(),
        }
    }

    pub fn with_products(
        id: i32,
        address: String,
        name: String,
        products: Vec<ShopProduct>,
    ) -> Self {
        Self {
            id,
            address,
            name,
            products,
        }
    }

    /// Добавить готовую запись назначения в конец списка
    pub fn add_product(&mut self, product: ShopProduct) {
        self.products.push(product);
    }

    /// Собрать запись назначения из частей и добавить её в конец списка
    pub fn add_new_product(&mut self, id: i32, name: String, count: i32, price: f64) {
        self.products.push(ShopProduct::new(id, name, count, price));
    }
}

/// Количество и цена товара внутри конкретного магазина.
/// Не путать с глобальной карточкой товара ([`crate::domain::product::Product`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopProduct {
    #[serde(rename = "ID")]
    pub id: i32,

    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Count")]
    pub count: i32,

    #[serde(rename = "Price")]
    pub price: f64,
}

impl ShopProduct {
    pub fn new(id: i32, name: String, count: i32, price: f64) -> Self {
        Self {
            id,
            name,
            count,
            price,
        }
    }
}

// ============================================================================
// DTO
// ============================================================================
/// Единица отправки при назначении товаров магазину: одна привязка
/// товар-магазин с количеством и ценой.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopProductBinding {
    #[serde(rename = "IdShop")]
    pub id_shop: i32,

    #[serde(rename = "IdProduct")]
    pub id_product: i32,

    #[serde(rename = "CountProduct")]
    pub count: i32,

    #[serde(rename = "PriceProduct")]
    pub price: f64,
}
