use contracts::domain::product::Product;
use contracts::domain::shop::Shop;
use leptos::prelude::*;

/// Общий кеш каталога на время сеанса: магазины и глобальный список товаров.
///
/// Заполняется лениво первым потребителем и заменяется целиком после
/// успешной записи. Панели работают со своими локальными копиями и не
/// мутируют кеш напрямую.
#[derive(Clone, Copy)]
pub struct CatalogContext {
    pub products: RwSignal<Vec<Product>>,
    pub shops: RwSignal<Vec<Shop>>,
}

impl CatalogContext {
    pub fn new() -> Self {
        Self {
            products: RwSignal::new(Vec::new()),
            shops: RwSignal::new(Vec::new()),
        }
    }

    /// Снимок списка товаров без подписки на изменения
    pub fn products_untracked(&self) -> Vec<Product> {
        self.products.get_untracked()
    }

    pub fn replace_products(&self, items: Vec<Product>) {
        self.products.set(items);
    }

    pub fn replace_shops(&self, items: Vec<Shop>) {
        self.shops.set(items);
    }
}
