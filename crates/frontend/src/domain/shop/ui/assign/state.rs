use contracts::domain::product::Product;
use contracts::domain::shop::ShopProductBinding;
use std::collections::HashMap;

/// Состояние панели назначения товаров магазину.
///
/// Чистая модель без сигналов: каждое действие пользователя — метод,
/// переводящий один снимок состояния в следующий. Виджет оборачивает
/// её в `RwSignal` и не держит никакой собственной логики.
#[derive(Clone, Debug, Default)]
pub struct AssignProductsState {
    /// Выбранный магазин (None — не выбран)
    pub shop: Option<i32>,

    /// Локальная редактируемая копия глобального списка товаров.
    /// Правки не касаются кеша до успешной отправки.
    pub list_products: Vec<Product>,

    /// Отмеченные товары, в порядке отметки
    pub checked_products: Vec<i32>,

    /// Флаги доступности кнопки удаления по id товара
    pub delete_buttons: HashMap<i32, bool>,
}

impl AssignProductsState {
    /// Посеять локальный список из кеша или результата загрузки
    pub fn seed(&mut self, products: Vec<Product>) {
        self.list_products = products;
    }

    pub fn is_checked(&self, id: i32) -> bool {
        self.checked_products.contains(&id)
    }

    pub fn is_delete_armed(&self, id: i32) -> bool {
        self.delete_buttons.get(&id).copied().unwrap_or(false)
    }

    /// Отметка товара: есть в множестве — убрать, нет — добавить в конец
    pub fn toggle_checked(&mut self, id: i32) {
        if self.is_checked(id) {
            self.checked_products.retain(|item| *item != id);
        } else {
            self.checked_products.push(id);
        }
    }

    /// Перевернуть флаг кнопки удаления, независимо от отметки
    pub fn toggle_delete_button(&mut self, id: i32) {
        let armed = self.delete_buttons.entry(id).or_insert(false);
        *armed = !*armed;
    }

    /// Заменить количество/цену у товара с данным id, остальные строки
    /// не трогая. Список переписывается целиком.
    ///
    /// Отрицательный ввод приводится к модулю, ноль и пустой ввод
    /// очищают поле до "не задано".
    pub fn edit_item(&mut self, id: i32, count: Option<i32>, price: Option<f64>) {
        self.list_products = self
            .list_products
            .iter()
            .map(|item| {
                if item.id == id {
                    let mut item = item.clone();
                    item.count = count.filter(|c| *c != 0).map(i32::abs);
                    item.price = price.filter(|p| *p != 0.0).map(f64::abs);
                    item
                } else {
                    item.clone()
                }
            })
            .collect();
    }

    /// Готова ли форма к отправке: магазин выбран, список не пуст,
    /// есть хотя бы одна отметка
    pub fn can_submit(&self) -> bool {
        self.shop.is_some() && !self.list_products.is_empty() && !self.checked_products.is_empty()
    }

    /// Собрать пакет привязок по отмеченным товарам.
    /// `None`, когда форма не готова — отправка в этом случае no-op.
    pub fn build_bindings(&self) -> Option<Vec<ShopProductBinding>> {
        if !self.can_submit() {
            return None;
        }
        let shop = self.shop?;
        let list = self
            .list_products
            .iter()
            .filter(|item| self.is_checked(item.id))
            .map(|item| ShopProductBinding {
                id_shop: shop,
                id_product: item.id,
                count: item.count.unwrap_or(0),
                price: item.price.unwrap_or(0.0),
            })
            .collect();
        Some(list)
    }

    /// Очистка после успешной отправки; локальный список остаётся
    pub fn finish_submit(&mut self) {
        self.shop = None;
        self.checked_products.clear();
    }

    /// Локально удалить все отмеченные строки. Сеть не трогается:
    /// строки просто выбывают из текущего сеанса редактирования.
    pub fn delete_checked(&mut self) {
        let checked = std::mem::take(&mut self.checked_products);
        self.list_products.retain(|item| !checked.contains(&item.id));
        self.delete_buttons.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i32, name: &str, count: Option<i32>, price: Option<f64>) -> Product {
        let mut p = Product::new(id, name.to_string());
        p.count = count;
        p.price = price;
        p
    }

    fn seeded() -> AssignProductsState {
        let mut state = AssignProductsState::default();
        state.seed(vec![
            product(1, "A", Some(3), Some(2.5)),
            product(2, "B", None, None),
            product(3, "C", None, None),
        ]);
        state
    }

    #[test]
    fn test_toggle_checked_twice_restores_membership() {
        let mut state = seeded();
        state.toggle_checked(2);
        assert!(state.is_checked(2));
        state.toggle_checked(2);
        assert!(!state.is_checked(2));
        assert!(state.checked_products.is_empty());
    }

    #[test]
    fn test_toggle_checked_preserves_insertion_order() {
        let mut state = seeded();
        state.toggle_checked(3);
        state.toggle_checked(1);
        assert_eq!(state.checked_products, vec![3, 1]);
    }

    #[test]
    fn test_edit_item_touches_only_matching_row() {
        let mut state = seeded();
        state.edit_item(2, Some(7), Some(10.0));

        assert_eq!(state.list_products[1].count, Some(7));
        assert_eq!(state.list_products[1].price, Some(10.0));
        // Соседние строки не изменились
        assert_eq!(state.list_products[0].count, Some(3));
        assert_eq!(state.list_products[0].price, Some(2.5));
        assert_eq!(state.list_products[2].count, None);
    }

    #[test]
    fn test_edit_item_coerces_negative_to_magnitude() {
        let mut state = seeded();
        state.edit_item(1, Some(-4), Some(-1.5));
        assert_eq!(state.list_products[0].count, Some(4));
        assert_eq!(state.list_products[0].price, Some(1.5));
    }

    #[test]
    fn test_edit_item_zero_or_absent_clears_field() {
        let mut state = seeded();
        state.edit_item(1, Some(0), None);
        assert_eq!(state.list_products[0].count, None);
        assert_eq!(state.list_products[0].price, None);
    }

    #[test]
    fn test_build_bindings_requires_all_three_preconditions() {
        // Магазин не выбран
        let mut state = seeded();
        state.toggle_checked(1);
        assert!(state.build_bindings().is_none());

        // Пустой локальный список
        let mut state = AssignProductsState::default();
        state.shop = Some(5);
        state.toggle_checked(1);
        assert!(state.build_bindings().is_none());

        // Нет отмеченных
        let mut state = seeded();
        state.shop = Some(5);
        assert!(state.build_bindings().is_none());
    }

    #[test]
    fn test_build_bindings_emits_checked_rows_with_defaults() {
        let mut state = AssignProductsState::default();
        state.shop = Some(5);
        state.seed(vec![
            product(1, "A", Some(3), Some(2.5)),
            product(2, "B", None, None),
        ]);
        state.toggle_checked(1);
        state.toggle_checked(2);

        let list = state.build_bindings().unwrap();
        assert_eq!(
            list,
            vec![
                ShopProductBinding {
                    id_shop: 5,
                    id_product: 1,
                    count: 3,
                    price: 2.5,
                },
                ShopProductBinding {
                    id_shop: 5,
                    id_product: 2,
                    count: 0,
                    price: 0.0,
                },
            ]
        );
    }

    #[test]
    fn test_finish_submit_clears_shop_and_checked() {
        let mut state = seeded();
        state.shop = Some(5);
        state.toggle_checked(1);
        state.toggle_checked(2);

        state.finish_submit();

        assert_eq!(state.shop, None);
        assert!(state.checked_products.is_empty());
        // Локальный список не очищается
        assert_eq!(state.list_products.len(), 3);
    }

    #[test]
    fn test_delete_checked_removes_only_checked_rows() {
        let mut state = seeded();
        state.toggle_checked(1);
        state.toggle_delete_button(1);
        state.toggle_checked(3);
        state.toggle_delete_button(3);
        // Флаг есть и у неотмеченной строки
        state.toggle_delete_button(2);

        state.delete_checked();

        let left: Vec<i32> = state.list_products.iter().map(|p| p.id).collect();
        assert_eq!(left, vec![2]);
        assert!(state.checked_products.is_empty());
        // Все флаги сброшены, включая id вне отмеченного множества
        assert!(!state.is_delete_armed(1));
        assert!(!state.is_delete_armed(2));
        assert!(!state.is_delete_armed(3));
    }

    #[test]
    fn test_delete_button_flag_independent_of_checked() {
        let mut state = seeded();
        state.toggle_delete_button(2);
        assert!(state.is_delete_armed(2));
        assert!(!state.is_checked(2));

        state.toggle_delete_button(2);
        assert!(!state.is_delete_armed(2));
    }
}
