use super::state::AssignProductsState;
use crate::domain::product::api::get_products;
use crate::domain::shop::api::{add_products_in_shop, get_shops};
use crate::domain::shop::ui::picker::ShopPicker;
use crate::layout::global_context::CatalogContext;
use leptos::prelude::*;

/// Панель назначения товаров магазину: выбор магазина, отметка товаров
/// из глобального списка, правка количества/цены и отправка пакета
/// привязок одной кнопкой.
#[component]
pub fn AssignProductsPanel() -> impl IntoView {
    let ctx = use_context::<CatalogContext>().expect("CatalogContext not found in context");
    let state = RwSignal::new(AssignProductsState::default());
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_submitting, set_is_submitting) = signal(false);

    // Локальный список: из кеша, если он уже посеян, иначе с сервера
    let load_products = move || {
        let cached = ctx.products_untracked();
        if !cached.is_empty() {
            state.update(|s| s.seed(cached));
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match get_products().await {
                Ok(v) => {
                    ctx.replace_products(v.clone());
                    state.update(|s| s.seed(v));
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load products: {}", e);
                    set_error.set(Some(e));
                }
            }
        });
    };

    load_products();

    let handle_submit = move |_| {
        // Нет магазина, пустой список или нет отметок — выходим молча
        let Some(list) = state.with_untracked(|s| s.build_bindings()) else {
            return;
        };
        set_is_submitting.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match add_products_in_shop(list).await {
                Ok(()) => {
                    state.update(|s| s.finish_submit());
                    set_error.set(None);
                    // Кеш магазинов устарел после записи — перечитываем целиком
                    match get_shops().await {
                        Ok(shops) => ctx.replace_shops(shops),
                        Err(e) => {
                            log::error!("Failed to refresh shops: {}", e);
                            set_error.set(Some(e));
                        }
                    }
                }
                Err(e) => {
                    // Форма остаётся как была: можно повторить отправку
                    log::error!("Failed to add products in shop: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div style="display: flex; flex-direction: column; gap: 16px;">
            <ShopPicker
                shop=Signal::derive(move || state.with(|s| s.shop))
                on_change=Callback::new(move |id| state.update(|s| s.shop = id))
            />

            {move || error.get().map(|e| view! {
                <div class="error" style="background: #fee; color: #c33; padding: 8px; border-radius: 4px; font-size: 15px; display: flex; align-items: center; gap: 10px;">
                    <span>{e}</span>
                    {move || state.with(|s| s.list_products.is_empty()).then(|| view! {
                        <button
                            style="padding: 4px 12px; border: 1px solid #c33; border-radius: 4px; background: white; color: #c33; cursor: pointer;"
                            on:click=move |_| load_products()
                        >
                            {"Повторить"}
                        </button>
                    })}
                </div>
            })}

            <span style="font-size: 14px; color: #666;">{"Товары:"}</span>
            <div style="border: 1px solid #ddd; border-radius: 4px; overflow-x: auto;">
                <table style="width: 100%; border-collapse: collapse; font-size: 14px;">
                    <tbody>
                        {move || {
                            let s = state.get();
                            if s.list_products.is_empty() {
                                view! {
                                    <tr>
                                        <td colspan="5" style="text-align: center; padding: 20px; color: #888;">
                                            {"Нет данных"}
                                        </td>
                                    </tr>
                                }.into_any()
                            } else {
                                s.list_products.clone().into_iter().map(|item| {
                                    let id = item.id;
                                    let checked = s.is_checked(id);
                                    let armed = s.is_delete_armed(id);
                                    let row_count = item.count;
                                    let row_price = item.price;
                                    let count_val = item.count.map(|c| c.to_string()).unwrap_or_default();
                                    let price_val = item.price.map(|p| p.to_string()).unwrap_or_default();

                                    view! {
                                        <tr style=format!(
                                            "border-bottom: 1px solid #eee; background: {};",
                                            if armed { "#fff3f3" } else { "#fff" }
                                        )>
                                            <td style="padding: 8px; text-align: center; width: 40px;">
                                                <input
                                                    type="checkbox"
                                                    prop:checked=checked
                                                    style="cursor: pointer;"
                                                    // Отметка и активация удаления — один жест
                                                    on:change=move |_| state.update(|s| {
                                                        s.toggle_checked(id);
                                                        s.toggle_delete_button(id);
                                                    })
                                                />
                                            </td>
                                            <td style="padding: 8px;">{item.name.clone()}</td>
                                            <td style="padding: 8px; width: 140px;">
                                                <input
                                                    type="number"
                                                    placeholder="Количество *"
                                                    prop:value=count_val
                                                    style="width: 120px; padding: 6px 8px; border: 1px solid #ddd; border-radius: 4px;"
                                                    on:change=move |ev| {
                                                        let count = event_target_value(&ev).parse::<i32>().ok();
                                                        state.update(|s| s.edit_item(id, count, row_price));
                                                    }
                                                />
                                            </td>
                                            <td style="padding: 8px; width: 140px;">
                                                <input
                                                    type="number"
                                                    placeholder="Цена"
                                                    prop:value=price_val
                                                    style="width: 120px; padding: 6px 8px; border: 1px solid #ddd; border-radius: 4px;"
                                                    on:change=move |ev| {
                                                        let price = event_target_value(&ev).parse::<f64>().ok();
                                                        state.update(|s| s.edit_item(id, row_count, price));
                                                    }
                                                />
                                            </td>
                                            <td style="padding: 8px; width: 110px; text-align: center;">
                                                // Удаляет все отмеченные строки, не только свою
                                                <button
                                                    disabled=!armed
                                                    style=format!(
                                                        "padding: 6px 14px; border: none; border-radius: 4px; color: white; background: {}; cursor: {};",
                                                        if armed { "#d32f2f" } else { "#9e9e9e" },
                                                        if armed { "pointer" } else { "default" }
                                                    )
                                                    on:click=move |_| state.update(|s| s.delete_checked())
                                                >
                                                    {"Удалить"}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view().into_any()
                            }
                        }}
                    </tbody>
                </table>
            </div>

            <button
                style="padding: 10px 24px; border: none; border-radius: 4px; background: #1976d2; color: white; font-size: 15px; cursor: pointer;"
                disabled=move || is_submitting.get() || !state.with(|s| s.can_submit())
                on:click=handle_submit
            >
                {"Добавить товары"}
            </button>
        </div>
    }
}
