use crate::domain::shop::api::get_shops;
use crate::layout::global_context::CatalogContext;
use leptos::prelude::*;

/// Выпадающий список магазинов.
///
/// Кеш магазинов сеется при первом монтировании, дальше все пикеры
/// читают его из [`CatalogContext`].
#[component]
pub fn ShopPicker(
    /// Текущий выбранный магазин (None — заглушка "не выбран")
    #[prop(into)]
    shop: Signal<Option<i32>>,
    on_change: Callback<Option<i32>>,
) -> impl IntoView {
    let ctx = use_context::<CatalogContext>().expect("CatalogContext not found in context");
    let (error, set_error) = signal::<Option<String>>(None);

    // Загрузка списка магазинов при первом монтировании
    if ctx.shops.get_untracked().is_empty() {
        wasm_bindgen_futures::spawn_local(async move {
            match get_shops().await {
                Ok(v) => {
                    ctx.replace_shops(v);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load shops: {}", e);
                    set_error.set(Some(e));
                }
            }
        });
    }

    let options = move || {
        ctx.shops
            .get()
            .into_iter()
            .map(|s| (s.id, s.name))
            .collect::<Vec<_>>()
    };

    view! {
        <div style="display: flex; flex-direction: column; gap: 4px;">
            <label for="shop-picker" style="font-size: 14px; color: #666;">{"Магазин"}</label>
            <select
                id="shop-picker"
                style="padding: 8px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 14px; max-width: 400px;"
                prop:value=move || shop.get().map(|id| id.to_string()).unwrap_or_default()
                on:change=move |ev| {
                    let val = event_target_value(&ev);
                    on_change.run(val.parse::<i32>().ok());
                }
            >
                <option value="" selected=move || shop.get().is_none()>
                    {"— выберите магазин —"}
                </option>
                <For
                    each=options
                    key=|(id, _)| *id
                    children=move |(id, name)| {
                        let is_selected = move || shop.get() == Some(id);
                        view! {
                            <option value=id.to_string() selected=is_selected>
                                {name}
                            </option>
                        }
                    }
                />
            </select>
            {move || error.get().map(|e| view! { <div class="error" style="color: #c33; font-size: 13px;">{e}</div> })}
        </div>
    }
}
