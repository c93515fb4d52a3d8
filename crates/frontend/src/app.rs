use crate::domain::shop::ui::assign::AssignProductsPanel;
use crate::layout::global_context::CatalogContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the CatalogContext store to the whole app via context.
    provide_context(CatalogContext::new());

    view! {
        <main style="max-width: 900px; margin: 0 auto; padding: 20px; display: flex; flex-direction: column; gap: 16px;">
            <h2 style="margin: 0; font-size: 1.3rem;">{"Товары в магазине"}</h2>
            <AssignProductsPanel />
        </main>
    }
}
