use crate::domain::a025_production_order::ui::ProductionOrderPage;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn App() -> impl IntoView {
    // Toaster must wrap the page: notifications are dispatched through its context.
    view! {
        <ConfigProvider>
            <ToasterProvider>
                <ProductionOrderPage />
            </ToasterProvider>
        </ConfigProvider>
    }
}
