use leptos::prelude::*;

/// DateInput component with native date picker
/// Browser automatically displays dates in locale format
#[component]
pub fn DateInput(
    /// The date value in yyyy-mm-dd format (empty when nothing is picked)
    #[prop(into)]
    value: Signal<String>,
    /// Callback when the date changes (receives yyyy-mm-dd format)
    on_change: impl Fn(String) + 'static,
    /// ID for the input element
    #[prop(optional)]
    id: &'static str,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    #[prop(optional)] style: Option<String>,
) -> impl IntoView {
    let default_style = "padding: 6px 8px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.875rem; background: #fff; width: 100%;";
    let final_style = style.unwrap_or_else(|| default_style.to_string());

    view! {
        <input
            type="date"
            id=id
            required=required
            prop:value=value
            on:input=move |ev| {
                on_change(event_target_value(&ev));
            }
            style=final_style
        />
    }
}
