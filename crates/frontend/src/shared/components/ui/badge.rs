use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}

/// Badge variant for an order status reported by the server
pub fn status_variant(status: &str) -> &'static str {
    match status.to_ascii_lowercase().as_str() {
        "planned" => "primary",
        "in_progress" | "in-progress" | "started" => "warning",
        "done" | "completed" | "finished" => "success",
        "cancelled" | "canceled" => "error",
        _ => "neutral",
    }
}

/// Status badge for production orders; unknown statuses render neutral
#[component]
pub fn StatusBadge(
    /// Raw status, e.g. "planned"
    status: String,
) -> impl IntoView {
    let variant = status_variant(&status);

    view! {
        <Badge variant=variant.to_string() class="badge--status".to_string()>
            {status}
        </Badge>
    }
}
