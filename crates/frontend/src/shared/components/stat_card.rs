use crate::shared::icons::icon;
use crate::shared::number_format::format_number_int;
use leptos::prelude::*;

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Count to show (None = loading)
    #[prop(into)]
    value: Signal<Option<usize>>,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => format_number_int(v as f64),
        None => "—".to_string(),
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
            </div>
        </div>
    }
}
