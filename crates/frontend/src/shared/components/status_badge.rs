use leptos::prelude::*;

/// Order status pill; `css_class` is one of draft / pending / approved / completed / cancelled
#[component]
pub fn StatusBadge(label: String, css_class: &'static str) -> impl IntoView {
    view! {
        <span class=format!("status-badge {}", css_class)>{label}</span>
    }
}

/// 启用 / 禁用
#[component]
pub fn ActiveBadge(active: bool) -> impl IntoView {
    let (class, text) = if active {
        ("status-badge active", "启用")
    } else {
        ("status-badge inactive", "禁用")
    };
    view! { <span class=class>{text}</span> }
}
