use leptos::prelude::*;

/// Labelled select over a fixed option list
#[component]
pub fn Select(
    label: &'static str,
    /// Current value (one of `options`)
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    options: Vec<&'static str>,
    #[prop(optional)]
    required: bool,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label class="form__label">
                {label}
                {required.then_some(" *")}
            </label>
            <select
                class="form__select"
                required=required
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {options.into_iter().map(|option| {
                    view! {
                        <option value=option selected=move || value.get() == option>
                            {option}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
