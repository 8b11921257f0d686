use leptos::prelude::*;

/// Labelled text input bound to a form field
#[component]
pub fn Input(
    /// Label text
    label: &'static str,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Called with the raw text on every keystroke
    on_input: Callback<String>,
    /// Input type: "text" (default), "number", "email", ...
    #[prop(optional)]
    input_type: Option<&'static str>,
    /// Marks the label with `*`
    #[prop(optional)]
    required: bool,
    #[prop(optional)]
    placeholder: &'static str,
    /// `step` for number inputs
    #[prop(optional)]
    step: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label class="form__label">
                {label}
                {required.then_some(" *")}
            </label>
            <input
                class="form__input"
                type=input_type.unwrap_or("text")
                step=step
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
