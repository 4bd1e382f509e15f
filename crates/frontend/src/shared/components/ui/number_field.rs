use contracts::shared::number_format::parse_number_or_zero;
use leptos::prelude::*;

/// Numeric input with an optional prefix (currency) and suffix.
///
/// Malformed or empty text is coerced to `0` before reaching `on_change`.
#[component]
pub fn NumberField(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<f64>,
    on_change: Callback<f64>,
    /// Shown inside the field on the left, e.g. "$"
    #[prop(optional)]
    prefix: Option<&'static str>,
    #[prop(optional)]
    suffix: Option<&'static str>,
    #[prop(default = 1.0)]
    step: f64,
    #[prop(default = 0.0)]
    min: f64,
) -> impl IntoView {
    let input_class = if prefix.is_some() {
        "form__input form__input--prefixed"
    } else {
        "form__input"
    };

    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <div class="number-field">
                {prefix.map(|p| view! { <span class="number-field__prefix">{p}</span> })}
                <input
                    class=input_class
                    type="number"
                    step=step.to_string()
                    min=min.to_string()
                    prop:value=move || {
                        let v = value.get();
                        if v.is_finite() { v.to_string() } else { String::new() }
                    }
                    on:input=move |ev| on_change.run(parse_number_or_zero(&event_target_value(&ev)))
                />
                {suffix.map(|s| view! { <span class="number-field__suffix">{s}</span> })}
            </div>
        </div>
    }
}
