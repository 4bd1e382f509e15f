use leptos::prelude::*;

/// Range slider with the bounds printed underneath.
///
/// `display` renders the current value next to the label.
#[component]
pub fn Slider(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<f64>,
    on_change: Callback<f64>,
    min: f64,
    max: f64,
    step: f64,
    display: fn(f64) -> String,
    /// Round the value to an integer before reporting it
    #[prop(optional)]
    integer: bool,
) -> impl IntoView {
    view! {
        <div class="slider">
            <div class="slider__header">
                <label class="form__label">{label}</label>
                <div class="slider__value">{move || display(value.get())}</div>
            </div>
            <input
                class="slider__input"
                type="range"
                min=min.to_string()
                max=max.to_string()
                step=step.to_string()
                prop:value=move || {
                    let v = value.get();
                    if v.is_finite() { v.to_string() } else { "0".to_string() }
                }
                on:input=move |ev| {
                    let raw = event_target_value(&ev).parse::<f64>().unwrap_or(0.0);
                    on_change.run(if integer { raw.round() } else { raw });
                }
            />
            <div class="slider__bounds">
                <span>{display(min)}</span>
                <span>{display(max)}</span>
            </div>
        </div>
    }
}
