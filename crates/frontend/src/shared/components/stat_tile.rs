use leptos::prelude::*;

/// Small read-only label/value box shown under a section's controls.
#[component]
pub fn StatTile(label: &'static str, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div class="stat-tile">
            <div class="stat-tile__label">{label}</div>
            <div class="stat-tile__value">{move || value.get()}</div>
        </div>
    }
}
