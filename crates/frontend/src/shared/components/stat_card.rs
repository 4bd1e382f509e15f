use contracts::shared::indicators::KpiCard;
use leptos::prelude::*;

/// Headline KPI card: label, formatted value and an optional subtitle.
#[component]
pub fn StatCard(
    /// Card data (None while nothing has been computed)
    #[prop(into)]
    card: Signal<Option<KpiCard>>,
) -> impl IntoView {
    let label = move || card.get().map(|c| c.meta.label).unwrap_or_default();
    let formatted = move || {
        card.get()
            .map(|c| c.formatted_value())
            .unwrap_or_else(|| contracts::shared::number_format::PLACEHOLDER.to_string())
    };
    let subtitle_view = move || {
        card.get().and_then(|c| c.subtitle).map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {subtitle_view}
            </div>
        </div>
    }
}
