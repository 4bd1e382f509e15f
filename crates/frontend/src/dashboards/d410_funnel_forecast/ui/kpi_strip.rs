use leptos::prelude::*;

use super::super::state::ForecastState;
use crate::shared::components::stat_card::StatCard;

/// The four headline KPI cards.
#[component]
pub fn KpiStrip(state: ForecastState) -> impl IntoView {
    let count = state.kpis.with_untracked(|k| k.len());

    let cards = (0..count)
        .map(|i| {
            let card = Signal::derive(move || state.kpis.with(|k| k.get(i).cloned()));
            view! { <StatCard card=card /> }
        })
        .collect_view();

    view! {
        <div class="kpi-strip">{cards}</div>
    }
}
