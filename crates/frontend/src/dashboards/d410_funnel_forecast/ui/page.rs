use contracts::dashboards::d410_funnel_forecast::{ProjectionInputs, Section};
use leptos::prelude::*;

use super::super::state::ForecastState;
use super::controls::{ScenarioCard, SectionCard};
use super::kpi_strip::KpiStrip;
use super::projection_table::ProjectionCard;
use crate::shared::components::ui::{Button, ButtonVariant};
use crate::shared::export::export_to_csv;
use crate::shared::theme::ThemeToggle;

const EXPORT_FILENAME: &str = "funnel_projection.csv";

/// Страница калькулятора воронки: KPI, параметры по уровням воронки и помесячный прогноз.
#[component]
pub fn FunnelForecastPage() -> impl IntoView {
    let state = ForecastState::new(ProjectionInputs::default());

    let on_reset = Callback::new(move |_: leptos::ev::MouseEvent| state.reset());
    let on_export = Callback::new(move |_: leptos::ev::MouseEvent| {
        let rows = state.rows.get_untracked();
        match export_to_csv(&rows, EXPORT_FILENAME) {
            Ok(()) => log::info!("Exported {} projection rows", rows.len()),
            Err(e) => log::error!("CSV export failed: {}", e),
        }
    });

    view! {
        <div class="page page--dashboard" id="d410_funnel_forecast--dashboard">
            <header class="page__header">
                <h1 class="page__title">"Funnel Forecaster"</h1>
                <div class="page__actions">
                    <ThemeToggle />
                    <Button variant=ButtonVariant::Outline title="Download the projection table" on_click=on_export>
                        "Export CSV"
                    </Button>
                    <Button variant=ButtonVariant::Outline on_click=on_reset>
                        "Reset"
                    </Button>
                </div>
            </header>

            <KpiStrip state=state />

            <div class="forecast__sections">
                <SectionCard state=state section=Section::Offer delay_ms=0 />
                <SectionCard state=state section=Section::Ads delay_ms=60 />
                <SectionCard state=state section=Section::Lead delay_ms=120 />
                <SectionCard state=state section=Section::Sales delay_ms=180 />
                <SectionCard state=state section=Section::Rentability delay_ms=240 />
                <ScenarioCard state=state delay_ms=300 />
            </div>

            <ProjectionCard state=state delay_ms=360 />
        </div>
    }
}
