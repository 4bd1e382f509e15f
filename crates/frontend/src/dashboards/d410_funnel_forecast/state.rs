//! Состояние страницы калькулятора.
//!
//! One immutable [`ProjectionInputs`] snapshot lives in a signal; every control
//! replaces it wholesale and the derived values are memoised on top.

use contracts::dashboards::d410_funnel_forecast::kpi::summary_kpis;
use contracts::dashboards::d410_funnel_forecast::*;
use contracts::shared::indicators::KpiCard;
use contracts::shared::number_format::{format_count, format_money, format_multiple};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ForecastState {
    pub snapshot: RwSignal<ProjectionInputs>,
    pub result: Memo<FunnelResult>,
    pub rows: Memo<Vec<MonthlyProjectionRow>>,
    pub summary: Memo<ProjectionSummary>,
    pub kpis: Memo<Vec<KpiCard>>,
}

impl ForecastState {
    pub fn new(initial: ProjectionInputs) -> Self {
        let snapshot = RwSignal::new(initial);
        let result = Memo::new(move |_| compute(&snapshot.get().funnel));
        let rows = Memo::new(move |_| project(&snapshot.get()));
        let summary = Memo::new(move |_| summarize(&rows.get()));
        let kpis = Memo::new(move |_| summary_kpis(&snapshot.get().funnel, &result.get()));

        Self {
            snapshot,
            result,
            rows,
            summary,
            kpis,
        }
    }

    pub fn read(&self, field: InputField) -> f64 {
        self.snapshot.with(|s| field.read(s))
    }

    pub fn set(&self, field: InputField, value: f64) {
        let next = self.snapshot.with_untracked(|s| field.apply(s, value));
        log::debug!("{:?} = {}", field, value);
        self.snapshot.set(next);
    }

    pub fn reset(&self) {
        log::info!("Forecaster reset to defaults");
        self.snapshot.set(ProjectionInputs::default());
    }
}

/// Read-only tile under a section's controls.
#[derive(Debug, Clone, PartialEq)]
pub struct StatTile {
    pub label: &'static str,
    pub value: String,
}

fn tile(label: &'static str, value: String) -> StatTile {
    StatTile { label, value }
}

/// Stat tiles displayed in a section for the current result.
pub fn section_stats(section: Section, r: &FunnelResult) -> Vec<StatTile> {
    match section {
        Section::Ads => vec![
            tile("# Clicks", format_count(r.clicks)),
            tile("Impressions (est.)", format_count(r.impressions)),
        ],
        Section::Lead => vec![
            tile("# of Leads", format_count(r.leads)),
            tile("CPL", format_money(r.cost_per_lead)),
        ],
        Section::Sales => vec![
            tile("# Booked calls", format_count(r.booked)),
            tile("# Show calls", format_count(r.shows)),
            tile("# Closed deals", format_count(r.deals)),
            tile("Cost per show", format_money(r.cost_per_show)),
            tile("Cost per acquisition", format_money(r.cost_per_acquisition)),
        ],
        Section::Rentability => vec![
            tile("Revenue", format_money(r.revenue)),
            tile("New Cash collected from closes", format_money(r.new_cash_collected)),
            tile("Cash collected", format_money(r.cash_collected)),
            tile("ROAS (Revenue)", format_multiple(r.roas_revenue)),
            tile("ROAS (New Cash)", format_multiple(r.roas_new_cash)),
            tile("ROAS (Cash collected)", format_multiple(r.roas_cash_collected)),
        ],
        Section::Offer | Section::Scenario | Section::Projection => Vec::new(),
    }
}
