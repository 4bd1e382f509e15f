//! Growth Projector: month-by-month funnel snapshots under a linearly growing spend.

use super::calculator::run_pipeline;
use super::dto::{EffectiveRates, MonthlyProjectionRow, ProjectionInputs, ProjectionSummary};

/// Project the funnel over `inputs.row_count()` months.
///
/// Month `i` (0-indexed) spends `ad_spend + monthly_ad_increment * i`; every
/// rate stays fixed across the horizon. Rows come back in month order.
pub fn project(inputs: &ProjectionInputs) -> Vec<MonthlyProjectionRow> {
    let rates = EffectiveRates::from_inputs(&inputs.funnel);
    let months = inputs.row_count();

    let mut rows = Vec::with_capacity(months);
    for index in 0..months {
        let spend = inputs.spend_for_month(index);
        rows.push(MonthlyProjectionRow {
            month: index as u32 + 1,
            spend,
            funnel: run_pipeline(spend, &inputs.funnel, &rates),
        });
    }
    rows
}

/// Totals across the projected months.
pub fn summarize(rows: &[MonthlyProjectionRow]) -> ProjectionSummary {
    let mut summary = rows
        .iter()
        .fold(ProjectionSummary::default(), |mut acc, row| {
            acc.total_spend += row.spend;
            acc.total_deals += row.funnel.deals;
            acc.total_revenue += row.funnel.revenue;
            acc.total_new_cash += row.funnel.new_cash_collected;
            acc
        });

    summary.months = rows.len() as u32;
    summary.blended_roas = if summary.total_spend > 0.0 {
        summary.total_revenue / summary.total_spend
    } else {
        0.0
    };
    summary
}
