use contracts::dashboards::d410_funnel_forecast::fields::fields_in;
use contracts::dashboards::d410_funnel_forecast::{MonthlyProjectionRow, Section};
use contracts::shared::number_format::{format_count, format_money, format_multiple};
use leptos::prelude::*;
use thaw::*;

use super::super::state::ForecastState;
use super::controls::FieldControl;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::export::CsvExportable;

impl CsvExportable for MonthlyProjectionRow {
    fn headers() -> Vec<&'static str> {
        vec![
            "Month", "Spend", "Clicks", "Leads", "Booked", "Shows", "Deals", "Revenue",
            "New Cash", "ROAS Rev",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        let f = &self.funnel;
        vec![
            self.month.to_string(),
            format!("{:.2}", self.spend),
            format!("{:.2}", f.clicks),
            format!("{:.2}", f.leads),
            format!("{:.2}", f.booked),
            format!("{:.2}", f.shows),
            format!("{:.2}", f.deals),
            format!("{:.2}", f.revenue),
            format!("{:.2}", f.new_cash_collected),
            format!("{:.2}", f.roas_revenue),
        ]
    }
}

/// Month-by-month projection: spend growth controls, the table and its totals.
#[component]
pub fn ProjectionCard(state: ForecastState, #[prop(optional)] delay_ms: u32) -> impl IntoView {
    let controls = fields_in(Section::Projection)
        .map(|field| view! { <FieldControl state=state field=field /> })
        .collect_view();

    let rows_view = move || {
        state
            .rows
            .get()
            .into_iter()
            .map(|row| {
                let f = row.funnel;
                view! {
                    <TableRow>
                        <TableCell>{row.month}</TableCell>
                        <TableCell class="table__cell--number">{format_money(row.spend)}</TableCell>
                        <TableCell class="table__cell--number">{format_count(f.clicks)}</TableCell>
                        <TableCell class="table__cell--number">{format_count(f.leads)}</TableCell>
                        <TableCell class="table__cell--number">{format_count(f.booked)}</TableCell>
                        <TableCell class="table__cell--number">{format_count(f.shows)}</TableCell>
                        <TableCell class="table__cell--number">{format_count(f.deals)}</TableCell>
                        <TableCell class="table__cell--number">{format_money(f.revenue)}</TableCell>
                        <TableCell class="table__cell--number">{format_money(f.new_cash_collected)}</TableCell>
                        <TableCell class="table__cell--number">{format_multiple(f.roas_revenue)}</TableCell>
                    </TableRow>
                }
            })
            .collect_view()
    };

    let totals_view = move || {
        let s = state.summary.get();
        view! {
            <TableRow class="table__totals-row">
                <TableCell>{format!("Total ({} mo.)", s.months)}</TableCell>
                <TableCell class="table__cell--number">{format_money(s.total_spend)}</TableCell>
                <TableCell></TableCell>
                <TableCell></TableCell>
                <TableCell></TableCell>
                <TableCell></TableCell>
                <TableCell class="table__cell--number">{format_count(s.total_deals)}</TableCell>
                <TableCell class="table__cell--number">{format_money(s.total_revenue)}</TableCell>
                <TableCell class="table__cell--number">{format_money(s.total_new_cash)}</TableCell>
                <TableCell class="table__cell--number">{format_multiple(s.blended_roas)}</TableCell>
            </TableRow>
        }
    };

    view! {
        <CardAnimated title=Section::Projection.title() delay_ms=delay_ms>
            <div class="section__controls section__controls--inline">{controls}</div>
            <div class="projection__table">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Month"</TableHeaderCell>
                            <TableHeaderCell>"Spend"</TableHeaderCell>
                            <TableHeaderCell>"Clicks"</TableHeaderCell>
                            <TableHeaderCell>"Leads"</TableHeaderCell>
                            <TableHeaderCell>"Booked"</TableHeaderCell>
                            <TableHeaderCell>"Shows"</TableHeaderCell>
                            <TableHeaderCell>"Deals"</TableHeaderCell>
                            <TableHeaderCell>"Revenue"</TableHeaderCell>
                            <TableHeaderCell>"New Cash"</TableHeaderCell>
                            <TableHeaderCell>"ROAS Rev"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {rows_view}
                        {totals_view}
                    </TableBody>
                </Table>
            </div>
        </CardAnimated>
    }
}
