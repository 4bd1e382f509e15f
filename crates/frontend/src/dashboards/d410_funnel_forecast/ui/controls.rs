use contracts::dashboards::d410_funnel_forecast::fields::fields_in;
use contracts::dashboards::d410_funnel_forecast::{InputField, Section, Widget};
use contracts::shared::number_format::format_percent;
use leptos::prelude::*;

use super::super::state::{section_stats, ForecastState};
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::stat_tile::StatTile;
use crate::shared::components::ui::{NumberField, Slider};

fn format_months(v: f64) -> String {
    format!("{}", v.round() as i64)
}

/// One control, picked from the field's widget.
#[component]
pub fn FieldControl(state: ForecastState, field: InputField) -> impl IntoView {
    let spec = field.control();
    let value = Signal::derive(move || state.read(field));
    let on_change = Callback::new(move |v: f64| state.set(field, v));

    match spec.widget {
        Widget::Money => view! {
            <NumberField
                label=spec.label
                value=value
                on_change=on_change
                prefix="$"
                step=spec.step
                min=spec.min
            />
        }
        .into_any(),
        Widget::Percent | Widget::Signed => view! {
            <Slider
                label=spec.label
                value=value
                on_change=on_change
                min=spec.min
                max=spec.max.unwrap_or(1.0)
                step=spec.step
                display=format_percent
            />
        }
        .into_any(),
        Widget::Months => view! {
            <Slider
                label=spec.label
                value=value
                on_change=on_change
                min=spec.min
                max=spec.max.unwrap_or(60.0)
                step=spec.step
                display=format_months
                integer=true
            />
        }
        .into_any(),
    }
}

/// Section card: its controls followed by its stat tiles.
#[component]
pub fn SectionCard(
    state: ForecastState,
    section: Section,
    #[prop(optional)] delay_ms: u32,
) -> impl IntoView {
    let controls = fields_in(section)
        .map(|field| view! { <FieldControl state=state field=field /> })
        .collect_view();

    let stats = Memo::new(move |_| section_stats(section, &state.result.get()));
    let tile_count = section_stats(section, &state.result.get_untracked()).len();

    let tiles = (0..tile_count)
        .map(|i| {
            let label = stats.with_untracked(|s| s[i].label);
            let value = Signal::derive(move || {
                stats.with(|s| s.get(i).map(|t| t.value.clone()).unwrap_or_default())
            });
            view! { <StatTile label=label value=value /> }
        })
        .collect_view();

    view! {
        <CardAnimated title=section.title() delay_ms=delay_ms>
            <div class="section__controls">{controls}</div>
            {(tile_count > 0).then(|| view! { <div class="section__stats">{tiles}</div> })}
        </CardAnimated>
    }
}

/// Scenario card: the boost slider plus a short explanation.
#[component]
pub fn ScenarioCard(state: ForecastState, #[prop(optional)] delay_ms: u32) -> impl IntoView {
    let boost = Signal::derive(move || state.read(InputField::RateBoost));

    view! {
        <CardAnimated title=Section::Scenario.title() delay_ms=delay_ms>
            <FieldControl state=state field=InputField::RateBoost />
            <div class="scenario__current">
                "Current boost: "
                <span class="scenario__value">{move || format_percent(boost.get())}</span>
            </div>
            <div class="scenario__hint">
                "Drag to see the effect of a global improvement or deterioration of your rates \
                 (opt-in, booking, show, close). Every KPI is recalculated instantly."
            </div>
        </CardAnimated>
    }
}
