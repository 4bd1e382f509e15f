//! Каталог редактируемых полей калькулятора.
//!
//! Every control on the page is described by an [`InputField`]: where its value
//! lives in the snapshot, which widget renders it and its range/step.

use serde::{Deserialize, Serialize};

use super::dto::ProjectionInputs;

/// One user-adjustable input of the forecaster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    OfferPrice,
    AdSpend,
    CostPerClick,
    ClickThroughRate,
    OptInRate,
    BookingRate,
    ShowRate,
    CloseRate,
    CashCollectedRate,
    RateBoost,
    MonthlyAdIncrement,
    HorizonMonths,
}

/// Widget used to edit a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Widget {
    /// Numeric field with a currency prefix
    Money,
    /// Fraction slider displayed as a percentage
    Percent,
    /// Signed fraction slider (scenario boost)
    Signed,
    /// Integer slider
    Months,
}

/// Page section a control belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Offer,
    Ads,
    Lead,
    Sales,
    Rentability,
    Scenario,
    Projection,
}

impl Section {
    pub fn title(&self) -> &'static str {
        match self {
            Section::Offer => "Offer Level",
            Section::Ads => "Ads Level",
            Section::Lead => "Lead Level",
            Section::Sales => "Sales Level",
            Section::Rentability => "Rentability Level",
            Section::Scenario => "Scenario",
            Section::Projection => "Monthly projection (spend growth)",
        }
    }
}

/// Range and step of a control.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ControlSpec {
    pub label: &'static str,
    pub widget: Widget,
    pub min: f64,
    /// `None` for open-ended numeric fields
    pub max: Option<f64>,
    pub step: f64,
}

/// Catalogue entry returned by `GET /api/d410/controls`
#[derive(Debug, Clone, Serialize)]
pub struct ControlDescriptor {
    pub field: InputField,
    pub section: Section,
    pub control: ControlSpec,
}

impl InputField {
    /// All fields in page order.
    pub const ALL: [InputField; 12] = [
        InputField::OfferPrice,
        InputField::AdSpend,
        InputField::CostPerClick,
        InputField::ClickThroughRate,
        InputField::OptInRate,
        InputField::BookingRate,
        InputField::ShowRate,
        InputField::CloseRate,
        InputField::CashCollectedRate,
        InputField::RateBoost,
        InputField::MonthlyAdIncrement,
        InputField::HorizonMonths,
    ];

    pub fn section(&self) -> Section {
        match self {
            InputField::OfferPrice => Section::Offer,
            InputField::AdSpend | InputField::CostPerClick | InputField::ClickThroughRate => {
                Section::Ads
            }
            InputField::OptInRate => Section::Lead,
            InputField::BookingRate | InputField::ShowRate | InputField::CloseRate => {
                Section::Sales
            }
            InputField::CashCollectedRate => Section::Rentability,
            InputField::RateBoost => Section::Scenario,
            InputField::MonthlyAdIncrement | InputField::HorizonMonths => Section::Projection,
        }
    }

    pub fn control(&self) -> ControlSpec {
        match self {
            InputField::OfferPrice => money("Offer price", 100.0),
            InputField::AdSpend => money("Ad spend", 100.0),
            InputField::CostPerClick => money("Cost per click (CPC)", 0.1),
            InputField::ClickThroughRate => percent("CTR", 0.2, 0.001),
            InputField::OptInRate => percent("Opt-In Rate", 1.0, 0.005),
            InputField::BookingRate => percent("Booking rate (out of leads)", 1.0, 0.005),
            InputField::ShowRate => percent("Show up rate", 1.0, 0.005),
            InputField::CloseRate => percent("Closing rate", 1.0, 0.005),
            InputField::CashCollectedRate => {
                percent("Cash collected rate (from revenue)", 1.0, 0.01)
            }
            InputField::RateBoost => ControlSpec {
                label: "Rate boost (all conversion rates)",
                widget: Widget::Signed,
                min: -0.5,
                max: Some(0.5),
                step: 0.01,
            },
            InputField::MonthlyAdIncrement => money("Monthly spend increase", 100.0),
            InputField::HorizonMonths => ControlSpec {
                label: "Number of months",
                widget: Widget::Months,
                min: 1.0,
                max: Some(60.0),
                step: 1.0,
            },
        }
    }

    /// Current value of the field in `snapshot`.
    pub fn read(&self, snapshot: &ProjectionInputs) -> f64 {
        let f = &snapshot.funnel;
        match self {
            InputField::OfferPrice => f.offer_price,
            InputField::AdSpend => f.ad_spend,
            InputField::CostPerClick => f.cost_per_click,
            InputField::ClickThroughRate => f.click_through_rate,
            InputField::OptInRate => f.opt_in_rate,
            InputField::BookingRate => f.booking_rate,
            InputField::ShowRate => f.show_rate,
            InputField::CloseRate => f.close_rate,
            InputField::CashCollectedRate => f.cash_collected_rate,
            InputField::RateBoost => f.rate_boost,
            InputField::MonthlyAdIncrement => snapshot.monthly_ad_increment,
            InputField::HorizonMonths => snapshot.horizon_months,
        }
    }

    /// New snapshot with this field set to `value`; `snapshot` is left untouched.
    pub fn apply(&self, snapshot: &ProjectionInputs, value: f64) -> ProjectionInputs {
        let mut next = *snapshot;
        let f = &mut next.funnel;
        match self {
            InputField::OfferPrice => f.offer_price = value,
            InputField::AdSpend => f.ad_spend = value,
            InputField::CostPerClick => f.cost_per_click = value,
            InputField::ClickThroughRate => f.click_through_rate = value,
            InputField::OptInRate => f.opt_in_rate = value,
            InputField::BookingRate => f.booking_rate = value,
            InputField::ShowRate => f.show_rate = value,
            InputField::CloseRate => f.close_rate = value,
            InputField::CashCollectedRate => f.cash_collected_rate = value,
            InputField::RateBoost => f.rate_boost = value,
            InputField::MonthlyAdIncrement => next.monthly_ad_increment = value,
            InputField::HorizonMonths => next.horizon_months = value,
        }
        next
    }

    pub fn descriptor(&self) -> ControlDescriptor {
        ControlDescriptor {
            field: *self,
            section: self.section(),
            control: self.control(),
        }
    }
}

/// Fields of one page section, in page order.
pub fn fields_in(section: Section) -> impl Iterator<Item = InputField> {
    InputField::ALL
        .into_iter()
        .filter(move |field| field.section() == section)
}

pub fn control_catalog() -> Vec<ControlDescriptor> {
    InputField::ALL.iter().map(InputField::descriptor).collect()
}

fn money(label: &'static str, step: f64) -> ControlSpec {
    ControlSpec {
        label,
        widget: Widget::Money,
        min: 0.0,
        max: None,
        step,
    }
}

fn percent(label: &'static str, max: f64, step: f64) -> ControlSpec {
    ControlSpec {
        label,
        widget: Widget::Percent,
        min: 0.0,
        max: Some(max),
        step,
    }
}
