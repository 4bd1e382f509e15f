use serde::{Deserialize, Serialize};

/// Point-in-time business inputs of the funnel (one month of activity).
///
/// All figures are expected non-negative; rates are fractions and are not
/// clamped on input. `rate_boost` is a signed delta in `[-0.5, 0.5]` applied
/// to the four stage-conversion rates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FunnelInputs {
    /// Price per closed deal
    pub offer_price: f64,
    pub ad_spend: f64,
    pub cost_per_click: f64,
    /// Clicks / impressions
    pub click_through_rate: f64,
    /// Leads / clicks
    pub opt_in_rate: f64,
    /// Booked calls / leads
    pub booking_rate: f64,
    /// Shows / booked calls
    pub show_rate: f64,
    /// Deals / shows
    pub close_rate: f64,
    /// Portion of revenue collected immediately
    pub cash_collected_rate: f64,
    pub rate_boost: f64,
}

/// Default horizon of the growth projection (reset target).
pub const DEFAULT_HORIZON_MONTHS: f64 = 12.0;

/// Inputs of the growth projection: the funnel snapshot plus spend growth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInputs {
    #[serde(flatten)]
    pub funnel: FunnelInputs,
    /// Added to the spend for every elapsed month. Negative values are not
    /// rejected and simply produce a decreasing spend series.
    pub monthly_ad_increment: f64,
    pub horizon_months: f64,
}

impl Default for ProjectionInputs {
    fn default() -> Self {
        Self {
            funnel: FunnelInputs::default(),
            monthly_ad_increment: 0.0,
            horizon_months: DEFAULT_HORIZON_MONTHS,
        }
    }
}

impl ProjectionInputs {
    /// Number of rows the projection materialises: `max(1, floor(horizon))`.
    ///
    /// A NaN or infinite horizon collapses to a single row.
    pub fn row_count(&self) -> usize {
        let horizon = self.horizon_months;
        if !horizon.is_finite() || horizon < 1.0 {
            return 1;
        }
        horizon.floor() as usize
    }

    /// Spend of the 0-indexed month `index`.
    pub fn spend_for_month(&self, index: usize) -> f64 {
        self.funnel.ad_spend + self.monthly_ad_increment * index as f64
    }
}

/// Stage-conversion rates after the scenario boost, floored at zero.
///
/// Rates are not capped at 1: a boosted rate above 1 propagates as is.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EffectiveRates {
    pub opt_in: f64,
    pub booking: f64,
    pub show: f64,
    pub close: f64,
}

impl EffectiveRates {
    pub fn from_inputs(inputs: &FunnelInputs) -> Self {
        let boost = inputs.rate_boost;
        Self {
            opt_in: boosted(inputs.opt_in_rate, boost),
            booking: boosted(inputs.booking_rate, boost),
            show: boosted(inputs.show_rate, boost),
            close: boosted(inputs.close_rate, boost),
        }
    }
}

fn boosted(rate: f64, boost: f64) -> f64 {
    (rate * (1.0 + boost)).max(0.0)
}

/// Derived funnel metrics for one spend figure.
///
/// Cost-per-X ratios whose denominator is zero hold `f64::INFINITY`; on the
/// wire they travel as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FunnelResult {
    pub clicks: f64,
    pub impressions: f64,
    pub leads: f64,
    #[serde(with = "non_finite")]
    pub cost_per_lead: f64,
    pub booked: f64,
    pub shows: f64,
    #[serde(with = "non_finite")]
    pub cost_per_show: f64,
    pub deals: f64,
    #[serde(with = "non_finite")]
    pub cost_per_acquisition: f64,
    pub revenue: f64,
    pub new_cash_collected: f64,
    /// Same figure as `new_cash_collected`; kept as its own display field.
    pub cash_collected: f64,
    pub roas_revenue: f64,
    pub roas_new_cash: f64,
    /// Currently equal to `roas_new_cash`. There is no cash-collection timing
    /// model that would make the two differ.
    pub roas_cash_collected: f64,
    pub rates: EffectiveRates,
}

/// One month of the growth projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyProjectionRow {
    /// 1-based month index
    pub month: u32,
    pub spend: f64,
    pub funnel: FunnelResult,
}

/// Totals over the whole projection horizon.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub months: u32,
    pub total_spend: f64,
    pub total_deals: f64,
    pub total_revenue: f64,
    pub total_new_cash: f64,
    /// total revenue / total spend, 0 when nothing was spent
    pub blended_roas: f64,
}

/// Response of `POST /api/d410/compute`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunnelComputeResponse {
    pub result: FunnelResult,
    pub kpis: Vec<crate::shared::indicators::KpiCard>,
}

/// Response of `POST /api/d410/project`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResponse {
    pub rows: Vec<MonthlyProjectionRow>,
    pub summary: ProjectionSummary,
}

/// JSON has no infinity: non-finite values are written as `null` and `null`
/// is read back as `+inf`.
mod non_finite {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}
