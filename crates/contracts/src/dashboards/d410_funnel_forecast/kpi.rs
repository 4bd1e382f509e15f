//! Headline KPIs of the forecaster.

use crate::shared::indicators::*;
use crate::shared::number_format::{format_count, format_money, format_percent};

use super::dto::{FunnelInputs, FunnelResult};

/// Well-known indicator IDs (constants to avoid typos).
pub mod ids {
    use super::*;

    pub fn revenue() -> IndicatorId {
        IndicatorId::new("funnel_revenue")
    }
    pub fn new_cash() -> IndicatorId {
        IndicatorId::new("funnel_new_cash")
    }
    pub fn roas_revenue() -> IndicatorId {
        IndicatorId::new("funnel_roas_revenue")
    }
    pub fn roas_new_cash() -> IndicatorId {
        IndicatorId::new("funnel_roas_new_cash")
    }
}

/// Build the catalogue of headline indicators.
pub fn build_catalog() -> IndicatorCatalogResponse {
    let indicators = vec![
        IndicatorMeta {
            id: ids::revenue(),
            label: "Revenue".into(),
            format: ValueFormat::Money,
            description: Some("Closed deals × offer price".into()),
        },
        IndicatorMeta {
            id: ids::new_cash(),
            label: "New Cash Collected".into(),
            format: ValueFormat::Money,
            description: Some("Revenue × cash collected rate".into()),
        },
        IndicatorMeta {
            id: ids::roas_revenue(),
            label: "ROAS (Revenue)".into(),
            format: ValueFormat::Multiple,
            description: Some("Revenue / ad spend".into()),
        },
        IndicatorMeta {
            id: ids::roas_new_cash(),
            label: "ROAS (New Cash)".into(),
            format: ValueFormat::Multiple,
            description: Some("New cash collected / ad spend".into()),
        },
    ];

    IndicatorCatalogResponse { indicators }
}

/// The four headline cards for the current snapshot, in catalogue order.
pub fn summary_kpis(inputs: &FunnelInputs, result: &FunnelResult) -> Vec<KpiCard> {
    let subtitles = [
        format!("{} deals", format_count(result.deals)),
        format!("Cash rate {}", format_percent(inputs.cash_collected_rate)),
        format!("Spend {}", format_money(inputs.ad_spend)),
        format!("CPA {}", format_money(result.cost_per_acquisition)),
    ];
    let values = [
        result.revenue,
        result.new_cash_collected,
        result.roas_revenue,
        result.roas_new_cash,
    ];

    build_catalog()
        .indicators
        .into_iter()
        .zip(values)
        .zip(subtitles)
        .map(|((meta, value), subtitle)| KpiCard {
            meta,
            value,
            subtitle: Some(subtitle),
        })
        .collect()
}
