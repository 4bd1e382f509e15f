use axum::Json;
use contracts::dashboards::d410_funnel_forecast::kpi;
use contracts::shared::indicators::*;

/// GET /api/indicators/meta
///
/// Returns the catalogue of headline KPIs shown above the calculator.
pub async fn get_indicator_catalog() -> Json<IndicatorCatalogResponse> {
    Json(kpi::build_catalog())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_catalog_lists_headline_kpis() {
        let Json(catalog) = get_indicator_catalog().await;
        let ids: Vec<&str> = catalog.indicators.iter().map(|m| m.id.0.as_str()).collect();

        assert_eq!(
            ids,
            vec![
                "funnel_revenue",
                "funnel_new_cash",
                "funnel_roas_revenue",
                "funnel_roas_new_cash"
            ]
        );
    }
}
