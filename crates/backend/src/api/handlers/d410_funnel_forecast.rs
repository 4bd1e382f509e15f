use axum::extract::State;
use axum::Json;
use contracts::dashboards::d410_funnel_forecast::fields::{control_catalog, ControlDescriptor};
use contracts::dashboards::d410_funnel_forecast::kpi::summary_kpis;
use contracts::dashboards::d410_funnel_forecast::*;

use crate::routes::AppState;
use crate::shared::error::ApiError;

/// GET /api/d410/defaults
///
/// The snapshot the page's reset button restores.
pub async fn get_defaults() -> Json<ProjectionInputs> {
    Json(ProjectionInputs::default())
}

/// GET /api/d410/controls
pub async fn get_controls() -> Json<Vec<ControlDescriptor>> {
    Json(control_catalog())
}

/// POST /api/d410/compute
pub async fn compute_funnel(Json(inputs): Json<FunnelInputs>) -> Json<FunnelComputeResponse> {
    let result = compute(&inputs);
    let kpis = summary_kpis(&inputs, &result);

    tracing::debug!(
        "D410: spend {} → {:.2} deals, revenue {:.2}",
        inputs.ad_spend,
        result.deals,
        result.revenue
    );

    Json(FunnelComputeResponse { result, kpis })
}

/// POST /api/d410/project
///
/// Rejects horizons above `limits.max_horizon_months` before materialising rows.
pub async fn project_growth(
    State(state): State<AppState>,
    Json(inputs): Json<ProjectionInputs>,
) -> Result<Json<ProjectionResponse>, ApiError> {
    let limit = state.max_horizon_months;
    if inputs.horizon_months > f64::from(limit) {
        return Err(ApiError::HorizonTooLong {
            requested: inputs.horizon_months,
            limit,
        });
    }

    let rows = project(&inputs);
    let summary = summarize(&rows);

    tracing::info!(
        "D410: projected {} months, total revenue {:.2}",
        summary.months,
        summary.total_revenue
    );

    Ok(Json(ProjectionResponse { rows, summary }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> State<AppState> {
        State(AppState {
            max_horizon_months: 60,
        })
    }

    fn example() -> FunnelInputs {
        FunnelInputs {
            offer_price: 7000.0,
            ad_spend: 10_000.0,
            cost_per_click: 2.5,
            click_through_rate: 0.015,
            opt_in_rate: 0.35,
            booking_rate: 0.20,
            show_rate: 0.70,
            close_rate: 0.25,
            cash_collected_rate: 0.60,
            rate_boost: 0.0,
        }
    }

    #[tokio::test]
    async fn test_compute_returns_result_and_kpis() {
        let Json(resp) = compute_funnel(Json(example())).await;

        assert!((resp.result.revenue - 343_000.0).abs() < 1e-6);
        assert_eq!(resp.kpis.len(), 4);
        assert_eq!(resp.kpis[0].formatted_value(), "$343,000");
    }

    #[tokio::test]
    async fn test_compute_serializes_sentinels_as_null() {
        let Json(resp) = compute_funnel(Json(FunnelInputs::default())).await;
        let json = serde_json::to_value(&resp).unwrap();

        assert!(json["result"]["cost_per_lead"].is_null());
        assert_eq!(json["result"]["revenue"], 0.0);
    }

    #[tokio::test]
    async fn test_project_spend_series() {
        let inputs = ProjectionInputs {
            funnel: FunnelInputs {
                ad_spend: 1000.0,
                cost_per_click: 2.0,
                ..example()
            },
            monthly_ad_increment: 500.0,
            horizon_months: 3.0,
        };

        let Json(resp) = project_growth(state(), Json(inputs)).await.unwrap();
        let spend: Vec<f64> = resp.rows.iter().map(|r| r.spend).collect();

        assert_eq!(spend, vec![1000.0, 1500.0, 2000.0]);
        assert_eq!(resp.summary.months, 3);
        assert_eq!(resp.summary.total_spend, 4500.0);
    }

    #[tokio::test]
    async fn test_project_rejects_long_horizon() {
        let inputs = ProjectionInputs {
            horizon_months: 61.0,
            ..Default::default()
        };

        let err = project_growth(state(), Json(inputs)).await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::HorizonTooLong {
                limit: 60,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_defaults_and_controls() {
        let Json(defaults) = get_defaults().await;
        assert_eq!(defaults.horizon_months, DEFAULT_HORIZON_MONTHS);
        assert_eq!(defaults.funnel, FunnelInputs::default());

        let Json(controls) = get_controls().await;
        assert_eq!(controls.len(), InputField::ALL.len());
    }
}
