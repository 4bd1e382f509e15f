//! Property tests for the funnel calculator and the growth projector.

use contracts::dashboards::d410_funnel_forecast::{
    compute, project, FunnelInputs, ProjectionInputs,
};
use proptest::prelude::*;

fn rate() -> impl Strategy<Value = f64> {
    0.0..=1.0f64
}

fn funnel_strategy() -> impl Strategy<Value = FunnelInputs> {
    (
        (0.0..50_000.0f64, 0.0..1_000_000.0f64, 0.01..50.0f64, 0.001..0.2f64),
        (rate(), rate(), rate(), rate(), rate()),
        -0.5..=0.5f64,
    )
        .prop_map(
            |(
                (offer_price, ad_spend, cost_per_click, click_through_rate),
                (opt_in_rate, booking_rate, show_rate, close_rate, cash_collected_rate),
                rate_boost,
            )| FunnelInputs {
                offer_price,
                ad_spend,
                cost_per_click,
                click_through_rate,
                opt_in_rate,
                booking_rate,
                show_rate,
                close_rate,
                cash_collected_rate,
                rate_boost,
            },
        )
}

proptest! {
    /// Property: clicks are spend / CPC whenever both are positive.
    #[test]
    fn clicks_are_spend_over_cpc(inputs in funnel_strategy()) {
        let r = compute(&inputs);
        if inputs.ad_spend > 0.0 {
            prop_assert_eq!(r.clicks, inputs.ad_spend / inputs.cost_per_click);
        } else {
            prop_assert_eq!(r.clicks, 0.0);
        }
    }

    /// Property: zero CPC buys zero clicks.
    #[test]
    fn zero_cpc_means_zero_clicks(inputs in funnel_strategy()) {
        let r = compute(&FunnelInputs { cost_per_click: 0.0, ..inputs });
        prop_assert_eq!(r.clicks, 0.0);
        prop_assert_eq!(r.deals, 0.0);
    }

    /// Property: without spend every count, money figure and ROAS is zero.
    #[test]
    fn zero_spend_propagates(inputs in funnel_strategy()) {
        let r = compute(&FunnelInputs { ad_spend: 0.0, ..inputs });
        for value in [
            r.clicks, r.leads, r.booked, r.shows, r.deals,
            r.revenue, r.new_cash_collected, r.roas_revenue, r.roas_new_cash,
        ] {
            prop_assert_eq!(value, 0.0);
        }
    }

    /// Property: effective rates are never negative, whatever the boost.
    #[test]
    fn effective_rates_never_negative(
        inputs in funnel_strategy(),
        boost in -5.0..5.0f64,
    ) {
        let r = compute(&FunnelInputs { rate_boost: boost, ..inputs });
        prop_assert!(r.rates.opt_in >= 0.0);
        prop_assert!(r.rates.booking >= 0.0);
        prop_assert!(r.rates.show >= 0.0);
        prop_assert!(r.rates.close >= 0.0);
        if boost < -1.0 {
            prop_assert_eq!(r.rates.opt_in, 0.0);
            prop_assert_eq!(r.deals, 0.0);
        }
    }

    /// Property: more spend never means fewer leads, deals or revenue.
    #[test]
    fn spend_is_monotonic(inputs in funnel_strategy(), extra in 1.0..100_000.0f64) {
        let low = compute(&inputs);
        let high = compute(&FunnelInputs { ad_spend: inputs.ad_spend + extra, ..inputs });

        prop_assert!(high.clicks > low.clicks);
        prop_assert!(high.leads >= low.leads);
        prop_assert!(high.booked >= low.booked);
        prop_assert!(high.shows >= low.shows);
        prop_assert!(high.deals >= low.deals);
        prop_assert!(high.revenue >= low.revenue);
    }

    /// Property: non-negative inputs give non-negative outputs.
    #[test]
    fn outputs_are_non_negative(inputs in funnel_strategy()) {
        let r = compute(&inputs);
        for value in [
            r.clicks, r.impressions, r.leads, r.cost_per_lead, r.booked, r.shows,
            r.cost_per_show, r.deals, r.cost_per_acquisition, r.revenue,
            r.new_cash_collected, r.roas_revenue, r.roas_new_cash,
        ] {
            prop_assert!(value >= 0.0);
        }
    }

    /// Property: cost-per-X is non-finite exactly when its denominator is zero.
    #[test]
    fn sentinels_match_denominators(inputs in funnel_strategy()) {
        let r = compute(&inputs);
        prop_assert_eq!(r.cost_per_lead.is_finite(), r.leads > 0.0);
        prop_assert_eq!(r.cost_per_show.is_finite(), r.shows > 0.0);
        prop_assert_eq!(r.cost_per_acquisition.is_finite(), r.deals > 0.0);
    }

    /// Property: projection length and spend series follow the horizon and increment.
    #[test]
    fn projection_shape(
        funnel in funnel_strategy(),
        increment in 0.0..10_000.0f64,
        horizon in -3.0..72.0f64,
    ) {
        let inputs = ProjectionInputs {
            funnel,
            monthly_ad_increment: increment,
            horizon_months: horizon,
        };
        let rows = project(&inputs);

        let expected_len = (horizon.floor() as i64).max(1) as usize;
        prop_assert_eq!(rows.len(), expected_len);

        for (i, row) in rows.iter().enumerate() {
            prop_assert_eq!(row.month as usize, i + 1);
            prop_assert_eq!(row.spend, funnel.ad_spend + increment * i as f64);
            prop_assert_eq!(row.funnel.rates, rows[0].funnel.rates);
        }
    }
}
