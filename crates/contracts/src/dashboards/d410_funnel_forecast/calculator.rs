//! Funnel Calculator: ad spend → clicks → leads → bookings → shows → deals → cash.

use super::dto::{EffectiveRates, FunnelInputs, FunnelResult};

/// Compute the instantaneous funnel metrics for the given inputs.
///
/// Total over its domain: zero spend or zero rates resolve to `0`, and
/// cost-per-X ratios without a denominator resolve to `f64::INFINITY`.
pub fn compute(inputs: &FunnelInputs) -> FunnelResult {
    let rates = EffectiveRates::from_inputs(inputs);
    run_pipeline(inputs.ad_spend, inputs, &rates)
}

/// Run every stage of the funnel against an arbitrary `spend`.
///
/// `spend` replaces `inputs.ad_spend` everywhere, including the ROAS and
/// cost-per-X divisions. The rates are passed in so the projector can
/// compute them once for all months.
pub fn run_pipeline(spend: f64, inputs: &FunnelInputs, rates: &EffectiveRates) -> FunnelResult {
    let clicks = if spend > 0.0 && inputs.cost_per_click > 0.0 {
        spend / inputs.cost_per_click
    } else {
        0.0
    };
    let impressions = if inputs.click_through_rate > 0.0 {
        clicks / inputs.click_through_rate
    } else {
        0.0
    };

    let leads = clicks * rates.opt_in;
    let booked = leads * rates.booking;
    let shows = booked * rates.show;
    let deals = shows * rates.close;

    let revenue = deals * inputs.offer_price;
    let new_cash_collected = revenue * inputs.cash_collected_rate;

    let roas_revenue = ratio_or_zero(revenue, spend);
    let roas_new_cash = ratio_or_zero(new_cash_collected, spend);

    FunnelResult {
        clicks,
        impressions,
        leads,
        cost_per_lead: cost_per(spend, leads),
        booked,
        shows,
        cost_per_show: cost_per(spend, shows),
        deals,
        cost_per_acquisition: cost_per(spend, deals),
        revenue,
        new_cash_collected,
        cash_collected: new_cash_collected,
        roas_revenue,
        roas_new_cash,
        roas_cash_collected: roas_new_cash,
        rates: *rates,
    }
}

fn cost_per(spend: f64, units: f64) -> f64 {
    if units > 0.0 {
        spend / units
    } else {
        f64::INFINITY
    }
}

fn ratio_or_zero(amount: f64, spend: f64) -> f64 {
    if spend > 0.0 {
        amount / spend
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        let tolerance = 1e-9 * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected}, got {actual}"
        );
    }

    fn sample_inputs() -> FunnelInputs {
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

    #[test]
    fn test_end_to_end_example() {
        let r = compute(&sample_inputs());

        assert_close(r.clicks, 4000.0);
        assert_close(r.impressions, 4000.0 / 0.015);
        assert_close(r.leads, 1400.0);
        assert_close(r.booked, 280.0);
        assert_close(r.shows, 196.0);
        assert_close(r.deals, 49.0);
        assert_close(r.revenue, 343_000.0);
        assert_close(r.new_cash_collected, 205_800.0);
        assert_close(r.roas_revenue, 34.3);
        assert_close(r.roas_new_cash, 20.58);
    }

    #[test]
    fn test_unit_economics() {
        let r = compute(&sample_inputs());

        assert_close(r.cost_per_lead, 10_000.0 / 1400.0);
        assert_close(r.cost_per_show, 10_000.0 / 196.0);
        assert_close(r.cost_per_acquisition, 10_000.0 / 49.0);
    }

    #[test]
    fn test_cash_collected_aliases_new_cash() {
        let r = compute(&sample_inputs());

        assert_eq!(r.cash_collected, r.new_cash_collected);
        assert_eq!(r.roas_cash_collected, r.roas_new_cash);
    }

    #[test]
    fn test_zero_spend_propagates_zero() {
        let inputs = FunnelInputs {
            ad_spend: 0.0,
            ..sample_inputs()
        };
        let r = compute(&inputs);

        for value in [
            r.clicks,
            r.impressions,
            r.leads,
            r.booked,
            r.shows,
            r.deals,
            r.revenue,
            r.new_cash_collected,
            r.roas_revenue,
            r.roas_new_cash,
        ] {
            assert_eq!(value, 0.0);
        }
        assert!(r.cost_per_lead.is_infinite());
        assert!(r.cost_per_show.is_infinite());
        assert!(r.cost_per_acquisition.is_infinite());
    }

    #[test]
    fn test_zero_cost_per_click_yields_no_clicks() {
        let inputs = FunnelInputs {
            cost_per_click: 0.0,
            ..sample_inputs()
        };
        let r = compute(&inputs);

        assert_eq!(r.clicks, 0.0);
        assert_eq!(r.leads, 0.0);
        // Spend is still positive, so ROAS is a real zero.
        assert_eq!(r.roas_revenue, 0.0);
    }

    #[test]
    fn test_zero_ctr_yields_no_impressions() {
        let inputs = FunnelInputs {
            click_through_rate: 0.0,
            ..sample_inputs()
        };
        let r = compute(&inputs);

        assert_eq!(r.impressions, 0.0);
        assert_close(r.clicks, 4000.0);
    }

    #[test]
    fn test_sentinels_follow_their_denominators() {
        // Leads exist but nobody books.
        let inputs = FunnelInputs {
            booking_rate: 0.0,
            ..sample_inputs()
        };
        let r = compute(&inputs);

        assert!(r.cost_per_lead.is_finite());
        assert!(r.cost_per_show.is_infinite());
        assert!(r.cost_per_acquisition.is_infinite());

        // Shows happen but nobody closes.
        let inputs = FunnelInputs {
            close_rate: 0.0,
            ..sample_inputs()
        };
        let r = compute(&inputs);

        assert!(r.cost_per_show.is_finite());
        assert!(r.cost_per_acquisition.is_infinite());
    }

    #[test]
    fn test_negative_boost_floors_rates() {
        let inputs = FunnelInputs {
            rate_boost: -1.2,
            ..sample_inputs()
        };
        let r = compute(&inputs);

        assert_eq!(r.rates.opt_in, 0.0);
        assert_eq!(r.leads, 0.0);
        assert_eq!(r.deals, 0.0);
    }

    #[test]
    fn test_boost_applies_to_all_four_rates() {
        let inputs = FunnelInputs {
            rate_boost: 0.1,
            ..sample_inputs()
        };
        let r = compute(&inputs);

        assert_close(r.rates.opt_in, 0.35 * 1.1);
        assert_close(r.rates.booking, 0.20 * 1.1);
        assert_close(r.rates.show, 0.70 * 1.1);
        assert_close(r.rates.close, 0.25 * 1.1);
        assert_close(r.deals, 4000.0 * 0.35 * 0.20 * 0.70 * 0.25 * 1.1_f64.powi(4));
    }

    #[test]
    fn test_rates_above_one_propagate() {
        let inputs = FunnelInputs {
            show_rate: 0.9,
            rate_boost: 0.5,
            ..sample_inputs()
        };
        let r = compute(&inputs);

        // Accepted behaviour: more shows than bookings.
        assert!(r.shows > r.booked);
    }

    #[test]
    fn test_run_pipeline_uses_given_spend() {
        let inputs = sample_inputs();
        let rates = EffectiveRates::from_inputs(&inputs);
        let r = run_pipeline(20_000.0, &inputs, &rates);

        assert_close(r.clicks, 8000.0);
        assert_close(r.cost_per_lead, 20_000.0 / 2800.0);
        assert_close(r.roas_revenue, 34.3);
    }
}
