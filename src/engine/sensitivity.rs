//! Interest-rate sensitivity of the cash-flow stream
//!
//! Macaulay-style duration (modified by a further division by 1 + r) and
//! convexity relative to the computed present value. Reported for risk
//! display only; neither feeds back into the price.

/// Modified duration of `cash_flows` (first element pays at t = 1)
pub fn duration(cash_flows: &[f64], discount_rate: f64, present_value: f64) -> f64 {
    let mut weighted_time = 0.0;

    for (i, &cf) in cash_flows.iter().enumerate() {
        let t = (i + 1) as f64;
        let pv = cf / (1.0 + discount_rate).powf(t);
        weighted_time += t * pv / present_value;
    }

    weighted_time / (1.0 + discount_rate)
}

/// Convexity of `cash_flows` (first element pays at t = 1)
pub fn convexity(cash_flows: &[f64], discount_rate: f64, present_value: f64) -> f64 {
    let mut convexity = 0.0;

    for (i, &cf) in cash_flows.iter().enumerate() {
        let t = (i + 1) as f64;
        let pv = cf / (1.0 + discount_rate).powf(t);
        convexity += pv / present_value * t * (t + 1.0);
    }

    convexity / (1.0 + discount_rate).powi(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_single_flow_duration() {
        // One payment at t = 1 whose PV equals the reference value:
        // weight = 1, so duration = 1 / (1 + r)
        let r = 0.05;
        let cf = 1_050.0;
        let pv = cf / (1.0 + r);
        assert_relative_eq!(duration(&[cf], r, pv), 1.0 / 1.05, epsilon = 1e-12);
    }

    #[test]
    fn test_single_flow_convexity() {
        // weight = 1 at t = 1: convexity = 1 * 2 / (1 + r)^2
        let r = 0.05;
        let cf = 1_050.0;
        let pv = cf / (1.0 + r);
        assert_relative_eq!(convexity(&[cf], r, pv), 2.0 / 1.05_f64.powi(2), epsilon = 1e-12);
    }

    #[test]
    fn test_later_flows_lengthen_duration() {
        let r = 0.045;
        let near = [1_000.0, 0.0, 0.0];
        let far = [0.0, 0.0, 1_000.0];
        let pv_near: f64 = 1_000.0 / 1.045;
        let pv_far: f64 = 1_000.0 / 1.045_f64.powi(3);

        assert!(duration(&far, r, pv_far) > duration(&near, r, pv_near));
        assert!(convexity(&far, r, pv_far) > convexity(&near, r, pv_near));
    }

    #[test]
    fn test_level_stream_duration_within_term() {
        let flows = vec![100.0; 10];
        let r: f64 = 0.045;
        let pv: f64 = flows
            .iter()
            .enumerate()
            .map(|(i, &cf)| cf / (1.0 + r).powf((i + 1) as f64))
            .sum();
        let d = duration(&flows, r, pv);
        assert!(d > 0.0 && d < 10.0);
    }
}
