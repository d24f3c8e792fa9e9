//! Actuarial present value of the projected cash-flow stream
//!
//! Discounts each cash flow by survival probability, persistence (non-lapse)
//! probability, and the risk-free rate. The survival curve is a flat-rate
//! life-table approximation keyed on an assumed policyholder age.

/// Annual survival probability approximation: `max(0.999 - (age-30)*0.0002, 0.95)`
fn annual_survival_base(age: u32) -> f64 {
    (0.999 - (age as f64 - 30.0) * 0.0002).max(0.95)
}

/// Probability of surviving `years` from the assumed age
pub fn survival_probability(age: u32, years: u32) -> f64 {
    annual_survival_base(age).powf(years as f64)
}

/// Probability the policy is still in force after `years`.
///
/// Lapse experience worsens slightly past year five: the base persistence
/// rate is haircut by 2 points before exponentiation.
pub fn persistence_probability(years: u32, base_rate: f64) -> f64 {
    let adjusted = if years > 5 { base_rate - 0.02 } else { base_rate };
    adjusted.powf(years as f64)
}

/// Present value of `cash_flows` (first element at t = 0) at `discount_rate`,
/// weighted by survival and persistence.
pub fn actuarial_present_value(
    cash_flows: &[f64],
    discount_rate: f64,
    age: u32,
    persistence_rate: f64,
) -> f64 {
    cash_flows
        .iter()
        .enumerate()
        .map(|(t, &cf)| {
            let t = t as u32;
            cf * survival_probability(age, t)
                * persistence_probability(t, persistence_rate)
                * (1.0 + discount_rate).powf(-(t as f64))
        })
        .sum()
}

/// Projected cash-flow vector for a policy: one bonus payout per remaining
/// year followed by the terminal surrender value.
pub fn projected_cash_flows(
    surrender_value: f64,
    bonus_rate: f64,
    remaining_years: u32,
) -> Vec<f64> {
    let mut flows = vec![surrender_value * bonus_rate; remaining_years as usize];
    flows.push(surrender_value);
    flows
}
