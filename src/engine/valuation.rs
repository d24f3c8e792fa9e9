//! Valuation orchestrator
//!
//! A single deterministic forward pass per policy: resolve the insurer,
//! accumulate premiums, apply the MVA, discount the projected stream,
//! adjust for dividends, assemble the transfer premium, and score the
//! result. No branching back, no retries, no shared mutable state.

use super::{
    accumulation, dividend, mva, premium, present_value, scoring,
    result::{round_places, round_unit, UnknownInsurerInfo, ValuationBreakdown, ValuationResult},
    ValuationConfig,
};
use crate::error::ValuationError;
use crate::policy::PolicyInput;
use crate::reference::ReferenceData;
use log::debug;

/// Valuation engine bound to a reference-data snapshot and a config
#[derive(Debug, Clone)]
pub struct ValuationEngine {
    reference: ReferenceData,
    config: ValuationConfig,
}

impl ValuationEngine {
    /// Engine over a reference snapshot with the standard configuration
    pub fn new(reference: ReferenceData) -> Self {
        Self {
            reference,
            config: ValuationConfig::default(),
        }
    }

    /// Engine with an explicit configuration (alternate-scenario testing)
    pub fn with_config(reference: ReferenceData, config: ValuationConfig) -> Self {
        Self { reference, config }
    }

    /// Reference data in use
    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// Value a single policy.
    ///
    /// Fails only for an unknown product category; an unknown insurer is
    /// resolved via synthesis and flagged in the result.
    pub fn evaluate(&self, policy: &PolicyInput) -> Result<ValuationResult, ValuationError> {
        let product = self
            .reference
            .lookup_product(&policy.product_category)
            .ok_or_else(|| ValuationError::UnknownProductCategory {
                category: policy.product_category.clone(),
            })?
            .clone();

        let insurer = self.reference.resolve_insurer(&policy.insurer_name);
        let is_unknown_insurer = insurer.is_synthesized();
        let market = self.reference.market();

        // 1. Accumulate paid premiums to the valuation date
        let premiums = policy.premium_history();
        let accumulated_value = accumulation::accumulated_value(
            &premiums,
            policy.paid_years,
            insurer.disclosed_rate_current,
            &product,
        );
        debug!("accumulated value: {accumulated_value:.2}");

        // 2. Surrender value after the market value adjustment
        let surrender_value = mva::surrender_value(
            accumulated_value,
            insurer.disclosed_rate_prior,
            insurer.disclosed_rate_current,
            policy.remaining_months(),
        );
        debug!("surrender value: {surrender_value:.2}");

        // 3. Actuarial present value of the projected stream
        let cash_flows = present_value::projected_cash_flows(
            surrender_value,
            product.bonus_rate,
            policy.remaining_years(),
        );
        let actuarial_pv = present_value::actuarial_present_value(
            &cash_flows,
            market.risk_free_rate,
            self.config.assumed_age,
            insurer.persistence_rate,
        );
        debug!("actuarial present value: {actuarial_pv:.2}");

        // 4. Rate sensitivity (risk reporting only)
        let duration = super::sensitivity::duration(&cash_flows, market.risk_free_rate, actuarial_pv);
        let convexity =
            super::sensitivity::convexity(&cash_flows, market.risk_free_rate, actuarial_pv);

        // 5. Dividend performance adjustment
        let dividend_adjusted =
            dividend::adjust_for_dividends(actuarial_pv, insurer.dividend_performance, policy.paid_years);

        // 6. Transfer premium and final price
        let premium_rate = premium::transfer_premium_rate(
            policy.paid_years,
            &insurer,
            &product,
            market,
            &self.config,
        );
        let (transfer_value, platform_price) =
            premium::price(dividend_adjusted, premium_rate, &insurer, &self.config);
        debug!("transfer value: {transfer_value:.2} (premium rate {premium_rate:.4})");

        // 7. Scoring
        let confidence =
            scoring::confidence(policy.paid_years, policy.total_premium_paid, &insurer, duration);
        let risk_grade = scoring::risk_grade(&insurer, &product, duration);
        let probability_of_persistence =
            present_value::persistence_probability(policy.paid_years, insurer.persistence_rate);
        let expected_annualized_return = scoring::expected_annualized_return(
            transfer_value,
            policy.total_premium_paid,
            policy.paid_years,
            insurer.dividend_performance,
        );

        Ok(ValuationResult {
            accumulated_value: round_unit(accumulated_value),
            surrender_value: round_unit(surrender_value),
            actuarial_present_value: round_unit(actuarial_pv),
            transfer_value: round_unit(transfer_value),
            platform_price: round_unit(platform_price),
            confidence: round_places(confidence, 3),
            risk_grade,
            duration: round_places(duration, 2),
            convexity: round_places(convexity, 2),
            probability_of_persistence: round_places(probability_of_persistence, 3),
            expected_annualized_return: round_places(expected_annualized_return, 4),
            breakdown: ValuationBreakdown {
                accumulated_value: round_unit(accumulated_value),
                mva_adjustment: round_unit(accumulated_value - surrender_value),
                actuarial_pv: round_unit(actuarial_pv),
                transfer_premium_amount: round_unit(dividend_adjusted * premium_rate),
                final_adjustment: round_unit(transfer_value - dividend_adjusted),
            },
            is_unknown_insurer,
            unknown_insurer: insurer.synthetic_discount.map(|discount| UnknownInsurerInfo {
                discount_applied: discount,
                based_on_industry_average: true,
            }),
        })
    }
}
