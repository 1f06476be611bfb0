//! Unit-economics formulas.
//!
//! Pure, deterministic functions over `f64`. Formulas with a division have a
//! guarded denominator and return `Result` - a zero or negative divisor is a
//! caller error, not a zero metric: CAC with zero acquired customers would
//! otherwise read as "free acquisition" on a dashboard. Identities with no
//! failure mode (`unit_margin`, `k_factor`, ...) return plain `f64`; negative
//! results are meaningful there (an unprofitable unit, shrinking MRR).
//!
//! Guards also reject NaN and infinite inputs, so a garbage value produced
//! upstream cannot flow through a formula and come out looking valid.

use thiserror::Error;

/// The denominator a guarded formula divides by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Divisor {
    NewCustomers,
    ChurnRate,
    Cac,
    MonthlyMargin,
    TotalCustomers,
    ActiveUsers,
    CohortSize,
    MonthlyBurn,
}

impl Divisor {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Divisor::NewCustomers => "new customer count",
            Divisor::ChurnRate => "churn rate",
            Divisor::Cac => "CAC",
            Divisor::MonthlyMargin => "monthly margin (ARPU x gross margin)",
            Divisor::TotalCustomers => "total customer count",
            Divisor::ActiveUsers => "active user count",
            Divisor::CohortSize => "cohort size",
            Divisor::MonthlyBurn => "monthly burn",
        }
    }
}

impl std::fmt::Display for Divisor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MetricError {
    #[error("{0} must be greater than zero")]
    NonPositiveDivisor(Divisor),
    #[error("metric inputs must be finite numbers")]
    NotFinite,
}

fn divide(numerator: f64, divisor: f64, which: Divisor) -> Result<f64, MetricError> {
    if !numerator.is_finite() || !divisor.is_finite() {
        return Err(MetricError::NotFinite);
    }
    if divisor <= 0.0 {
        return Err(MetricError::NonPositiveDivisor(which));
    }
    Ok(numerator / divisor)
}

/// Net income one unit leaves after direct costs. Negative means every sale
/// loses money.
#[must_use]
pub fn unit_margin(price: f64, cost: f64) -> f64 {
    price - cost
}

/// Customer Acquisition Cost: spend divided by customers acquired.
pub fn cac(spend: f64, new_customers: f64) -> Result<f64, MetricError> {
    divide(spend, new_customers, Divisor::NewCustomers)
}

/// Lifetime Value via churn: ARPU divided by the per-period churn fraction.
pub fn ltv(arpu: f64, churn_rate: f64) -> Result<f64, MetricError> {
    divide(arpu, churn_rate, Divisor::ChurnRate)
}

/// The LTV/CAC ratio. Healthy economics sit at 3 or above.
pub fn ltv_cac_ratio(ltv: f64, cac: f64) -> Result<f64, MetricError> {
    divide(ltv, cac, Divisor::Cac)
}

/// Months until acquisition spend is recovered from margin.
pub fn payback_period(cac: f64, arpu: f64, margin: f64) -> Result<f64, MetricError> {
    if !cac.is_finite() || !arpu.is_finite() || !margin.is_finite() {
        return Err(MetricError::NotFinite);
    }
    divide(cac, arpu * margin, Divisor::MonthlyMargin)
}

/// Share of customers lost over a period, in percent.
pub fn churn_rate(lost: f64, total: f64) -> Result<f64, MetricError> {
    Ok(divide(lost, total, Divisor::TotalCustomers)? * 100.0)
}

/// Average Revenue Per User over a period.
pub fn arpu(revenue: f64, users: f64) -> Result<f64, MetricError> {
    divide(revenue, users, Divisor::ActiveUsers)
}

/// Share of a cohort still active after N periods, in percent.
pub fn retention(active: f64, cohort_size: f64) -> Result<f64, MetricError> {
    Ok(divide(active, cohort_size, Divisor::CohortSize)? * 100.0)
}

/// Virality coefficient: invites sent times invite conversion.
#[must_use]
pub fn k_factor(invites: f64, conversion: f64) -> f64 {
    invites * conversion
}

/// Net new monthly recurring revenue. Negative means the base is shrinking.
#[must_use]
pub fn net_mrr_growth(new: f64, expansion: f64, churned: f64, contraction: f64) -> f64 {
    new + expansion - churned - contraction
}

/// Months of cash left at the current burn.
pub fn runway(cash: f64, monthly_burn: f64) -> Result<f64, MetricError> {
    divide(cash, monthly_burn, Divisor::MonthlyBurn)
}

/// Average check across free and paying users combined.
#[must_use]
pub fn blended_arpu(paid_share: f64, arppu: f64) -> f64 {
    paid_share * arppu
}

/// Company-level profit from the canvas: per-customer surplus scaled by
/// volume, minus fixed costs.
#[must_use]
pub fn unit_profit(ltv: f64, cac: f64, new_customers: f64, fixed_costs: f64) -> f64 {
    (ltv - cac) * new_customers - fixed_costs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn unit_margin_course_scenario() {
        assert_close(unit_margin(2000.0, 400.0), 1600.0);
    }

    #[test]
    fn unit_margin_negative_is_valid() {
        assert_close(unit_margin(100.0, 150.0), -50.0);
    }

    #[test]
    fn cac_course_scenario() {
        assert_close(cac(500_000.0, 200.0).unwrap(), 2500.0);
    }

    #[test]
    fn cac_rejects_zero_customers() {
        assert_eq!(
            cac(500_000.0, 0.0),
            Err(MetricError::NonPositiveDivisor(Divisor::NewCustomers))
        );
    }

    #[test]
    fn ltv_course_scenario() {
        assert_close(ltv(2000.0, 0.05).unwrap(), 40_000.0);
    }

    #[test]
    fn ratio_composes_with_ltv_and_cac() {
        let ltv = ltv(2000.0, 0.05).unwrap();
        let cac = cac(500_000.0, 200.0).unwrap();
        assert_close(ltv_cac_ratio(ltv, cac).unwrap(), 16.0);
    }

    #[test]
    fn payback_course_scenario() {
        assert_close(payback_period(15_000.0, 2500.0, 0.60).unwrap(), 10.0);
    }

    #[test]
    fn payback_rejects_zero_margin() {
        assert_eq!(
            payback_period(15_000.0, 2500.0, 0.0),
            Err(MetricError::NonPositiveDivisor(Divisor::MonthlyMargin))
        );
    }

    #[test]
    fn churn_course_scenario() {
        assert_close(churn_rate(140.0, 2000.0).unwrap(), 7.0);
    }

    #[test]
    fn arpu_course_scenario() {
        assert_close(arpu(3_600_000.0, 1200.0).unwrap(), 3000.0);
    }

    #[test]
    fn retention_course_scenario() {
        assert_close(retention(175.0, 500.0).unwrap(), 35.0);
    }

    #[test]
    fn k_factor_course_scenario() {
        assert_close(k_factor(8.0, 0.15), 1.2);
    }

    #[test]
    fn net_mrr_course_scenario() {
        assert_close(net_mrr_growth(800.0, 200.0, 350.0, 0.0), 650.0);
    }

    #[test]
    fn runway_course_scenario() {
        assert_close(runway(12_000_000.0, 1_500_000.0).unwrap(), 8.0);
    }

    #[test]
    fn blended_arpu_course_scenario() {
        assert_close(blended_arpu(0.20, 1500.0), 300.0);
    }

    #[test]
    fn unit_profit_course_scenario() {
        assert_close(
            unit_profit(30_000.0, 8000.0, 500.0, 5_000_000.0),
            6_000_000.0,
        );
    }

    #[test]
    fn guards_reject_non_finite_inputs() {
        assert_eq!(cac(f64::NAN, 10.0), Err(MetricError::NotFinite));
        assert_eq!(ltv(f64::INFINITY, 0.05), Err(MetricError::NotFinite));
        assert_eq!(
            payback_period(100.0, f64::NAN, 0.5),
            Err(MetricError::NotFinite)
        );
    }

    #[test]
    fn error_messages_name_the_divisor() {
        let err = runway(100.0, 0.0).unwrap_err();
        assert_eq!(err.to_string(), "monthly burn must be greater than zero");
    }
}
