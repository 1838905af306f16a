//! EMI (equated monthly installment) calculator.
//!
//! Reducing-balance amortization: r = R/1200, f = (1+r)^N,
//! EMI = P*r*f / (f-1). The zero-rate case degenerates to P/N.
//! All arithmetic is decimal; currency results are rounded half-up
//! to 2 places and totals are derived from the rounded EMI so the
//! displayed numbers always add up.

use bigdecimal::{BigDecimal, One, RoundingMode, Zero};

/// Intermediate scale for the compounding loop. Far beyond the 2
/// places the result is rounded to, so the cap never shows up in
/// the output.
const WORK_SCALE: i64 = 30;

/// 50 years. Longer tenures are input mistakes, and the compounding
/// factor grows with the tenure, so the input is bounded up front.
pub const MAX_TENURE_MONTHS: u32 = 600;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmiQuote {
    /// Fixed monthly installment, rounded to 2 decimal places.
    pub emi: BigDecimal,
    /// Rounded EMI times tenure.
    pub total_payable: BigDecimal,
    /// Total payable minus principal.
    pub total_interest: BigDecimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EmiError {
    #[error("Loan amount must be greater than zero")]
    NonPositivePrincipal,
    #[error("Interest rate cannot be negative")]
    NegativeRate,
    #[error("Tenure must be at least one month")]
    ZeroTenure,
    #[error("Tenure cannot exceed 600 months")]
    TenureTooLong,
}

/// Compute the EMI quote for a loan of `principal` at `annual_rate_percent`
/// over `tenure_months`.
pub fn calculate(
    principal: &BigDecimal,
    annual_rate_percent: &BigDecimal,
    tenure_months: u32,
) -> Result<EmiQuote, EmiError> {
    if principal <= &BigDecimal::zero() {
        return Err(EmiError::NonPositivePrincipal);
    }
    if annual_rate_percent < &BigDecimal::zero() {
        return Err(EmiError::NegativeRate);
    }
    if tenure_months == 0 {
        return Err(EmiError::ZeroTenure);
    }
    if tenure_months > MAX_TENURE_MONTHS {
        return Err(EmiError::TenureTooLong);
    }

    let n = BigDecimal::from(tenure_months);

    let emi = if annual_rate_percent.is_zero() {
        // Factor formula divides by zero at r = 0.
        (principal / &n).with_scale_round(2, RoundingMode::HalfUp)
    } else {
        let monthly_rate =
            (annual_rate_percent / BigDecimal::from(1200)).with_scale_round(WORK_SCALE, RoundingMode::HalfEven);
        let factor = pow_monthly(&(BigDecimal::one() + &monthly_rate), tenure_months);
        let numerator = principal * &monthly_rate * &factor;
        let denominator = factor - BigDecimal::one();
        (numerator / denominator).with_scale_round(2, RoundingMode::HalfUp)
    };

    let total_payable = (&emi * &n).with_scale_round(2, RoundingMode::HalfUp);
    let total_interest = (&total_payable - principal).with_scale_round(2, RoundingMode::HalfUp);

    Ok(EmiQuote {
        emi,
        total_payable,
        total_interest,
    })
}

/// (1+r)^n by squaring, capping the working scale each step so the
/// digit count stays flat.
fn pow_monthly(factor: &BigDecimal, n: u32) -> BigDecimal {
    let mut base = factor.clone();
    let mut exp = n;
    let mut acc = BigDecimal::one();
    while exp > 0 {
        if exp & 1 == 1 {
            acc = (&acc * &base).with_scale_round(WORK_SCALE, RoundingMode::HalfEven);
        }
        exp >>= 1;
        if exp > 0 {
            base = (&base * &base).with_scale_round(WORK_SCALE, RoundingMode::HalfEven);
        }
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn worked_example_ten_percent_twelve_months() {
        let quote = calculate(&dec("100000"), &dec("10"), 12).unwrap();
        assert_eq!(quote.emi, dec("8791.59"));
        assert_eq!(quote.total_payable, dec("105499.08"));
        assert_eq!(quote.total_interest, dec("5499.08"));
    }

    #[test]
    fn zero_rate_divides_principal_evenly() {
        let quote = calculate(&dec("500000"), &dec("0"), 10).unwrap();
        assert_eq!(quote.emi, dec("50000.00"));
        assert_eq!(quote.total_payable, dec("500000.00"));
        assert_eq!(quote.total_interest, dec("0.00"));
    }

    #[test]
    fn single_installment_equals_principal_plus_one_month_interest() {
        // N=1: EMI = P*(1+r) with r = 12/1200 = 0.01
        let quote = calculate(&dec("1000"), &dec("12"), 1).unwrap();
        assert_eq!(quote.emi, dec("1010.00"));
    }

    #[test]
    fn emi_positive_and_total_covers_principal() {
        let cases = [
            ("1", "0.01", 1u32),
            ("2500.50", "7.25", 36),
            ("1000000", "18", 240),
            ("750000", "8.5", 84),
        ];
        for (p, r, n) in cases {
            let quote = calculate(&dec(p), &dec(r), n).unwrap();
            assert!(quote.emi > BigDecimal::zero(), "case {p}/{r}/{n}");
            assert!(quote.total_payable >= dec(p), "case {p}/{r}/{n}");
        }
    }

    #[test]
    fn near_zero_rate_approaches_principal_over_tenure() {
        // r -> 0: EMI -> P/N. At 0.0001% annual the difference to 100.00
        // disappears under currency rounding.
        let quote = calculate(&dec("1200"), &dec("0.0001"), 12).unwrap();
        assert_eq!(quote.emi, dec("100.00"));
    }

    #[test]
    fn repeated_calls_are_identical() {
        let a = calculate(&dec("100000"), &dec("10"), 12).unwrap();
        let b = calculate(&dec("100000"), &dec("10"), 12).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_invalid_inputs() {
        assert_eq!(
            calculate(&dec("0"), &dec("10"), 12),
            Err(EmiError::NonPositivePrincipal)
        );
        assert_eq!(
            calculate(&dec("-5"), &dec("10"), 12),
            Err(EmiError::NonPositivePrincipal)
        );
        assert_eq!(
            calculate(&dec("100"), &dec("-1"), 12),
            Err(EmiError::NegativeRate)
        );
        assert_eq!(calculate(&dec("100"), &dec("10"), 0), Err(EmiError::ZeroTenure));
    }

    #[test]
    fn tenure_is_bounded() {
        assert!(calculate(&dec("100000"), &dec("10"), MAX_TENURE_MONTHS).is_ok());
        assert_eq!(
            calculate(&dec("100000"), &dec("10"), MAX_TENURE_MONTHS + 1),
            Err(EmiError::TenureTooLong)
        );
        assert_eq!(
            calculate(&dec("100000"), &dec("10"), u32::MAX),
            Err(EmiError::TenureTooLong)
        );
    }
}
