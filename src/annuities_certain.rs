//! # Annuities Certain
//!
//! Level streams of payments valued with a [`Rate`].
//!
//! An [`Annuity`] pays `installment` each nominal period for `term` periods, in arrears, in
//! advance, or continuously through each period. Every valuation is expressed as a multiple of
//! the present value of the equivalent annuity in arrears, which is computed once on construction:
//!
//! ```text
//! aₙ = (1 - vⁿ) / i⁽ᵐ⁾
//! äₙ = aₙ · i⁽ᵐ⁾ / d⁽ᵐ⁾
//! āₙ = aₙ · i⁽ᵐ⁾ / δ
//! ```
//!
//! ## Example
//! ```rust
//! # use finmaths::prelude::*;
//! let rate = Rate::builder().raw_rate(0.034).build()?;
//! let annuity = Annuity::builder()
//!     .rate(&rate)
//!     .term(4.0)
//!     .installment(1000.0)
//!     .nominal_period(4.0)
//!     .build()?;
//!
//! let pv = annuity.time_value().call()?;
//! let fv = annuity.time_value().future_value(true).call()?;
//! println!("PV {pv:.2}, FV {fv:.2}");
//! # FinMathsResult::Ok(())
//! ```

use crate::FinMathsResult;
use crate::error::FinMathsError;
use crate::params::AnnuityParams;
use crate::rate::{Rate, RateKind};
use bon::bon;
use garde::Validate;
use log::debug;
use std::fmt;
use std::str::FromStr;

// ===============================================
// PAYMENT MODE
// ===============================================

/// When the installment of each nominal period is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaymentMode {
    /// At the end of each period (annuity-immediate).
    #[default]
    Arrear,
    /// At the start of each period (annuity-due).
    Advance,
    /// Spread evenly through each period.
    Continuous,
}

impl FromStr for PaymentMode {
    type Err = FinMathsError;

    /// Classify free text: anything containing "arrear", "continuous", "due" or "advance",
    /// ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim().to_lowercase();
        if text.contains("arrear") {
            Ok(PaymentMode::Arrear)
        } else if text.contains("continuous") {
            Ok(PaymentMode::Continuous)
        } else if text.contains("due") || text.contains("advance") {
            Ok(PaymentMode::Advance)
        } else {
            Err(FinMathsError::Configuration(format!(
                "payment mode '{s}' is invalid: valid payment modes are 'arrear', 'continuous', 'advance'"
            )))
        }
    }
}

impl fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PaymentMode::Arrear => "arrear",
            PaymentMode::Advance => "advance",
            PaymentMode::Continuous => "continuous",
        };
        f.write_str(name)
    }
}

// ===============================================
// ANNUITY
// ===============================================

/// A level annuity-certain. Borrows its [`Rate`], so one rate can back many annuities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Annuity<'a> {
    rate: &'a Rate,
    payment_mode: PaymentMode,
    term: f64,
    installment: f64,
    nominal_period: f64,
    arrear_pv: f64,
}

#[bon]
impl<'a> Annuity<'a> {
    #[builder]
    pub fn new(
        rate: &'a Rate,
        #[builder(default)] payment_mode: PaymentMode,
        #[builder(default = 1.0)] term: f64,
        #[builder(default = 1.0)] installment: f64,
        #[builder(default = 1.0)] nominal_period: f64,
    ) -> FinMathsResult<Self> {
        AnnuityParams {
            term,
            installment,
            nominal_period,
        }
        .validate()?;

        // aₙ = (1 - vⁿ) / i⁽ᵐ⁾, tending to n as i⁽ᵐ⁾ → 0
        let periodic_i = rate.convert_to(RateKind::CompoundInterest, nominal_period)?;
        let arrear_pv = if periodic_i == 0.0 {
            term
        } else {
            (1.0 - rate.time_value_factor(term, true)) / periodic_i
        };

        debug!("{payment_mode} annuity over {term} periods (m = {nominal_period}): a = {arrear_pv}");

        Ok(Annuity {
            rate,
            payment_mode,
            term,
            installment,
            nominal_period,
            arrear_pv,
        })
    }

    /// Present (or future) value of the annuity.
    ///
    /// # Parameters
    /// - `differ_rate`: rate used to defer the annuity; defaults to the annuity's own rate
    /// - `differ_period`: number of periods before the annuity starts (default 0)
    /// - `future_value`: accumulate to the end of `term + differ_period` with the annuity's own
    ///   rate (default false)
    ///
    /// # Errors
    /// - [`FinMathsError::Configuration`] for advance or continuous payments on a simple rate
    /// - [`FinMathsError::InvalidDifferRate`] when the deferral rate cannot discount over
    ///   `differ_period`
    #[builder]
    pub fn time_value(
        &self,
        differ_rate: Option<&Rate>,
        #[builder(default)] differ_period: f64,
        #[builder(default)] future_value: bool,
    ) -> FinMathsResult<f64> {
        let pv = self.arrear_pv * self.mode_factor()?;
        let value = self.defer(pv, differ_rate, differ_period, future_value)?;
        Ok(value * self.installment)
    }
}

impl<'a> Annuity<'a> {
    pub fn rate(&self) -> &'a Rate {
        self.rate
    }

    pub fn payment_mode(&self) -> PaymentMode {
        self.payment_mode
    }

    pub fn term(&self) -> f64 {
        self.term
    }

    pub fn installment(&self) -> f64 {
        self.installment
    }

    pub fn nominal_period(&self) -> f64 {
        self.nominal_period
    }

    /// Present value per unit installment of the equivalent annuity in arrears.
    pub fn arrear_pv(&self) -> f64 {
        self.arrear_pv
    }

    /// Factor turning the arrear value into the value for this annuity's payment mode.
    pub(crate) fn mode_factor(&self) -> FinMathsResult<f64> {
        match self.payment_mode {
            PaymentMode::Arrear => Ok(1.0),
            PaymentMode::Advance => self.advance_factor(),
            PaymentMode::Continuous => self.continuous_factor(),
        }
    }

    /// `i⁽ᵐ⁾ / d⁽ᵐ⁾`
    pub(crate) fn advance_factor(&self) -> FinMathsResult<f64> {
        let i = self.periodic_interest()?;
        let d = self
            .rate
            .convert_to(RateKind::CompoundDiscount, self.nominal_period)?;
        Ok(if d == 0.0 { 1.0 } else { i / d })
    }

    /// `i⁽ᵐ⁾ / δ`
    pub(crate) fn continuous_factor(&self) -> FinMathsResult<f64> {
        let i = self.periodic_interest()?;
        let foi = self
            .rate
            .convert_to(RateKind::ForceOfInterest, self.nominal_period)?;
        Ok(if foi == 0.0 { 1.0 } else { i / foi })
    }

    fn periodic_interest(&self) -> FinMathsResult<f64> {
        self.rate
            .convert_to(RateKind::CompoundInterest, self.nominal_period)
    }

    /// Apply the deferral discount and, if requested, accumulate over `term + differ_period`.
    pub(crate) fn defer(
        &self,
        value: f64,
        differ_rate: Option<&Rate>,
        differ_period: f64,
        future_value: bool,
    ) -> FinMathsResult<f64> {
        let differ_rate = differ_rate.unwrap_or(self.rate);
        let factor = differ_rate.time_value_factor(differ_period, true);
        if !factor.is_finite() || factor < 0.0 {
            return Err(FinMathsError::InvalidDifferRate {
                period: differ_period,
                factor,
            });
        }

        let mut value = value * factor;
        if future_value {
            value *= self.rate.time_value_factor(self.term + differ_period, false);
        }
        Ok(value)
    }
}

// ================================================
// UNIT TESTS
// ================================================
#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn rate(i: f64) -> Rate {
        Rate::builder().raw_rate(i).build().unwrap()
    }

    fn annuity(rate: &Rate, payment_mode: PaymentMode, term: f64) -> Annuity<'_> {
        Annuity::builder()
            .rate(rate)
            .payment_mode(payment_mode)
            .term(term)
            .build()
            .unwrap()
    }

    #[test]
    fn test_payment_mode_parse() {
        assert_eq!("Arrears".parse::<PaymentMode>().unwrap(), PaymentMode::Arrear);
        assert_eq!(" annuity DUE ".parse::<PaymentMode>().unwrap(), PaymentMode::Advance);
        assert_eq!("in advance".parse::<PaymentMode>().unwrap(), PaymentMode::Advance);
        assert_eq!("Continuous".parse::<PaymentMode>().unwrap(), PaymentMode::Continuous);
        assert!(matches!(
            "bogus".parse::<PaymentMode>(),
            Err(FinMathsError::Configuration(_))
        ));
    }

    #[test]
    fn test_quarterly_arrear_scenario() {
        let rate = rate(0.034);
        let annuity = Annuity::builder()
            .rate(&rate)
            .term(4.0)
            .installment(1000.0)
            .nominal_period(4.0)
            .build()
            .unwrap();

        let i4 = 4.0 * (1.034_f64.powf(0.25) - 1.0);
        let expected = 1000.0 * (1.0 - 1.034_f64.powf(-4.0)) / i4;
        let ans = annuity.time_value().call().unwrap();
        assert_abs_diff_eq!(ans, expected, epsilon = 1e-9);
        assert_abs_diff_eq!(ans, 3728.431723952221, epsilon = 1e-9);
    }

    #[test]
    fn test_modes_against_known_values() {
        let rate = rate(0.05);
        let cases = [
            (PaymentMode::Arrear, 7.721734929184813, 12.577892535548834, 6.670324957723625),
            (PaymentMode::Advance, 8.107821675644052, 13.206787162326274, 7.003841205609805),
            (PaymentMode::Continuous, 7.913208595045712, 12.889782961039032, 6.835727109422923),
        ];
        for (mode, pv, fv, deferred) in cases {
            let annuity = annuity(&rate, mode, 10.0);
            assert_abs_diff_eq!(annuity.time_value().call().unwrap(), pv, epsilon = 1e-9);
            assert_abs_diff_eq!(
                annuity.time_value().future_value(true).call().unwrap(),
                fv,
                epsilon = 1e-9
            );
            assert_abs_diff_eq!(
                annuity.time_value().differ_period(3.0).call().unwrap(),
                deferred,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_deferral_with_other_rate() {
        let rate = rate(0.034);
        let rate2 = Rate::builder().raw_rate(0.042).build().unwrap();
        let annuity2 = Annuity::builder()
            .rate(&rate2)
            .term(2.0)
            .installment(1000.0)
            .nominal_period(4.0)
            .build()
            .unwrap();

        let ans = annuity2
            .time_value()
            .differ_rate(&rate)
            .differ_period(4.0)
            .call()
            .unwrap();
        assert_abs_diff_eq!(ans, 1670.9646192755426, epsilon = 1e-9);
    }

    #[test]
    fn test_future_value_accumulates_at_own_rate() {
        let rate = rate(0.034);
        let rate2 = Rate::builder().raw_rate(0.042).build().unwrap();
        let annuity2 = Annuity::builder()
            .rate(&rate2)
            .term(2.0)
            .installment(1000.0)
            .nominal_period(4.0)
            .build()
            .unwrap();

        let pv = annuity2.time_value().call().unwrap();
        let ans = annuity2
            .time_value()
            .differ_rate(&rate)
            .differ_period(4.0)
            .future_value(true)
            .call()
            .unwrap();
        let expected =
            pv * rate.time_value_factor(4.0, true) * rate2.time_value_factor(6.0, false);
        assert_abs_diff_eq!(ans, expected, epsilon = 1e-9);

        // Accumulating at the deferral rate instead gives a different value
        let wrong = pv * rate.time_value_factor(4.0, true) * rate.time_value_factor(6.0, false);
        assert!((ans - wrong).abs() > 1.0);
    }

    #[test]
    fn test_zero_rate_limit() {
        let rate = rate(0.0);
        for mode in [PaymentMode::Arrear, PaymentMode::Advance, PaymentMode::Continuous] {
            let annuity = annuity(&rate, mode, 7.0);
            assert_abs_diff_eq!(annuity.time_value().call().unwrap(), 7.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_zero_term() {
        let rate = rate(0.05);
        let annuity = annuity(&rate, PaymentMode::Advance, 0.0);
        assert_abs_diff_eq!(annuity.time_value().call().unwrap(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_simple_rate_modes() {
        let rate = Rate::builder().raw_rate(0.05).is_simple(true).build().unwrap();
        let arrear = annuity(&rate, PaymentMode::Arrear, 3.0);
        assert!(arrear.time_value().call().is_ok());

        let advance = annuity(&rate, PaymentMode::Advance, 3.0);
        assert!(matches!(
            advance.time_value().call(),
            Err(FinMathsError::Configuration(_))
        ));
    }

    #[test]
    fn test_invalid_differ_rate() {
        let rate = rate(0.05);
        let simple = Rate::builder()
            .raw_rate(0.2)
            .is_simple(true)
            .is_discount(true)
            .build()
            .unwrap();
        let annuity = annuity(&rate, PaymentMode::Arrear, 5.0);

        // 1 - 0.2·6 < 0
        let err = annuity
            .time_value()
            .differ_rate(&simple)
            .differ_period(6.0)
            .call()
            .unwrap_err();
        assert!(matches!(err, FinMathsError::InvalidDifferRate { .. }));
    }

    #[test]
    fn test_zero_deferral_factor() {
        let rate = rate(0.05);
        let simple = Rate::builder()
            .raw_rate(0.2)
            .is_simple(true)
            .is_discount(true)
            .build()
            .unwrap();
        let annuity = annuity(&rate, PaymentMode::Arrear, 5.0);

        // 1 - 0.2·5 = 0
        let ans = annuity
            .time_value()
            .differ_rate(&simple)
            .differ_period(5.0)
            .call()
            .unwrap();
        assert_abs_diff_eq!(ans, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_construction_validation() {
        let rate = rate(0.05);
        let negative_term = Annuity::builder().rate(&rate).term(-1.0).build();
        assert!(matches!(negative_term, Err(FinMathsError::Validation(_))));

        let zero_period = Annuity::builder().rate(&rate).nominal_period(0.0).build();
        assert!(matches!(zero_period, Err(FinMathsError::Validation(_))));
    }
}
