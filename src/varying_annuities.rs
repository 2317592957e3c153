#![allow(non_snake_case)]

//! # Varying Annuities
//!
//! Arithmetically varying annuities-certain, valued by combining a level [`Annuity`] with the
//! closed-form increasing-annuity factors:
//!
//! | Factor | Formula |
//! |---|---|
//! | [`Ian`] | `(äₙ - n·vⁿ) / i` |
//! | [`Iaan`] | `(Ia)ₙ · i⁽ᵐ⁾ / d⁽ᵐ⁾` |
//! | [`Iabarn`] | `(Ia)ₙ · i⁽ᵐ⁾ / δ` |
//! | [`Ibarabarn`] | `(āₙ - n·vⁿ) / δ` |
//!
//! A stream paying `base` in the first period and changing by `vary` each period is worth
//! `(base - vary) · aₙ + vary · (Ia)ₙ`. When the payment rate itself grows continuously with time
//! the value is `base · (Īā)ₙ`.
//!
//! ## Example
//! ```rust
//! # use finmaths::prelude::*;
//! let rate = Rate::builder().raw_rate(0.05).build()?;
//!
//! // 10, 9, 8, ... paid in advance for 10 years
//! let decreasing = VaryingAnnuity::builder()
//!     .rate(&rate)
//!     .payment_mode(PaymentMode::Advance)
//!     .term(10.0)
//!     .base_amount(10.0)
//!     .vary_amount(1.0)
//!     .is_decreasing(true)
//!     .build()?;
//!
//! println!("PV {:.4}", decreasing.time_value().call()?);
//! # FinMathsResult::Ok(())
//! ```

use crate::FinMathsResult;
use crate::annuities_certain::{Annuity, PaymentMode};
use crate::error::FinMathsError;
use crate::params::VaryingAnnuityParams;
use crate::rate::Rate;
use bon::bon;
use garde::Validate;
use log::debug;

// ================================================
// INCREASING ANNUITY FACTORS
// ================================================

/// Present value of an increasing annuity in arrears, `(Ia)ₙ`, paying 1, 2, ..., n.
///
/// # Formula
/// ```text
/// (Ia)ₙ = (äₙ - n·vⁿ) / i
/// ```
/// where `äₙ` is the annuity's arrear value moved to advance with `i⁽ᵐ⁾ / d⁽ᵐ⁾` and `i` is the
/// effective rate of the annuity's [`Rate`].
///
/// # Errors
/// [`FinMathsError::Domain`] when the effective interest rate is zero.
pub fn Ian(annuity: &Annuity<'_>) -> FinMathsResult<f64> {
    let rate = annuity.rate();
    let i = rate.interest_rate();
    if i == 0.0 {
        return Err(FinMathsError::domain(
            "increasing annuity",
            "effective interest rate is zero",
        ));
    }

    let advance_pv = annuity.arrear_pv() * annuity.advance_factor()?;
    let vn = rate.time_value_factor(annuity.term(), true);
    Ok((advance_pv - annuity.term() * vn) / i)
}

/// Present value of an increasing annuity in advance, `(Iä)ₙ = (Ia)ₙ · i⁽ᵐ⁾ / d⁽ᵐ⁾`.
pub fn Iaan(annuity: &Annuity<'_>) -> FinMathsResult<f64> {
    Ok(Ian(annuity)? * annuity.advance_factor()?)
}

/// Present value of an increasing annuity whose amount steps up once per period while each
/// period's amount is paid continuously, `(Iā)ₙ = (Ia)ₙ · i⁽ᵐ⁾ / δ`.
pub fn Iabarn(annuity: &Annuity<'_>) -> FinMathsResult<f64> {
    Ok(Ian(annuity)? * annuity.continuous_factor()?)
}

/// Present value of a continuously paid annuity whose payment rate grows continuously with
/// time, `(Īā)ₙ`.
///
/// # Formula
/// ```text
/// (Īā)ₙ = (āₙ - n·vⁿ) / δ
/// ```
///
/// # Errors
/// - [`FinMathsError::Configuration`] for simple rates, which have no force of interest
/// - [`FinMathsError::Domain`] when the force of interest is zero
pub fn Ibarabarn(annuity: &Annuity<'_>) -> FinMathsResult<f64> {
    let rate = annuity.rate();
    let continuous_pv = annuity.arrear_pv() * annuity.continuous_factor()?;
    let foi = rate.force_of_interest().unwrap_or_default();
    if foi == 0.0 {
        return Err(FinMathsError::domain(
            "time-continuous increasing annuity",
            "force of interest is zero",
        ));
    }

    let vn = rate.time_value_factor(annuity.term(), true);
    Ok((continuous_pv - annuity.term() * vn) / foi)
}

// ================================================
// VARYING ANNUITY
// ================================================

/// A level annuity plus a linear change of `vary_amount` per period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VaryingAnnuity<'a> {
    annuity: Annuity<'a>,
    base_amount: f64,
    vary_amount: f64,
    is_time_continuous: bool,
}

#[bon]
impl<'a> VaryingAnnuity<'a> {
    /// Build the wrapped [`Annuity`] and the variation.
    ///
    /// `is_decreasing` forces the increment negative. `is_time_continuous` selects a payment
    /// rate growing continuously with time; it has no effect on annuities in arrears.
    #[builder]
    pub fn new(
        rate: &'a Rate,
        #[builder(default)] payment_mode: PaymentMode,
        #[builder(default = 1.0)] term: f64,
        #[builder(default = 1.0)] installment: f64,
        #[builder(default = 1.0)] nominal_period: f64,
        #[builder(default = 1.0)] base_amount: f64,
        #[builder(default)] vary_amount: f64,
        #[builder(default)] is_time_continuous: bool,
        #[builder(default)] is_decreasing: bool,
    ) -> FinMathsResult<Self> {
        VaryingAnnuityParams {
            base_amount,
            vary_amount,
        }
        .validate()?;

        let annuity = Annuity::builder()
            .rate(rate)
            .payment_mode(payment_mode)
            .term(term)
            .installment(installment)
            .nominal_period(nominal_period)
            .build()?;

        let vary_amount = if is_decreasing {
            -vary_amount.abs()
        } else {
            vary_amount
        };

        Ok(VaryingAnnuity {
            annuity,
            base_amount,
            vary_amount,
            is_time_continuous,
        })
    }

    /// Present (or future) value of the varying annuity.
    ///
    /// Deferral and accumulation follow [`Annuity::time_value`]: `differ_rate` defaults to the
    /// annuity's rate, and the future value accumulates over `term + differ_period` with the
    /// annuity's own rate.
    #[builder]
    pub fn time_value(
        &self,
        #[builder(default)] differ_period: f64,
        differ_rate: Option<&Rate>,
        #[builder(default)] future_value: bool,
    ) -> FinMathsResult<f64> {
        let pv = match (self.annuity.payment_mode(), self.is_time_continuous) {
            (PaymentMode::Arrear, _) => self.step_varying(Ian(&self.annuity)?)?,
            (_, true) => self.base_amount * Ibarabarn(&self.annuity)?,
            (PaymentMode::Continuous, false) => self.step_varying(Iabarn(&self.annuity)?)?,
            (PaymentMode::Advance, false) => self.step_varying(Iaan(&self.annuity)?)?,
        };
        debug!(
            "varying {} annuity: base {}, vary {}, pv {pv}",
            self.annuity.payment_mode(),
            self.base_amount,
            self.vary_amount
        );

        self.annuity
            .defer(pv, differ_rate, differ_period, future_value)
    }
}

impl<'a> VaryingAnnuity<'a> {
    pub fn annuity(&self) -> &Annuity<'a> {
        &self.annuity
    }

    pub fn base_amount(&self) -> f64 {
        self.base_amount
    }

    /// Signed increment per period.
    pub fn vary_amount(&self) -> f64 {
        self.vary_amount
    }

    pub fn is_time_continuous(&self) -> bool {
        self.is_time_continuous
    }

    // (base - vary)·aₙ + vary·(Ia)ₙ
    fn step_varying(&self, increasing_pv: f64) -> FinMathsResult<f64> {
        let level = self.annuity.time_value().call()?;
        Ok((self.base_amount - self.vary_amount) * level + self.vary_amount * increasing_pv)
    }
}
