//! # Rate
//!
//! A fully specified rate of interest or discount.
//!
//! A [`Rate`] is built once from a quoted number and the flags describing how it is quoted
//! (nominal period, discount or interest, simple or compound, force of interest). The quote is
//! normalized on construction into effective-per-period figures, so that every later query is a
//! closed-form evaluation on immutable fields.
//!
//! ## Quick Start
//! ```rust
//! # use finmaths::prelude::*;
//! // 6% nominal discount convertible monthly
//! let rate = Rate::builder()
//!     .raw_rate(0.06)
//!     .nominal_period(12.0)
//!     .is_discount(true)
//!     .build()?;
//!
//! let quarterly = rate.convert_to(RateKind::CompoundInterest, 4.0)?;
//! let v5 = rate.time_value_factor(5.0, true);
//! println!("i(4) = {quarterly:.6}, v^5 = {v5:.6}");
//! # FinMathsResult::Ok(())
//! ```

use crate::FinMathsResult;
use crate::error::FinMathsError;
use crate::int_rate_convert::{accumulation, discount};
use crate::params::RateParams;
use bon::bon;
use log::{debug, warn};
use std::fmt;
use std::str::FromStr;

// ===============================================
// CONVERSION TARGETS
// ===============================================

/// Representation requested from [`Rate::convert_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RateKind {
    /// Nominal interest rate convertible `period` times (effective when `period == 1`).
    CompoundInterest,
    /// Simple interest rate equivalent over `period`.
    SimpleInterest,
    /// Force of interest `δ`.
    ForceOfInterest,
    /// Nominal discount rate convertible `period` times.
    CompoundDiscount,
    /// Simple discount rate equivalent over `period`.
    SimpleDiscount,
}

impl FromStr for RateKind {
    type Err = FinMathsError;

    /// Classify free text such as `"compound interest"` or `"FOI"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim().to_lowercase();
        if text.contains("compound interest") {
            Ok(RateKind::CompoundInterest)
        } else if text.contains("simple interest") {
            Ok(RateKind::SimpleInterest)
        } else if text == "foi" || text.contains("force of interest") {
            Ok(RateKind::ForceOfInterest)
        } else if text.contains("compound discount") {
            Ok(RateKind::CompoundDiscount)
        } else if text.contains("simple discount") {
            Ok(RateKind::SimpleDiscount)
        } else {
            Err(FinMathsError::Configuration(format!(
                "cannot convert to '{s}': valid targets are 'compound interest', 'simple interest', \
                 'foi', 'compound discount', 'simple discount'"
            )))
        }
    }
}

impl fmt::Display for RateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RateKind::CompoundInterest => "compound interest",
            RateKind::SimpleInterest => "simple interest",
            RateKind::ForceOfInterest => "foi",
            RateKind::CompoundDiscount => "compound discount",
            RateKind::SimpleDiscount => "simple discount",
        };
        f.write_str(name)
    }
}

// ===============================================
// RATE
// ===============================================

/// An immutable, normalized rate.
///
/// Compound rates hold the effective interest rate `i`, effective discount rate `d` and force of
/// interest `δ`. Simple rates hold the simple interest and simple discount rates over one period;
/// the force of interest is undefined for them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rate {
    raw_rate: f64,
    nominal_period: f64,
    is_force_of_interest: bool,
    is_simple: bool,
    is_discount: bool,
    interest_rate: f64,
    discount_rate: f64,
    force_of_interest: Option<f64>,
}

#[bon]
impl Rate {
    /// Normalize a quoted rate.
    ///
    /// Exactly one interpretation of `raw_rate` applies. `is_simple` wins over the other flags,
    /// then `is_discount`, then `is_force_of_interest`; otherwise the quote is a nominal interest
    /// rate convertible `nominal_period` times.
    #[builder]
    pub fn new(
        raw_rate: f64,
        #[builder(default = 1.0)] nominal_period: f64,
        #[builder(default)] is_force_of_interest: bool,
        #[builder(default)] is_simple: bool,
        #[builder(default)] is_discount: bool,
    ) -> FinMathsResult<Self> {
        let params = RateParams {
            raw_rate,
            nominal_period,
            is_force_of_interest,
            is_simple,
            is_discount,
        };
        params.validate_all()?;

        let (interest_rate, discount_rate, force_of_interest) = if is_simple {
            if is_force_of_interest {
                warn!("force-of-interest flag ignored: simple rates have no force of interest");
            }
            let (i, d) = Self::simple_rates(raw_rate, is_discount);
            (i, d, None)
        } else {
            if is_discount && is_force_of_interest {
                warn!("force-of-interest flag ignored: rate {raw_rate} is quoted as a discount rate");
            }
            let (i, d, foi) = Self::effective_rates(
                raw_rate,
                nominal_period,
                is_discount,
                is_force_of_interest,
            );
            (i, d, Some(foi))
        };

        let finite = interest_rate.is_finite()
            && discount_rate.is_finite()
            && force_of_interest.is_none_or(f64::is_finite);
        if !finite {
            return Err(FinMathsError::invalid(
                "raw_rate",
                format!("rate {raw_rate} does not normalize to a finite effective rate"),
            ));
        }

        debug!(
            "normalized rate {raw_rate} (m = {nominal_period}): i = {interest_rate}, d = {discount_rate}, foi = {force_of_interest:?}"
        );

        Ok(Rate {
            raw_rate,
            nominal_period,
            is_force_of_interest,
            is_simple,
            is_discount,
            interest_rate,
            discount_rate,
            force_of_interest,
        })
    }

    /// Return the requested representation of this rate.
    ///
    /// `period` is the nominal frequency for compound targets and the conversion horizon for
    /// simple targets. Compound rates support every [`RateKind`]; simple rates only
    /// [`RateKind::CompoundInterest`] (the effective rate over `period`) and
    /// [`RateKind::SimpleDiscount`].
    ///
    /// # Errors
    /// - [`FinMathsError::Configuration`] when the target is unsupported for a simple rate
    /// - [`FinMathsError::Domain`] when the conversion leaves the real domain
    pub fn convert_to(&self, kind: RateKind, period: f64) -> FinMathsResult<f64> {
        let converted = if self.is_simple {
            self.convert_simple(kind, period)?
        } else {
            self.convert_compound(kind, period)
        };

        if !converted.is_finite() {
            return Err(FinMathsError::domain(
                "convert_to",
                format!("converting to {kind} over period {period} gives {converted}"),
            ));
        }
        Ok(converted)
    }

    /// Accumulation or discount factor over `period`.
    ///
    /// Returns the accumulation factor when `period >= 0` and `discount` is false. A negative
    /// period is treated as discounting: the discount factor over `|period|` is returned whenever
    /// `discount` is true or `period < 0`.
    pub fn time_value_factor(&self, period: f64, discount: bool) -> f64 {
        let discounting = discount || period < 0.0;
        let n = period.abs();
        match (self.is_simple, discounting) {
            (true, true) => discount::simple_factor(self.discount_rate, n),
            (true, false) => accumulation::simple_factor(self.interest_rate, n),
            (false, true) => discount::compound_factor(self.discount_rate, n),
            (false, false) => accumulation::compound_factor(self.interest_rate, n),
        }
    }

    /// Quoted value the rate was built from.
    pub fn raw_rate(&self) -> f64 {
        self.raw_rate
    }

    /// Compounding frequency of the quote.
    pub fn nominal_period(&self) -> f64 {
        self.nominal_period
    }

    pub fn is_simple(&self) -> bool {
        self.is_simple
    }

    pub fn is_discount(&self) -> bool {
        self.is_discount
    }

    pub fn is_force_of_interest(&self) -> bool {
        self.is_force_of_interest
    }

    /// Effective interest rate per period (simple interest rate for simple rates).
    pub fn interest_rate(&self) -> f64 {
        self.interest_rate
    }

    /// Effective discount rate per period (simple discount rate for simple rates).
    pub fn discount_rate(&self) -> f64 {
        self.discount_rate
    }

    /// Force of interest, `None` for simple rates.
    pub fn force_of_interest(&self) -> Option<f64> {
        self.force_of_interest
    }
}

impl Rate {
    fn simple_rates(raw_rate: f64, is_discount: bool) -> (f64, f64) {
        if is_discount {
            (discount::simple_to_interest(raw_rate, 1.0), raw_rate)
        } else {
            (raw_rate, accumulation::simple_to_discount(raw_rate, 1.0))
        }
    }

    fn effective_rates(
        raw_rate: f64,
        nominal_period: f64,
        is_discount: bool,
        is_force_of_interest: bool,
    ) -> (f64, f64, f64) {
        if is_discount {
            let d = discount::effective_from_nominal(raw_rate, nominal_period);
            (discount::to_accumulation(d), d, discount::effective_to_foi(d))
        } else if is_force_of_interest {
            let i = accumulation::effective_from_foi(raw_rate);
            (i, accumulation::to_discount(i), accumulation::effective_to_foi(i))
        } else {
            let i = accumulation::effective_from_nominal(raw_rate, nominal_period);
            (i, accumulation::to_discount(i), accumulation::effective_to_foi(i))
        }
    }

    fn convert_simple(&self, kind: RateKind, period: f64) -> FinMathsResult<f64> {
        match kind {
            RateKind::CompoundInterest => {
                Ok(accumulation::effective_from_simple(self.interest_rate, period))
            }
            RateKind::SimpleDiscount => {
                Ok(accumulation::simple_to_discount(self.interest_rate, period))
            }
            other => Err(FinMathsError::Configuration(format!(
                "cannot convert a simple rate to '{other}': valid targets are 'compound interest', 'simple discount'"
            ))),
        }
    }

    fn convert_compound(&self, kind: RateKind, period: f64) -> f64 {
        match kind {
            RateKind::CompoundInterest => accumulation::effective_to_nominal(self.interest_rate, period),
            RateKind::SimpleInterest => accumulation::effective_to_simple(self.interest_rate, period),
            RateKind::ForceOfInterest => accumulation::effective_to_foi(self.interest_rate),
            RateKind::CompoundDiscount => discount::effective_to_nominal(self.discount_rate, period),
            RateKind::SimpleDiscount => discount::effective_to_simple(self.discount_rate, period),
        }
    }
}

impl FromStr for Rate {
    type Err = FinMathsError;

    /// Parse an effective interest rate per period, e.g. `"0.05"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw_rate: f64 = s.trim().parse().map_err(|_| {
            FinMathsError::invalid(
                "raw_rate",
                format!("'{s}' is not a number; use a non-negative decimal rate"),
            )
        })?;
        Rate::builder().raw_rate(raw_rate).build()
    }
}
