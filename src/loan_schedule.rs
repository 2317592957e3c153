//! # Loan Schedule
//!
//! Amortization of a loan repaid by a level [`Annuity`].
//!
//! [`loan_schedule`] produces one [`ScheduleRow`] per period: the level installment, the part of
//! it repaying principal, the interest part, and the outstanding balance. [`schedule_frame`]
//! tabulates the rows into a polars `DataFrame` for display or export.
//!
//! ## Example
//! ```rust
//! # use finmaths::prelude::*;
//! let rate = Rate::builder().raw_rate(0.05).build()?;
//! let annuity = Annuity::builder().rate(&rate).term(4.0).build()?;
//! let rows = loan_schedule().annuity(&annuity).loan_amount(1000.0).call()?;
//! println!("{}", schedule_frame(&rows)?);
//! # FinMathsResult::Ok(())
//! ```

use crate::FinMathsResult;
use crate::annuities_certain::{Annuity, PaymentMode};
use crate::params::LoanScheduleParams;
use bon::builder;
use log::debug;
use polars::prelude::*;

/// One period of an amortization schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduleRow {
    /// Period number: starts at 1 for payments in arrears, 0 otherwise.
    pub period: u32,
    pub installment: f64,
    pub principal: f64,
    pub interest: f64,
    /// Outstanding balance after this period's principal repayment.
    pub balance: f64,
}

/// Amortization schedule of `loan_amount` repaid by `annuity`.
///
/// # Formula
/// ```text
/// installment = L / PV(annuity)
/// principalₖ  = (installment - L·i) · (1 + i)^(k-1)
/// interestₖ   = installment - principalₖ
/// balanceₖ    = balanceₖ₋₁ - principalₖ
/// ```
///
/// # Errors
/// [`FinMathsError::Validation`](crate::error::FinMathsError::Validation) unless the annuity
/// term is a whole number of periods no larger than
/// [`MAX_SCHEDULE_PERIODS`](crate::params::MAX_SCHEDULE_PERIODS).
#[builder]
pub fn loan_schedule(
    annuity: &Annuity<'_>,
    #[builder(default = 1.0)] loan_amount: f64,
) -> FinMathsResult<Vec<ScheduleRow>> {
    LoanScheduleParams {
        loan_amount,
        term: annuity.term(),
    }
    .validate_all()?;

    let rate = annuity.rate();
    let installment = loan_amount / annuity.time_value().call()?;
    let first_period = match annuity.payment_mode() {
        PaymentMode::Arrear => 1,
        PaymentMode::Advance | PaymentMode::Continuous => 0,
    };
    let periods = annuity.term() as u32;

    let mut balance = loan_amount;
    let rows: Vec<ScheduleRow> = (0..periods)
        .map(|k| {
            let principal = (installment - loan_amount * rate.interest_rate())
                * rate.time_value_factor(f64::from(k), false);
            balance -= principal;
            ScheduleRow {
                period: k + first_period,
                installment,
                principal,
                interest: installment - principal,
                balance,
            }
        })
        .collect();

    debug!("loan schedule for {loan_amount}: {periods} periods, installment {installment}");
    Ok(rows)
}

/// Tabulate schedule rows into a `DataFrame` with columns
/// `period, installment, principal, interest, balance`.
pub fn schedule_frame(rows: &[ScheduleRow]) -> FinMathsResult<DataFrame> {
    let df = df! {
        "period" => rows.iter().map(|r| r.period).collect::<Vec<u32>>(),
        "installment" => rows.iter().map(|r| r.installment).collect::<Vec<f64>>(),
        "principal" => rows.iter().map(|r| r.principal).collect::<Vec<f64>>(),
        "interest" => rows.iter().map(|r| r.interest).collect::<Vec<f64>>(),
        "balance" => rows.iter().map(|r| r.balance).collect::<Vec<f64>>(),
    }?;
    Ok(df)
}
