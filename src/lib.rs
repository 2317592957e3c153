//! # FinMaths
//!
//! A small, type-safe Rust library for the time value of money: interest and discount rate
//! conversions, level and arithmetically varying annuities-certain, and loan amortization
//! schedules.
//!
//! ## Features
//! - **Rate conversions**: simple, effective, nominal and force-of-interest quotes of both interest and discount rates
//! - **Normalized rates**: a [`Rate`](rate::Rate) is validated and normalized once, then queried freely
//! - **Annuities certain**: payments in arrears, in advance (due) or continuously, deferred or accumulated
//! - **Varying annuities**: arithmetically increasing/decreasing streams, including continuously growing payment rates
//! - **Loan schedules**: per-period installment, principal, interest and balance, tabulated with polars
//! - **Builder Pattern**: constructors and valuations use builders with automatic parameter validation
//!
//! ## Quick Start
//!
//! ```rust
//! use finmaths::prelude::*;
//!
//! // 3.4% effective per year
//! let rate = Rate::builder().raw_rate(0.034).build()?;
//!
//! // 1,000 a period for 4 periods in arrears, valued at the quarterly nominal rate
//! let annuity = Annuity::builder()
//!     .rate(&rate)
//!     .term(4.0)
//!     .installment(1000.0)
//!     .nominal_period(4.0)
//!     .build()?;
//!
//! // A second annuity at 4.2%, deferred 4 years at the first rate
//! let rate2 = Rate::builder().raw_rate(0.042).build()?;
//! let annuity2 = Annuity::builder()
//!     .rate(&rate2)
//!     .term(2.0)
//!     .installment(1000.0)
//!     .nominal_period(4.0)
//!     .build()?;
//!
//! let total = annuity.time_value().call()?
//!     + annuity2.time_value().differ_rate(&rate).differ_period(4.0).call()?;
//! println!("Portfolio value: {total:.2}");
//! # FinMathsResult::Ok(())
//! ```
//!
//! ## Notes
//! - Rates and periods are abstract real numbers in consistent units; there are no calendars or day counts
//! - A negative period passed to [`Rate::time_value_factor`](rate::Rate::time_value_factor) means discounting
//! - All values are immutable after construction and safe to share across threads

pub mod annuities_certain;
pub mod error;
pub mod int_rate_convert;
pub mod loan_schedule;
pub mod params;
pub mod prelude;
pub mod rate;
pub mod varying_annuities;

pub use error::{FinMathsError, FinMathsResult};
