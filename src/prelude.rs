//! # FinMaths Prelude
//!
//! Conveniently re-exports the most common types and functions.
//! Import this module to access all primary FinMaths features with a single `use` statement.
//!
//! ## Example
//!
//! ```rust
//! # use finmaths::prelude::*;
//! let rate = Rate::builder().raw_rate(0.05).build()?;
//! let annuity = Annuity::builder()
//!     .rate(&rate)
//!     .payment_mode("annuity due".parse()?)
//!     .term(10.0)
//!     .build()?;
//! println!("Annuity due: {:.6}", annuity.time_value().call()?);
//! # FinMathsResult::Ok(())
//! ```

// Package error and Result types
pub use crate::{FinMathsError, FinMathsResult};

// Interest rate conversion functions
pub use crate::int_rate_convert::{accumulation, discount};

// Rates
pub use crate::rate::{Rate, RateKind};

// Certain annuities
pub use crate::annuities_certain::{Annuity, PaymentMode};
pub use crate::varying_annuities::*;

// Amortization
pub use crate::loan_schedule::{ScheduleRow, loan_schedule, schedule_frame};
