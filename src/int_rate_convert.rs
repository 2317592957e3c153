//! # Interest Rate Conversions
//!
//! Pure conversion formulas between the four ways of quoting the time value of money:
//! simple, effective (compound), nominal (compounded `m` times per unit period) and the
//! force of interest `δ`.
//!
//! - [`accumulation`] — formulas expressed in terms of interest rates `i` and accumulation factors
//! - [`discount`] — the dual formulas expressed in terms of discount rates `d` and discount factors
//!
//! The functions do not validate their inputs. Arguments that leave the real domain (for
//! example a negative base raised to a fractional power) produce `NaN`, which the callers in
//! [`crate::rate`] turn into errors.
//!
//! ## Example
//! ```rust
//! # use finmaths::prelude::*;
//! let i = accumulation::effective_from_nominal(0.06, 12.0);
//! let d = accumulation::to_discount(i);
//! assert!((discount::to_accumulation(d) - i).abs() < 1e-12);
//! ```

pub mod accumulation;
pub mod discount;
