//! Discount-rate side of the conversion formulas, the mirror of
//! [`accumulation`](super::accumulation).

/// Simple discount factor over `n` periods.
///
/// # Formula
/// ```text
/// 1 - d·n
/// ```
pub fn simple_factor(simple_d: f64, n: f64) -> f64 {
    1.0 - simple_d * n
}

/// Compound discount factor over `n` periods.
///
/// # Formula
/// ```text
/// (1 - d)ⁿ
/// ```
pub fn compound_factor(eff_d: f64, n: f64) -> f64 {
    (1.0 - eff_d).powf(n)
}

/// Convert a simple discount rate to the effective discount rate that discounts by the same
/// amount over `p` periods.
///
/// # Formula
/// ```text
/// d = 1 - (1 - dₛ·p)^(1/p)
/// ```
pub fn effective_from_simple(simple_d: f64, p: f64) -> f64 {
    1.0 - (1.0 - simple_d * p).powf(1.0 / p)
}

/// Convert an effective discount rate to the equivalent simple discount rate over `p` periods.
///
/// # Formula
/// ```text
/// dₛ = (1 - (1 - d)ᵖ) / p
/// ```
pub fn effective_to_simple(eff_d: f64, p: f64) -> f64 {
    (1.0 - (1.0 - eff_d).powf(p)) / p
}

/// Convert a nominal discount rate convertible `m` times per period to an effective discount rate.
///
/// # Formula
/// ```text
/// d = 1 - (1 - d⁽ᵐ⁾/m)^m
/// ```
///
/// # Example
/// ```rust
/// # use finmaths::prelude::*;
/// let eff = discount::effective_from_nominal(0.06, 12.0);
/// assert!((eff - 0.05837719308562428).abs() < 1e-12);
/// ```
pub fn effective_from_nominal(nom_d: f64, m: f64) -> f64 {
    1.0 - (1.0 - nom_d / m).powf(m)
}

/// Convert an effective discount rate to the nominal rate convertible `m` times per period.
///
/// # Formula
/// ```text
/// d⁽ᵐ⁾ = m[1 - (1 - d)^(1/m)]
/// ```
pub fn effective_to_nominal(eff_d: f64, m: f64) -> f64 {
    (1.0 - (1.0 - eff_d).powf(1.0 / m)) * m
}

/// Convert a force of interest to an effective discount rate.
///
/// # Formula
/// ```text
/// d = 1 - e^(-δ)
/// ```
pub fn effective_from_foi(foi: f64) -> f64 {
    1.0 - (-foi).exp()
}

/// Convert an effective discount rate to a force of interest.
///
/// # Formula
/// ```text
/// δ = -ln(1 - d)
/// ```
pub fn effective_to_foi(eff_d: f64) -> f64 {
    -(-eff_d).ln_1p()
}

/// Convert an effective interest rate to an effective discount rate.
///
/// # Formula
/// ```text
/// d = i / (1 + i)
/// ```
pub fn from_accumulation(eff_i: f64) -> f64 {
    eff_i / (1.0 + eff_i)
}

/// Convert an effective discount rate to an effective interest rate.
///
/// # Formula
/// ```text
/// i = d / (1 - d)
/// ```
pub fn to_accumulation(eff_d: f64) -> f64 {
    eff_d / (1.0 - eff_d)
}

/// Simple interest rate equivalent to the simple discount rate `simple_d` over `p` periods.
///
/// # Formula
/// ```text
/// iₛ = dₛ / (1 - dₛ·p)
/// ```
pub fn simple_to_interest(simple_d: f64, p: f64) -> f64 {
    simple_d / (1.0 - simple_d * p)
}

/// Simple discount rate equivalent to the simple interest rate `simple_i` over `p` periods.
///
/// # Formula
/// ```text
/// dₛ = iₛ / (1 + iₛ·p)
/// ```
pub fn simple_from_interest(simple_i: f64, p: f64) -> f64 {
    simple_i / (1.0 + simple_i * p)
}
