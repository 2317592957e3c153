//! Interest-rate side of the conversion formulas.

/// Simple accumulation factor over `n` periods.
///
/// # Formula
/// ```text
/// 1 + i·n
/// ```
pub fn simple_factor(simple_i: f64, n: f64) -> f64 {
    1.0 + simple_i * n
}

/// Compound accumulation factor over `n` periods.
///
/// # Formula
/// ```text
/// (1 + i)ⁿ
/// ```
pub fn compound_factor(eff_i: f64, n: f64) -> f64 {
    (1.0 + eff_i).powf(n)
}

/// Convert a simple interest rate to the effective rate that accumulates to the same amount
/// after `p` periods.
///
/// # Formula
/// ```text
/// i = (1 + iₛ·p)^(1/p) - 1
/// ```
///
/// # Example
/// ```rust
/// # use finmaths::prelude::*;
/// let eff = accumulation::effective_from_simple(0.05, 5.0);
/// assert!((accumulation::compound_factor(eff, 5.0) - 1.25).abs() < 1e-12);
/// ```
pub fn effective_from_simple(simple_i: f64, p: f64) -> f64 {
    (1.0 + simple_i * p).powf(1.0 / p) - 1.0
}

/// Convert an effective interest rate to the simple rate that accumulates to the same amount
/// after `p` periods.
///
/// # Formula
/// ```text
/// iₛ = ((1 + i)ᵖ - 1) / p
/// ```
pub fn effective_to_simple(eff_i: f64, p: f64) -> f64 {
    ((1.0 + eff_i).powf(p) - 1.0) / p
}

/// Convert a nominal interest rate convertible `m` times per period to an effective rate.
///
/// # Formula
/// ```text
/// i = (1 + i⁽ᵐ⁾/m)^m - 1
/// ```
///
/// # Example
/// ```rust
/// # use finmaths::prelude::*;
/// let eff = accumulation::effective_from_nominal(0.06, 2.0); // semi-annual nominal 6%
/// assert!((eff - 0.0609).abs() < 1e-12);
/// ```
pub fn effective_from_nominal(nom_i: f64, m: f64) -> f64 {
    (1.0 + nom_i / m).powf(m) - 1.0
}

/// Convert an effective interest rate to the nominal rate convertible `m` times per period.
///
/// # Formula
/// ```text
/// i⁽ᵐ⁾ = m[(1 + i)^(1/m) - 1]
/// ```
pub fn effective_to_nominal(eff_i: f64, m: f64) -> f64 {
    ((1.0 + eff_i).powf(1.0 / m) - 1.0) * m
}

/// Convert a force of interest to an effective interest rate.
///
/// # Formula
/// ```text
/// i = e^δ - 1
/// ```
pub fn effective_from_foi(foi: f64) -> f64 {
    foi.exp() - 1.0
}

/// Convert an effective interest rate to a force of interest.
///
/// # Formula
/// ```text
/// δ = ln(1 + i)
/// ```
pub fn effective_to_foi(eff_i: f64) -> f64 {
    eff_i.ln_1p()
}

/// Convert an effective discount rate to an effective interest rate.
///
/// # Formula
/// ```text
/// i = d / (1 - d)
/// ```
pub fn from_discount(eff_d: f64) -> f64 {
    eff_d / (1.0 - eff_d)
}

/// Convert an effective interest rate to an effective discount rate.
///
/// # Formula
/// ```text
/// d = i / (1 + i)
/// ```
pub fn to_discount(eff_i: f64) -> f64 {
    eff_i / (1.0 + eff_i)
}

/// Simple interest rate equivalent to the simple discount rate `simple_d` over `p` periods.
///
/// # Formula
/// ```text
/// iₛ = dₛ / (1 - dₛ·p)
/// ```
pub fn simple_from_discount(simple_d: f64, p: f64) -> f64 {
    simple_d / (1.0 - simple_d * p)
}

/// Simple discount rate that discounts the `p`-period simple accumulation of `simple_i` back to
/// its original value.
///
/// # Formula
/// ```text
/// dₛ = iₛ / (1 + iₛ·p)
/// ```
pub fn simple_to_discount(simple_i: f64, p: f64) -> f64 {
    simple_i / (1.0 + simple_i * p)
}
