//! # Portfolio Valuation Example
//!
//! Values two quarterly annuities, the second deferred four years, and checks that a simple
//! rate's accumulation and discount factors over five periods are reciprocal.
//!
//! Run with `RUST_LOG=debug cargo run --example portfolio` to see the normalization logs.

use finmaths::prelude::*;

fn main() -> FinMathsResult<()> {
    env_logger::init();

    println!("FinMaths Portfolio Example");
    println!("==========================");

    let rate = Rate::builder().raw_rate(0.034).build()?;
    let rate2 = Rate::builder().raw_rate(0.042).build()?;
    println!("Effective rates: {:.6}, {:.6}", rate.interest_rate(), rate2.interest_rate());

    let annuity = Annuity::builder()
        .rate(&rate)
        .term(4.0)
        .installment(1000.0)
        .nominal_period(4.0)
        .build()?;
    let annuity2 = Annuity::builder()
        .rate(&rate2)
        .term(2.0)
        .installment(1000.0)
        .nominal_period(4.0)
        .build()?;

    let first = annuity.time_value().call()?;
    let second = annuity2
        .time_value()
        .differ_rate(&rate)
        .differ_period(4.0)
        .call()?;
    println!("\n=== Annuities ===");
    println!("  First annuity PV:            {first:.4}");
    println!("  Second annuity PV, deferred: {second:.4}");
    println!("  Portfolio PV:                {:.4}", first + second);

    println!("\n=== Simple rate check ===");
    let simple = Rate::builder().raw_rate(0.05).is_simple(true).build()?;
    let n = 5.0;
    let acc = simple.time_value_factor(n, false);
    let disc = 1.0 - n * simple.convert_to(RateKind::SimpleDiscount, n)?;
    println!("  accumulation {acc:.6}, discount {disc:.6}, product {:.6}", acc * disc);

    Ok(())
}
