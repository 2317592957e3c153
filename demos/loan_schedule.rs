//! # Loan Schedule Example
//!
//! Amortizes a loan with level annual installments and prints the schedule table.

use finmaths::prelude::*;

fn main() -> FinMathsResult<()> {
    env_logger::init();

    let rate = Rate::builder().raw_rate(0.05).build()?;
    let annuity = Annuity::builder().rate(&rate).term(10.0).build()?;

    let rows = loan_schedule()
        .annuity(&annuity)
        .loan_amount(25_000.0)
        .call()?;

    println!("Loan of 25,000 over 10 years at 5%");
    println!("{}", schedule_frame(&rows)?);

    let total_interest: f64 = rows.iter().map(|row| row.interest).sum();
    println!("Total interest paid: {total_interest:.2}");

    Ok(())
}
