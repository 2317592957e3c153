//! Identities every rate and annuity valuation must satisfy.

use approx::assert_abs_diff_eq;
use finmaths::prelude::*;

const RATES: [f64; 5] = [0.001, 0.02, 0.034, 0.05, 0.15];

fn rate(i: f64) -> Rate {
    Rate::builder().raw_rate(i).build().unwrap()
}

#[test]
fn test_interest_discount_round_trip() {
    for i in RATES {
        let back = discount::to_accumulation(accumulation::to_discount(i));
        assert_abs_diff_eq!(back, i, epsilon = 1e-12);
    }
}

#[test]
fn test_force_of_interest_round_trip() {
    for i in RATES {
        let back = accumulation::effective_from_foi(accumulation::effective_to_foi(i));
        assert_abs_diff_eq!(back, i, epsilon = 1e-12);
    }
}

#[test]
fn test_nominal_round_trip() {
    for (r, m) in RATES.iter().zip([0.5, 1.0, 2.0, 4.0, 12.0]) {
        let back = accumulation::effective_to_nominal(accumulation::effective_from_nominal(*r, m), m);
        assert_abs_diff_eq!(back, *r, epsilon = 1e-10);
    }
}

#[test]
fn test_every_origin_agrees() {
    // The same money growth quoted three ways normalizes to the same rate
    let by_interest = rate(0.05);
    let by_discount = Rate::builder()
        .raw_rate(by_interest.discount_rate())
        .is_discount(true)
        .build()
        .unwrap();
    let by_foi = Rate::builder()
        .raw_rate(by_interest.force_of_interest().unwrap())
        .is_force_of_interest(true)
        .build()
        .unwrap();

    for other in [by_discount, by_foi] {
        assert_abs_diff_eq!(other.interest_rate(), by_interest.interest_rate(), epsilon = 1e-12);
        assert_abs_diff_eq!(other.discount_rate(), by_interest.discount_rate(), epsilon = 1e-12);
    }
}

#[test]
fn test_arrear_value_is_cached_value_times_installment() {
    for i in RATES {
        let rate = rate(i);
        let annuity = Annuity::builder()
            .rate(&rate)
            .term(12.0)
            .installment(250.0)
            .nominal_period(12.0)
            .build()
            .unwrap();
        let pv = annuity.time_value().call().unwrap();
        assert_abs_diff_eq!(pv, annuity.arrear_pv() * 250.0, epsilon = 1e-9);
    }
}

#[test]
fn test_advance_vs_arrear() {
    for i in RATES {
        let rate = rate(i);
        let build = |mode| {
            Annuity::builder()
                .rate(&rate)
                .payment_mode(mode)
                .term(8.0)
                .build()
                .unwrap()
        };
        let arrear = build(PaymentMode::Arrear).time_value().call().unwrap();
        let advance = build(PaymentMode::Advance).time_value().call().unwrap();
        let i = rate.interest_rate();
        let d = rate.discount_rate();
        assert_abs_diff_eq!(advance, arrear * i / d, epsilon = 1e-9);
    }
}

#[test]
fn test_deferral_and_future_value_identities() {
    let rate = rate(0.05);
    for mode in [PaymentMode::Arrear, PaymentMode::Advance, PaymentMode::Continuous] {
        let annuity = Annuity::builder()
            .rate(&rate)
            .payment_mode(mode)
            .term(6.0)
            .installment(100.0)
            .build()
            .unwrap();
        let pv = annuity.time_value().call().unwrap();

        let deferred_by_self = annuity.time_value().differ_rate(&rate).call().unwrap();
        assert_abs_diff_eq!(deferred_by_self, pv, epsilon = 1e-12);

        let fv = annuity.time_value().future_value(true).call().unwrap();
        assert_abs_diff_eq!(fv, pv * rate.time_value_factor(6.0, false), epsilon = 1e-9);
    }
}

#[test]
fn test_zero_rate_boundary() {
    let rate = rate(0.0);
    assert_eq!(rate.interest_rate(), 0.0);
    assert_eq!(rate.discount_rate(), 0.0);
    assert_eq!(rate.force_of_interest(), Some(0.0));
}

#[test]
fn test_construction_failures() {
    assert!(matches!(
        Rate::builder().raw_rate(-0.01).build(),
        Err(FinMathsError::Validation(_))
    ));
    assert!(matches!(
        "bogus".parse::<PaymentMode>(),
        Err(FinMathsError::Configuration(_))
    ));
}

#[test]
fn test_simple_rate_scenario() {
    let rate = Rate::builder().raw_rate(0.05).is_simple(true).build().unwrap();
    let n = 5.0;
    let acc = rate.time_value_factor(n, false);
    let disc = 1.0 - n * rate.convert_to(RateKind::SimpleDiscount, n).unwrap();
    assert_abs_diff_eq!(acc, 1.25, epsilon = 1e-12);
    assert_abs_diff_eq!(acc, 1.0 / disc, epsilon = 1e-12);
}

#[test]
fn test_shared_rate_across_threads() {
    let rate = rate(0.034);
    let reference = Annuity::builder()
        .rate(&rate)
        .term(4.0)
        .installment(1000.0)
        .nominal_period(4.0)
        .build()
        .unwrap()
        .time_value()
        .call()
        .unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    Annuity::builder()
                        .rate(&rate)
                        .term(4.0)
                        .installment(1000.0)
                        .nominal_period(4.0)
                        .build()
                        .unwrap()
                        .time_value()
                        .call()
                        .unwrap()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), reference);
        }
    });
}
