//! 현금흐름표/회수기간/NPV 회귀 테스트.
use iiot_roi_calculator::economics::{build_schedule, present_value, summarize, Payback};

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {tol})"
    );
}

#[test]
fn schedule_has_year_zero_through_horizon() {
    let s = build_schedule(75_000.0, 20_000.0, 5, 10.0);
    assert_eq!(s.len(), 6);
    let years: Vec<u32> = s.iter().map(|r| r.year).collect();
    assert_eq!(years, vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(s.rows[0].cash_flow, -75_000.0);
    assert!(s.iter().skip(1).all(|r| r.cash_flow == 20_000.0));
}

#[test]
fn payback_is_first_non_negative_year() {
    let s = build_schedule(75_000.0, 20_000.0, 5, 10.0);
    assert_eq!(
        s.cumulative(),
        vec![-75_000.0, -55_000.0, -35_000.0, -15_000.0, 5_000.0, 25_000.0]
    );
    assert_eq!(s.payback(), Payback::RecoveredIn(4));
    assert_eq!(s.payback().year(), Some(4));
}

#[test]
fn payback_counts_exact_zero_as_recovered() {
    let s = build_schedule(40_000.0, 20_000.0, 3, 0.0);
    assert_eq!(s.payback(), Payback::RecoveredIn(2));
}

#[test]
fn unrecovered_investment_is_distinct_state() {
    let s = build_schedule(500_000.0, 10_000.0, 3, 10.0);
    assert_eq!(s.payback(), Payback::NotRecovered);
    assert_eq!(s.payback().year(), None);
}

#[test]
fn zero_investment_gives_zero_roi_every_year() {
    let s = build_schedule(0.0, 20_000.0, 5, 10.0);
    assert!(s.iter().all(|r| r.roi_pct == 0.0));
    assert_eq!(s.payback(), Payback::RecoveredIn(1));
}

#[test]
fn roi_is_cumulative_over_investment() {
    let s = build_schedule(75_000.0, 20_000.0, 5, 10.0);
    assert_close("roi0", s.rows[0].roi_pct, -100.0, 1e-9);
    assert_close("roi5", s.final_roi_pct(), 25_000.0 / 75_000.0 * 100.0, 1e-9);
}

#[test]
fn npv_discounts_from_year_one() {
    let s = build_schedule(75_000.0, 20_000.0, 5, 10.0);
    assert_eq!(s.rows[0].npv, -75_000.0);
    let contribution = s.rows[1].npv - s.rows[0].npv;
    assert_close("year1 pv", contribution, 18_181.82, 0.01);
    assert_close("pv", present_value(20_000.0, 10.0, 1), 18_181.82, 0.01);

    let expected: f64 = -75_000.0
        + (1..=5)
            .map(|y| 20_000.0 / 1.1f64.powi(y))
            .sum::<f64>();
    assert_close("npv5", s.final_npv(), expected, 1e-6);
}

#[test]
fn zero_discount_rate_npv_equals_cumulative() {
    let s = build_schedule(75_000.0, 20_000.0, 5, 0.0);
    for row in s.iter() {
        assert_close("npv", row.npv, row.cumulative, 1e-9);
    }
}

#[test]
fn rebuilding_is_idempotent() {
    let a = build_schedule(75_000.0, 29_300.0, 7, 12.5);
    let b = build_schedule(75_000.0, 29_300.0, 7, 12.5);
    assert_eq!(a, b);
}

#[test]
fn summary_collects_headline_metrics() {
    let s = build_schedule(75_000.0, 20_000.0, 5, 10.0);
    let summary = summarize(&s, 75_000.0, 20_000.0);
    assert_eq!(summary.payback, Payback::RecoveredIn(4));
    assert_close("npv", summary.final_npv, s.final_npv(), 1e-12);
    assert_close("annual", summary.annual_return_pct, 26.666_666, 1e-5);
    assert_close(
        "discounted roi",
        summary.discounted_roi_pct,
        (s.final_npv() + 75_000.0) / 75_000.0 * 100.0,
        1e-9,
    );
    assert_close("simple", summary.simple_payback_years.unwrap(), 3.75, 1e-12);
    assert_close("months", summary.simple_payback_months().unwrap(), 45.0, 1e-9);
}

#[test]
fn summary_without_benefit_has_no_simple_payback() {
    let s = build_schedule(75_000.0, -5_000.0, 3, 10.0);
    let summary = summarize(&s, 75_000.0, -5_000.0);
    assert_eq!(summary.simple_payback_years, None);
    assert_eq!(summary.payback, Payback::NotRecovered);

    let free = build_schedule(0.0, 1_000.0, 3, 10.0);
    let summary = summarize(&free, 0.0, 1_000.0);
    assert_eq!(summary.annual_return_pct, 0.0);
    assert_eq!(summary.discounted_roi_pct, 0.0);
}
