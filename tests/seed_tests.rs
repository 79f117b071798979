// Copyright (c) Spendsight.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, NaiveDate};
use spendsight::commands::seed::{sample_current_month, sample_previous_months};
use spendsight::engine::{category_breakdown, summarize};
use spendsight::insights::evaluate;
use spendsight::models::{InsightType, NewTransaction, Transaction};
use spendsight::period::ReportPeriod;

fn materialize(fixtures: Vec<NewTransaction>) -> Vec<Transaction> {
    fixtures
        .into_iter()
        .enumerate()
        .map(|(i, n)| Transaction {
            id: i as i64 + 1,
            user_id: "seed".to_string(),
            title: n.title,
            amount: n.amount,
            category: n.category,
            occurred_at: n.occurred_at,
            is_expense: n.is_expense,
            note: n.note,
            created_at: n.occurred_at,
            updated_at: n.occurred_at,
        })
        .collect()
}

#[test]
fn current_month_fixture_has_the_documented_totals() {
    let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
    let txs = materialize(sample_current_month(today));
    assert_eq!(txs.len(), 10);

    let summary = summarize(&txs, ReportPeriod::ThisMonth);
    assert_eq!(summary.total_income, 5_000_000);
    assert_eq!(summary.total_expense, 1_570_000);
    assert_eq!(summary.balance, 3_430_000);
}

#[test]
fn current_month_fixture_concentrates_spending_on_health() {
    let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
    let txs = materialize(sample_current_month(today));

    let breakdown = category_breakdown(&txs);
    assert_eq!(breakdown.len(), 5);
    assert_eq!(breakdown[0].category_name, "Sức khỏe");
    assert_eq!(breakdown[0].amount, 500_000);
    assert_eq!(format!("{:.1}", breakdown[0].percentage), "31.8");

    let summary = summarize(&txs, ReportPeriod::ThisMonth);
    let insights = evaluate(&breakdown, &summary);
    let kinds: Vec<_> = insights.iter().map(|i| i.kind).collect();
    assert!(kinds.contains(&InsightType::HighCategorySpending));
    assert!(kinds.contains(&InsightType::SavingsGoal));
}

#[test]
fn fixture_dates_stay_inside_the_current_month() {
    let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
    for tx in sample_current_month(today) {
        assert_eq!(tx.occurred_at.month(), 6);
        assert_eq!(tx.occurred_at.year(), 2025);
    }
}

#[test]
fn previous_months_cover_six_months_of_history() {
    let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
    let fixtures = sample_previous_months(today);
    assert_eq!(fixtures.len(), 36); // 6 months x (1 income + 5 expenses)

    let months: std::collections::BTreeSet<(i32, u32)> = fixtures
        .iter()
        .map(|t| (t.occurred_at.year(), t.occurred_at.month()))
        .collect();
    assert_eq!(months.len(), 6);
    assert!(months.contains(&(2025, 5)));
    assert!(months.contains(&(2024, 12)));
}

#[test]
fn previous_months_income_rises_with_distance() {
    let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
    let fixtures = sample_previous_months(today);
    let incomes: Vec<i64> = fixtures
        .iter()
        .filter(|t| !t.is_expense)
        .map(|t| t.amount)
        .collect();
    assert_eq!(incomes[0], 4_600_000); // one month back
    assert_eq!(incomes[5], 5_100_000); // six months back
}

#[test]
fn day_thirty_fixtures_clamp_inside_february() {
    // One month back from March 2025 is February, which has no 30th.
    let today = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
    let fixtures = sample_previous_months(today);
    let feb_health = fixtures
        .iter()
        .find(|t| t.occurred_at.month() == 2 && t.category == "Sức khỏe")
        .expect("February health fixture");
    assert_eq!(feb_health.occurred_at.day(), 28);
}
