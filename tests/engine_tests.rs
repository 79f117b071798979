// Copyright (c) Spendsight.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use spendsight::engine::{category_breakdown, monthly_trends, summarize};
use spendsight::models::Transaction;
use spendsight::period::ReportPeriod;
use spendsight::store::{LedgerStore, StoreError};

fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn tx(id: i64, amount: i64, category: &str, is_expense: bool, occurred_at: NaiveDateTime) -> Transaction {
    Transaction {
        id,
        user_id: "u1".to_string(),
        title: format!("tx-{}", id),
        amount,
        category: category.to_string(),
        occurred_at,
        is_expense,
        note: None,
        created_at: occurred_at,
        updated_at: occurred_at,
    }
}

struct FixedStore {
    transactions: Vec<Transaction>,
}

impl LedgerStore for FixedStore {
    fn transactions_in_range(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<Transaction>, StoreError> {
        Ok(self
            .transactions
            .iter()
            .filter(|t| t.occurred_at >= start && t.occurred_at <= end)
            .cloned()
            .collect())
    }
}

/// Fails every query that falls inside one calendar month.
struct MonthOutageStore {
    inner: FixedStore,
    outage: (u32, i32),
}

impl LedgerStore for MonthOutageStore {
    fn transactions_in_range(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<Transaction>, StoreError> {
        if (start.month(), start.year()) == self.outage {
            return Err(StoreError::Query(rusqlite::Error::QueryReturnedNoRows));
        }
        self.inner.transactions_in_range(start, end)
    }
}

#[test]
fn balance_is_income_minus_expense_exactly() {
    let txs = vec![
        tx(1, 5_000_000, "Thu nhập", false, at(2025, 6, 1)),
        tx(2, 120_000, "Ăn uống", true, at(2025, 6, 2)),
        tx(3, 300_000, "Mua sắm", true, at(2025, 6, 3)),
        tx(4, 1_000_000, "Thu nhập", false, at(2025, 6, 4)),
    ];
    let summary = summarize(&txs, ReportPeriod::ThisMonth);
    assert_eq!(summary.total_income, 6_000_000);
    assert_eq!(summary.total_expense, 420_000);
    assert_eq!(summary.balance, summary.total_income - summary.total_expense);
    assert_eq!(summary.period, ReportPeriod::ThisMonth);
}

#[test]
fn summarize_empty_input_is_all_zeros() {
    let summary = summarize(&[], ReportPeriod::SixMonths);
    assert_eq!(summary.total_income, 0);
    assert_eq!(summary.total_expense, 0);
    assert_eq!(summary.balance, 0);
}

#[test]
fn breakdown_is_empty_without_expense_rows() {
    let txs = vec![tx(1, 5_000_000, "Thu nhập", false, at(2025, 6, 1))];
    assert!(category_breakdown(&txs).is_empty());
    assert!(category_breakdown(&[]).is_empty());
}

#[test]
fn breakdown_percentages_sum_to_one_hundred() {
    let txs = vec![
        tx(1, 225_000, "Ăn uống", true, at(2025, 6, 2)),
        tx(2, 195_000, "Giao thông", true, at(2025, 6, 3)),
        tx(3, 450_000, "Mua sắm", true, at(2025, 6, 4)),
        tx(4, 200_000, "Giải trí", true, at(2025, 6, 5)),
        tx(5, 500_000, "Sức khỏe", true, at(2025, 6, 6)),
    ];
    let breakdown = category_breakdown(&txs);
    let sum: f32 = breakdown.iter().map(|c| c.percentage).sum();
    assert!((sum - 100.0).abs() < 0.01, "sum was {}", sum);
    for c in &breakdown {
        assert!(c.percentage >= 0.0 && c.percentage <= 100.0);
    }
}

#[test]
fn breakdown_names_the_top_category_share() {
    // 500,000 of 1,570,000 total is 31.8% when shown with one decimal.
    let txs = vec![
        tx(1, 225_000, "Ăn uống", true, at(2025, 6, 2)),
        tx(2, 195_000, "Giao thông", true, at(2025, 6, 3)),
        tx(3, 450_000, "Mua sắm", true, at(2025, 6, 4)),
        tx(4, 200_000, "Giải trí", true, at(2025, 6, 5)),
        tx(5, 500_000, "Sức khỏe", true, at(2025, 6, 6)),
    ];
    let breakdown = category_breakdown(&txs);
    let top = &breakdown[0];
    assert_eq!(top.category_name, "Sức khỏe");
    assert_eq!(top.amount, 500_000);
    assert_eq!(format!("{:.1}", top.percentage), "31.8");
}

#[test]
fn breakdown_sorts_descending_and_keeps_tie_order_stable() {
    let txs = vec![
        tx(1, 100, "B-first", true, at(2025, 6, 1)),
        tx(2, 100, "A-second", true, at(2025, 6, 2)),
        tx(3, 300, "Big", true, at(2025, 6, 3)),
    ];
    let first = category_breakdown(&txs);
    let second = category_breakdown(&txs);
    assert_eq!(first, second);
    assert_eq!(first[0].category_name, "Big");
    // Equal amounts keep first-seen order, not alphabetical.
    assert_eq!(first[1].category_name, "B-first");
    assert_eq!(first[2].category_name, "A-second");
}

#[test]
fn breakdown_groups_by_exact_name_but_styles_case_insensitively() {
    let txs = vec![
        tx(1, 100_000, "Food", true, at(2025, 6, 1)),
        tx(2, 50_000, "food", true, at(2025, 6, 2)),
    ];
    let breakdown = category_breakdown(&txs);
    assert_eq!(breakdown.len(), 2);
    // Both casings resolve to the same catalog entry.
    assert_eq!(breakdown[0].color, "#F59E0B");
    assert_eq!(breakdown[1].color, "#F59E0B");
    assert_eq!(breakdown[0].icon, "restaurant");
}

#[test]
fn breakdown_unknown_category_gets_fallback_styling() {
    let txs = vec![tx(1, 10_000, "Llama grooming", true, at(2025, 6, 1))];
    let breakdown = category_breakdown(&txs);
    assert_eq!(breakdown[0].color, "#6B7280");
    assert_eq!(breakdown[0].icon, "category");
    assert_eq!(format!("{:.1}", breakdown[0].percentage), "100.0");
}

#[test]
fn trend_series_length_matches_month_count_for_every_period() {
    let store = FixedStore { transactions: vec![] };
    let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
    let expected = [1usize, 1, 3, 6, 12];
    for (period, want) in ReportPeriod::ALL.into_iter().zip(expected) {
        assert_eq!(monthly_trends(&store, period, today).len(), want);
    }
}

#[test]
fn trends_are_chronological_and_future_months_are_zero() {
    let store = FixedStore {
        transactions: vec![
            tx(1, 2_000_000, "Thu nhập", false, at(2025, 3, 1)),
            tx(2, 500_000, "Ăn uống", true, at(2025, 3, 10)),
        ],
    };
    let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
    let trends = monthly_trends(&store, ReportPeriod::ThisYear, today);

    assert_eq!(trends.len(), 12);
    assert_eq!(trends[0].month, "Jan");
    assert_eq!(trends[11].month, "Dec");

    let march = &trends[2];
    assert_eq!(march.income, 2_000_000);
    assert_eq!(march.expense, 500_000);
    assert_eq!(march.balance, 1_500_000);

    // November has not happened yet; the query legitimately returns nothing.
    let november = &trends[10];
    assert_eq!((november.income, november.expense, november.balance), (0, 0, 0));
}

#[test]
fn a_failing_month_degrades_to_zero_without_aborting_the_series() {
    let store = MonthOutageStore {
        inner: FixedStore {
            transactions: vec![
                tx(1, 1_000_000, "Thu nhập", false, at(2025, 4, 1)),
                tx(2, 1_000_000, "Thu nhập", false, at(2025, 5, 1)),
            ],
        },
        outage: (5, 2025),
    };
    let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
    let trends = monthly_trends(&store, ReportPeriod::ThreeMonths, today);

    assert_eq!(trends.len(), 3);
    assert_eq!(trends[0].income, 1_000_000); // April survives
    assert_eq!(trends[1].income, 0); // May degraded, not an error
    assert_eq!(trends[2].income, 0);
}
