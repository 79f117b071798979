// Copyright (c) Spendsight.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;

use crate::catalog;
use crate::models::{CategoryReport, MonthlyTrend, SummaryData, Transaction};
use crate::period::{self, ReportPeriod};
use crate::store::LedgerStore;

fn totals(transactions: &[Transaction]) -> (i64, i64) {
    let income = transactions
        .iter()
        .filter(|t| !t.is_expense)
        .map(|t| t.amount)
        .sum();
    let expense = transactions
        .iter()
        .filter(|t| t.is_expense)
        .map(|t| t.amount)
        .sum();
    (income, expense)
}

/// Period totals over one ledger snapshot. Integer arithmetic throughout;
/// empty input yields zeros.
pub fn summarize(transactions: &[Transaction], period: ReportPeriod) -> SummaryData {
    let (total_income, total_expense) = totals(transactions);
    SummaryData {
        total_income,
        total_expense,
        balance: total_income - total_expense,
        period,
    }
}

/// Per-category expense totals with their share of the window's expense sum,
/// sorted by amount descending. Empty when the window has no expense rows.
///
/// Grouping matches the stored category name exactly (case-sensitive), while
/// color/icon resolution folds case. Ties keep first-seen order: the sort is
/// stable and keyed on amount only.
pub fn category_breakdown(transactions: &[Transaction]) -> Vec<CategoryReport> {
    let expenses: Vec<&Transaction> = transactions.iter().filter(|t| t.is_expense).collect();
    let total_expense: i64 = expenses.iter().map(|t| t.amount).sum();
    if total_expense == 0 {
        return Vec::new();
    }

    let mut groups: Vec<(String, i64)> = Vec::new();
    for t in &expenses {
        match groups.iter_mut().find(|(name, _)| *name == t.category) {
            Some((_, sum)) => *sum += t.amount,
            None => groups.push((t.category.clone(), t.amount)),
        }
    }
    groups.sort_by(|a, b| b.1.cmp(&a.1));

    groups
        .into_iter()
        .map(|(category_name, amount)| {
            let percentage = amount as f32 / total_expense as f32 * 100.0;
            let color = catalog::color_for(&category_name).to_string();
            let icon = catalog::icon_for(&category_name).to_string();
            CategoryReport {
                category_name,
                amount,
                percentage,
                color,
                icon,
            }
        })
        .collect()
}

/// One income/expense/balance entry per calendar month of the period, oldest
/// first, each from its own range query. Trend computation is best-effort: a
/// month whose query fails degrades to a zero-filled entry instead of
/// aborting the series, so the output length always equals the month count.
pub fn monthly_trends<S: LedgerStore>(
    store: &S,
    period: ReportPeriod,
    today: NaiveDate,
) -> Vec<MonthlyTrend> {
    period
        .months(today)
        .into_iter()
        .map(|(month, year)| {
            let (income, expense) = period::month_date_range(month, year)
                .ok()
                .and_then(|(start, end)| store.transactions_in_range(start, end).ok())
                .map(|txs| totals(&txs))
                .unwrap_or((0, 0));
            MonthlyTrend {
                month: period::month_label(month).to_string(),
                year,
                income,
                expense,
                balance: income - expense,
            }
        })
        .collect()
}
