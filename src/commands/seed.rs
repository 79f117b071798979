// Copyright (c) Spendsight.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use rusqlite::Connection;

use crate::models::NewTransaction;
use crate::store::SqliteLedgerStore;

pub fn handle(conn: &Connection) -> Result<()> {
    let store = SqliteLedgerStore::new(conn);
    let today = chrono::Local::now().date_naive();
    let mut count = 0usize;
    for tx in sample_current_month(today)
        .into_iter()
        .chain(sample_previous_months(today))
    {
        store.add_transaction(&tx)?;
        count += 1;
    }
    println!("Seeded {} sample transactions", count);
    Ok(())
}

fn tx(
    title: &str,
    amount: i64,
    category: &str,
    occurred_at: NaiveDateTime,
    is_expense: bool,
    note: &str,
) -> NewTransaction {
    NewTransaction {
        title: title.to_string(),
        amount,
        category: category.to_string(),
        occurred_at,
        is_expense,
        note: Some(note.to_string()),
    }
}

/// Noon on the given day, clamped to the month's length (so "day 30" in
/// February lands on the 28th/29th instead of rolling over).
fn noon_in_month(year: i32, month: u32, day: u32) -> NaiveDateTime {
    let mut day = day;
    loop {
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            if let Some(dt) = date.and_hms_opt(12, 0, 0) {
                return dt;
            }
        }
        day -= 1;
    }
}

fn month_back(today: NaiveDate, offset: u32) -> (u32, i32) {
    let (mut month, mut year) = (today.month(), today.year());
    for _ in 0..offset {
        if month == 1 {
            month = 12;
            year -= 1;
        } else {
            month -= 1;
        }
    }
    (month, year)
}

/// A deterministic current-month fixture: one salary plus nine expenses over
/// five categories, totalling 5,000,000 income and 1,570,000 expense.
pub fn sample_current_month(today: NaiveDate) -> Vec<NewTransaction> {
    let (m, y) = (today.month(), today.year());
    vec![
        tx("Monthly salary", 5_000_000, "Thu nhập", noon_in_month(y, m, 1), false, "Salary"),
        tx("Morning coffee", 25_000, "Ăn uống", noon_in_month(y, m, 2), true, "Coffee nearby"),
        tx("Lunch", 80_000, "Ăn uống", noon_in_month(y, m, 3), true, "Office lunch"),
        tx("Dinner", 120_000, "Ăn uống", noon_in_month(y, m, 4), true, "Family dinner"),
        tx("Fuel", 150_000, "Giao thông", noon_in_month(y, m, 5), true, "Motorbike fill-up"),
        tx("Ride share", 45_000, "Giao thông", noon_in_month(y, m, 6), true, "Taxi home"),
        tx("Clothes", 300_000, "Mua sắm", noon_in_month(y, m, 7), true, "New shirt"),
        tx("Books", 150_000, "Mua sắm", noon_in_month(y, m, 8), true, "Programming books"),
        tx("Cinema", 200_000, "Giải trí", noon_in_month(y, m, 9), true, "Movie night"),
        tx("Checkup", 500_000, "Sức khỏe", noon_in_month(y, m, 10), true, "Routine checkup"),
    ]
}

/// Six prior months of income and per-category expenses with gently rising
/// amounts, enough history to exercise the trend series.
pub fn sample_previous_months(today: NaiveDate) -> Vec<NewTransaction> {
    let mut out = Vec::new();
    for offset in 1..=6u32 {
        let (m, y) = month_back(today, offset);
        let step = offset as i64;
        out.push(tx(
            "Monthly salary",
            4_500_000 + step * 100_000,
            "Thu nhập",
            noon_in_month(y, m, 1),
            false,
            "Salary",
        ));
        out.push(tx(
            "Food for the month",
            1_200_000 + step * 50_000,
            "Ăn uống",
            noon_in_month(y, m, 15),
            true,
            "Monthly food",
        ));
        out.push(tx(
            "Transport for the month",
            800_000 + step * 30_000,
            "Giao thông",
            noon_in_month(y, m, 20),
            true,
            "Monthly transport",
        ));
        out.push(tx(
            "Shopping for the month",
            600_000 + step * 20_000,
            "Mua sắm",
            noon_in_month(y, m, 25),
            true,
            "Monthly shopping",
        ));
        out.push(tx(
            "Entertainment for the month",
            400_000 + step * 15_000,
            "Giải trí",
            noon_in_month(y, m, 28),
            true,
            "Monthly entertainment",
        ));
        out.push(tx(
            "Health for the month",
            200_000 + step * 10_000,
            "Sức khỏe",
            noon_in_month(y, m, 30),
            true,
            "Monthly health",
        ));
    }
    out
}
