// Copyright (c) Spendsight.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::models::{NewTransaction, Transaction};
use crate::store::{LedgerStore, SqliteLedgerStore};
use crate::utils::{fmt_amount, maybe_print_json, parse_amount, parse_date, parse_period, pretty_table};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let title = sub.get_one::<String>("title").unwrap().trim().to_string();
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let category = sub
        .get_one::<String>("category")
        .unwrap()
        .trim()
        .to_string();
    let is_expense = !sub.get_flag("income");
    let note = sub.get_one::<String>("note").map(|s| s.to_string());

    let occurred_at = date
        .and_hms_opt(12, 0, 0)
        .ok_or_else(|| anyhow::anyhow!("Invalid date '{}'", date))?;
    let store = SqliteLedgerStore::new(conn);
    let id = store.add_transaction(&NewTransaction {
        title: title.clone(),
        amount,
        category: category.clone(),
        occurred_at,
        is_expense,
        note,
    })?;
    println!(
        "Recorded {} '{}' ({}) on {} [id {}]",
        if is_expense { "expense" } else { "income" },
        title,
        fmt_amount(amount),
        date,
        id
    );
    Ok(())
}

pub fn query_rows(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<Transaction>> {
    let period = parse_period(sub.get_one::<String>("period").unwrap())?;
    let (start, end) = period.date_range(chrono::Local::now().naive_local());
    let store = SqliteLedgerStore::new(conn);
    let mut rows = store.transactions_in_range(start, end)?;
    if let Some(limit) = sub.get_one::<usize>("limit") {
        rows.truncate(*limit);
    }
    Ok(rows)
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(conn, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows = data
            .iter()
            .map(|t| {
                vec![
                    t.occurred_at.date().to_string(),
                    t.title.clone(),
                    t.category.clone(),
                    fmt_amount(t.amount),
                    if t.is_expense { "expense" } else { "income" }.to_string(),
                    t.note.clone().unwrap_or_default(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Date", "Title", "Category", "Amount", "Kind", "Note"],
                rows
            )
        );
    }
    Ok(())
}
