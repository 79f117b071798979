// Copyright (c) Spendsight.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};
use rusqlite::Connection;

use crate::state::{ReportsController, ReportsSnapshot, ReportsState};
use crate::store::SqliteLedgerStore;
use crate::utils::{fmt_amount, maybe_print_json, parse_period, pretty_table};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(conn, sub)?,
        Some(("categories", sub)) => categories(conn, sub)?,
        Some(("trends", sub)) => trends(conn, sub)?,
        Some(("insights", sub)) => insights(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn load_snapshot(conn: &Connection, sub: &clap::ArgMatches) -> Result<ReportsSnapshot> {
    let period = parse_period(sub.get_one::<String>("period").unwrap())?;
    let store = SqliteLedgerStore::new(conn);
    let mut controller = ReportsController::new(store);
    let snapshot = controller.load(period, chrono::Local::now().naive_local());
    if let ReportsState::Error(msg) = &snapshot.state {
        return Err(anyhow!("{}", msg));
    }
    Ok(snapshot.clone())
}

fn summary(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let snapshot = load_snapshot(conn, sub)?;
    let summary = snapshot
        .summary
        .ok_or_else(|| anyhow!("No summary computed"))?;
    if !maybe_print_json(json_flag, jsonl_flag, &summary)? {
        let rows = vec![vec![
            summary.period.display_name().to_string(),
            fmt_amount(summary.total_income),
            fmt_amount(summary.total_expense),
            fmt_amount(summary.balance),
        ]];
        println!(
            "{}",
            pretty_table(&["Period", "Income", "Expense", "Balance"], rows)
        );
    }
    Ok(())
}

fn categories(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let snapshot = load_snapshot(conn, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &snapshot.breakdown)? {
        let rows = snapshot
            .breakdown
            .iter()
            .map(|c| {
                vec![
                    c.category_name.clone(),
                    fmt_amount(c.amount),
                    format!("{:.1}%", c.percentage),
                    c.color.clone(),
                    c.icon.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Category", "Amount", "Share", "Color", "Icon"], rows)
        );
    }
    Ok(())
}

fn trends(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let snapshot = load_snapshot(conn, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &snapshot.trends)? {
        let rows = snapshot
            .trends
            .iter()
            .map(|t| {
                vec![
                    format!("{} {}", t.month, t.year),
                    fmt_amount(t.income),
                    fmt_amount(t.expense),
                    fmt_amount(t.balance),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Month", "Income", "Expense", "Balance"], rows)
        );
    }
    Ok(())
}

fn insights(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let snapshot = load_snapshot(conn, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &snapshot.insights)? {
        if snapshot.insights.is_empty() {
            println!("No insights for this period");
            return Ok(());
        }
        let rows = snapshot
            .insights
            .iter()
            .map(|i| {
                vec![
                    i.title.clone(),
                    i.description.clone(),
                    i.icon.clone(),
                    i.color.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Insight", "Detail", "Icon", "Color"], rows)
        );
    }
    Ok(())
}
