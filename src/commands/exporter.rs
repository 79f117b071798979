// Copyright (c) Spendsight.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::{Connection, params};
use serde_json::json;

use crate::store::SqliteLedgerStore;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(conn, sub),
        _ => Ok(()),
    }
}

fn export_transactions(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    let user = SqliteLedgerStore::new(conn).current_user()?;
    let mut stmt = conn.prepare(
        "SELECT occurred_at, title, amount, category, is_expense, note
         FROM transactions WHERE user_id=?1
         ORDER BY occurred_at, id",
    )?;
    let rows = stmt.query_map(params![user], |r| {
        Ok((
            r.get::<_, String>(0)?,
            r.get::<_, String>(1)?,
            r.get::<_, i64>(2)?,
            r.get::<_, String>(3)?,
            r.get::<_, bool>(4)?,
            r.get::<_, Option<String>>(5)?,
        ))
    })?;

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["date", "title", "amount", "category", "kind", "note"])?;
            for row in rows {
                let (date, title, amount, category, is_expense, note) = row?;
                wtr.write_record([
                    date,
                    title,
                    amount.to_string(),
                    category,
                    if is_expense { "expense" } else { "income" }.to_string(),
                    note.unwrap_or_default(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let mut items = Vec::new();
            for row in rows {
                let (date, title, amount, category, is_expense, note) = row?;
                items.push(json!({
                    "date": date, "title": title, "amount": amount,
                    "category": category,
                    "kind": if is_expense { "expense" } else { "income" },
                    "note": note
                }));
            }
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
        }
    }
    println!("Exported transactions to {}", out);
    Ok(())
}
