// Copyright (c) Spendsight.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::catalog;
use crate::utils::{get_current_user, pretty_table};

pub fn handle(conn: &Connection) -> Result<()> {
    let mut rows = Vec::new();

    // 1) No current user means every ledger query will fail
    if get_current_user(conn)?.is_none() {
        rows.push(vec![
            "no_current_user".to_string(),
            "run `spendsight user set <id>`".to_string(),
        ]);
    }

    // 2) Expense categories outside the catalog render with the fallback
    //    gray/icon (income categories are not styled, so they are skipped)
    let mut stmt = conn.prepare(
        "SELECT DISTINCT category FROM transactions WHERE is_expense=1 ORDER BY category",
    )?;
    let mut cur = stmt.query([])?;
    while let Some(r) = cur.next()? {
        let name: String = r.get(0)?;
        if catalog::metadata_for(&name).is_none() {
            rows.push(vec!["unknown_category".to_string(), name]);
        }
    }

    // 3) Zero-amount rows are legal but usually a data-entry slip
    let zero_count: i64 =
        conn.query_row("SELECT COUNT(*) FROM transactions WHERE amount=0", [], |r| {
            r.get(0)
        })?;
    if zero_count > 0 {
        rows.push(vec![
            "zero_amount".to_string(),
            format!("{} transaction(s)", zero_count),
        ]);
    }

    if rows.is_empty() {
        println!("doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
