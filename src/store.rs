// Copyright (c) Spendsight.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDateTime;
use rusqlite::{Connection, OptionalExtension, params};
use thiserror::Error;

use crate::models::{NewTransaction, Transaction};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no user is signed in")]
    Unauthenticated,
    #[error("ledger query failed: {0}")]
    Query(#[from] rusqlite::Error),
}

/// The persistence boundary the report core depends on. The core only ever
/// reads; writes exist for the recording/seeding/export collaborators.
pub trait LedgerStore {
    /// All transactions of the current user with `occurred_at` in
    /// `[start, end]`, ordered by `occurred_at` descending.
    fn transactions_in_range(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<Transaction>, StoreError>;
}

pub struct SqliteLedgerStore<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteLedgerStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// The identity provider stand-in: the `current_user` settings key.
    pub fn current_user(&self) -> Result<String, StoreError> {
        let user: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM settings WHERE key='current_user'",
                [],
                |r| r.get(0),
            )
            .optional()?;
        user.ok_or(StoreError::Unauthenticated)
    }

    pub fn add_transaction(&self, tx: &NewTransaction) -> Result<i64, StoreError> {
        let user = self.current_user()?;
        let now = chrono::Local::now().naive_local();
        self.conn.execute(
            "INSERT INTO transactions(user_id, title, amount, category, occurred_at, is_expense, note, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                user,
                tx.title,
                tx.amount,
                tx.category,
                tx.occurred_at,
                tx.is_expense,
                tx.note,
                now,
                now
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }
}

impl LedgerStore for SqliteLedgerStore<'_> {
    fn transactions_in_range(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<Transaction>, StoreError> {
        let user = self.current_user()?;
        let mut stmt = self.conn.prepare_cached(
            "SELECT id, user_id, title, amount, category, occurred_at, is_expense, note, created_at, updated_at
             FROM transactions
             WHERE user_id=?1 AND occurred_at BETWEEN ?2 AND ?3
             ORDER BY occurred_at DESC, id DESC",
        )?;
        let rows = stmt.query_map(params![user, start, end], |r| {
            Ok(Transaction {
                id: r.get(0)?,
                user_id: r.get(1)?,
                title: r.get(2)?,
                amount: r.get(3)?,
                category: r.get(4)?,
                occurred_at: r.get(5)?,
                is_expense: r.get(6)?,
                note: r.get(7)?,
                created_at: r.get(8)?,
                updated_at: r.get(9)?,
            })
        })?;
        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }
}
