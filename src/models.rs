// Copyright (c) Spendsight.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::period::ReportPeriod;

/// A single recorded income or expense event. Amounts are non-negative
/// integers in the smallest currency unit; `is_expense` decides the sign at
/// aggregation time. The report core consumes these read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub user_id: String,
    pub title: String,
    pub amount: i64,
    pub category: String,
    pub occurred_at: NaiveDateTime,
    pub is_expense: bool,
    pub note: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Fields for a transaction about to be recorded; the store assigns the id
/// and audit timestamps.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub title: String,
    pub amount: i64,
    pub category: String,
    pub occurred_at: NaiveDateTime,
    pub is_expense: bool,
    pub note: Option<String>,
}

/// Period totals. Rebuilt wholesale on every load, never patched in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryData {
    pub total_income: i64,
    pub total_expense: i64,
    pub balance: i64,
    pub period: ReportPeriod,
}

/// One category's share of the expense total within the window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryReport {
    pub category_name: String,
    pub amount: i64,
    pub percentage: f32,
    pub color: String,
    pub icon: String,
}

/// Income/expense/balance for one calendar month, oldest first in a series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyTrend {
    pub month: String,
    pub year: i32,
    pub income: i64,
    pub expense: i64,
    pub balance: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InsightType {
    HighCategorySpending,
    SavingsGoal,
    BudgetWarning,
    PositiveTrend,
}

/// A short rule-generated observation derived from the computed aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmartInsight {
    pub kind: InsightType,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub color: String,
}
