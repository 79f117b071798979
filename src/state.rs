// Copyright (c) Spendsight.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::engine;
use crate::insights;
use crate::models::{CategoryReport, MonthlyTrend, SmartInsight, SummaryData};
use crate::period::ReportPeriod;
use crate::store::LedgerStore;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ReportsState {
    Loading,
    Success,
    Error(String),
}

/// The read-only aggregate bundle handed to presentation. Replaced wholesale
/// on every successful load; an error load keeps the previous aggregates so
/// the screen never flickers back to empty.
#[derive(Debug, Clone, Serialize)]
pub struct ReportsSnapshot {
    pub state: ReportsState,
    pub summary: Option<SummaryData>,
    pub breakdown: Vec<CategoryReport>,
    pub trends: Vec<MonthlyTrend>,
    pub insights: Vec<SmartInsight>,
    pub period: ReportPeriod,
}

/// Orchestrates one report load: period resolution, the main range query,
/// aggregation, trends, insights, then a single atomic publish. The store is
/// injected so the whole pipeline runs against any `LedgerStore`.
pub struct ReportsController<S: LedgerStore> {
    store: S,
    snapshot: ReportsSnapshot,
}

impl<S: LedgerStore> ReportsController<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            snapshot: ReportsSnapshot {
                state: ReportsState::Loading,
                summary: None,
                breakdown: Vec::new(),
                trends: Vec::new(),
                insights: Vec::new(),
                period: ReportPeriod::ThisMonth,
            },
        }
    }

    /// Recomputes everything for `period` from scratch. Summary and breakdown
    /// come from a single ledger snapshot; trends issue their own per-month
    /// queries and tolerate individual failures. Only the main query can fail
    /// the load, and a failed load publishes `Error` without touching the
    /// previously published aggregates.
    pub fn load(&mut self, period: ReportPeriod, now: NaiveDateTime) -> &ReportsSnapshot {
        self.snapshot.period = period;
        self.snapshot.state = ReportsState::Loading;

        let (start, end) = period.date_range(now);
        match self.store.transactions_in_range(start, end) {
            Ok(transactions) => {
                let summary = engine::summarize(&transactions, period);
                let breakdown = engine::category_breakdown(&transactions);
                let trends = engine::monthly_trends(&self.store, period, now.date());
                let insights = insights::evaluate(&breakdown, &summary);

                self.snapshot.summary = Some(summary);
                self.snapshot.breakdown = breakdown;
                self.snapshot.trends = trends;
                self.snapshot.insights = insights;
                self.snapshot.state = ReportsState::Success;
            }
            Err(e) => {
                self.snapshot.state = ReportsState::Error(e.to_string());
            }
        }
        &self.snapshot
    }

    /// Re-runs `load` with the currently selected period.
    pub fn refresh(&mut self, now: NaiveDateTime) -> &ReportsSnapshot {
        self.load(self.snapshot.period, now)
    }

    pub fn snapshot(&self) -> &ReportsSnapshot {
        &self.snapshot
    }

    pub fn selected_period(&self) -> ReportPeriod {
        self.snapshot.period
    }
}
