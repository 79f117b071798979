// Copyright (c) Spendsight.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{CategoryReport, InsightType, SmartInsight, SummaryData};
use crate::utils::fmt_amount;

/// Share of total expense above which the top category triggers a warning.
pub const HIGH_CATEGORY_SHARE_PCT: f32 = 30.0;
/// Daily average expense (smallest currency unit) above which spending is
/// flagged as high.
pub const DAILY_EXPENSE_WARNING: f64 = 100_000.0;
/// Daily average expense below which spending is flagged as comfortable.
/// Averages in `[DAILY_EXPENSE_COMFORT, DAILY_EXPENSE_WARNING]` emit nothing.
pub const DAILY_EXPENSE_COMFORT: f64 = 50_000.0;

/// Evaluates the fixed insight rules over already-computed aggregates.
///
/// Pure function, no I/O. Rules are independent: each reads only the
/// aggregates, never prior insight output, so any subset may fire and the
/// result carries 0 to 3 entries in declaration order.
pub fn evaluate(breakdown: &[CategoryReport], summary: &SummaryData) -> Vec<SmartInsight> {
    let mut insights = Vec::new();

    // Spending concentration: top category dominating the window.
    if let Some(top) = breakdown.first() {
        if top.percentage > HIGH_CATEGORY_SHARE_PCT {
            insights.push(SmartInsight {
                kind: InsightType::HighCategorySpending,
                title: "Keep an eye on one category".to_string(),
                description: format!(
                    "{} makes up {:.1}% of your spending",
                    top.category_name, top.percentage
                ),
                icon: "warning".to_string(),
                color: "#F59E0B".to_string(),
            });
        }
    }

    // Savings: anything left over after expenses.
    if summary.balance > 0 {
        insights.push(SmartInsight {
            kind: InsightType::SavingsGoal,
            title: "You are saving".to_string(),
            description: format!(
                "You set aside {} over {}",
                fmt_amount(summary.balance),
                summary.period.display_name().to_lowercase()
            ),
            icon: "star".to_string(),
            color: "#3B82F6".to_string(),
        });
    }

    // Daily-average expense band: at most one of the pair fires. A window
    // with zero expense averages to 0 and reads as a positive trend.
    let avg_per_day = summary.total_expense as f64 / summary.period.days() as f64;
    if avg_per_day > DAILY_EXPENSE_WARNING {
        insights.push(SmartInsight {
            kind: InsightType::BudgetWarning,
            title: "Spending is high".to_string(),
            description: format!("Averaging {}/day", fmt_amount(avg_per_day as i64)),
            icon: "trending_up".to_string(),
            color: "#EF4444".to_string(),
        });
    } else if avg_per_day < DAILY_EXPENSE_COMFORT {
        insights.push(SmartInsight {
            kind: InsightType::PositiveTrend,
            title: "Spending looks healthy".to_string(),
            description: format!("Averaging {}/day", fmt_amount(avg_per_day as i64)),
            icon: "trending_down".to_string(),
            color: "#10B981".to_string(),
        });
    }

    insights
}
