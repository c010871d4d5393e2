// Copyright (c) 2025 BudgetWise Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::Utc;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{BudgetAlert, Category};
use crate::utils::fmt_money;

use super::metrics::CategoryTotals;

#[derive(Debug, Clone, Serialize)]
pub struct BudgetStatus {
    pub category: String,
    pub budget: Decimal,
    pub spent: Decimal,
    pub remaining: Decimal,
    /// Share of budget spent, clamped to [0, 100].
    pub percentage: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct BudgetOverview {
    pub statuses: Vec<BudgetStatus>,
    pub alerts: Vec<BudgetAlert>,
}

/// Evaluate spend-vs-budget per category over totals already scoped to the
/// budget period (conventionally the current calendar month). Categories
/// without a positive budget are excluded from progress and can never
/// alert. Alerts are regenerated on every call; dedup against prior runs is
/// the caller's business.
pub fn evaluate(categories: &[Category], totals: &CategoryTotals) -> BudgetOverview {
    let hundred = Decimal::from(100);
    let now = Utc::now();
    let mut statuses = Vec::new();
    let mut alerts = Vec::new();

    for category in categories {
        let Some(budget) = category.effective_budget() else {
            continue;
        };
        let spent = totals.amount_for(&category.name);
        let percentage = (spent / budget * hundred).min(hundred).max(Decimal::ZERO);
        statuses.push(BudgetStatus {
            category: category.name.clone(),
            budget,
            spent,
            remaining: budget - spent,
            percentage,
        });

        if spent > budget {
            alerts.push(BudgetAlert {
                id: format!("{}-{}", category.id, now.timestamp_millis()),
                message: format!(
                    "Overspent {} on {} this month!",
                    fmt_money(&(spent - budget)),
                    category.name
                ),
                date: now,
                resolved: false,
            });
        }
    }

    BudgetOverview { statuses, alerts }
}
