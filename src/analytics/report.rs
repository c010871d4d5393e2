// Copyright (c) 2025 BudgetWise Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{Category, CategoryBreakdown, MonthlyReport, Transaction};

use super::metrics::aggregate;
use super::AnalyticsError;

/// Compose metrics and per-category budget/spend over an inclusive date
/// range into one exportable snapshot. Every known category gets a
/// breakdown row; a missing or non-positive budget is coerced to zero so
/// consumers never see an undefined value. The period label is the start
/// date's month and year.
pub fn build_monthly_report(
    transactions: &[Transaction],
    categories: &[Category],
    start: NaiveDate,
    end: NaiveDate,
) -> Result<MonthlyReport, AnalyticsError> {
    if start > end {
        return Err(AnalyticsError::InvalidRange { start, end });
    }

    let filtered: Vec<Transaction> = transactions
        .iter()
        .filter(|tx| tx.date >= start && tx.date <= end)
        .cloned()
        .collect();
    let metrics = aggregate(&filtered);

    let breakdown = categories
        .iter()
        .map(|cat| CategoryBreakdown {
            category: cat.name.clone(),
            budget: cat.effective_budget().unwrap_or(Decimal::ZERO),
            spent: metrics.category_totals.amount_for(&cat.name),
        })
        .collect();

    Ok(MonthlyReport {
        period: start.format("%B %Y").to_string(),
        start_date: start,
        end_date: end,
        income: metrics.income,
        expenses: metrics.expenses,
        net: metrics.net,
        categories: breakdown,
        transactions: filtered,
    })
}
