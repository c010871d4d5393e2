// Copyright (c) 2025 BudgetWise Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    None,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Recurrence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recurrence::None => "none",
            Recurrence::Daily => "daily",
            Recurrence::Weekly => "weekly",
            Recurrence::Monthly => "monthly",
            Recurrence::Yearly => "yearly",
        }
    }
}

impl std::fmt::Display for Recurrence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub date: NaiveDate,
    pub merchant: String,
    /// Signed amount: `>= 0` is income, `< 0` is an expense of magnitude `|amount|`.
    pub amount: Decimal,
    /// Category by display name, not id. Renaming a category orphans
    /// historical rows grouped under the old name; see DESIGN.md.
    pub category: Option<String>,
    pub description: Option<String>,
    pub recurrence: Recurrence,
    pub next_occurrence: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub color: String,
    pub budget: Option<Decimal>,
}

impl Category {
    /// A budget that is absent or non-positive counts as "no budget set".
    pub fn effective_budget(&self) -> Option<Decimal> {
        self.budget.filter(|b| *b > Decimal::ZERO)
    }
}

/// Regenerated fresh on every evaluation cycle; never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct BudgetAlert {
    pub id: String,
    pub message: String,
    pub date: DateTime<Utc>,
    pub resolved: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Warning,
    Info,
    Success,
}

impl InsightKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightKind::Warning => "warning",
            InsightKind::Info => "info",
            InsightKind::Success => "success",
        }
    }
}

impl std::fmt::Display for InsightKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RuleBasedInsight {
    /// Equals the id of the rule that produced it.
    pub id: String,
    pub title: String,
    pub message: String,
    pub kind: InsightKind,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryBreakdown {
    pub category: String,
    pub budget: Decimal,
    pub spent: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthlyReport {
    /// Rendered as "{MonthName} {Year}" of the start date.
    pub period: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub income: Decimal,
    pub expenses: Decimal,
    pub net: Decimal,
    pub categories: Vec<CategoryBreakdown>,
    pub transactions: Vec<Transaction>,
}
