// Copyright (c) 2025 BudgetWise Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure, deterministic computations over an in-memory snapshot of
//! transactions and categories. Nothing in here touches the database or
//! keeps state between calls; callers re-invoke on every change.

use chrono::NaiveDate;
use thiserror::Error;

pub mod budget;
pub mod insights;
pub mod metrics;
pub mod rank;
pub mod recurrence;
pub mod report;

#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("start date {start} is after end date {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
}
