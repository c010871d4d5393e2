// Copyright (c) 2025 BudgetWise Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod audit;
pub mod budgets;
pub mod categories;
pub mod exporter;
pub mod insights;
pub mod reports;
pub mod transactions;
