// Copyright (c) 2025 BudgetWise Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use budgetwise::{cli, commands::reports, db};
use rusqlite::Connection;

fn setup() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    db::init_schema(&mut conn).unwrap();
    conn.execute_batch(
        r#"
        INSERT INTO categories(name, color, budget) VALUES
            ('Food', 'green', '400');
        INSERT INTO transactions(id, date, merchant, amount, category) VALUES
            ('a','2024-01-05','Employer','2000',NULL),
            ('b','2024-01-10','Grocer','-450','Food'),
            ('c','2024-01-12','Cinema','-12',NULL);
        "#,
    )
    .unwrap();
    conn
}

fn run_report(conn: &Connection, args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["budgetwise", "report"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    let Some(("report", sub)) = matches.subcommand() else {
        panic!("report command not parsed");
    };
    reports::handle(conn, sub)
}

#[test]
fn summary_honors_the_limit_flag() {
    let conn = setup();
    run_report(&conn, &["summary", "--limit", "1"]).unwrap();
    run_report(&conn, &["summary", "--json"]).unwrap();
}

#[test]
fn spend_accepts_an_optional_month_filter() {
    let conn = setup();
    run_report(&conn, &["spend"]).unwrap();
    run_report(&conn, &["spend", "--month", "2024-01"]).unwrap();
    assert!(run_report(&conn, &["spend", "--month", "nope"]).is_err());
}

#[test]
fn monthly_builds_over_month_or_explicit_range() {
    let conn = setup();
    run_report(&conn, &["monthly", "--month", "2024-01"]).unwrap();
    run_report(
        &conn,
        &["monthly", "--start", "2024-01-01", "--end", "2024-01-31", "--json"],
    )
    .unwrap();
}

#[test]
fn monthly_requires_a_complete_range() {
    let conn = setup();
    assert!(run_report(&conn, &["monthly", "--start", "2024-01-01"]).is_err());
}

#[test]
fn monthly_rejects_an_inverted_range() {
    let conn = setup();
    assert!(run_report(
        &conn,
        &["monthly", "--start", "2024-02-01", "--end", "2024-01-01"],
    )
    .is_err());
}
