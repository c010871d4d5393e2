// Copyright (c) 2025 BudgetWise Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use budgetwise::{cli, commands::categories, db, utils};
use rusqlite::Connection;

fn setup() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    db::init_schema(&mut conn).unwrap();
    conn
}

fn run_category(conn: &Connection, args: &[&str]) {
    let mut argv = vec!["budgetwise", "category"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("category", sub)) = matches.subcommand() {
        categories::handle(conn, sub).unwrap();
    } else {
        panic!("category command not parsed");
    }
}

#[test]
fn add_without_color_picks_an_unused_base() {
    let conn = setup();
    run_category(&conn, &["add", "--name", "Food"]);
    run_category(&conn, &["add", "--name", "Rent"]);

    let cats = db::load_categories(&conn).unwrap();
    assert_eq!(cats.len(), 2);
    assert_ne!(cats[0].color, cats[1].color);
    for c in &cats {
        assert!(utils::COLOR_BASES.contains(&c.color.as_str()));
    }
}

#[test]
fn color_pool_falls_back_when_exhausted() {
    let existing: Vec<String> = utils::COLOR_BASES.iter().map(|s| s.to_string()).collect();
    let picked = utils::pick_unique_color(&existing);
    assert!(utils::COLOR_BASES.contains(&picked.as_str()));
}

#[test]
fn unused_base_is_preferred() {
    let existing = vec!["blue".to_string(), "green".to_string()];
    for _ in 0..20 {
        let picked = utils::pick_unique_color(&existing);
        assert_ne!(picked, "blue");
        assert_ne!(picked, "green");
    }
}

#[test]
fn rm_uncategorizes_its_transactions() {
    let conn = setup();
    run_category(&conn, &["add", "--name", "Food"]);
    conn.execute(
        "INSERT INTO transactions(id, date, merchant, amount, category) VALUES('t1','2024-01-01','Grocer','-5','Food')",
        [],
    )
    .unwrap();

    run_category(&conn, &["rm", "--name", "Food"]);

    let cat_count: i64 = conn
        .query_row("SELECT COUNT(*) FROM categories", [], |r| r.get(0))
        .unwrap();
    assert_eq!(cat_count, 0);
    let orphaned: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM transactions WHERE category IS NULL",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(orphaned, 1);
    let audited: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM audit_log WHERE action='DELETE_CATEGORY'",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(audited, 1);
}

#[test]
fn set_budget_roundtrips_and_zero_clears() {
    let conn = setup();
    run_category(&conn, &["add", "--name", "Food"]);

    run_category(&conn, &["set-budget", "--name", "Food", "--amount", "400"]);
    let cats = db::load_categories(&conn).unwrap();
    assert_eq!(cats[0].effective_budget().unwrap().to_string(), "400");

    run_category(&conn, &["set-budget", "--name", "Food", "--amount", "0"]);
    let cats = db::load_categories(&conn).unwrap();
    assert!(cats[0].effective_budget().is_none());
}

#[test]
fn category_names_are_case_insensitively_unique() {
    let conn = setup();
    run_category(&conn, &["add", "--name", "Food"]);
    let matches =
        cli::build_cli().get_matches_from(["budgetwise", "category", "add", "--name", "food"]);
    if let Some(("category", sub)) = matches.subcommand() {
        assert!(categories::handle(&conn, sub).is_err());
    } else {
        panic!("category command not parsed");
    }
}

#[test]
fn fresh_ledger_is_seeded_with_default_categories() {
    let conn = setup();
    db::seed_default_categories(&conn).unwrap();
    let cats = db::load_categories(&conn).unwrap();
    let names: Vec<&str> = cats.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Housing",
            "Food",
            "Transportation",
            "Entertainment",
            "Utilities",
            "Healthcare",
            "Income",
        ]
    );

    // Seeding is idempotent and never duplicates.
    db::seed_default_categories(&conn).unwrap();
    assert_eq!(db::load_categories(&conn).unwrap().len(), 7);
}
