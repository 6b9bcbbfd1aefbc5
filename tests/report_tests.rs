use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{add_entry, init_with_user, setup_test_db, tc};

#[test]
fn fragmented_day_consolidates_to_one_span() {
    let db = setup_test_db("report_consolidation");
    init_with_user(&db, "alice");

    add_entry(&db, "alice", "2025-03-10", "09:00", "12:00");
    add_entry(&db, "alice", "2025-03-10", "13:00", "17:00");

    // Span policy: 09:00 AM - 05:00 PM, 8h total (not the 7h sum of parts)
    tc().args([
        "--db",
        &db,
        "report",
        "alice",
        "--from",
        "2025-03-10",
        "--to",
        "2025-03-10",
    ])
    .assert()
    .success()
    .stdout(contains("09:00 AM"))
    .stdout(contains("05:00 PM"))
    .stdout(contains("08:00:00"))
    .stdout(contains("Days: 1"));
}

#[test]
fn entries_outside_the_working_window_are_excluded() {
    let db = setup_test_db("report_window");
    init_with_user(&db, "alice");

    // 05:59 clock-in: one minute before the window opens
    add_entry(&db, "alice", "2025-03-10", "05:59", "12:00");

    tc().args([
        "--db",
        &db,
        "report",
        "alice",
        "--from",
        "2025-03-10",
        "--to",
        "2025-03-10",
    ])
    .assert()
    .success()
    .stdout(contains("No entries for the selected range"));

    // Exactly on the bounds: both inclusive
    add_entry(&db, "alice", "2025-03-11", "06:00", "22:00");

    tc().args([
        "--db",
        &db,
        "report",
        "alice",
        "--from",
        "2025-03-11",
        "--to",
        "2025-03-11",
    ])
    .assert()
    .success()
    .stdout(contains("06:00 AM"))
    .stdout(contains("10:00 PM"))
    .stdout(contains("16:00:00"));
}

#[test]
fn raw_listing_keeps_what_consolidation_discards() {
    let db = setup_test_db("report_raw");
    init_with_user(&db, "alice");

    add_entry(&db, "alice", "2025-03-10", "05:59", "12:00");

    // Consolidation drops the early clock-in, the raw listing keeps it
    tc().args([
        "--db", &db, "report", "alice", "--raw",
        "--from", "2025-03-10", "--to", "2025-03-10",
    ])
    .assert()
    .success()
    .stdout(contains("05:59 AM"))
    .stdout(contains("cli"));
}

#[test]
fn sort_order_and_pagination_shape_the_listing() {
    let db = setup_test_db("report_paging");
    init_with_user(&db, "alice");

    add_entry(&db, "alice", "2025-03-10", "09:00", "17:00");
    add_entry(&db, "alice", "2025-03-11", "09:00", "17:00");
    add_entry(&db, "alice", "2025-03-12", "09:00", "17:00");

    // Oldest first, one row per page: page 1 is March 10 only
    tc().args([
        "--db", &db, "report", "alice",
        "--from", "2025-03-10", "--to", "2025-03-12",
        "--sort", "oldest", "--per-page", "1", "--page", "1",
    ])
    .assert()
    .success()
    .stdout(contains("page 1/3"))
    .stdout(contains("2025-03-10"))
    .stdout(contains("2025-03-12").not());

    // Latest first: page 1 is March 12
    tc().args([
        "--db", &db, "report", "alice",
        "--from", "2025-03-10", "--to", "2025-03-12",
        "--sort", "latest", "--per-page", "1", "--page", "1",
    ])
    .assert()
    .success()
    .stdout(contains("2025-03-12"))
    .stdout(contains("2025-03-10").not());

    // Totals cover the whole range, not just the page
    tc().args([
        "--db", &db, "report", "alice",
        "--from", "2025-03-10", "--to", "2025-03-12",
        "--per-page", "1",
    ])
    .assert()
    .success()
    .stdout(contains("Days: 3"))
    .stdout(contains("Total: 24:00:00"));

    // Out-of-range page snaps back to the last one
    tc().args([
        "--db", &db, "report", "alice",
        "--from", "2025-03-10", "--to", "2025-03-12",
        "--per-page", "2", "--page", "9",
    ])
    .assert()
    .success()
    .stdout(contains("page 2/2"));
}

#[test]
fn invalid_sort_order_is_rejected() {
    let db = setup_test_db("report_bad_sort");
    init_with_user(&db, "alice");
    add_entry(&db, "alice", "2025-03-10", "09:00", "17:00");

    tc().args([
        "--db", &db, "report", "alice",
        "--from", "2025-03-10", "--to", "2025-03-10",
        "--sort", "sideways",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid sort order"));
}

#[test]
fn running_session_shows_as_a_live_row() {
    let db = setup_test_db("report_live_row");
    init_with_user(&db, "alice");

    tc().args(["--db", &db, "start", "alice", "--now", "2025-03-10 09:00"])
        .assert()
        .success();

    tc().args([
        "--db", &db, "report", "alice",
        "--from", "2025-03-10", "--to", "2025-03-10",
        "--now", "2025-03-10 12:00",
    ])
    .assert()
    .success()
    .stdout(contains("--:--"))
    .stdout(contains("03:00:00 (live)"));
}

#[test]
fn completed_day_suppresses_the_live_row() {
    let db = setup_test_db("report_live_suppressed");
    init_with_user(&db, "alice");

    add_entry(&db, "alice", "2025-03-10", "08:00", "08:30");

    tc().args(["--db", &db, "start", "alice", "--now", "2025-03-10 09:00"])
        .assert()
        .success();

    tc().args([
        "--db", &db, "report", "alice",
        "--from", "2025-03-10", "--to", "2025-03-10",
        "--now", "2025-03-10 12:00",
    ])
    .assert()
    .success()
    .stdout(contains("(live)").not());
}

#[test]
fn team_report_carries_usernames_and_filters_by_user() {
    let db = setup_test_db("report_team");
    init_with_user(&db, "alice");
    tc().args(["--db", &db, "user", "add", "bob"]).assert().success();

    add_entry(&db, "alice", "2025-03-10", "09:00", "17:00");
    add_entry(&db, "bob", "2025-03-10", "10:00", "18:00");

    tc().args([
        "--db", &db, "team", "--from", "2025-03-10", "--to", "2025-03-10",
    ])
    .assert()
    .success()
    .stdout(contains("alice"))
    .stdout(contains("bob"))
    .stdout(contains("Days: 2"));

    tc().args([
        "--db", &db, "team",
        "--from", "2025-03-10", "--to", "2025-03-10",
        "--user", "bob",
    ])
    .assert()
    .success()
    .stdout(contains("bob"))
    .stdout(contains("alice").not());
}
