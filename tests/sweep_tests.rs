use predicates::str::contains;

mod common;
use common::{init_with_user, setup_test_db, tc};

#[test]
fn forgotten_session_from_yesterday_is_pinned_to_the_cutoff() {
    let db = setup_test_db("sweep_yesterday");
    init_with_user(&db, "alice");

    tc().args(["--db", &db, "start", "alice", "--now", "2025-03-09 14:00"])
        .assert()
        .success();

    tc().args(["--db", &db, "sweep", "--now", "2025-03-10 09:00"])
        .assert()
        .success()
        .stdout(contains("Auto-stopped 1 session(s)"));

    // Entry lands on the start date, ends at the 22:00 cutoff, 8h worked
    tc().args([
        "--db",
        &db,
        "report",
        "alice",
        "--from",
        "2025-03-09",
        "--to",
        "2025-03-09",
    ])
    .assert()
    .success()
    .stdout(contains("2025-03-09"))
    .stdout(contains("02:00 PM"))
    .stdout(contains("10:00 PM"))
    .stdout(contains("08:00:00"));
}

#[test]
fn today_session_survives_until_the_cutoff_passes() {
    let db = setup_test_db("sweep_cutoff_today");
    init_with_user(&db, "alice");

    tc().args(["--db", &db, "start", "alice", "--now", "2025-03-10 21:50"])
        .assert()
        .success();

    // 21:55, same day: not expired yet
    tc().args(["--db", &db, "sweep", "--now", "2025-03-10 21:55"])
        .assert()
        .success()
        .stdout(contains("No expired sessions"));

    tc().args(["--db", &db, "status", "--now", "2025-03-10 21:56"])
        .assert()
        .success()
        .stdout(contains("alice"));

    // 22:05: expired now
    tc().args(["--db", &db, "sweep", "--now", "2025-03-10 22:05"])
        .assert()
        .success()
        .stdout(contains("Auto-stopped 1 session(s)"));

    tc().args(["--db", &db, "status"])
        .assert()
        .success()
        .stdout(contains("No active sessions"));
}

#[test]
fn sweep_with_nothing_to_do_reports_cleanly() {
    let db = setup_test_db("sweep_empty");
    init_with_user(&db, "alice");

    tc().args(["--db", &db, "sweep", "--now", "2025-03-10 23:00"])
        .assert()
        .success()
        .stdout(contains("No expired sessions"));
}

#[test]
fn sweep_finalizes_every_stale_user_independently() {
    let db = setup_test_db("sweep_multi_user");
    init_with_user(&db, "alice");
    tc().args(["--db", &db, "user", "add", "bob"]).assert().success();

    tc().args(["--db", &db, "start", "alice", "--now", "2025-03-08 09:00"])
        .assert()
        .success();
    tc().args(["--db", &db, "start", "bob", "--now", "2025-03-09 16:00"])
        .assert()
        .success();

    tc().args(["--db", &db, "sweep", "--now", "2025-03-10 08:00"])
        .assert()
        .success()
        .stdout(contains("Auto-stopped 2 session(s)"));

    tc().args([
        "--db", &db, "team", "--from", "2025-03-08", "--to", "2025-03-09",
    ])
    .assert()
    .success()
    .stdout(contains("alice"))
    .stdout(contains("bob"))
    .stdout(contains("10:00 PM"));
}
