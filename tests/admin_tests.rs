use predicates::str::contains;

mod common;
use common::{add_entry, init_with_user, setup_test_db, tc};

#[test]
fn audit_log_records_the_session_lifecycle() {
    let db = setup_test_db("admin_audit_log");
    init_with_user(&db, "alice");

    tc().args(["--db", &db, "start", "alice", "--now", "2025-03-10 09:00"])
        .assert()
        .success();
    tc().args(["--db", &db, "stop", "alice", "--now", "2025-03-10 17:00"])
        .assert()
        .success();

    tc().args(["--db", &db, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("start (alice)"))
        .stdout(contains("stop (alice)"));
}

#[test]
fn auto_stop_leaves_an_audit_trail() {
    let db = setup_test_db("admin_autostop_log");
    init_with_user(&db, "alice");

    tc().args(["--db", &db, "start", "alice", "--now", "2025-03-09 14:00"])
        .assert()
        .success();
    tc().args(["--db", &db, "sweep", "--now", "2025-03-10 09:00"])
        .assert()
        .success();

    tc().args(["--db", &db, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("auto-stop (alice)"))
        .stdout(contains("automatically stopped at 22:00"));
}

#[test]
fn db_maintenance_commands_work_on_a_fresh_database() {
    let db = setup_test_db("admin_db_cmds");
    init_with_user(&db, "alice");
    add_entry(&db, "alice", "2025-03-10", "09:00", "17:00");

    tc().args(["--db", &db, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Database integrity: ok"));

    tc().args(["--db", &db, "db", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Migrations up to date"));

    tc().args(["--db", &db, "db", "--vacuum"])
        .assert()
        .success()
        .stdout(contains("Database optimized"));

    tc().args(["--db", &db, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Users:"))
        .stdout(contains("Entries:"))
        .stdout(contains("Active sessions:"));
}

#[test]
fn user_listing_shows_registered_users() {
    let db = setup_test_db("admin_user_list");
    init_with_user(&db, "alice");
    tc().args(["--db", &db, "user", "add", "bob"]).assert().success();

    tc().args(["--db", &db, "user", "list"])
        .assert()
        .success()
        .stdout(contains("alice"))
        .stdout(contains("bob"));
}

#[test]
fn duplicate_user_is_rejected() {
    let db = setup_test_db("admin_dup_user");
    init_with_user(&db, "alice");

    tc().args(["--db", &db, "user", "add", "alice"])
        .assert()
        .failure()
        .stderr(contains("User already exists: alice"));
}

#[test]
fn rejected_entries_still_fail_loudly() {
    let db = setup_test_db("admin_bad_add");
    init_with_user(&db, "alice");

    // end before start
    tc().args([
        "--db", &db, "add", "alice", "2025-03-10", "--in", "17:00", "--out", "09:00",
    ])
    .assert()
    .failure()
    .stderr(contains("is not after"));

    // malformed time
    tc().args([
        "--db", &db, "add", "alice", "2025-03-10", "--in", "9am", "--out", "17:00",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid time format"));
}
