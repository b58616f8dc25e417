//! The `config` command group against a temporary profile file.

mod common;

use common::{Harness, STANDARD_CONFIG};
use inwx::{DOCTOR_ERRORS, DOCTOR_WARNINGS, EXIT_OK, EXIT_USAGE};
use inwx_util::{ProfileStore, SecretKind, SecretStore};

#[tokio::test]
async fn init_writes_profile_and_keyring() {
    let harness = Harness::new();
    harness
        .prompter
        .answer(&["main", "alice", "hunter2", "jbswy3dpehpk3pxp"]);

    let outcome = harness.run(&["config", "init"]).await;

    assert_eq!(outcome.code, EXIT_OK, "{}", outcome.stderr);
    assert!(outcome.stdout.contains("Config written to"));
    let store = ProfileStore::load(harness.config_path()).expect("reload");
    assert_eq!(store.default_account(), Some("main"));
    assert_eq!(store.lookup_username("main"), Some("alice"));
    assert!(!harness.config_text().contains("hunter2"));
    assert_eq!(harness.secrets.lookup("main", SecretKind::Password).as_deref(), Some("hunter2"));
    assert_eq!(
        harness.secrets.lookup("main", SecretKind::SharedSecret).as_deref(),
        Some("jbswy3dpehpk3pxp")
    );
    assert!(!inwx_util::permissions_too_open(&harness.config_path()));
    assert!(harness.log().opened.is_empty());
}

#[tokio::test]
async fn init_leaves_existing_file_alone() {
    let harness = Harness::new().with_config(STANDARD_CONFIG);
    let outcome = harness.run(&["config", "init"]).await;

    assert_eq!(outcome.code, EXIT_OK);
    assert!(outcome.stdout.starts_with("Config already exists at: "));
    assert!(harness.prompter.asked.borrow().is_empty());
    assert_eq!(harness.config_text(), STANDARD_CONFIG);
}

#[tokio::test]
async fn init_rejects_invalid_shared_secret() {
    let harness = Harness::new();
    harness.prompter.answer(&["main", "alice", "hunter2", "not base32!"]);

    let outcome = harness.run(&["config", "init"]).await;

    assert_eq!(outcome.code, EXIT_USAGE);
    assert!(outcome.stderr.contains("Invalid shared secret"), "{}", outcome.stderr);
    assert!(!harness.config_path().exists());
    assert_eq!(harness.secrets.lookup("main", SecretKind::Password), None);
}

#[tokio::test]
async fn add_appends_account_without_touching_default() {
    let harness = Harness::new().with_config(STANDARD_CONFIG);
    harness.prompter.answer(&["ote", "bob", "pw", ""]);

    let outcome = harness.run(&["config", "add"]).await;

    assert_eq!(outcome.code, EXIT_OK, "{}", outcome.stderr);
    assert!(outcome.stdout.contains("Account 'ote' added successfully."));
    let store = ProfileStore::load(harness.config_path()).expect("reload");
    assert_eq!(store.default_account(), Some("main"));
    assert_eq!(store.accounts().collect::<Vec<_>>(), vec!["main", "ote", "work"]);
    assert_eq!(harness.secrets.lookup("ote", SecretKind::SharedSecret), None);
}

#[tokio::test]
async fn add_existing_account_is_config_error() {
    let harness = Harness::new().with_config(STANDARD_CONFIG);
    harness.prompter.answer(&["work"]);

    let outcome = harness.run(&["config", "add"]).await;

    assert_eq!(outcome.code, EXIT_USAGE);
    assert_eq!(outcome.stderr, "error: Account 'work' already exists.\n");
    assert_eq!(harness.prompter.asked.borrow().as_slice(), ["Account name"]);
    assert_eq!(harness.config_text(), STANDARD_CONFIG);
}

#[tokio::test]
async fn del_asks_before_removing() {
    let harness = Harness::configured();
    harness.prompter.confirm_with(false);

    let outcome = harness.run(&["config", "del", "main"]).await;

    assert_eq!(outcome.code, EXIT_OK);
    assert_eq!(outcome.stdout, "Aborted.\n");
    assert_eq!(harness.config_text(), STANDARD_CONFIG);
    assert!(harness.secrets.password("main").unwrap().is_some());
}

#[tokio::test]
async fn del_removes_account_secrets_and_default() {
    let harness = Harness::configured();
    harness.prompter.confirm_with(true);

    let outcome = harness.run(&["config", "del", "main"]).await;

    assert_eq!(outcome.code, EXIT_OK, "{}", outcome.stderr);
    assert_eq!(
        outcome.stdout,
        "Removed default_account setting.\nAccount 'main' removed.\n"
    );
    let store = ProfileStore::load(harness.config_path()).expect("reload");
    assert_eq!(store.default_account(), None);
    assert!(store.account("main").is_none());
    assert_eq!(harness.secrets.password("main").unwrap(), None);
}

#[tokio::test]
async fn del_with_yes_skips_confirmation() {
    let harness = Harness::configured();
    let outcome = harness.run(&["config", "del", "work", "--yes"]).await;

    assert_eq!(outcome.code, EXIT_OK, "{}", outcome.stderr);
    assert!(harness.prompter.asked.borrow().is_empty());
    let store = ProfileStore::load(harness.config_path()).expect("reload");
    assert_eq!(store.default_account(), Some("main"));
    assert!(store.account("work").is_none());
}

#[tokio::test]
async fn del_unknown_account_is_config_error() {
    let harness = Harness::configured();
    let outcome = harness.run(&["config", "del", "ghost", "--yes"]).await;
    assert_eq!(outcome.code, EXIT_USAGE);
    assert_eq!(outcome.stderr, "error: Account 'ghost' does not exist.\n");
}

#[tokio::test]
async fn default_switches_existing_accounts_only() {
    let harness = Harness::configured();

    let outcome = harness.run(&["config", "default", "work"]).await;
    assert_eq!(outcome.code, EXIT_OK);
    assert_eq!(outcome.stdout, "Default account set to 'work'.\n");
    assert_eq!(
        ProfileStore::load(harness.config_path()).unwrap().default_account(),
        Some("work")
    );

    let outcome = harness.run(&["config", "default", "ghost"]).await;
    assert_eq!(outcome.code, EXIT_USAGE);
}

#[tokio::test]
async fn list_marks_the_default_account() {
    let harness = Harness::configured();
    let outcome = harness.run(&["config", "list"]).await;

    assert_eq!(outcome.code, EXIT_OK);
    assert_eq!(
        outcome.stdout,
        "Configured INWX accounts:\n\n - main (default)\n - work\n"
    );

    let empty = Harness::new();
    assert_eq!(empty.run(&["config", "list"]).await.stdout, "No configuration found.\n");
}

#[tokio::test]
async fn doctor_reports_json_and_exit_code() {
    let harness = Harness::configured();
    let outcome = harness.run(&["config", "doctor"]).await;

    // `work` has no password in the keyring
    assert_eq!(outcome.code, DOCTOR_ERRORS);
    let report = outcome.json();
    assert_eq!(report["path"], harness.config_path().display().to_string());
    assert_eq!(
        report["errors"],
        serde_json::json!(["Account 'work' has no password in the keyring."])
    );

    harness.secrets.set("work", SecretKind::Password, "pw").unwrap();
    let outcome = harness.run(&["config", "doctor"]).await;
    let report = outcome.json();
    assert_eq!(report["errors"], serde_json::json!([]));
    assert!(outcome.code == EXIT_OK || outcome.code == DOCTOR_WARNINGS);
}

#[tokio::test]
async fn config_without_subcommand_is_usage_error() {
    let harness = Harness::new();
    let outcome = harness.run(&["config"]).await;
    assert_eq!(outcome.code, EXIT_USAGE);
    assert!(outcome.stderr.contains("init"));
}
