use modhost_core::{init_logging, logging_status};

// Logging is install-once per process, so the whole bootstrap contract is
// exercised from one test function.
#[test]
fn init_is_idempotent_for_same_config_and_rejects_conflicts() {
    let log_dir = tempfile::tempdir().expect("temp dir should be creatable");
    let other_dir = tempfile::tempdir().expect("temp dir should be creatable");
    let log_dir_str = log_dir
        .path()
        .to_str()
        .expect("temp dir should be valid UTF-8")
        .to_string();
    let other_dir_str = other_dir
        .path()
        .to_str()
        .expect("temp dir should be valid UTF-8")
        .to_string();

    let level_error =
        init_logging("verbose", &log_dir_str).expect_err("unsupported level must fail");
    assert!(level_error.contains("unsupported log level"));
    assert!(logging_status().is_none());

    init_logging("info", &log_dir_str).expect("first init should succeed");
    init_logging("info", &log_dir_str).expect("same config should be idempotent");

    let switch_level =
        init_logging("debug", &log_dir_str).expect_err("level switch must be rejected");
    assert!(switch_level.contains("refusing to switch"));

    let switch_dir =
        init_logging("info", &other_dir_str).expect_err("directory switch must be rejected");
    assert!(switch_dir.contains("refusing to switch"));

    let (active_level, active_dir) = logging_status().expect("logging should be active");
    assert_eq!(active_level, "info");
    assert_eq!(active_dir, log_dir.path());
}
