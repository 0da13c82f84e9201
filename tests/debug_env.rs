use std::process::Command;

#[test]
fn debug_env_writes_diagnostics_to_stderr_only() {
    let out = Command::new(env!("CARGO_BIN_EXE_charcount"))
        .arg("hello")
        .env("CHARCOUNT_DEBUG", "1")
        .output()
        .expect("run binary");
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&out.stdout), "Character Count: 5\n");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Received 1 argument(s)"));
    assert!(stderr.contains("Counted 5 code unit(s)"));
}

#[test]
fn debug_env_reports_usage_error() {
    let out = Command::new(env!("CARGO_BIN_EXE_charcount"))
        .env("CHARCOUNT_DEBUG", "true")
        .output()
        .expect("run binary");
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stdout).starts_with("Usage: "));
    assert!(String::from_utf8_lossy(&out.stderr).contains("expected exactly 1 argument, got 0"));
}

#[test]
fn falsy_debug_env_stays_quiet() {
    let out = Command::new(env!("CARGO_BIN_EXE_charcount"))
        .arg("x")
        .env("CHARCOUNT_DEBUG", "0")
        .output()
        .expect("run binary");
    assert_eq!(out.status.code(), Some(0));
    assert!(out.stderr.is_empty());
}
