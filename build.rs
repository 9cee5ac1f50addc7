use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs");

    let git_hash = command_stdout("git", &["rev-parse", "--short", "HEAD"])
        .filter(|hash| !hash.is_empty())
        .unwrap_or_else(|| "unknown".to_string());
    emit("CADENCE_BUILD_HASH", &git_hash);

    let git_status = match command_stdout("git", &["status", "--porcelain"]) {
        Some(changes) if changes.is_empty() => "clean",
        Some(_) => "dirty",
        None => "unknown",
    };
    emit("CADENCE_BUILD_STATUS", git_status);

    let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
    emit("CADENCE_BUILD_TIMESTAMP", &timestamp);

    for (key, var) in [("CADENCE_BUILD_TARGET", "TARGET"), ("CADENCE_BUILD_PROFILE", "PROFILE")] {
        let value = env::var(var).unwrap_or_else(|_| "unknown".to_string());
        emit(key, &value);
    }
}

fn emit(key: &str, value: &str) {
    println!("cargo:rustc-env={key}={value}");
}

/// Trimmed stdout of a successful command, `None` when it cannot run or fails.
fn command_stdout(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}
