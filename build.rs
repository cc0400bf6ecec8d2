use std::path::Path;
use std::process::Command;

/// `git describe` output without a leading `v`, if available.
fn describe() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()
        .filter(|o| o.status.success())?;
    let raw = String::from_utf8_lossy(&output.stdout);
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.strip_prefix('v').unwrap_or(trimmed).to_string())
}

fn main() {
    // Only watch paths that exist.
    if Path::new(".git").exists() {
        println!("cargo:rerun-if-changed=.git/HEAD");
        println!("cargo:rerun-if-changed=.git/refs");
    } else {
        println!("cargo:rerun-if-changed=build.rs");
    }

    let version = describe().unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());
    println!("cargo:rustc-env=GIT_VERSION={version}");
}
