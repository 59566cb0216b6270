//! Stamps the build with a version and commit for the layout footer.
//!
//! `STUDIO_VERSION` falls back to the package version; `STUDIO_GIT_SHA`
//! falls back to the CI commit and then to the local checkout.

use std::process::Command;

const VERSION_VAR: &str = "STUDIO_VERSION";
const SHA_VAR: &str = "STUDIO_GIT_SHA";
const CI_SHA_VAR: &str = "GITHUB_SHA";
const SHORT_SHA_LEN: usize = 7;

fn main() {
    let version = env_var(VERSION_VAR)
        .or_else(|| env_var("CARGO_PKG_VERSION"))
        .unwrap_or_else(|| "unknown".into());

    let sha = env_var(SHA_VAR)
        .or_else(|| env_var(CI_SHA_VAR).map(|s| s.chars().take(SHORT_SHA_LEN).collect()))
        .or_else(local_head)
        .unwrap_or_else(|| "unknown".into());

    for (name, value) in [(VERSION_VAR, &version), (SHA_VAR, &sha)] {
        println!("cargo:rustc-env={name}={value}");
    }
    for name in [VERSION_VAR, SHA_VAR, CI_SHA_VAR] {
        println!("cargo:rerun-if-env-changed={name}");
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn local_head() -> Option<String> {
    let out = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    let sha = String::from_utf8(out.stdout).ok()?;
    Some(sha.trim().to_string())
}
