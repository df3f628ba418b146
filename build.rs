//! Build script to inject version, git SHA and the backend URL at compile time.
//!
//! Environment variables (set by CI or fall back to defaults):
//! - STOREFRONT_VERSION: Version string (defaults to CARGO_PKG_VERSION)
//! - STOREFRONT_GIT_SHA: Git commit SHA (defaults to "unknown" or git rev-parse)
//! - STOREFRONT_API_URL: Backend base URL baked into browser builds

use std::process::Command;

const DEFAULT_API_URL: &str = "http://localhost:5000";

fn main() {
    let version = std::env::var("STOREFRONT_VERSION").unwrap_or_else(|_| {
        std::env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "unknown".into())
    });
    println!("cargo:rustc-env=STOREFRONT_VERSION={}", version);

    // Git SHA: prefer STOREFRONT_GIT_SHA, then GITHUB_SHA, then try git command
    let git_sha = std::env::var("STOREFRONT_GIT_SHA")
        .or_else(|_| {
            std::env::var("GITHUB_SHA").map(|s| s.chars().take(7).collect::<String>())
        })
        .unwrap_or_else(|_| get_git_sha());
    println!("cargo:rustc-env=STOREFRONT_GIT_SHA={}", git_sha);

    // The browser has no process environment, so the backend URL is fixed here
    let api_url =
        std::env::var("STOREFRONT_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    println!("cargo:rustc-env=STOREFRONT_API_URL={}", api_url);

    println!("cargo:rerun-if-env-changed=STOREFRONT_VERSION");
    println!("cargo:rerun-if-env-changed=STOREFRONT_GIT_SHA");
    println!("cargo:rerun-if-env-changed=STOREFRONT_API_URL");
    println!("cargo:rerun-if-env-changed=GITHUB_SHA");
}

fn get_git_sha() -> String {
    Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .and_then(|o| {
            if o.status.success() {
                String::from_utf8(o.stdout)
                    .ok()
                    .map(|s| s.trim().to_string())
            } else {
                None
            }
        })
        .unwrap_or_else(|| "unknown".into())
}
