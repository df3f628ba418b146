//! Session storage lint - ensures persisted storage is only touched by the
//! session module.
//!
//! The session accessor in `src/session/` is the single owner of the `token`
//! and `user` keys. Components and the API client must go through
//! `Session`, never through `window.local_storage()` directly, so login and
//! logout have exactly one update path.

use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Direct storage access patterns
const DISALLOWED_PATTERNS: &[&str] = &[
    "local_storage(",
    "session_storage(",
    ".get_item(",
    ".set_item(",
    ".remove_item(",
];

/// The one module allowed to touch storage
const ALLOWED_DIR: &str = "session";

fn analyze_file(path: &Path, src_dir: &Path) -> Vec<(String, String)> {
    let relative = path.strip_prefix(src_dir).unwrap_or(path);
    if relative.starts_with(ALLOWED_DIR) {
        return vec![];
    }

    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return vec![],
    };

    let mut violations = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let code = line.trim_start();
        if code.starts_with("//") {
            continue;
        }
        for pattern in DISALLOWED_PATTERNS {
            if code.contains(pattern) {
                violations.push((
                    format!("{}:{}", relative.display(), idx + 1),
                    (*pattern).to_string(),
                ));
            }
        }
    }
    violations
}

#[test]
fn storage_access_is_centralized_in_session() {
    let src_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");

    let mut all_violations = Vec::new();

    for entry in WalkDir::new(&src_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
    {
        all_violations.extend(analyze_file(entry.path(), &src_dir));
    }

    if !all_violations.is_empty() {
        let mut error_msg = String::from(
            "\n\nDirect storage access outside src/session/\n\n\
            Read and write the token and user id through storefront::session::Session.\n\n\
            Violations found:\n\n",
        );
        for (location, pattern) in &all_violations {
            error_msg.push_str(&format!("  {}\n    Found: {}\n\n", location, pattern));
        }
        panic!("{}", error_msg);
    }
}

#[test]
fn session_module_owns_the_keys() {
    let session_mod = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join("session")
        .join("mod.rs");

    let content = fs::read_to_string(&session_mod).expect("Failed to read session/mod.rs");

    assert!(
        content.contains("\"token\"") && content.contains("\"user\""),
        "session/mod.rs must define the `token` and `user` storage keys"
    );
}
